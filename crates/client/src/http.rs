//! The request/response pipeline applied to every call.

use std::time::Instant;

use reqwest::{Method, RequestBuilder, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

use ventaspro_auth::SessionHandle;

use crate::error::ApiError;

/// Error body shape the backend uses (`{"message": ..}` or `{"error": ..}`).
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// HTTP client for the VentasPro API.
///
/// Cheap to clone; the session handle inside is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionHandle,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionHandle) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: reqwest::Client::new(), base_url, session }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with the interceptor chain applied: bearer header when
    /// a token exists, and the JSON content type.
    fn prepare(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);

        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        builder
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.execute(method, path, builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(format!("respuesta inválida del servidor: {e}")))
    }

    /// Send and classify, without decoding a body. Shared by all verbs.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let started = Instant::now();
        let result = builder.send().await;
        let elapsed_ms = started.elapsed().as_millis();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(%method, path, elapsed_ms, error = %e, "http request failed");
                return Err(ApiError::network());
            }
        };

        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), elapsed_ms, "http request");

        if status.is_success() {
            return Ok(response);
        }

        let backend_message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message.or(b.error));

        if status == StatusCode::UNAUTHORIZED {
            // Invalid or expired token: force the logout transition here; the
            // navigator turns the surfaced error into a redirect.
            self.session.invalidate();
        }

        Err(ApiError::from_status(status.as_u16(), backend_message))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.prepare(Method::GET, path);
        self.send(Method::GET, path, builder).await
    }

    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = self.prepare(Method::GET, path).query(query);
        self.send(Method::GET, path, builder).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.prepare(Method::POST, path).json(body);
        self.send(Method::POST, path, builder).await
    }

    pub async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.prepare(Method::PATCH, path).json(body);
        self.send(Method::PATCH, path, builder).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.prepare(Method::PUT, path).json(body);
        self.send(Method::PUT, path, builder).await
    }

    /// DELETE; the backend answers with an empty body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.prepare(Method::DELETE, path);
        self.execute(Method::DELETE, path, builder).await?;
        Ok(())
    }
}
