//! Login, registration and profile calls.

use serde::{Deserialize, Serialize};

use ventaspro_auth::{AuthError, Session, UserProfile};

use crate::ApiClient;

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register form. `confirm_password` and `accept_terms` are form-only; they
/// are checked client-side and never sent.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    #[serde(skip)]
    pub accept_terms: bool,
}

/// Response of both auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Auth endpoints plus the session transitions they drive.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`. On success the session transitions
    /// `Anonymous → Authenticated` and both storage keys are written.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, AuthError> {
        let response: AuthResponse = self
            .client
            .post_json("/auth/login", credentials)
            .await
            .map_err(AuthError::from)?;

        self.establish(response)
    }

    /// `POST /auth/register`. Same contract as login, with 409 mapping to
    /// the duplicate-email message.
    pub async fn register(&self, data: &RegisterRequest) -> Result<Session, AuthError> {
        let response: AuthResponse = self
            .client
            .post_json("/auth/register", data)
            .await
            .map_err(AuthError::from)?;

        self.establish(response)
    }

    /// `GET /auth/profile`: server-asserted identity, used by the profile
    /// screen to refresh the cached copy.
    pub async fn profile(&self) -> Result<UserProfile, AuthError> {
        self.client
            .get_json("/auth/profile")
            .await
            .map_err(AuthError::from)
    }

    /// Clear the session. No failure mode; navigation back to the login
    /// route is the navigator's job.
    pub fn logout(&self) {
        self.client.session().invalidate();
    }

    fn establish(&self, response: AuthResponse) -> Result<Session, AuthError> {
        let session = Session::new(response.token, response.user);
        self.client.session().establish(session.clone());
        Ok(session)
    }
}
