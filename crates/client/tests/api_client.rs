//! Black-box tests against a mocked backend.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ventaspro_auth::{
    AuthError, MemorySessionStore, Role, Session, SessionHandle, SessionStore, StoreError,
    TOKEN_KEY, USER_KEY, UserProfile,
};
use ventaspro_catalog::ProductId;
use ventaspro_client::{
    ApiClient, AuthApi, ErrorKind, LoginRequest, ProductsApi, SalesApi, SuppliersApi,
};
use ventaspro_core::UserId;

fn mint_jwt(minutes_from_now: i64) -> String {
    let claims = json!({
        "id": 1,
        "name": "Mock User",
        "email": "mock@ventaspro.com",
        "role": "ADMIN",
        "exp": (Utc::now() + Duration::minutes(minutes_from_now)).timestamp(),
    });
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("failed to encode jwt")
}

fn mock_user() -> UserProfile {
    UserProfile {
        id: UserId::new(1),
        name: "Mock User".to_string(),
        email: "mock@ventaspro.com".to_string(),
        role: Role::Admin,
    }
}

/// Store wrapper that lets a test keep a view on the keys the handle writes.
struct SharedStore(std::sync::Arc<MemorySessionStore>);

impl SessionStore for SharedStore {
    fn save(&self, token: &str, user: &UserProfile) -> Result<(), StoreError> {
        self.0.save(token, user)
    }
    fn load(&self) -> Result<Option<Session>, StoreError> {
        self.0.load()
    }
    fn clear(&self) -> Result<(), StoreError> {
        self.0.clear()
    }
}

fn anonymous_client(base_url: &str) -> ApiClient {
    let session = SessionHandle::new(Box::new(MemorySessionStore::new()));
    ApiClient::new(base_url, session)
}

fn authenticated_client(base_url: &str, token: &str) -> ApiClient {
    let client = anonymous_client(base_url);
    client.session().establish(Session::new(token, mock_user()));
    client
}

#[tokio::test]
async fn bearer_header_is_attached_when_a_token_exists() {
    let server = MockServer::start().await;
    let token = mint_jwt(10);

    Mock::given(method("GET"))
        .and(path("/producto"))
        .and(header("Authorization", format!("Bearer {token}").as_str()))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let products = ProductsApi::new(authenticated_client(&server.uri(), &token));
    let items = products.list().await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn requests_without_a_session_carry_no_bearer_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/marca"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "nombre": "Lenovo", "descripcion": "" }
        ])))
        .mount(&server)
        .await;

    let products = ProductsApi::new(anonymous_client(&server.uri()));
    let brands = products.brands().await.unwrap();
    let received = server.received_requests().await.unwrap();
    assert!(!received[0].headers.contains_key("authorization"));
    assert_eq!(brands[0].nombre, "Lenovo");
}

#[tokio::test]
async fn a_401_response_forces_logout() {
    let server = MockServer::start().await;
    let token = mint_jwt(10);

    Mock::given(method("GET"))
        .and(path("/venta"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = authenticated_client(&server.uri(), &token);
    let sales = SalesApi::new(client.clone());

    let err = sales.list().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    // Session torn down: no user, no stored token.
    assert!(client.session().current_user().is_none());
    assert!(client.session().token().is_none());
}

#[tokio::test]
async fn a_403_response_surfaces_forbidden_without_logout() {
    let server = MockServer::start().await;
    let token = mint_jwt(10);

    Mock::given(method("DELETE"))
        .and(path("/producto/3"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = authenticated_client(&server.uri(), &token);
    let products = ProductsApi::new(client.clone());

    let err = products.delete(ProductId::new(3)).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
    assert!(client.session().current_user().is_some());
}

#[tokio::test]
async fn login_success_stores_token_and_user() {
    let server = MockServer::start().await;
    let token = mint_jwt(30);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": token,
            "user": { "id": 1, "nombre": "Mock User", "correo": "mock@ventaspro.com", "rol": "ADMIN" }
        })))
        .mount(&server)
        .await;

    let store = std::sync::Arc::new(MemorySessionStore::new());
    let session = SessionHandle::new(Box::new(SharedStore(store.clone())));
    let client = ApiClient::new(server.uri(), session);
    let auth = AuthApi::new(client.clone());

    let session = auth
        .login(&LoginRequest {
            email: "mock@ventaspro.com".to_string(),
            password: "Secreta123".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.user.name, "Mock User");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some(session.token.as_str()));
    assert!(store.get(USER_KEY).is_some());
    assert!(client.session().is_authenticated(Utc::now()));
}

#[tokio::test]
async fn login_stays_authenticated_when_the_store_cannot_persist() {
    struct ReadOnlyStore;

    impl SessionStore for ReadOnlyStore {
        fn save(&self, _token: &str, _user: &UserProfile) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }
        fn load(&self) -> Result<Option<Session>, StoreError> {
            Ok(None)
        }
        fn clear(&self) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }
    }

    let server = MockServer::start().await;
    let token = mint_jwt(30);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": token,
            "user": { "id": 1, "nombre": "Mock User", "correo": "mock@ventaspro.com", "rol": "ADMIN" }
        })))
        .mount(&server)
        .await;

    let session = SessionHandle::new(Box::new(ReadOnlyStore));
    let client = ApiClient::new(server.uri(), session);
    let auth = AuthApi::new(client.clone());

    auth.login(&LoginRequest {
        email: "mock@ventaspro.com".to_string(),
        password: "Secreta123".to_string(),
    })
    .await
    .unwrap();

    // The persistence failure only costs durability, not the session itself.
    assert!(client.session().current_user().is_some());
    assert!(client.session().token().is_some());
    assert!(client.session().snapshot(Utc::now()).is_authenticated());
}

#[tokio::test]
async fn login_with_bad_credentials_maps_to_the_configured_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let auth = AuthApi::new(anonymous_client(&server.uri()));
    let err = auth
        .login(&LoginRequest {
            email: "mock@ventaspro.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(err.user_message(), "Credenciales incorrectas");
}

#[tokio::test]
async fn unreachable_server_maps_to_the_network_message() {
    // Nothing listens on this port.
    let auth = AuthApi::new(anonymous_client("http://127.0.0.1:1"));
    let err = auth
        .login(&LoginRequest {
            email: "mock@ventaspro.com".to_string(),
            password: "whatever".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::Network);
    assert_eq!(err.user_message(), "No se pudo conectar con el servidor");
}

#[tokio::test]
async fn register_conflict_maps_to_duplicate_email() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let auth = AuthApi::new(anonymous_client(&server.uri()));
    let err = auth
        .register(&ventaspro_client::RegisterRequest {
            full_name: "Ana García".to_string(),
            email: "ana@mail.com".to_string(),
            phone: Some("+5411456789001".to_string()),
            company: None,
            password: "Secreta123".to_string(),
            confirm_password: "Secreta123".to_string(),
            accept_terms: true,
        })
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::EmailTaken);
    assert_eq!(err.user_message(), "El email ya está registrado");
}

#[tokio::test]
async fn register_body_omits_form_only_fields() {
    let server = MockServer::start().await;
    let token = mint_jwt(30);

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": token,
            "user": { "id": 2, "nombre": "Ana García", "correo": "ana@mail.com", "rol": "CLIENT" }
        })))
        .mount(&server)
        .await;

    let auth = AuthApi::new(anonymous_client(&server.uri()));
    auth.register(&ventaspro_client::RegisterRequest {
        full_name: "Ana García".to_string(),
        email: "ana@mail.com".to_string(),
        phone: None,
        company: None,
        password: "Secreta123".to_string(),
        confirm_password: "Secreta123".to_string(),
        accept_terms: true,
    })
    .await
    .unwrap();

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["fullName"], "Ana García");
    assert!(body.get("confirm_password").is_none());
    assert!(body.get("confirmPassword").is_none());
    assert!(body.get("accept_terms").is_none());
}

#[tokio::test]
async fn logout_removes_both_storage_keys() {
    let server = MockServer::start().await;
    let token = mint_jwt(10);

    let store = std::sync::Arc::new(MemorySessionStore::new());
    let session = SessionHandle::new(Box::new(SharedStore(store.clone())));
    session.establish(Session::new(token, mock_user()));
    let client = ApiClient::new(server.uri(), session);
    let auth = AuthApi::new(client.clone());

    auth.logout();
    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(USER_KEY).is_none());
    assert!(client.session().current_user().is_none());
    assert!(!client.session().snapshot(Utc::now()).is_authenticated());
}

#[tokio::test]
async fn suppliers_list_sends_paging_params_and_mirrors() {
    let server = MockServer::start().await;
    let token = mint_jwt(10);

    Mock::given(method("GET"))
        .and(path("/proveedor"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suppliers": [
                { "id": 1, "nombre": "Distribuidora Central", "direccion": "Av. Corrientes 1234",
                  "telefono": "+5411456789001", "cuitRut": "30-12345678-9" }
            ],
            "total": 1, "page": 1, "limit": 50
        })))
        .mount(&server)
        .await;

    let suppliers = SuppliersApi::new(authenticated_client(&server.uri(), &token));
    let page = suppliers.list(1, 50).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(suppliers.search("central").len(), 1);
    assert_eq!(suppliers.search("30123456789").len(), 0); // search is verbatim, not normalized
}

#[tokio::test]
async fn duplicate_supplier_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    let token = mint_jwt(10);

    Mock::given(method("GET"))
        .and(path("/proveedor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suppliers": [
                { "id": 1, "nombre": "Distribuidora Central", "direccion": "Av. Corrientes 1234",
                  "telefono": "+5411456789001", "cuitRut": "30-12345678-9" }
            ],
            "total": 1, "page": 1, "limit": 50
        })))
        .mount(&server)
        .await;

    let suppliers = SuppliersApi::new(authenticated_client(&server.uri(), &token));
    suppliers.list(1, 50).await.unwrap();

    let err = suppliers
        .create(&ventaspro_suppliers::CreateSupplier {
            nombre: "distribuidora central".to_string(),
            direccion: "Otra dirección 1".to_string(),
            telefono: "+5411456789002".to_string(),
            contacto: "ventas@distcentral.com".to_string(),
            cuit_rut: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Conflict);
    // Only the initial list hit the wire.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn sale_with_mismatched_total_never_reaches_the_backend() {
    let server = MockServer::start().await;
    let token = mint_jwt(10);
    let sales = SalesApi::new(authenticated_client(&server.uri(), &token));

    let detalles = vec![ventaspro_sales::detail_for(ProductId::new(1), 2, 100.0)];
    let venta = ventaspro_sales::CreateSale {
        fecha_hora: Utc::now(),
        usuario_id: UserId::new(1),
        detalles,
        total: 150.0, // should be 200.0
    };

    let err = sales.create(&venta).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::BadRequest);
    assert!(err.message.contains("El total no coincide con la suma de los subtotales"));
    assert!(server.received_requests().await.unwrap().is_empty());
}
