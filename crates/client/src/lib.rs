//! `ventaspro-client`: HTTP plumbing for the VentasPro backend.
//!
//! `ApiClient` is the interceptor pipeline: every request gets the bearer
//! header, a JSON content type and a timing log line; every response is
//! classified by status into [`ApiError`], with 401 additionally tearing the
//! session down. The per-feature services (`AuthApi`, `ProductsApi`, …) issue
//! the REST calls and mirror results into local snapshots.

pub mod error;
pub mod http;
pub mod services;

pub use error::{ApiError, ErrorKind};
pub use http::ApiClient;
pub use services::auth::{AuthApi, AuthResponse, LoginRequest, RegisterRequest};
pub use services::products::ProductsApi;
pub use services::sales::{SalesApi, UpdateSaleDetail};
pub use services::suppliers::{SuppliersApi, SuppliersPage};
