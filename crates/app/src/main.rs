//! VentasPro client entry point.

use anyhow::Context;
use chrono::Utc;

use ventaspro_app::{Navigator, dashboard, default_table};
use ventaspro_auth::{FileSessionStore, SessionHandle, SessionStore};
use ventaspro_client::{ApiClient, ProductsApi, SalesApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ventaspro_observability::init();

    let api_url = std::env::var("VENTASPRO_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    tracing::info!(%api_url, "starting ventaspro client");

    let store: Box<dyn SessionStore> =
        Box::new(FileSessionStore::in_data_dir().context("resolving session store path")?);
    let session = SessionHandle::new(store);

    match session.current_user() {
        Some(user) => tracing::info!(user = %user.email, role = user.role.label(), "restored session"),
        None => tracing::info!("no persisted session"),
    }

    let client = ApiClient::new(api_url, session.clone());
    let navigator = Navigator::new(default_table(), session.clone());

    let landing = navigator.navigate("/");
    tracing::info!(url = landing.url(), "initial navigation settled");

    if session.is_authenticated(Utc::now()) {
        let sales = SalesApi::new(client.clone());
        let products = ProductsApi::new(client.clone());
        match dashboard::load(&sales, &products).await {
            Ok(dash) => {
                tracing::info!(
                    total = %dashboard::format_currency(dash.metrics.total_sales),
                    sales = dash.metrics.sale_count,
                    products = dash.metrics.product_count,
                    "dashboard loaded"
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "dashboard load failed");
                if let Some(forced) = navigator.handle_api_error(&err) {
                    tracing::info!(url = forced.url(), "redirected after api error");
                }
            }
        }
    }

    Ok(())
}
