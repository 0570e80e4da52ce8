//! Dashboard aggregation.
//!
//! Loads sales and products concurrently; one failing branch fails the whole
//! load. Presentation helpers (greeting, currency, initials) live here too
//! so the screens share one formatting source.

use chrono::{DateTime, Timelike, Utc};

use ventaspro_catalog::Product;
use ventaspro_client::{ApiError, ProductsApi, SalesApi};
use ventaspro_sales::Sale;

/// Metric cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub total_sales: f64,
    pub sale_count: usize,
    pub product_count: usize,
    pub average_ticket: f64,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub metrics: Metrics,
    /// Five most recent sales, newest first.
    pub recent_sales: Vec<Sale>,
    pub products: Vec<Product>,
}

/// Fetch sales and products in parallel and aggregate.
pub async fn load(sales: &SalesApi, products: &ProductsApi) -> Result<Dashboard, ApiError> {
    let (sales, products) = tokio::try_join!(sales.list(), products.list())?;
    Ok(build(sales, products))
}

fn build(mut sales: Vec<Sale>, products: Vec<Product>) -> Dashboard {
    let total_sales: f64 = sales.iter().map(|s| s.total).sum();
    let sale_count = sales.len();
    let average_ticket = if sale_count == 0 { 0.0 } else { total_sales / sale_count as f64 };

    sales.sort_by(|a, b| b.fecha_hora.cmp(&a.fecha_hora));
    let recent_sales = sales.into_iter().take(5).collect();

    Dashboard {
        metrics: Metrics {
            total_sales,
            sale_count,
            product_count: products.len(),
            average_ticket,
        },
        recent_sales,
        products,
    }
}

/// Time-of-day greeting: morning until 12, afternoon until 19, night after.
pub fn greeting(at: DateTime<Utc>) -> &'static str {
    match at.hour() {
        0..12 => "Buenos días",
        12..19 => "Buenas tardes",
        _ => "Buenas noches",
    }
}

/// `es-AR`-style currency: dot as thousands separator, comma for decimals.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}$ {grouped},{frac:02}")
}
