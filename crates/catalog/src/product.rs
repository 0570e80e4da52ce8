use serde::{Deserialize, Serialize};

use ventaspro_core::impl_i64_id;

use crate::LineId;

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl_i64_id!(ProductId, "ProductId");

/// Product as served by `GET /producto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub stock: i64,
    #[serde(rename = "lineaId")]
    pub linea_id: LineId,
    #[serde(rename = "proveedorId")]
    pub proveedor_id: i64,
}

/// Body for `POST /producto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProduct {
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub stock: i64,
    #[serde(rename = "lineaId")]
    pub linea_id: LineId,
    #[serde(rename = "proveedorId")]
    pub proveedor_id: i64,
    #[serde(rename = "estadoId")]
    pub estado_id: i64,
}

/// Body for `PATCH /producto/{id}` (all fields optional).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(rename = "lineaId", skip_serializing_if = "Option::is_none")]
    pub linea_id: Option<LineId>,
    #[serde(rename = "proveedorId", skip_serializing_if = "Option::is_none")]
    pub proveedor_id: Option<i64>,
}

impl Product {
    /// Case-insensitive match against name or description, the list screen's
    /// search box.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.nombre.to_lowercase().contains(&term)
            || self.descripcion.to_lowercase().contains(&term)
    }
}

/// Filter a product collection by search term.
pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.matches(term)).collect()
}

/// Products at or below a stock threshold (the low-stock badge).
pub fn low_stock<'a>(products: &'a [Product], threshold: i64) -> Vec<&'a Product> {
    products.iter().filter(|p| p.stock <= threshold).collect()
}

/// Products belonging to a line.
pub fn by_line<'a>(products: &'a [Product], line: LineId) -> Vec<&'a Product> {
    products.iter().filter(|p| p.linea_id == line).collect()
}
