use serde::{Deserialize, Serialize};

use ventaspro_core::impl_i64_id;

/// Brand identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandId(i64);

impl_i64_id!(BrandId, "BrandId");

/// Brand as served by `GET /marca`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
}

/// Body for `POST /marca`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBrand {
    pub nombre: String,
    pub descripcion: String,
    #[serde(rename = "estadoId")]
    pub estado_id: i64,
}

/// Case-insensitive name search over a brand collection.
pub fn search<'a>(brands: &'a [Brand], term: &str) -> Vec<&'a Brand> {
    let term = term.trim().to_lowercase();
    brands
        .iter()
        .filter(|b| term.is_empty() || b.nombre.to_lowercase().contains(&term))
        .collect()
}
