use serde::{Deserialize, Serialize};

use ventaspro_core::impl_i64_id;

use crate::BrandId;

/// Product-line identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(i64);

impl_i64_id!(LineId, "LineId");

/// Product line as served by `GET /linea`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(rename = "marcaId")]
    pub marca_id: BrandId,
}

/// Body for `POST /linea`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLine {
    pub nombre: String,
    pub descripcion: String,
    #[serde(rename = "marcaId")]
    pub marca_id: BrandId,
}

/// Lines belonging to a brand (the backend has no query param for this, so
/// filtering stays client-side).
pub fn by_brand<'a>(lines: &'a [Line], brand: BrandId) -> Vec<&'a Line> {
    lines.iter().filter(|l| l.marca_id == brand).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_brand() {
        let lines = vec![
            Line { id: LineId::new(1), nombre: "Notebooks".into(), descripcion: None, marca_id: BrandId::new(1) },
            Line { id: LineId::new(2), nombre: "Periféricos".into(), descripcion: None, marca_id: BrandId::new(2) },
            Line { id: LineId::new(3), nombre: "Tablets".into(), descripcion: None, marca_id: BrandId::new(1) },
        ];
        let hits = by_brand(&lines, BrandId::new(1));
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|l| l.marca_id == BrandId::new(1)));
    }

    #[test]
    fn wire_shape_uses_marca_id() {
        let dto = CreateLine {
            nombre: "Tablets".into(),
            descripcion: "".into(),
            marca_id: BrandId::new(4),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["marcaId"], 4);
    }
}
