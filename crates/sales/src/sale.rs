use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ventaspro_catalog::ProductId;
use ventaspro_core::{UserId, impl_i64_id};

/// Tolerance for client-side total reconciliation (money is `f64` on the wire).
pub const TOTAL_TOLERANCE: f64 = 0.01;

/// Sale identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(i64);

impl_i64_id!(SaleId, "SaleId");

/// Sale-detail identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleDetailId(i64);

impl_i64_id!(SaleDetailId, "SaleDetailId");

/// Sale line as served by `GET /detalle-venta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDetail {
    pub id: SaleDetailId,
    pub cantidad: i64,
    pub subtotal: f64,
    #[serde(rename = "productoId")]
    pub producto_id: ProductId,
    #[serde(rename = "ventaId")]
    pub venta_id: SaleId,
}

/// Sale as served by `GET /venta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    #[serde(rename = "fechaHora")]
    pub fecha_hora: DateTime<Utc>,
    pub total: f64,
    #[serde(rename = "usuarioId")]
    pub usuario_id: UserId,
    #[serde(default)]
    pub detalles: Option<Vec<SaleDetail>>,
}

/// Line item for `POST /venta` / `POST /detalle-venta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSaleDetail {
    pub cantidad: i64,
    pub subtotal: f64,
    #[serde(rename = "productoId")]
    pub producto_id: ProductId,
    #[serde(rename = "ventaId", skip_serializing_if = "Option::is_none")]
    pub venta_id: Option<SaleId>,
}

/// Body for `POST /venta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSale {
    #[serde(rename = "fechaHora")]
    pub fecha_hora: DateTime<Utc>,
    #[serde(rename = "usuarioId")]
    pub usuario_id: UserId,
    pub detalles: Vec<CreateSaleDetail>,
    pub total: f64,
}

/// Body for `PATCH /venta/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSale {
    #[serde(rename = "fechaHora", skip_serializing_if = "Option::is_none")]
    pub fecha_hora: Option<DateTime<Utc>>,
    #[serde(rename = "usuarioId", skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detalles: Option<Vec<CreateSaleDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

/// Build a line item from product, quantity and unit price.
pub fn detail_for(producto_id: ProductId, cantidad: i64, unit_price: f64) -> CreateSaleDetail {
    CreateSaleDetail {
        cantidad,
        subtotal: cantidad as f64 * unit_price,
        producto_id,
        venta_id: None,
    }
}

/// Sum of line subtotals.
pub fn total_of(detalles: &[CreateSaleDetail]) -> f64 {
    detalles.iter().map(|d| d.subtotal).sum()
}

/// Validate a sale before submitting it. Returns the full list of problems
/// (Spanish, user-facing) rather than failing on the first.
pub fn validate(venta: &CreateSale) -> Vec<String> {
    let mut errores = Vec::new();

    if venta.detalles.is_empty() {
        errores.push("La venta debe tener al menos un producto".to_string());
    }
    if venta.total <= 0.0 {
        errores.push("El total de la venta debe ser mayor a 0".to_string());
    }
    if venta.usuario_id.value() <= 0 {
        errores.push("Debe especificar un usuario".to_string());
    }

    let calculado = total_of(&venta.detalles);
    if (calculado - venta.total).abs() > TOTAL_TOLERANCE {
        errores.push("El total no coincide con la suma de los subtotales".to_string());
    }

    errores
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sale(detalles: Vec<CreateSaleDetail>, total: f64) -> CreateSale {
        CreateSale {
            fecha_hora: Utc::now(),
            usuario_id: UserId::new(1),
            detalles,
            total,
        }
    }

    #[test]
    fn detail_for_computes_subtotal() {
        let d = detail_for(ProductId::new(3), 4, 99.5);
        assert_eq!(d.subtotal, 398.0);
        assert_eq!(d.cantidad, 4);
        assert!(d.venta_id.is_none());
    }

    #[test]
    fn valid_sale_has_no_errors() {
        let detalles = vec![detail_for(ProductId::new(1), 2, 100.0)];
        let v = sale(detalles.clone(), total_of(&detalles));
        assert!(validate(&v).is_empty());
    }

    #[test]
    fn empty_sale_collects_every_problem() {
        let v = CreateSale {
            fecha_hora: Utc::now(),
            usuario_id: UserId::new(0),
            detalles: vec![],
            total: 0.0,
        };
        let errores = validate(&v);
        assert_eq!(errores.len(), 3);
        assert!(errores.contains(&"La venta debe tener al menos un producto".to_string()));
        assert!(errores.contains(&"Debe especificar un usuario".to_string()));
    }

    #[test]
    fn total_mismatch_beyond_tolerance_is_flagged() {
        let detalles = vec![detail_for(ProductId::new(1), 1, 100.0)];
        let v = sale(detalles, 100.5);
        assert!(validate(&v)
            .contains(&"El total no coincide con la suma de los subtotales".to_string()));

        // Within tolerance: fine.
        let detalles = vec![detail_for(ProductId::new(1), 1, 100.0)];
        let v = sale(detalles, 100.005);
        assert!(validate(&v).is_empty());
    }

    #[test]
    fn wire_shape_uses_backend_field_names() {
        let detalles = vec![detail_for(ProductId::new(7), 2, 50.0)];
        let v = sale(detalles, 100.0);
        let json = serde_json::to_value(&v).unwrap();
        assert!(json.get("fechaHora").is_some());
        assert_eq!(json["usuarioId"], 1);
        assert_eq!(json["detalles"][0]["productoId"], 7);
        assert!(json["detalles"][0].get("ventaId").is_none());
    }

    proptest! {
        #[test]
        fn a_sale_built_from_its_own_details_always_reconciles(
            lines in prop::collection::vec((1i64..100, 0.01f64..10_000.0), 1..10)
        ) {
            let detalles: Vec<CreateSaleDetail> = lines
                .iter()
                .enumerate()
                .map(|(i, (qty, price))| detail_for(ProductId::new(i as i64 + 1), *qty, *price))
                .collect();
            let v = sale(detalles.clone(), total_of(&detalles));
            prop_assert!(validate(&v).is_empty());
        }
    }
}
