//! Report helpers over a fetched sale collection. All in-memory; the backend
//! exposes no filtered endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use ventaspro_core::UserId;

use crate::Sale;

/// Sales whose timestamp falls inside the inclusive range.
pub fn between<'a>(
    ventas: &'a [Sale],
    desde: DateTime<Utc>,
    hasta: DateTime<Utc>,
) -> Vec<&'a Sale> {
    ventas
        .iter()
        .filter(|v| v.fecha_hora >= desde && v.fecha_hora <= hasta)
        .collect()
}

/// Sum of sale totals.
pub fn total_amount(ventas: &[Sale]) -> f64 {
    ventas.iter().map(|v| v.total).sum()
}

/// Group sales by the user who made them.
pub fn by_user(ventas: &[Sale]) -> BTreeMap<UserId, Vec<&Sale>> {
    let mut grouped: BTreeMap<UserId, Vec<&Sale>> = BTreeMap::new();
    for venta in ventas {
        grouped.entry(venta.usuario_id).or_default().push(venta);
    }
    grouped
}

/// Aggregate statistics for a list of sales.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesStats {
    pub total: f64,
    pub cantidad: usize,
    pub promedio: f64,
    pub mayor: f64,
    pub menor: f64,
}

pub fn stats(ventas: &[Sale]) -> SalesStats {
    if ventas.is_empty() {
        return SalesStats { total: 0.0, cantidad: 0, promedio: 0.0, mayor: 0.0, menor: 0.0 };
    }

    let total = total_amount(ventas);
    let mayor = ventas.iter().map(|v| v.total).fold(f64::MIN, f64::max);
    let menor = ventas.iter().map(|v| v.total).fold(f64::MAX, f64::min);

    SalesStats {
        total,
        cantidad: ventas.len(),
        promedio: total / ventas.len() as f64,
        mayor,
        menor,
    }
}
