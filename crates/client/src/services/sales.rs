//! Sale and sale-detail endpoints (`/venta`, `/detalle-venta`).

use std::sync::{Arc, RwLock};

use serde::Serialize;

use ventaspro_sales::{
    CreateSale, CreateSaleDetail, Sale, SaleDetail, SaleDetailId, SaleId, UpdateSale, validate,
};

use crate::{ApiClient, ApiError};

#[derive(Clone)]
pub struct SalesApi {
    client: ApiClient,
    mirror: Arc<RwLock<Vec<Sale>>>,
}

/// Partial update for `PATCH /detalle-venta/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSaleDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
}

impl SalesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client, mirror: Arc::new(RwLock::new(Vec::new())) }
    }

    // ── sales ───────────────────────────────────────────────────────────

    /// `GET /venta`, mirroring the result.
    pub async fn list(&self) -> Result<Vec<Sale>, ApiError> {
        let items: Vec<Sale> = self.client.get_json("/venta").await?;
        *self.mirror.write().unwrap() = items.clone();
        Ok(items)
    }

    /// `GET /venta/{id}`.
    pub async fn get(&self, id: SaleId) -> Result<Sale, ApiError> {
        self.client.get_json(&format!("/venta/{id}")).await
    }

    /// `POST /venta`, after client-side reconciliation. A sale whose total
    /// disagrees with its line subtotals never reaches the backend.
    pub async fn create(&self, venta: &CreateSale) -> Result<Sale, ApiError> {
        let errores = validate(venta);
        if !errores.is_empty() {
            return Err(ApiError::from_status(400, Some(errores.join(". "))));
        }

        let created: Sale = self.client.post_json("/venta", venta).await?;
        self.mirror.write().unwrap().push(created.clone());
        Ok(created)
    }

    /// `PATCH /venta/{id}`.
    pub async fn update(&self, id: SaleId, venta: &UpdateSale) -> Result<Sale, ApiError> {
        let updated: Sale = self.client.patch_json(&format!("/venta/{id}"), venta).await?;
        let mut mirror = self.mirror.write().unwrap();
        if let Some(slot) = mirror.iter_mut().find(|s| s.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// `DELETE /venta/{id}`.
    pub async fn delete(&self, id: SaleId) -> Result<(), ApiError> {
        self.client.delete(&format!("/venta/{id}")).await?;
        self.mirror.write().unwrap().retain(|s| s.id != id);
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<Sale> {
        self.mirror.read().unwrap().clone()
    }

    // ── sale details ────────────────────────────────────────────────────

    /// `GET /detalle-venta`.
    pub async fn list_details(&self) -> Result<Vec<SaleDetail>, ApiError> {
        self.client.get_json("/detalle-venta").await
    }

    /// `GET /detalle-venta/{id}`.
    pub async fn get_detail(&self, id: SaleDetailId) -> Result<SaleDetail, ApiError> {
        self.client.get_json(&format!("/detalle-venta/{id}")).await
    }

    /// `POST /detalle-venta`.
    pub async fn create_detail(&self, detalle: &CreateSaleDetail) -> Result<SaleDetail, ApiError> {
        self.client.post_json("/detalle-venta", detalle).await
    }

    /// `PATCH /detalle-venta/{id}`.
    pub async fn update_detail(
        &self,
        id: SaleDetailId,
        detalle: &UpdateSaleDetail,
    ) -> Result<SaleDetail, ApiError> {
        self.client.patch_json(&format!("/detalle-venta/{id}"), detalle).await
    }

    /// `DELETE /detalle-venta/{id}`.
    pub async fn delete_detail(&self, id: SaleDetailId) -> Result<(), ApiError> {
        self.client.delete(&format!("/detalle-venta/{id}")).await
    }
}
