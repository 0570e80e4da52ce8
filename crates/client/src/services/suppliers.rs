//! Supplier endpoints (`/proveedor`) with local mirror and pre-flight checks.

use std::sync::{Arc, RwLock};

use serde::Deserialize;

use ventaspro_core::DomainError;
use ventaspro_suppliers::{CreateSupplier, Supplier, SupplierId, UpdateSupplier, check_duplicate, search};

use crate::{ApiClient, ApiError};

/// Paged list response of `GET /proveedor`.
#[derive(Debug, Clone, Deserialize)]
pub struct SuppliersPage {
    pub suppliers: Vec<Supplier>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

#[derive(Clone)]
pub struct SuppliersApi {
    client: ApiClient,
    mirror: Arc<RwLock<Vec<Supplier>>>,
}

impl SuppliersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client, mirror: Arc::new(RwLock::new(Vec::new())) }
    }

    /// `GET /proveedor?page=&limit=`.
    pub async fn list(&self, page: usize, limit: usize) -> Result<SuppliersPage, ApiError> {
        let page: SuppliersPage = self
            .client
            .get_json_with_query(
                "/proveedor",
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        *self.mirror.write().unwrap() = page.suppliers.clone();
        Ok(page)
    }

    /// `GET /proveedor/{id}`.
    pub async fn get(&self, id: SupplierId) -> Result<Supplier, ApiError> {
        self.client.get_json(&format!("/proveedor/{id}")).await
    }

    /// `POST /proveedor`, preceded by form validation and a local duplicate
    /// check so the common 409 never leaves the client.
    pub async fn create(&self, data: &CreateSupplier) -> Result<Supplier, ApiError> {
        data.validate().map_err(domain_to_api)?;
        {
            let mirror = self.mirror.read().unwrap();
            check_duplicate(&mirror, &data.nombre, data.cuit_rut.as_deref())
                .map_err(domain_to_api)?;
        }

        let created: Supplier = self.client.post_json("/proveedor", data).await?;
        self.mirror.write().unwrap().push(created.clone());
        Ok(created)
    }

    /// `PUT /proveedor/{id}`.
    pub async fn update(&self, id: SupplierId, data: &UpdateSupplier) -> Result<Supplier, ApiError> {
        let updated: Supplier = self.client.put_json(&format!("/proveedor/{id}"), data).await?;
        let mut mirror = self.mirror.write().unwrap();
        if let Some(slot) = mirror.iter_mut().find(|s| s.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// `DELETE /proveedor/{id}`.
    pub async fn delete(&self, id: SupplierId) -> Result<(), ApiError> {
        self.client.delete(&format!("/proveedor/{id}")).await?;
        self.mirror.write().unwrap().retain(|s| s.id != id);
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<Supplier> {
        self.mirror.read().unwrap().clone()
    }

    /// In-memory search across name, CUIT and address.
    pub fn search(&self, term: &str) -> Vec<Supplier> {
        let mirror = self.mirror.read().unwrap();
        search(&mirror, term).into_iter().cloned().collect()
    }
}

fn domain_to_api(err: DomainError) -> ApiError {
    let status = match err {
        DomainError::Duplicate(_) => 409,
        _ => 400,
    };
    ApiError::from_status(status, Some(err.to_string()))
}
