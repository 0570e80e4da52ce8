//! Products, brands and lines endpoints with local collection mirrors.

use std::sync::{Arc, RwLock};

use ventaspro_catalog::{
    Brand, BrandId, CreateBrand, CreateLine, CreateProduct, Line, Product, ProductId,
    UpdateProduct, line, product,
};

use crate::{ApiClient, ApiError};

/// Catalog endpoints (`/producto`, `/marca`, `/linea`).
#[derive(Clone)]
pub struct ProductsApi {
    client: ApiClient,
    products: Arc<RwLock<Vec<Product>>>,
    brands: Arc<RwLock<Vec<Brand>>>,
    lines: Arc<RwLock<Vec<Line>>>,
}

impl ProductsApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            products: Arc::new(RwLock::new(Vec::new())),
            brands: Arc::new(RwLock::new(Vec::new())),
            lines: Arc::new(RwLock::new(Vec::new())),
        }
    }

    // ── products ────────────────────────────────────────────────────────

    /// `GET /producto`, mirroring the result.
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let items: Vec<Product> = self.client.get_json("/producto").await?;
        *self.products.write().unwrap() = items.clone();
        Ok(items)
    }

    /// `GET /producto/{id}`.
    pub async fn get(&self, id: ProductId) -> Result<Product, ApiError> {
        self.client.get_json(&format!("/producto/{id}")).await
    }

    /// `POST /producto`.
    pub async fn create(&self, data: &CreateProduct) -> Result<Product, ApiError> {
        let created: Product = self.client.post_json("/producto", data).await?;
        self.products.write().unwrap().push(created.clone());
        Ok(created)
    }

    /// `PATCH /producto/{id}` (the backend uses PATCH, not PUT).
    pub async fn update(&self, id: ProductId, data: &UpdateProduct) -> Result<Product, ApiError> {
        let updated: Product = self.client.patch_json(&format!("/producto/{id}"), data).await?;
        let mut mirror = self.products.write().unwrap();
        if let Some(slot) = mirror.iter_mut().find(|p| p.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// `DELETE /producto/{id}`.
    pub async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        self.client.delete(&format!("/producto/{id}")).await?;
        self.products.write().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    /// Last fetched product collection.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.read().unwrap().clone()
    }

    /// In-memory search over the mirror (the list screen's search box).
    pub fn search(&self, term: &str) -> Vec<Product> {
        let mirror = self.products.read().unwrap();
        product::search(&mirror, term).into_iter().cloned().collect()
    }

    // ── brands ──────────────────────────────────────────────────────────

    /// `GET /marca`.
    pub async fn brands(&self) -> Result<Vec<Brand>, ApiError> {
        let items: Vec<Brand> = self.client.get_json("/marca").await?;
        *self.brands.write().unwrap() = items.clone();
        Ok(items)
    }

    /// `POST /marca`.
    pub async fn create_brand(&self, data: &CreateBrand) -> Result<Brand, ApiError> {
        let created: Brand = self.client.post_json("/marca", data).await?;
        self.brands.write().unwrap().push(created.clone());
        Ok(created)
    }

    pub fn brands_snapshot(&self) -> Vec<Brand> {
        self.brands.read().unwrap().clone()
    }

    // ── lines ───────────────────────────────────────────────────────────

    /// `GET /linea`, optionally narrowed to one brand client-side (the
    /// backend has no query param for it).
    pub async fn lines(&self, brand: Option<BrandId>) -> Result<Vec<Line>, ApiError> {
        let items: Vec<Line> = self.client.get_json("/linea").await?;
        *self.lines.write().unwrap() = items.clone();
        Ok(match brand {
            Some(brand) => line::by_brand(&items, brand).into_iter().cloned().collect(),
            None => items,
        })
    }

    /// `POST /linea`.
    pub async fn create_line(&self, data: &CreateLine) -> Result<Line, ApiError> {
        let created: Line = self.client.post_json("/linea", data).await?;
        self.lines.write().unwrap().push(created.clone());
        Ok(created)
    }

    pub fn lines_snapshot(&self) -> Vec<Line> {
        self.lines.read().unwrap().clone()
    }
}
