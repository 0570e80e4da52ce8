//! `ventaspro-catalog`: products, brands and product lines.
//!
//! Models mirror the backend's wire shapes (Spanish field names); the
//! filter/search helpers are the client-side list operations.

pub mod brand;
pub mod line;
pub mod product;

pub use brand::{Brand, BrandId, CreateBrand};
pub use line::{CreateLine, Line, LineId};
pub use product::{CreateProduct, Product, ProductId, UpdateProduct};
