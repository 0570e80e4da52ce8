//! `ventaspro-sales`: sales, sale details and report helpers.

pub mod reports;
pub mod sale;

pub use sale::{
    CreateSale, CreateSaleDetail, Sale, SaleDetail, SaleDetailId, SaleId, UpdateSale,
    detail_for, total_of, validate,
};
