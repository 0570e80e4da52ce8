//! `ventaspro-suppliers`: supplier records and their local validation.

pub mod cuit;
pub mod supplier;

pub use cuit::validate_cuit_rut;
pub use supplier::{CreateSupplier, Supplier, SupplierId, UpdateSupplier, check_duplicate, search};
