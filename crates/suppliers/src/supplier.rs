use serde::{Deserialize, Serialize};

use ventaspro_core::{DomainError, DomainResult, impl_i64_id};

use crate::cuit;

/// Supplier identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(i64);

impl_i64_id!(SupplierId, "SupplierId");

/// Supplier as served by `GET /proveedor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    #[serde(default)]
    pub contacto: Option<String>,
    #[serde(rename = "cuitRut", default)]
    pub cuit_rut: Option<String>,
    #[serde(default)]
    pub activo: Option<bool>,
}

/// Body for `POST /proveedor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSupplier {
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    pub contacto: String,
    #[serde(rename = "cuitRut", skip_serializing_if = "Option::is_none")]
    pub cuit_rut: Option<String>,
}

/// Body for `PUT /proveedor/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSupplier {
    pub nombre: String,
    pub direccion: String,
    pub telefono: String,
    pub contacto: String,
    #[serde(rename = "cuitRut", skip_serializing_if = "Option::is_none")]
    pub cuit_rut: Option<String>,
}

impl CreateSupplier {
    /// Local form validation before issuing the create call.
    pub fn validate(&self) -> DomainResult<()> {
        ventaspro_core::validate::required("nombre", &self.nombre)?;
        ventaspro_core::validate::required("dirección", &self.direccion)?;
        ventaspro_core::validate::phone(&self.telefono)?;
        if let Some(cuit_rut) = &self.cuit_rut {
            cuit::validate_cuit_rut(cuit_rut)?;
        }
        Ok(())
    }
}

/// Detect a duplicate by normalized name or CUIT before hitting the backend
/// (mirrors the 409 it would return).
pub fn check_duplicate(
    existing: &[Supplier],
    nombre: &str,
    cuit_rut: Option<&str>,
) -> DomainResult<()> {
    let name_key = nombre.trim().to_lowercase();
    if existing.iter().any(|s| s.nombre.trim().to_lowercase() == name_key) {
        return Err(DomainError::duplicate(format!(
            "Ya existe un proveedor con el nombre \"{nombre}\""
        )));
    }

    if let Some(cuit_rut) = cuit_rut {
        let cuit_key = cuit::normalize(cuit_rut);
        if !cuit_key.is_empty()
            && existing
                .iter()
                .filter_map(|s| s.cuit_rut.as_deref())
                .any(|c| cuit::normalize(c) == cuit_key)
        {
            return Err(DomainError::duplicate(format!(
                "Ya existe un proveedor con el CUIT/RUT \"{cuit_rut}\""
            )));
        }
    }

    Ok(())
}

/// Case-insensitive search across name, CUIT and address.
pub fn search<'a>(suppliers: &'a [Supplier], term: &str) -> Vec<&'a Supplier> {
    let term = term.trim().to_lowercase();
    suppliers
        .iter()
        .filter(|s| {
            term.is_empty()
                || s.nombre.to_lowercase().contains(&term)
                || s.direccion.to_lowercase().contains(&term)
                || s.cuit_rut
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&term))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(id: i64, nombre: &str, cuit: Option<&str>) -> Supplier {
        Supplier {
            id: SupplierId::new(id),
            nombre: nombre.to_string(),
            direccion: "Av. Corrientes 1234, CABA".to_string(),
            telefono: "+5411456789001".to_string(),
            contacto: None,
            cuit_rut: cuit.map(str::to_string),
            activo: Some(true),
        }
    }

    #[test]
    fn duplicate_by_name_is_case_insensitive() {
        let existing = vec![supplier(1, "Distribuidora Central", Some("30-12345678-9"))];
        let err = check_duplicate(&existing, "  distribuidora central ", None).unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }

    #[test]
    fn duplicate_by_cuit_ignores_separators() {
        let existing = vec![supplier(1, "Distribuidora Central", Some("30-12345678-9"))];
        let err = check_duplicate(&existing, "Otra", Some("30123456789")).unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }

    #[test]
    fn distinct_supplier_passes() {
        let existing = vec![supplier(1, "Distribuidora Central", Some("30-12345678-9"))];
        assert!(check_duplicate(&existing, "Importadora del Sur", Some("30-98765432-1")).is_ok());
    }

    #[test]
    fn create_validation_catches_bad_phone_and_cuit() {
        let mut dto = CreateSupplier {
            nombre: "Mayorista Norte".to_string(),
            direccion: "Ruta 9 Km 45, Rosario".to_string(),
            telefono: "+543415556789".to_string(),
            contacto: "info@mayoristanorte.com".to_string(),
            cuit_rut: Some("30-11223344-5".to_string()),
        };
        assert!(dto.validate().is_ok());

        dto.telefono = "123".to_string();
        assert!(dto.validate().is_err());

        dto.telefono = "+543415556789".to_string();
        dto.cuit_rut = Some("abc".to_string());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn search_spans_name_cuit_and_address() {
        let suppliers = vec![
            supplier(1, "Distribuidora Central", Some("30-12345678-9")),
            supplier(2, "Importadora del Sur", Some("30-98765432-1")),
        ];
        assert_eq!(search(&suppliers, "central").len(), 1);
        assert_eq!(search(&suppliers, "98765432").len(), 1);
        assert_eq!(search(&suppliers, "corrientes").len(), 2);
        assert_eq!(search(&suppliers, "").len(), 2);
    }
}
