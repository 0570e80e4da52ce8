//! CUIT/RUT format validation for the supplier form.
//!
//! Dashes and spaces are stripped first; what remains must be 11 digits
//! (Argentine CUIT, `XX-XXXXXXXX-X`) or 7-8 digits (Chilean RUT body).

use ventaspro_core::{DomainError, DomainResult};

/// Strip separators from a CUIT/RUT entry.
pub fn normalize(value: &str) -> String {
    value.chars().filter(|c| *c != '-' && !c.is_whitespace()).collect()
}

/// Validate a CUIT/RUT. Empty input is accepted (the field is optional on
/// some forms; `required` is checked separately).
pub fn validate_cuit_rut(value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Ok(());
    }

    let digits = normalize(value);
    let all_digits = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());
    let is_cuit = all_digits && digits.len() == 11;
    let is_rut = all_digits && (7..=8).contains(&digits.len());

    if is_cuit || is_rut {
        Ok(())
    } else {
        Err(DomainError::validation("CUIT/RUT inválido"))
    }
}
