//! Shared form-field validation.
//!
//! Messages are user-facing (Spanish), matching what the backend returns for
//! the same violations.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DomainError, DomainResult};

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap())
}

/// Validate an email address.
pub fn email(value: &str) -> DomainResult<()> {
    if email_re().is_match(value) {
        Ok(())
    } else {
        Err(DomainError::validation("Email inválido"))
    }
}

/// Validate a phone number (optional `+` prefix, 10-15 digits).
pub fn phone(value: &str) -> DomainResult<()> {
    if phone_re().is_match(value) {
        Ok(())
    } else {
        Err(DomainError::validation("Teléfono inválido"))
    }
}

/// Require a non-empty value for the named field.
pub fn required(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        Err(DomainError::validation(format!("{field} es obligatorio")))
    } else {
        Ok(())
    }
}

/// Enforce a length window (inclusive) on the named field.
pub fn length(field: &str, value: &str, min: usize, max: usize) -> DomainResult<()> {
    let len = value.chars().count();
    if len < min {
        return Err(DomainError::validation(format!(
            "{field} debe tener al menos {min} caracteres"
        )));
    }
    if len > max {
        return Err(DomainError::validation(format!(
            "{field} debe tener como máximo {max} caracteres"
        )));
    }
    Ok(())
}
