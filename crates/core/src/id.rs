//! Strongly-typed identifiers used across the domain.
//!
//! The VentasPro backend hands out sequential integer ids, so every id is a
//! newtype over `i64`. Domain crates define their own ids (`ProductId`,
//! `SaleId`, …) with the same macro.

use serde::{Deserialize, Serialize};

/// Identifier of a user (actor identity).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

/// Implement the shared boilerplate for an `i64` id newtype.
#[macro_export]
macro_rules! impl_i64_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.parse::<i64>().map_err(|e| {
                    $crate::error::DomainError::invalid_id(format!("{}: {}", $name, e))
                })?;
                Ok(Self(value))
            }
        }
    };
}

impl_i64_id!(UserId, "UserId");
