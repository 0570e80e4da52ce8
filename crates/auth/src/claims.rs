use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ventaspro_core::UserId;

use crate::{Role, UserProfile};

/// JWT payload consumed by the client.
///
/// Decoding is deliberately *unverified*: the client has no key material and
/// the decoded claims are a UI hint only. The backend validates the signature
/// and re-checks the role on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: UserId,

    #[serde(alias = "nombre")]
    pub name: String,

    #[serde(alias = "correo")]
    pub email: String,

    #[serde(alias = "rol")]
    pub role: Role,

    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,

    /// Issued-at, seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

#[derive(Debug, Error)]
pub enum TokenDecodeError {
    /// The token is not JWT-shaped or its payload is missing claims.
    #[error("token no decodificable: {0}")]
    Malformed(#[from] jsonwebtoken::errors::Error),
}

impl TokenClaims {
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Decode a bearer token's payload without verifying its signature.
///
/// Expiry is *not* enforced here; callers decide what an expired token means
/// (`Session::is_authenticated` treats it as anonymous).
pub fn decode_unverified(token: &str) -> Result<TokenClaims, TokenDecodeError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(&[]),
        &validation,
    )?;
    Ok(data.claims)
}
