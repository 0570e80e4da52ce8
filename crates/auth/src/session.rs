use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{UserProfile, claims};

/// The client-held pairing of a bearer token and the profile it represents.
///
/// Created on a successful login/register response; destroyed on logout, a
/// 401 response, or a failed expiry check. There is no refreshing state: an
/// expired token simply fails the next guard check or API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Session state as seen by guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(user) => Some(user),
        }
    }
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self { token: token.into(), user }
    }

    /// A session authenticates iff a token is present and, when the token
    /// parses as a JWT, its expiry is still in the future. Opaque tokens
    /// count as valid by presence.
    pub fn is_authenticated(&self, now: DateTime<Utc>) -> bool {
        if self.token.is_empty() {
            return false;
        }
        match claims::decode_unverified(&self.token) {
            Ok(claims) => !claims.is_expired(now),
            Err(_) => true,
        }
    }

    pub fn state(&self, now: DateTime<Utc>) -> SessionState {
        if self.is_authenticated(now) {
            SessionState::Authenticated(self.user.clone())
        } else {
            SessionState::Anonymous
        }
    }
}
