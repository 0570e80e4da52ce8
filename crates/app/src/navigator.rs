//! Navigation over the route table.
//!
//! Owns the current URL and the pending `returnUrl`. Guard evaluation takes
//! one session snapshot per navigation and follows redirects until a route
//! admits the user (bounded, in case of a misconfigured cycle).

use std::sync::RwLock;

use chrono::Utc;

use ventaspro_auth::SessionHandle;
use ventaspro_client::{ApiError, ErrorKind};

use crate::guards::{GuardDecision, auth_guard, public_only_guard, role_guard};
use crate::routes::{Access, RouteTable};

const MAX_REDIRECTS: usize = 8;

pub const LOGIN_PATH: &str = "/auth/login";

/// Where a navigation ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The requested path was admitted.
    Arrived(String),
    /// A guard or redirect entry sent the user elsewhere.
    Redirected { requested: String, settled: String },
}

impl Navigation {
    /// Final URL regardless of how it was reached.
    pub fn url(&self) -> &str {
        match self {
            Navigation::Arrived(url) => url,
            Navigation::Redirected { settled, .. } => settled,
        }
    }
}

pub struct Navigator {
    table: RouteTable,
    session: SessionHandle,
    current: RwLock<String>,
    return_url: RwLock<Option<String>>,
}

impl Navigator {
    pub fn new(table: RouteTable, session: SessionHandle) -> Self {
        Self {
            table,
            session,
            current: RwLock::new("/".to_string()),
            return_url: RwLock::new(None),
        }
    }

    pub fn current_url(&self) -> String {
        self.current.read().unwrap().clone()
    }

    /// The URL a denied navigation wanted to reach, consumed by the login
    /// flow on success.
    pub fn take_return_url(&self) -> Option<String> {
        self.return_url.write().unwrap().take()
    }

    /// Navigate to `path`, evaluating the guard chain against one session
    /// snapshot and following redirects until a route admits the user.
    pub fn navigate(&self, path: &str) -> Navigation {
        let state = self.session.snapshot(Utc::now());
        let requested = path.to_string();
        let mut target = requested.clone();

        for _ in 0..MAX_REDIRECTS {
            let Some(route) = self.table.resolve(&target) else {
                tracing::debug!(path = %target, "unknown route, using fallback");
                target = self.table.fallback().to_string();
                continue;
            };

            if let Some(to) = &route.redirect_to {
                target = to.clone();
                continue;
            }

            let decision = match &route.access {
                Access::Public => GuardDecision::Allow,
                Access::PublicOnly => public_only_guard(&state),
                Access::Authenticated => auth_guard(&state, &target),
                Access::RoleRestricted(roles) => role_guard(&state, roles, &target),
            };

            match decision {
                GuardDecision::Allow => return self.settle(requested, target),
                GuardDecision::Redirect(to) => {
                    tracing::debug!(from = %target, to = %to, "navigation redirected");
                    if to.starts_with(LOGIN_PATH) {
                        // Remember where the user was headed; plain target,
                        // without the query the redirect carries.
                        let bare = target.split('?').next().unwrap_or(&target);
                        *self.return_url.write().unwrap() = Some(bare.to_string());
                    }
                    target = to;
                }
            }
        }

        tracing::warn!(path, "redirect chain did not settle, staying put");
        Navigation::Redirected { requested, settled: self.current_url() }
    }

    fn settle(&self, requested: String, settled: String) -> Navigation {
        *self.current.write().unwrap() = settled.clone();
        if settled == requested {
            Navigation::Arrived(settled)
        } else {
            Navigation::Redirected { requested, settled }
        }
    }

    /// Turn API-level auth failures into forced redirects. A 401 means the
    /// pipeline already tore the session down; from anywhere but the login
    /// screen the user is sent there with `sessionExpired=true`. A 403 goes
    /// to the denial page.
    pub fn handle_api_error(&self, err: &ApiError) -> Option<Navigation> {
        match err.kind {
            ErrorKind::Unauthorized => {
                let on_login = self
                    .current_url()
                    .split('?')
                    .next()
                    .is_some_and(|p| p == LOGIN_PATH);
                if on_login {
                    return None;
                }
                tracing::info!("session expired, redirecting to login");
                Some(self.navigate(&format!("{LOGIN_PATH}?sessionExpired=true")))
            }
            ErrorKind::Forbidden => Some(self.navigate("/access-denied")),
            _ => None,
        }
    }
}
