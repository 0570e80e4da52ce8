//! Route guards.
//!
//! Pure functions over a [`SessionState`] snapshot: the caller takes the
//! snapshot once per navigation and every guard in the chain sees the same
//! state. No guard reads shared mutable state.

use ventaspro_auth::{Role, SessionState};

/// What a guard decided for the attempted navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Protects authenticated routes. On denial the attempted URL rides along as
/// `returnUrl` so a later login can land the user where they were headed;
/// the redirect is never auto-resumed.
pub fn auth_guard(state: &SessionState, attempted: &str) -> GuardDecision {
    if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(format!("/auth/login?returnUrl={attempted}"))
    }
}

/// Keeps authenticated users off the login/register screens.
pub fn public_only_guard(state: &SessionState) -> GuardDecision {
    if state.is_authenticated() {
        GuardDecision::Redirect("/dashboard".to_string())
    } else {
        GuardDecision::Allow
    }
}

/// Role membership check. Anonymous sessions go to login (with `returnUrl`);
/// authenticated sessions with the wrong role go to the denial page.
pub fn role_guard(state: &SessionState, allowed: &[Role], attempted: &str) -> GuardDecision {
    match state.user() {
        None => auth_guard(state, attempted),
        Some(user) if allowed.contains(&user.role) => GuardDecision::Allow,
        Some(_) => GuardDecision::Redirect("/access-denied".to_string()),
    }
}
