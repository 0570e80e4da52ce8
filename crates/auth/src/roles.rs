use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
///
/// This is a closed set, validated at route-table construction time. The
/// decoded role is a UI hint only; the backend re-checks authorization on
/// every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Seller,
    /// Older tokens carry the Spanish variant name.
    #[serde(alias = "CLIENTE")]
    Client,
}

impl Role {
    /// User-facing label (Spanish).
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Seller => "Vendedor",
            Role::Client => "Cliente",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Admin => f.write_str("ADMIN"),
            Role::Seller => f.write_str("SELLER"),
            Role::Client => f.write_str("CLIENT"),
        }
    }
}
