use serde::{Deserialize, Serialize};

use ventaspro_core::UserId;

use crate::Role;

/// Decoded user profile.
///
/// This is a cache of server-asserted identity: it comes from the login
/// response (or the token payload) and is never mutated locally except
/// optimistically on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,

    /// Display name. The backend serves this as `nombre`.
    #[serde(alias = "nombre")]
    pub name: String,

    /// Email. The backend serves this as `correo`.
    #[serde(alias = "correo")]
    pub email: String,

    /// Role within the app. The backend serves this as `rol`.
    #[serde(alias = "rol")]
    pub role: Role,
}

impl UserProfile {
    /// Initials shown on the avatar: first letters of first and last name,
    /// or the first two characters of a single name.
    pub fn initials(&self) -> String {
        let names: Vec<&str> = self.name.split_whitespace().collect();
        match names.as_slice() {
            [] => "U".to_string(),
            [single] => single.chars().take(2).collect::<String>().to_uppercase(),
            [first, .., last] => {
                let mut out = String::new();
                out.extend(first.chars().next());
                out.extend(last.chars().next());
                out.to_uppercase()
            }
        }
    }
}
