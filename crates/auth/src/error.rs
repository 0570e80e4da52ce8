use thiserror::Error;

/// Auth-flow error, classified by HTTP status at the service boundary.
///
/// Display strings are the fixed user-facing messages (Spanish); a message
/// supplied by the backend body wins over the status-derived default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No response at all (connection refused, DNS, timeout).
    #[error("No se pudo conectar con el servidor")]
    Network,

    /// 400.
    #[error("Datos inválidos")]
    InvalidData,

    /// 401 on login, or an invalid/expired token elsewhere.
    #[error("Credenciales incorrectas")]
    InvalidCredentials,

    /// 409 on register.
    #[error("El email ya está registrado")]
    EmailTaken,

    /// 500.
    #[error("Error interno del servidor")]
    Server,

    /// Backend supplied its own message; surface it verbatim.
    #[error("{0}")]
    Backend(String),

    /// Anything else.
    #[error("Ha ocurrido un error desconocido")]
    Unknown,
}

impl AuthError {
    /// Map a response to the error taxonomy. `status` is `None` when no
    /// response arrived (the browser's "status 0").
    pub fn from_status(status: Option<u16>, backend_message: Option<String>) -> Self {
        if let Some(message) = backend_message {
            if !message.is_empty() {
                return AuthError::Backend(message);
            }
        }
        match status {
            None => AuthError::Network,
            Some(400) => AuthError::InvalidData,
            Some(401) => AuthError::InvalidCredentials,
            Some(409) => AuthError::EmailTaken,
            Some(500) => AuthError::Server,
            Some(_) => AuthError::Unknown,
        }
    }

    /// The message shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
