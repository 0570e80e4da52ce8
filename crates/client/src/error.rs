use thiserror::Error;

use ventaspro_auth::AuthError;

/// Coarse classification of an API failure, derived solely from the HTTP
/// status code (or its absence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response arrived at all (the browser's "status 0").
    Network,
    /// 400.
    BadRequest,
    /// 401; the session has already been invalidated by the pipeline.
    Unauthorized,
    /// 403.
    Forbidden,
    /// 404.
    NotFound,
    /// 409.
    Conflict,
    /// 5xx.
    Server,
    /// Anything else, including undecodable success bodies.
    Unexpected,
}

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Unexpected,
        }
    }

    /// Fixed user-facing message (Spanish) for this kind.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::Network => "No se pudo conectar con el servidor",
            ErrorKind::BadRequest => "Datos inválidos",
            ErrorKind::Unauthorized => "Credenciales incorrectas",
            ErrorKind::Forbidden => "No tienes permisos para realizar esta acción",
            ErrorKind::NotFound => "Recurso no encontrado",
            ErrorKind::Conflict => "El recurso ya existe",
            ErrorKind::Server => "Error interno del servidor",
            ErrorKind::Unexpected => "Ha ocurrido un error desconocido",
        }
    }
}

/// API-boundary error: a kind, the raw status (when one arrived) and the
/// message to surface. A message supplied by the backend body wins over the
/// kind's default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: String,
    backend_message: bool,
}

impl ApiError {
    pub fn network() -> Self {
        Self {
            kind: ErrorKind::Network,
            status: None,
            message: ErrorKind::Network.default_message().to_string(),
            backend_message: false,
        }
    }

    pub fn from_status(status: u16, backend_message: Option<String>) -> Self {
        let kind = ErrorKind::from_status(status);
        match backend_message.filter(|m| !m.is_empty()) {
            Some(message) => Self { kind, status: Some(status), message, backend_message: true },
            None => Self {
                kind,
                status: Some(status),
                message: kind.default_message().to_string(),
                backend_message: false,
            },
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unexpected,
            status: None,
            message: detail.into(),
            backend_message: false,
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        let backend = err.backend_message.then_some(err.message);
        AuthError::from_status(err.status, backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(ErrorKind::from_status(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_status(409), ErrorKind::Conflict);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::Server);
        assert_eq!(ErrorKind::from_status(302), ErrorKind::Unexpected);
    }

    #[test]
    fn backend_message_wins_over_default() {
        let err = ApiError::from_status(409, Some("Proveedor duplicado".to_string()));
        assert_eq!(err.to_string(), "Proveedor duplicado");

        let err = ApiError::from_status(409, None);
        assert_eq!(err.to_string(), "El recurso ya existe");
    }

    #[test]
    fn converts_into_auth_error_taxonomy() {
        assert_eq!(AuthError::from(ApiError::network()), AuthError::Network);
        assert_eq!(
            AuthError::from(ApiError::from_status(401, None)),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            AuthError::from(ApiError::from_status(409, None)),
            AuthError::EmailTaken
        );
        assert_eq!(
            AuthError::from(ApiError::from_status(500, Some("boom".to_string()))),
            AuthError::Backend("boom".to_string())
        );
    }
}
