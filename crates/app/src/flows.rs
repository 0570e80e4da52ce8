//! Login, registration and logout flows.
//!
//! Each flow validates the form locally first; only a clean form reaches the
//! API. Messages are the user-facing Spanish strings, collected in full
//! rather than stopping at the first problem.

use thiserror::Error;

use ventaspro_auth::{AuthError, Session, password};
use ventaspro_client::{AuthApi, LoginRequest, RegisterRequest};
use ventaspro_core::validate;

use crate::navigator::{LOGIN_PATH, Navigation, Navigator};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    /// The form never left the client.
    #[error("{}", .0.join(". "))]
    Validation(Vec<String>),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Outcome of a successful auth flow: the session plus where the user ended.
#[derive(Debug)]
pub struct FlowOutcome {
    pub session: Session,
    pub navigation: Navigation,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errores = Vec::new();
        if self.email.trim().is_empty() {
            errores.push("El email es obligatorio".to_string());
        } else if validate::email(&self.email).is_err() {
            errores.push("El formato del email no es válido".to_string());
        }
        if self.password.is_empty() {
            errores.push("La contraseña es obligatoria".to_string());
        }
        errores
    }
}

#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl RegisterForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errores = Vec::new();
        if self.full_name.trim().is_empty() {
            errores.push("El nombre es obligatorio".to_string());
        }
        if self.email.trim().is_empty() {
            errores.push("El email es obligatorio".to_string());
        } else if validate::email(&self.email).is_err() {
            errores.push("El formato del email no es válido".to_string());
        }
        if let Some(phone) = self.phone.as_deref() {
            if !phone.is_empty() && validate::phone(phone).is_err() {
                errores.push("El formato del teléfono no es válido".to_string());
            }
        }
        if !password::check(&self.password).is_strong() {
            errores.push(
                "La contraseña debe tener al menos 8 caracteres, una mayúscula, una minúscula y un número"
                    .to_string(),
            );
        }
        if self.password != self.confirm_password {
            errores.push("Las contraseñas no coinciden".to_string());
        }
        if !self.accept_terms {
            errores.push("Debes aceptar los términos y condiciones".to_string());
        }
        errores
    }

    fn into_request(self) -> RegisterRequest {
        RegisterRequest {
            full_name: self.full_name,
            email: self.email,
            phone: self.phone.filter(|p| !p.is_empty()),
            company: self.company.filter(|c| !c.is_empty()),
            password: self.password,
            confirm_password: self.confirm_password,
            accept_terms: self.accept_terms,
        }
    }
}

/// Validate, call `POST /auth/login`, then land on the stored `returnUrl`
/// (or the dashboard when none is pending).
pub async fn login(
    auth: &AuthApi,
    navigator: &Navigator,
    form: &LoginForm,
) -> Result<FlowOutcome, FlowError> {
    let errores = form.validate();
    if !errores.is_empty() {
        return Err(FlowError::Validation(errores));
    }

    let session = auth
        .login(&LoginRequest { email: form.email.clone(), password: form.password.clone() })
        .await?;

    let destination = navigator
        .take_return_url()
        .unwrap_or_else(|| "/dashboard".to_string());
    tracing::info!(user = %session.user.email, %destination, "login succeeded");
    let navigation = navigator.navigate(&destination);
    Ok(FlowOutcome { session, navigation })
}

/// Validate, call `POST /auth/register`, then land on the dashboard.
pub async fn register(
    auth: &AuthApi,
    navigator: &Navigator,
    form: RegisterForm,
) -> Result<FlowOutcome, FlowError> {
    let errores = form.validate();
    if !errores.is_empty() {
        return Err(FlowError::Validation(errores));
    }

    let session = auth.register(&form.into_request()).await?;
    tracing::info!(user = %session.user.email, "registration succeeded");
    let navigation = navigator.navigate("/dashboard");
    Ok(FlowOutcome { session, navigation })
}

/// Clear the session and return to the login screen.
pub fn logout(auth: &AuthApi, navigator: &Navigator) -> Navigation {
    auth.logout();
    navigator.navigate(LOGIN_PATH)
}
