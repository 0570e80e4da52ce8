//! Application shell: route table, guards, navigation, auth flows and the
//! dashboard aggregation.

pub mod dashboard;
pub mod flows;
pub mod guards;
pub mod navigator;
pub mod routes;

pub use flows::{FlowError, FlowOutcome, LoginForm, RegisterForm};
pub use guards::{GuardDecision, auth_guard, public_only_guard, role_guard};
pub use navigator::{LOGIN_PATH, Navigation, Navigator};
pub use routes::{Access, Route, RouteConfigError, RouteTable, default_table};
