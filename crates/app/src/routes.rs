//! The application route table.
//!
//! Built once at startup from a builder that validates the configuration:
//! a role-restricted route with an empty role list is a configuration error,
//! not a route that lets everyone through.

use thiserror::Error;

use ventaspro_auth::Role;

/// Access policy of a single route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Reachable by anyone.
    Public,
    /// Reachable only without a session (login, register).
    PublicOnly,
    /// Requires an authenticated session.
    Authenticated,
    /// Requires an authenticated session whose role is in the list.
    RoleRestricted(Vec<Role>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub access: Access,
    /// Pure redirect entry; access is not evaluated on the source path.
    pub redirect_to: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteConfigError {
    #[error("route `{0}` restricts by role but allows no roles")]
    EmptyRoles(String),
    #[error("route `{0}` is declared twice")]
    DuplicatePath(String),
}

/// Immutable route table plus the fallback target for unknown paths.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: String,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder { routes: Vec::new(), fallback: "/".to_string() }
    }

    /// Look up a route by path, ignoring any query string.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let bare = path.split('?').next().unwrap_or(path);
        self.routes.iter().find(|r| r.path == bare)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

pub struct RouteTableBuilder {
    routes: Vec<Route>,
    fallback: String,
}

impl RouteTableBuilder {
    pub fn route(mut self, path: impl Into<String>, access: Access) -> Self {
        self.routes.push(Route { path: path.into(), access, redirect_to: None });
        self
    }

    pub fn redirect(mut self, path: impl Into<String>, to: impl Into<String>) -> Self {
        self.routes.push(Route {
            path: path.into(),
            access: Access::Public,
            redirect_to: Some(to.into()),
        });
        self
    }

    /// Target for paths no route matches.
    pub fn fallback(mut self, to: impl Into<String>) -> Self {
        self.fallback = to.into();
        self
    }

    pub fn build(self) -> Result<RouteTable, RouteConfigError> {
        for (i, route) in self.routes.iter().enumerate() {
            if let Access::RoleRestricted(roles) = &route.access {
                if roles.is_empty() {
                    return Err(RouteConfigError::EmptyRoles(route.path.clone()));
                }
            }
            if self.routes[..i].iter().any(|r| r.path == route.path) {
                return Err(RouteConfigError::DuplicatePath(route.path.clone()));
            }
        }
        Ok(RouteTable { routes: self.routes, fallback: self.fallback })
    }
}

/// The VentasPro route table.
pub fn default_table() -> RouteTable {
    RouteTable::builder()
        .redirect("/", "/dashboard")
        .route("/auth/login", Access::PublicOnly)
        .route("/auth/register", Access::PublicOnly)
        .route("/dashboard", Access::Authenticated)
        .route("/products", Access::Authenticated)
        .route("/suppliers", Access::Authenticated)
        .route("/profile", Access::Authenticated)
        .route("/sales", Access::RoleRestricted(vec![Role::Admin, Role::Seller]))
        .route("/access-denied", Access::Public)
        .fallback("/dashboard")
        .build()
        .expect("static route table is valid")
}
