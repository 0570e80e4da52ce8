//! `ventaspro-auth`: client-side session state.
//!
//! This crate owns everything between "the backend handed us a token" and
//! "a guard wants to know who is navigating": the closed role set, the decoded
//! profile, the token claims, the two-key persistent session store and the
//! `Anonymous`/`Authenticated` state machine. It is intentionally decoupled
//! from HTTP; `ventaspro-client` drives the transitions.

pub mod claims;
pub mod error;
pub mod handle;
pub mod password;
pub mod profile;
pub mod roles;
pub mod session;
pub mod store;

pub use claims::{TokenClaims, TokenDecodeError, decode_unverified};
pub use error::AuthError;
pub use handle::SessionHandle;
pub use profile::UserProfile;
pub use roles::Role;
pub use session::{Session, SessionState};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoreError, TOKEN_KEY, USER_KEY};
