//! Ownership-scoped session context.
//!
//! One `SessionHandle` is built at startup and cloned into whatever needs it
//! (the HTTP client, the navigator). Guards never reach into it directly;
//! they receive a `SessionState` snapshot.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::{Session, SessionState, SessionStore, UserProfile};

#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Inner>,
}

struct Inner {
    store: Box<dyn SessionStore>,
    /// In-memory token. The store is read once at startup and written on
    /// transitions; this copy is the source of truth afterwards.
    token: RwLock<Option<String>>,
    current: watch::Sender<Option<UserProfile>>,
}

impl SessionHandle {
    /// Build a handle over a store, seeding the in-memory session from any
    /// persisted one.
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        let seeded = match store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("failed to restore persisted session: {e}");
                None
            }
        };
        let (token, user) = match seeded {
            Some(s) => (Some(s.token), Some(s.user)),
            None => (None, None),
        };
        let (current, _) = watch::channel(user);
        Self {
            inner: Arc::new(Inner { store, token: RwLock::new(token), current }),
        }
    }

    /// `Anonymous → Authenticated`: publish the session and persist both
    /// keys.
    ///
    /// Like [`invalidate`](Self::invalidate) this has no failure mode: a
    /// store error is logged and the in-memory transition still happens, so
    /// a successful login stays authenticated for the rest of the run.
    pub fn establish(&self, session: Session) {
        *self.inner.token.write().unwrap() = Some(session.token.clone());
        if let Err(e) = self.inner.store.save(&session.token, &session.user) {
            tracing::warn!("failed to persist session: {e}");
        }
        tracing::info!(user = %session.user.email, "session established");
        self.inner.current.send_replace(Some(session.user));
    }

    /// `Authenticated → Anonymous`: clear both keys and publish `None`.
    ///
    /// Has no failure mode; a store error is logged and the in-memory state
    /// still transitions.
    pub fn invalidate(&self) {
        *self.inner.token.write().unwrap() = None;
        if let Err(e) = self.inner.store.clear() {
            tracing::warn!("failed to clear session store: {e}");
        }
        if self.inner.current.send_replace(None).is_some() {
            tracing::info!("session invalidated");
        }
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.inner.token.read().unwrap().clone()
    }

    /// Latest known profile (push-based consumers use [`subscribe`](Self::subscribe)).
    pub fn current_user(&self) -> Option<UserProfile> {
        self.inner.current.borrow().clone()
    }

    /// Watch channel carrying the current profile; emits `None` on logout.
    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.inner.current.subscribe()
    }

    /// Authenticated iff a token is held, a profile is known and, when the
    /// token parses as a JWT, its expiry is in the future.
    pub fn is_authenticated(&self, now: DateTime<Utc>) -> bool {
        match (self.token(), self.current_user()) {
            (Some(token), Some(user)) => Session::new(token, user).is_authenticated(now),
            _ => false,
        }
    }

    /// Snapshot for guard evaluation.
    pub fn snapshot(&self, now: DateTime<Utc>) -> SessionState {
        match (self.token(), self.current_user()) {
            (Some(token), Some(user)) => Session::new(token, user).state(now),
            _ => SessionState::Anonymous,
        }
    }
}
