//! Persistent session storage.
//!
//! Two keys, mirroring the browser original: the token as a plain string and
//! the user profile as a JSON string. The file-backed store keeps both in one
//! JSON object under the user data directory.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::{Session, UserProfile};

pub const TOKEN_KEY: &str = "salesapp_token";
pub const USER_KEY: &str = "salesapp_user";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("no data directory available")]
    NoDataDir,
}

/// Key/value persistence for the session.
///
/// `load` returns `None` unless *both* keys are present and the user entry
/// parses; a corrupted user entry reads as no session, it is not an error.
pub trait SessionStore: Send + Sync {
    fn save(&self, token: &str, user: &UserProfile) -> Result<(), StoreError>;
    fn load(&self) -> Result<Option<Session>, StoreError>;
    fn clear(&self) -> Result<(), StoreError>;

    fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.map(|s| s.token))
    }
}

fn entries_to_session(entries: &HashMap<String, String>) -> Option<Session> {
    let token = entries.get(TOKEN_KEY)?;
    let user_json = entries.get(USER_KEY)?;
    let user: UserProfile = serde_json::from_str(user_json).ok()?;
    Some(Session::new(token.clone(), user))
}

/// In-memory store, used by tests and as a default when no disk is wanted.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw key lookup, for asserting on storage contents in tests.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str, user: &UserProfile) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(USER_KEY.to_string(), serde_json::to_string(user)?);
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(entries_to_session(&self.entries.lock().unwrap()))
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);
        Ok(())
    }
}

/// File-backed store: one JSON object holding both keys.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory (`<data>/ventaspro/session.json`).
    pub fn in_data_dir() -> Result<Self, StoreError> {
        let dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::at(dir.join("ventaspro").join("session.json")))
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str, user: &UserProfile) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(USER_KEY.to_string(), serde_json::to_string(user)?);
        self.write_entries(&entries)
    }

    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(entries_to_session(&self.read_entries()?))
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);
        self.write_entries(&entries)
    }
}
