//! Local Session Persistence
//!
//! Stores the authenticated session (`userToken` + `userData`) in a single
//! JSON document under the platform data dir. Writing goes through a temp
//! file followed by a rename, so both entries land together or not at all;
//! a document missing either entry reads back as no session.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::egui_app::types::AuthSession;

const SESSION_FILE: &str = "session.json";

/// Persisted session: bearer token plus the opaque user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "userToken")]
    pub user_token: String,
    #[serde(rename = "userData")]
    pub user_data: serde_json::Value,
}

impl From<AuthSession> for Session {
    fn from(auth: AuthSession) -> Self {
        Self {
            user_token: auth.token,
            user_data: auth.user,
        }
    }
}

/// Session persistence errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session encode error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("no platform data directory available")]
    NoDataDir,
}

/// File-backed session store
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store under the platform data dir (e.g. `~/.local/share/binibaby`)
    pub fn open_default() -> Result<Self, SessionError> {
        let dir = dirs::data_dir().ok_or(SessionError::NoDataDir)?;
        Ok(Self::at(dir.join("binibaby").join(SESSION_FILE)))
    }

    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a session. Token and user record are written together;
    /// readers never observe one without the other.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(session)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!("session saved to {}", self.path.display());
        Ok(())
    }

    /// Load the persisted session, if any. A missing or unreadable
    /// document counts as no session.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&text) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!("discarding corrupt session file: {e}");
                Ok(None)
            }
        }
    }

    /// Remove the persisted session
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join(SESSION_FILE));
        (dir, store)
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, store) = store();
        let session = Session {
            user_token: "T".to_string(),
            user_data: json!({"id": 1, "name": "Bini"}),
        };

        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let (_dir, store) = store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_partial_document_reads_as_absent() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"userToken":"T"}"#).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_document_reads_as_absent() {
        let (_dir, store) = store();
        fs::write(store.path(), "not json").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let (_dir, store) = store();
        let first = Session {
            user_token: "T1".to_string(),
            user_data: json!({"id": 1}),
        };
        let second = Session {
            user_token: "T2".to_string(),
            user_data: json!({"id": 2}),
        };

        store.save(&first).unwrap();
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap(), Some(second));
    }

    #[test]
    fn test_clear_removes_session() {
        let (_dir, store) = store();
        let session = Session {
            user_token: "T".to_string(),
            user_data: json!(null),
        };
        store.save(&session).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_wire_field_names() {
        let session = Session {
            user_token: "T".to_string(),
            user_data: json!({"id": 1}),
        };
        let value = serde_json::to_value(&session).unwrap();
        assert!(value.get("userToken").is_some());
        assert!(value.get("userData").is_some());
    }
}
