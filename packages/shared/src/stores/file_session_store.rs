use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::session::Session;
use crate::models::user::UserIdentity;
use crate::stores::errors::session_store_errors::SessionStoreError;
use crate::stores::session_store::{SessionStore, EXPIRES_AT_SLOT, TOKEN_SLOT, USER_SLOT};

/// File-backed store: one file per slot under a session directory, so the
/// persisted session survives process restarts.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, SessionStoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| SessionStoreError::Io(e.to_string()))?;
        Ok(FileSessionStore { dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(slot)
    }

    fn read_slot(&self, slot: &str) -> Result<Option<String>, SessionStoreError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }

    fn write_slot(&self, slot: &str, contents: &str) -> Result<(), SessionStoreError> {
        fs::write(self.slot_path(slot), contents).map_err(|e| SessionStoreError::Io(e.to_string()))
    }

    fn remove_slot(&self, slot: &str) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<Session>, SessionStoreError> {
        let token = match self.read_slot(TOKEN_SLOT)? {
            Some(token) => token,
            None => return Ok(None),
        };

        let user = match self.read_slot(USER_SLOT)? {
            Some(raw) => {
                let user: UserIdentity = serde_json::from_str(&raw)
                    .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;
                Some(user)
            }
            None => None,
        };

        let expires_at = match self.read_slot(EXPIRES_AT_SLOT)? {
            Some(raw) => Some(
                raw.trim()
                    .parse::<i64>()
                    .map_err(|e| SessionStoreError::Serialization(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Some(Session::new(token, expires_at, user)))
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        // token written last: a crash mid-write never leaves a token whose
        // companion slots are stale
        match &session.user {
            Some(user) => {
                let raw = serde_json::to_string(user)
                    .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;
                self.write_slot(USER_SLOT, &raw)?;
            }
            None => self.remove_slot(USER_SLOT)?,
        }
        match session.expires_at {
            Some(ms) => self.write_slot(EXPIRES_AT_SLOT, &ms.to_string())?,
            None => self.remove_slot(EXPIRES_AT_SLOT)?,
        }
        self.write_slot(TOKEN_SLOT, &session.token)
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        // token removed first, for the same reason set() writes it last
        self.remove_slot(TOKEN_SLOT)?;
        self.remove_slot(USER_SLOT)?;
        self.remove_slot(EXPIRES_AT_SLOT)
    }
}
