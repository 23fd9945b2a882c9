use std::sync::Mutex;

use crate::models::session::Session;
use crate::stores::errors::session_store_errors::SessionStoreError;
use crate::stores::session_store::SessionStore;

/// In-memory store for tests and embedded hosts.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        MemorySessionStore {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.session.lock().unwrap().clone())
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
