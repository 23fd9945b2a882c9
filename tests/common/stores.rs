use std::sync::atomic::{AtomicUsize, Ordering};

use shared::models::session::Session;
use shared::stores::errors::session_store_errors::SessionStoreError;
use shared::stores::memory_session_store::MemorySessionStore;
use shared::stores::session_store::SessionStore;

/// Wraps the in-memory store and counts reads, to verify how often the
/// monitor actually polls.
#[derive(Default)]
pub struct CountingStore {
    inner: MemorySessionStore,
    gets: AtomicUsize,
}

impl CountingStore {
    pub fn with_session(session: Session) -> Self {
        CountingStore {
            inner: MemorySessionStore::with_session(session),
            gets: AtomicUsize::new(0),
        }
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

impl SessionStore for CountingStore {
    fn get(&self) -> Result<Option<Session>, SessionStoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get()
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        self.inner.set(session)
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        self.inner.clear()
    }
}
