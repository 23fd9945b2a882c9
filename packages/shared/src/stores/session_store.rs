use crate::models::session::Session;
use crate::stores::errors::session_store_errors::SessionStoreError;

#[cfg(test)]
use mockall::automock;

/// Names of the three independent persistence slots. Keeping them separate
/// means a partial read (token present, expiry missing) is still meaningful.
pub const TOKEN_SLOT: &str = "token";
pub const USER_SLOT: &str = "user";
pub const EXPIRES_AT_SLOT: &str = "expires_at";

/// Persistence capability for the one live session. Injected into the
/// monitor rather than accessed as ambient global state so tests can run
/// against a deterministic backend.
#[cfg_attr(test, automock)]
pub trait SessionStore: Send + Sync {
    /// Returns the persisted session, or `None` when no token slot exists.
    fn get(&self) -> Result<Option<Session>, SessionStoreError>;
    /// Replaces all three slots together.
    fn set(&self, session: &Session) -> Result<(), SessionStoreError>;
    /// Removes all three slots. Clearing an empty store is a no-op.
    fn clear(&self) -> Result<(), SessionStoreError>;
}
