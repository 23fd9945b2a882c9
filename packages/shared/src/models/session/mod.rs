use serde::{Deserialize, Serialize};

use crate::models::user::UserIdentity;

/// The one live authenticated session.
///
/// `expires_at` is the explicitly persisted expiry in epoch milliseconds and
/// is authoritative when present; when absent the expiry is derived from the
/// token's embedded claim. The three fields are always replaced together —
/// a token is never stored with a stale expiry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Session {
    pub token: String,
    pub expires_at: Option<i64>,
    pub user: Option<UserIdentity>,
}

impl Session {
    pub fn new(token: String, expires_at: Option<i64>, user: Option<UserIdentity>) -> Self {
        Session {
            token,
            expires_at,
            user,
        }
    }
}
