use serde::{Deserialize, Serialize};

use crate::models::user::UserIdentity;

/// Wrapper the storefront API puts around every response body.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserIdentity>,
    /// Explicit expiry in epoch milliseconds, when the server provides one.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Result of a refresh call. A missing token means the server declined the
/// renewal without erroring; callers must treat that as a failed refresh.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Claims read out of a bearer token without signature verification.
/// The client only ever inspects `exp`; everything else is opaque.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenClaims {
    pub exp: i64, // expiration time, seconds since the epoch
}
