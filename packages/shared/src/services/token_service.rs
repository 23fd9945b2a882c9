use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::models::auth::responses::TokenClaims;
use crate::services::errors::token_service_errors::TokenServiceError;

/// Reads claims out of a bearer token without verifying its signature. The
/// client never holds the signing secret; it only needs the expiry, so the
/// token is treated as an opaque three-segment format whose middle segment
/// is base64-encoded JSON.
pub struct TokenService;

impl TokenService {
    pub fn peek_claims(token: &str) -> Result<TokenClaims, TokenServiceError> {
        let payload = token
            .split('.')
            .nth(1)
            .ok_or(TokenServiceError::MalformedToken)?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| TokenServiceError::InvalidBase64(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| TokenServiceError::InvalidClaims(e.to_string()))
    }

    /// Expiry embedded in the token, converted from seconds to epoch ms.
    pub fn peek_expiry_ms(token: &str) -> Result<i64, TokenServiceError> {
        Ok(Self::peek_claims(token)?.exp * 1000)
    }
}
