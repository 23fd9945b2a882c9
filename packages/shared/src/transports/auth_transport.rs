use std::time::Duration;

use async_trait::async_trait;

use crate::models::auth::requests::{LoginRequest, RefreshRequest};
use crate::models::auth::responses::{ApiEnvelope, LoginResponse, RefreshResponse};
use crate::transports::errors::auth_transport_errors::AuthTransportError;

#[cfg(test)]
use mockall::automock;

/// Client side of the storefront auth API. Login, refresh and logout are a
/// fixed external contract; everything here is a thin call over it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthTransport: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthTransportError>;
    /// A successful response without a token means the server declined the
    /// renewal; callers must handle that as well as transport errors.
    async fn refresh(&self, current_token: &str) -> Result<RefreshResponse, AuthTransportError>;
    /// Best-effort; a failure here must never block local session clearing.
    async fn logout(&self, current_token: &str) -> Result<(), AuthTransportError>;
}

pub struct HttpAuthTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AuthTransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AuthTransportError::Http(e.to_string()))?;
        Ok(HttpAuthTransport {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthTransport for HttpAuthTransport {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthTransportError> {
        let response = self
            .client
            .post(self.url("/api/login"))
            .json(request)
            .send()
            .await
            .map_err(|e| AuthTransportError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthTransportError::Http(format!(
                "Login failed with status {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<LoginResponse> = response
            .json()
            .await
            .map_err(|e| AuthTransportError::InvalidResponse(e.to_string()))?;
        Ok(envelope.data)
    }

    async fn refresh(&self, current_token: &str) -> Result<RefreshResponse, AuthTransportError> {
        let body = RefreshRequest {
            token: current_token.to_string(),
        };
        let response = self
            .client
            .post(self.url("/api/refresh"))
            .bearer_auth(current_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthTransportError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthTransportError::Http(format!(
                "Refresh failed with status {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<RefreshResponse> = response
            .json()
            .await
            .map_err(|e| AuthTransportError::InvalidResponse(e.to_string()))?;
        Ok(envelope.data)
    }

    async fn logout(&self, current_token: &str) -> Result<(), AuthTransportError> {
        let response = self
            .client
            .post(self.url("/api/logout"))
            .bearer_auth(current_token)
            .send()
            .await
            .map_err(|e| AuthTransportError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthTransportError::Http(format!(
                "Logout failed with status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let transport = HttpAuthTransport::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(transport.url("/api/login"), "http://127.0.0.1:8000/api/login");
    }
}
