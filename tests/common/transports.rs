use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use shared::models::auth::requests::LoginRequest;
use shared::models::auth::responses::{LoginResponse, RefreshResponse};
use shared::transports::auth_transport::AuthTransport;
use shared::transports::errors::auth_transport_errors::AuthTransportError;

/// Transport whose refresh answers are queued up front; logout calls are
/// counted and always succeed.
#[derive(Default)]
pub struct ScriptedTransport {
    refresh_results: Mutex<VecDeque<Result<RefreshResponse, AuthTransportError>>>,
    logout_calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_refresh(&self, result: Result<RefreshResponse, AuthTransportError>) {
        self.refresh_results.lock().unwrap().push_back(result);
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthTransport for ScriptedTransport {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, AuthTransportError> {
        Err(AuthTransportError::Http("login not scripted".to_string()))
    }

    async fn refresh(&self, _current_token: &str) -> Result<RefreshResponse, AuthTransportError> {
        self.refresh_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AuthTransportError::Http("no scripted response".to_string())))
    }

    async fn logout(&self, _current_token: &str) -> Result<(), AuthTransportError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
