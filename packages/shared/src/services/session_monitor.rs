use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::models::session::Session;
use crate::services::clock::Clock;
use crate::services::errors::session_monitor_errors::SessionMonitorError;
use crate::services::errors::token_service_errors::TokenServiceError;
use crate::services::session_events::SessionEvents;
use crate::services::token_service::TokenService;
use crate::stores::session_store::SessionStore;
use crate::transports::auth_transport::AuthTransport;

pub const DEFAULT_WARNING_WINDOW_MS: u64 = 60_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 30_000;

/// Where the monitor currently is in the session lifecycle. `Monitoring`
/// and `Warning` are outcomes of the periodic check, not separate timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Monitoring,
    Warning,
    Expired,
}

#[derive(Debug, Clone)]
pub struct SessionMonitorConfig {
    pub warning_window_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for SessionMonitorConfig {
    fn default() -> Self {
        SessionMonitorConfig {
            warning_window_ms: DEFAULT_WARNING_WINDOW_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl SessionMonitorConfig {
    /// The poll interval must be strictly smaller than the warning window,
    /// otherwise a session could expire between two checks without the
    /// warning ever being observed.
    pub fn validate(&self) -> Result<(), SessionMonitorError> {
        if self.poll_interval_ms == 0 {
            return Err(SessionMonitorError::ValidationError(
                "Poll interval cannot be zero".to_string(),
            ));
        }
        if self.poll_interval_ms >= self.warning_window_ms {
            return Err(SessionMonitorError::ValidationError(
                "Poll interval must be strictly smaller than the warning window".to_string(),
            ));
        }
        Ok(())
    }
}

struct MonitorInner {
    state: SessionState,
    prompt_open: bool,
    poll_task: Option<JoinHandle<()>>,
    logout_task: Option<JoinHandle<()>>,
}

/// Watches the persisted session's expiry: warns the host shortly before
/// the token runs out, renews on request, and forces logout on expiry or
/// renewal failure.
///
/// All operations serialize on one internal mutex, so timer callbacks and
/// host-triggered calls interleave without racing. At most one forced-logout
/// one-shot is armed at any time; every re-arm cancels the previous one
/// first, so a stale timer can never fire after a legitimate renewal.
#[derive(Clone)]
pub struct SessionMonitor {
    store: Arc<dyn SessionStore>,
    transport: Arc<dyn AuthTransport>,
    events: Arc<dyn SessionEvents>,
    clock: Arc<dyn Clock>,
    config: SessionMonitorConfig,
    inner: Arc<Mutex<MonitorInner>>,
}

impl SessionMonitor {
    pub fn new(
        store: Arc<dyn SessionStore>,
        transport: Arc<dyn AuthTransport>,
        events: Arc<dyn SessionEvents>,
        clock: Arc<dyn Clock>,
        config: SessionMonitorConfig,
    ) -> Result<Self, SessionMonitorError> {
        config.validate()?;
        Ok(SessionMonitor {
            store,
            transport,
            events,
            clock,
            config,
            inner: Arc::new(Mutex::new(MonitorInner {
                state: SessionState::Idle,
                prompt_open: false,
                poll_task: None,
                logout_task: None,
            })),
        })
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state
    }

    /// Starts periodic checking. The first check runs synchronously before
    /// this returns; the poll loop then fires every poll interval.
    /// Idempotent: activating an already-active monitor does nothing.
    pub async fn activate(&self) {
        let mut inner = self.inner.lock().await;
        if inner.poll_task.is_some() {
            debug!("Session monitor already active, ignoring activate");
            return;
        }

        self.check_session_locked(&mut inner).await;

        let monitor = self.clone();
        let period = Duration::from_millis(self.config.poll_interval_ms);
        inner.poll_task = Some(tokio::spawn(async move {
            // first periodic tick one full interval after activation; the
            // immediate check already ran
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                ticker.tick().await;
                monitor.check_session().await;
            }
        }));
        info!(
            "Session monitor activated (poll interval {}ms, warning window {}ms)",
            self.config.poll_interval_ms, self.config.warning_window_ms
        );
    }

    /// Cancels the poll loop and any pending one-shot. Safe to call on an
    /// inactive monitor.
    pub async fn deactivate(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(task) = inner.poll_task.take() {
            task.abort();
        }
        if let Some(task) = inner.logout_task.take() {
            task.abort();
        }
        debug!("Session monitor deactivated");
    }

    /// One pass of the expiry check. Returns the resulting state.
    pub async fn check_session(&self) -> SessionState {
        let mut inner = self.inner.lock().await;
        self.check_session_locked(&mut inner).await;
        inner.state
    }

    /// Exchanges the current token for a fresh one. Any failure — transport
    /// error, token-less response, undecodable new expiry — degrades to
    /// forced logout rather than surfacing a fault. Returns the resulting
    /// state.
    pub async fn renew(&self) -> SessionState {
        let mut inner = self.inner.lock().await;

        let session = match self.store.get() {
            Ok(Some(session)) => session,
            Ok(None) => {
                debug!("Renew requested with no persisted session");
                inner.state = SessionState::Idle;
                return inner.state;
            }
            Err(e) => {
                warn!("Failed to read persisted session during renew: {}", e);
                self.force_logout_locked(&mut inner).await;
                return inner.state;
            }
        };

        match self.transport.refresh(&session.token).await {
            Ok(response) => {
                let token = match response.token {
                    Some(token) => token,
                    None => {
                        warn!("Refresh returned no token, forcing logout");
                        self.force_logout_locked(&mut inner).await;
                        return inner.state;
                    }
                };
                let expires_at = match response.expires_at {
                    Some(ms) => ms,
                    None => match TokenService::peek_expiry_ms(&token) {
                        Ok(ms) => ms,
                        Err(e) => {
                            warn!("Cannot derive expiry from renewed token: {}", e);
                            self.force_logout_locked(&mut inner).await;
                            return inner.state;
                        }
                    },
                };

                // all three fields replaced together, carrying the identity over
                let renewed = Session::new(token.clone(), Some(expires_at), session.user);
                if let Err(e) = self.store.set(&renewed) {
                    warn!("Failed to persist renewed session: {}", e);
                    self.force_logout_locked(&mut inner).await;
                    return inner.state;
                }

                let remaining = (expires_at - self.clock.now_ms()).max(0) as u64;
                self.arm_logout_timer(&mut inner, remaining);
                inner.state = SessionState::Monitoring;
                if inner.prompt_open {
                    inner.prompt_open = false;
                    self.events.renewal_prompt_closed();
                }
                self.events.session_renewed(&token);
                info!("Session renewed, {}ms until next expiry", remaining);
            }
            Err(e) => {
                warn!("Session refresh failed: {}", e);
                self.force_logout_locked(&mut inner).await;
            }
        }
        inner.state
    }

    /// Ends the session unconditionally: best-effort remote logout, local
    /// slots cleared, host notified. Repeated calls re-clear the store but
    /// notify the host only once per live session.
    pub async fn force_logout(&self) {
        let mut inner = self.inner.lock().await;
        self.force_logout_locked(&mut inner).await;
    }

    async fn check_session_locked(&self, inner: &mut MonitorInner) {
        let session = match self.store.get() {
            Ok(Some(session)) => session,
            Ok(None) => {
                inner.state = SessionState::Idle;
                return;
            }
            Err(e) => {
                warn!("Failed to read persisted session: {}", e);
                self.force_logout_locked(inner).await;
                return;
            }
        };

        let expires_at = match self.derive_expiry_ms(&session) {
            Ok(ms) => ms,
            Err(e) => {
                warn!("Cannot derive expiry from persisted session: {}", e);
                self.force_logout_locked(inner).await;
                return;
            }
        };

        let remaining = expires_at - self.clock.now_ms();
        if remaining <= 0 {
            info!("Session expired, forcing logout");
            inner.state = SessionState::Expired;
            self.force_logout_locked(inner).await;
        } else if remaining <= self.config.warning_window_ms as i64 {
            inner.state = SessionState::Warning;
            if !inner.prompt_open {
                inner.prompt_open = true;
                self.events.renewal_prompt_opened();
            }
            // re-armed on every warning check so the one-shot always tracks
            // the freshest remaining time
            self.arm_logout_timer(inner, remaining as u64);
            debug!("Session expires in {}ms, renewal prompt open", remaining);
        } else {
            inner.state = SessionState::Monitoring;
            debug!("Session healthy, {}ms until expiry", remaining);
        }
    }

    /// Expiry policy: the explicitly persisted value is authoritative; only
    /// when it is absent does the token's embedded claim count.
    fn derive_expiry_ms(&self, session: &Session) -> Result<i64, TokenServiceError> {
        match session.expires_at {
            Some(ms) => Ok(ms),
            None => TokenService::peek_expiry_ms(&session.token),
        }
    }

    fn arm_logout_timer(&self, inner: &mut MonitorInner, remaining_ms: u64) {
        // cancel-before-arm: at most one one-shot exists
        if let Some(task) = inner.logout_task.take() {
            task.abort();
        }
        let monitor = self.clone();
        inner.logout_task = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(remaining_ms)).await;
            monitor.expire().await;
        }));
    }

    /// Deadline path of the one-shot timer.
    async fn expire(&self) {
        let mut inner = self.inner.lock().await;
        // this handle belongs to the task running right now; dropping it
        // instead of aborting lets the logout run to completion
        inner.logout_task = None;
        inner.state = SessionState::Expired;
        self.force_logout_locked(&mut inner).await;
    }

    async fn force_logout_locked(&self, inner: &mut MonitorInner) {
        if let Some(task) = inner.logout_task.take() {
            task.abort();
        }

        let had_session = match self.store.get() {
            Ok(Some(session)) => {
                if let Err(e) = self.transport.logout(&session.token).await {
                    warn!("Remote logout failed, clearing local session anyway: {}", e);
                }
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to read session during logout: {}", e);
                true
            }
        };

        if let Err(e) = self.store.clear() {
            warn!("Failed to clear persisted session: {}", e);
        }

        if inner.prompt_open {
            inner.prompt_open = false;
            self.events.renewal_prompt_closed();
        }

        let was_live = inner.state != SessionState::Idle || had_session;
        inner.state = SessionState::Idle;
        if was_live {
            info!("Session ended");
            self.events.session_ended();
        }
    }
}
