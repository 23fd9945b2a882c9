use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use shared::models::auth::requests::LoginRequest;
use shared::models::session::Session;
use shared::services::clock::SystemClock;
use shared::services::session_events::SessionEvents;
use shared::services::session_monitor::{
    SessionMonitor, SessionMonitorConfig, SessionState, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_WARNING_WINDOW_MS,
};
use shared::services::token_service::TokenService;
use shared::stores::file_session_store::FileSessionStore;
use shared::stores::session_store::SessionStore;
use shared::transports::auth_transport::{AuthTransport, HttpAuthTransport};

/// Surfaces monitor notifications on the terminal. The prompt is answered
/// by typing `renew` or `logout` on stdin.
struct TerminalEvents;

impl SessionEvents for TerminalEvents {
    fn renewal_prompt_opened(&self) {
        println!("Your session is about to expire. Type 'renew' to stay signed in or 'logout' to end it.");
    }

    fn renewal_prompt_closed(&self) {
        println!("Renewal prompt dismissed.");
    }

    fn session_renewed(&self, _token: &str) {
        println!("Session renewed.");
    }

    fn session_ended(&self) {
        println!("Session ended. Please log in again.");
    }
}

fn env_ms(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

async fn login_if_credentials_present(
    store: &Arc<FileSessionStore>,
    transport: &Arc<HttpAuthTransport>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (email, password) = match (
        std::env::var("STOREFRONT_EMAIL"),
        std::env::var("STOREFRONT_PASSWORD"),
    ) {
        (Ok(email), Ok(password)) => (email, password),
        _ => {
            info!("No persisted session and no credentials supplied; waiting for a session to appear");
            return Ok(());
        }
    };

    let response = transport.login(&LoginRequest { email, password }).await?;
    let expires_at = match response.expires_at {
        Some(ms) => ms,
        None => TokenService::peek_expiry_ms(&response.token)?,
    };
    store.set(&Session::new(
        response.token,
        Some(expires_at),
        response.user,
    ))?;
    info!("Logged in, session persisted");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let api_url = std::env::var("STOREFRONT_API_URL")
        .expect("STOREFRONT_API_URL environment variable must be set");
    let session_dir =
        std::env::var("SESSION_DIR").expect("SESSION_DIR environment variable must be set");

    let config = SessionMonitorConfig {
        warning_window_ms: env_ms("SESSION_WARNING_WINDOW_MS", DEFAULT_WARNING_WINDOW_MS),
        poll_interval_ms: env_ms("SESSION_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS),
    };

    let store = Arc::new(FileSessionStore::new(&session_dir)?);
    let transport = Arc::new(HttpAuthTransport::new(&api_url)?);

    if store.get()?.is_none() {
        login_if_credentials_present(&store, &transport).await?;
    }

    let monitor = SessionMonitor::new(
        store,
        transport,
        Arc::new(TerminalEvents),
        Arc::new(SystemClock),
        config,
    )?;
    monitor.activate().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "renew" => {
                let state = monitor.renew().await;
                if state != SessionState::Monitoring {
                    warn!("Renewal did not succeed; session is gone");
                }
            }
            "logout" => monitor.force_logout().await,
            "quit" | "exit" => break,
            "" => {}
            other => info!("Unknown command '{}'; try 'renew', 'logout' or 'quit'", other),
        }
    }

    monitor.deactivate().await;
    Ok(())
}
