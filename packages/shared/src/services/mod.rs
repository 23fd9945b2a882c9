pub mod clock;
pub mod errors;
pub mod session_events;
pub mod session_monitor;
pub mod token_service;
