pub mod session_monitor_errors;
pub mod token_service_errors;
