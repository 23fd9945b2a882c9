use std::fmt;

#[derive(Debug)]
pub enum SessionMonitorError {
    ValidationError(String),
}

impl fmt::Display for SessionMonitorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionMonitorError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for SessionMonitorError {}
