use std::fmt;

#[derive(Debug)]
pub enum AuthTransportError {
    Http(String),
    InvalidResponse(String),
}

impl fmt::Display for AuthTransportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthTransportError::Http(msg) => write!(f, "HTTP error: {}", msg),
            AuthTransportError::InvalidResponse(msg) => {
                write!(f, "Invalid server response: {}", msg)
            }
        }
    }
}

impl std::error::Error for AuthTransportError {}
