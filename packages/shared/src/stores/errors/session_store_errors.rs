use std::fmt;

#[derive(Debug)]
pub enum SessionStoreError {
    Io(String),
    Serialization(String),
}

impl fmt::Display for SessionStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionStoreError::Io(msg) => write!(f, "Session store I/O error: {}", msg),
            SessionStoreError::Serialization(msg) => {
                write!(f, "Session store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SessionStoreError {}
