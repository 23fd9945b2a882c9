use std::fmt;

#[derive(Debug)]
pub enum TokenServiceError {
    MalformedToken,
    InvalidBase64(String),
    InvalidClaims(String),
}

impl fmt::Display for TokenServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenServiceError::MalformedToken => {
                write!(f, "Token does not have the expected segment layout")
            }
            TokenServiceError::InvalidBase64(msg) => {
                write!(f, "Token payload is not valid base64: {}", msg)
            }
            TokenServiceError::InvalidClaims(msg) => {
                write!(f, "Token claims are not valid JSON: {}", msg)
            }
        }
    }
}

impl std::error::Error for TokenServiceError {}
