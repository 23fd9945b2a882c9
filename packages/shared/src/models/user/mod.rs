use serde::{Deserialize, Serialize};

/// Identity of the logged-in user, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserIdentity {
    pub email: String,
    pub name: String,
}

impl UserIdentity {
    pub fn new(email: String, name: String) -> Self {
        UserIdentity { email, name }
    }
}
