use serde::{Deserialize, Serialize};

/// The signed-in user as exposed by the session provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}
