use serde::{Deserialize, Serialize};

use crate::users::Role;

/// JWT payload used for authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,    // user ID
    pub role: Role,     // account role
    pub iat: usize,     // issued at (unix timestamp)
    pub exp: usize,     // expires at (unix timestamp)
    pub iss: String,    // issuer
    pub aud: String,    // audience
}

/// Identity carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub user_id: String,
    pub role: Role,
}

impl From<Claims> for TokenPayload {
    fn from(c: Claims) -> Self {
        Self {
            user_id: c.sub,
            role: c.role,
        }
    }
}
