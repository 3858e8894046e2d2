use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validate::require_string;
use crate::error::AppError;

/// Request body for signup. Fields stay raw JSON until the service checks them.
#[derive(Debug, Default, Deserialize)]
pub struct SignupInput {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub password: Value,
}

impl SignupInput {
    pub fn new(name: impl Into<Value>, email: impl Into<Value>, password: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Request body for login.
#[derive(Debug, Default, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub password: Value,
}

impl LoginInput {
    pub fn new(email: impl Into<Value>, password: impl Into<Value>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Unchecked delete request as assembled from path and headers.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    #[serde(default)]
    pub id_to_delete: Value,
    #[serde(default)]
    pub token: Value,
}

/// Delete request whose fields are known to be strings.
#[derive(Debug, Clone)]
pub struct DeleteUserInput {
    pub id_to_delete: String,
    pub token: String,
}

impl DeleteUserInput {
    pub fn new(id_to_delete: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id_to_delete: id_to_delete.into(),
            token: token.into(),
        }
    }

    pub fn parse(raw: &DeleteUserRequest) -> Result<Self, AppError> {
        Ok(Self {
            id_to_delete: require_string(&raw.id_to_delete, "idToDelete")?,
            token: require_string(&raw.token, "token")?,
        })
    }
}

/// Response returned after signup or login.
#[derive(Debug, Serialize)]
pub struct AuthOutput {
    pub message: String,
    pub token: String,
}

/// Response carrying only a status message.
#[derive(Debug, Serialize)]
pub struct MessageOutput {
    pub message: String,
}
