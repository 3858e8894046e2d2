use serde_json::Value;

use crate::error::AppError;

/// Accepts only a JSON string; `null`, missing fields and other types are rejected.
pub fn require_string(value: &Value, field: &str) -> Result<String, AppError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(AppError::validation(format!("'{field}' deve ser string"))),
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
