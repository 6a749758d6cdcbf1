//! Reply decoding. Pulls the expected text field out of a JSON body.

use crate::domain::DomainError;
use serde_json::Value;

/// Max characters of a failing body kept in `DomainError::Status`.
pub const ERROR_BODY_LIMIT: usize = 200;

/// Extract `field` from a JSON object body.
///
/// - string value: returned as-is
/// - other non-null value: returned in its JSON text form
/// - missing or `null`: `Backend` if the body carries an `error` string, else `MissingField`
pub fn text_field(body: &str, field: &'static str) -> Result<String, DomainError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| DomainError::Decode(e.to_string()))?;

    match value.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => match value.get("error").and_then(Value::as_str) {
            Some(err) => Err(DomainError::Backend(err.to_string())),
            None => Err(DomainError::MissingField(field)),
        },
        Some(other) => Ok(other.to_string()),
    }
}

pub fn truncate_body(body: &str) -> String {
    body.chars().take(ERROR_BODY_LIMIT).collect()
}
