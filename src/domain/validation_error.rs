use serde_json::Value;

/// Reason a submitted form was rejected before any email was composed
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The `{0}` field is required")]
    MissingField(&'static str),
    #[error("The `{field}` field is not in a valid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },
}

/// Read an untyped form value the way the site's forms submit it
///
/// `null`, `false`, `0` and `""` count as not filled in. Strings are kept
/// as submitted, numbers and `true` are rendered as text, and arrays or
/// objects keep their JSON text.
pub fn form_value(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".into()),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => (i != 0).then(|| i.to_string()),
            (_, Some(u), _) => Some(u.to_string()),
            (_, _, Some(f)) => (f != 0.0).then(|| f.to_string()),
            _ => Some(n.to_string()),
        },
        Value::String(s) => (!s.is_empty()).then_some(s),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}

/// Take a required form field, treating every unfilled value alike
pub fn required(value: Option<Value>, field: &'static str) -> Result<String, ValidationError> {
    form_value(value).ok_or(ValidationError::MissingField(field))
}

/// Take an optional form field, dropping unfilled values
pub fn optional(value: Option<Value>) -> Option<String> {
    form_value(value)
}
