//! Route handlers, grouped by URL prefix.

pub mod auth;
pub mod health;
pub mod knowledge;
pub mod market;

/// Treats `None` and empty strings alike, mirroring the API's
/// "missing required fields" rule.
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Returns the field value or the given default when absent/empty.
fn or_default(field: Option<String>, default: &str) -> String {
    match field {
        Some(s) if !s.trim().is_empty() => s,
        _ => default.to_string(),
    }
}
