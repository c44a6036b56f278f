// src/application/validation.rs
//
// Shared validation policy for the write and read paths. Everything here runs
// before any storage round trip; the existence helpers wrap the membership
// tests repositories expose so every writer enforces referential integrity
// the same way.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::ArticleId;
use crate::domain::comment::CommentId;
use serde_json::Value;

/// Parse a path segment as an article id. Non-numeric and non-positive input
/// is rejected with `InvalidIdentifier` before touching storage.
pub fn parse_article_id(raw: &str) -> ApplicationResult<ArticleId> {
    let id = raw
        .parse::<i64>()
        .map_err(|_| ApplicationError::invalid_identifier(raw))?;
    ArticleId::new(id).map_err(|_| ApplicationError::invalid_identifier(raw))
}

pub fn parse_comment_id(raw: &str) -> ApplicationResult<CommentId> {
    let id = raw
        .parse::<i64>()
        .map_err(|_| ApplicationError::invalid_identifier(raw))?;
    CommentId::new(id).map_err(|_| ApplicationError::invalid_identifier(raw))
}

/// A field that must be present and string-typed. Absent fields count as the
/// wrong type, matching how an untyped payload reads.
pub fn require_string<'v>(field: &str, value: Option<&'v Value>) -> ApplicationResult<&'v str> {
    match value {
        Some(Value::String(s)) => Ok(s),
        _ => Err(ApplicationError::wrong_type(format!(
            "{field} must be a string"
        ))),
    }
}

/// A field that must be present at all; absence is a `BadRequest`.
pub fn require_present<'v>(field: &str, value: Option<&'v Value>) -> ApplicationResult<&'v Value> {
    value.ok_or_else(|| ApplicationError::bad_request(format!("{field} is required")))
}

/// A present field that must carry an integer.
pub fn require_integer(field: &str, value: &Value) -> ApplicationResult<i64> {
    value
        .as_i64()
        .ok_or_else(|| ApplicationError::wrong_type(format!("{field} must be a number")))
}
