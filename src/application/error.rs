// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Malformed primary-key-shaped input (non-numeric or non-positive id).
    #[error("invalid id: {0}")]
    InvalidIdentifier(String),

    /// Sort key outside the allow-list.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Payload field has the wrong primitive type.
    #[error("wrong data type: {0}")]
    WrongType(String),

    /// Required field entirely absent.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Field present and string-typed but empty (comment writer).
    #[error("empty content: {0}")]
    EmptyContent(String),

    /// Field present and string-typed but empty (article writer).
    #[error("incomplete input: {0}")]
    IncompleteInput(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn wrong_type(msg: impl Into<String>) -> Self {
        Self::WrongType(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn empty_content(msg: impl Into<String>) -> Self {
        Self::EmptyContent(msg.into())
    }

    pub fn incomplete_input(msg: impl Into<String>) -> Self {
        Self::IncompleteInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
