//! Error types for the todo service.
//!
//! # Design
//! `StoreError` describes what went wrong at the storage layer. `TodoError` is
//! what an operation reports to its caller, and its `Display` text is the
//! message put on the wire. Several storage failures deliberately collapse
//! into one caller-facing kind: a missing file, an unreadable file and a file
//! that does not decode all read as "no records found".

use std::io;

use thiserror::Error;

/// A line of the records file that is not a JSON object.
#[derive(Debug, Error)]
#[error("line {line} is not a JSON object: {source}")]
pub struct DecodeError {
    /// 1-based line number.
    pub line: usize,
    #[source]
    pub source: serde_json::Error,
}

/// Failures raised by a `TodoStore` backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The records could not be read, or a record could not be appended.
    #[error("records unavailable: {0}")]
    Unavailable(#[source] io::Error),

    /// The records were read but could not be decoded.
    #[error("records file is corrupt: {0}")]
    Corrupt(#[from] DecodeError),

    /// Rewriting the full record set failed.
    #[error("failed to rewrite records: {0}")]
    Write(#[source] io::Error),
}

/// Errors returned by `TodoService` operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Creation-time validation failed; carries the rendered reasons.
    #[error("{0}")]
    MissingOrInvalidField(String),

    /// The store is absent, unreadable or empty.
    #[error("no records found")]
    RecordsUnavailable,

    /// No record (or more than one record) carries the requested id.
    #[error("invalid id or object does not exist")]
    RecordNotFound,

    /// Persisting the record set after an update or delete failed.
    #[error("error updating file")]
    WriteFailure,

    /// The request body could not be parsed.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl From<StoreError> for TodoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(_) | StoreError::Corrupt(_) => TodoError::RecordsUnavailable,
            StoreError::Write(_) => TodoError::WriteFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_messages() {
        assert_eq!(TodoError::RecordsUnavailable.to_string(), "no records found");
        assert_eq!(
            TodoError::RecordNotFound.to_string(),
            "invalid id or object does not exist"
        );
        assert_eq!(TodoError::WriteFailure.to_string(), "error updating file");
        assert_eq!(
            TodoError::MissingOrInvalidField("Missing fields: title".into()).to_string(),
            "Missing fields: title"
        );
    }

    #[test]
    fn store_errors_collapse_into_caller_kinds() {
        let missing = StoreError::Unavailable(io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(TodoError::from(missing), TodoError::RecordsUnavailable));

        let denied = StoreError::Write(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(TodoError::from(denied), TodoError::WriteFailure));

        let corrupt = crate::codec::decode("nope\n").unwrap_err();
        assert!(matches!(
            TodoError::from(StoreError::from(corrupt)),
            TodoError::RecordsUnavailable
        ));
    }
}
