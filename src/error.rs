//! Crate-level error type and `Result` alias.
//! Covers table loading (I/O, JSON), help rendering and descriptor table
//! validation. Parse anomalies are not errors; they are reported through
//! [`crate::types::Fetch`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid option table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate option identifier: '{identifier}'")]
    DuplicateIdentifier { identifier: char },

    #[error("Short form '-{short}' is declared by more than one option")]
    DuplicateShortForm { short: char },

    #[error("Long form '--{long}' is declared by more than one option")]
    DuplicateLongForm { long: String },

    #[error("Invalid short form {short:?} on option '{identifier}'")]
    InvalidShortForm { identifier: char, short: char },

    #[error("Invalid long form {long:?} on option '{identifier}'")]
    InvalidLongForm { identifier: char, long: String },

    #[error("Option '{identifier}' has neither a short nor a long form")]
    Unreachable { identifier: char },
}
