//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Operation failures fall into three kinds (validation, not found, storage), and each
//! kind carries enough context to produce a specific message for the user.

use crate::domain::ValidationError;
use std::io;
use thiserror::Error;

/// Errors raised by the persisted contact store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store file exists but could not be read
    #[error("failed to read contacts from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The store file is not a JSON array of contacts
    #[error("failed to parse contacts in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The contacts could not be serialized
    #[error("failed to serialize contacts: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The replacement file could not be written or moved into place
    #[error("failed to write contacts to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Errors returned by the contact book operations.
#[derive(Error, Debug)]
pub enum ContactBookError {
    /// The candidate contact failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact has the requested id
    #[error("Contact with id - \"{0}\" was not found")]
    NotFound(String),

    /// The store could not be read or written
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Coarse classification of a [`ContactBookError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

impl ContactBookError {
    /// Which of the three failure kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
