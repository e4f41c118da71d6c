//! Storage-specific error types for the in-memory store.
//!
//! These errors are internal to the storage layer and are converted to
//! `finboard_core::Error` before being returned to callers.

use thiserror::Error;

use finboard_core::errors::{DatabaseError, Error};

/// Errors raised by the in-memory store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A lookup by id/category/symbol found no record.
    #[error("record not found: {0}")]
    NotFound(String),

    /// A record with the same unique key already exists.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    /// A collection lock was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(msg) => Error::Database(DatabaseError::NotFound(msg)),
            StorageError::Duplicate(msg) => Error::Database(DatabaseError::UniqueViolation(msg)),
            StorageError::Poisoned(msg) => Error::Database(DatabaseError::AccessFailed(msg)),
        }
    }
}
