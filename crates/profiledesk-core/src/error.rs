//! Error types for Profile Desk

use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for store and storage operations
#[derive(Error, Debug)]
pub enum ProfileError {
    /// No user is signed in
    #[error("No active session")]
    NoSession,

    /// Address id does not belong to the current user
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Input rejected before reaching storage
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Compaction error
    #[error("Compaction error: {0}")]
    Compaction(#[from] redb::CompactionError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ProfileError
pub type ProfileResult<T> = Result<T, ProfileError>;
