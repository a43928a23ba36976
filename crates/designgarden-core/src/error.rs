//! Error types for Design Garden

use thiserror::Error;

/// Main error type for Design Garden operations
#[derive(Error, Debug)]
pub enum GardenError {
    /// Error during storage operations
    #[error("Storage error: {0}")]
    Storage(String),

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

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No palette with this name exists in the catalog
    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    /// No font pairing with this name exists in the catalog
    #[error("Unknown font pairing: {0}")]
    UnknownFontPairing(String),
}

/// Result type alias using GardenError
pub type GardenResult<T> = Result<T, GardenError>;
