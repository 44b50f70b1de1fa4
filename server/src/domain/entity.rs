//! Domain Layer - Core Entity Trait
//!
//! Basic contract for records kept in a store file.

use std::path::PathBuf;

use thiserror::Error;

/// Core trait for all stored entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;
}

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("wish not found")]
    NotFound,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt store file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
