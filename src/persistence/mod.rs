//! World save and load
//!
//! The save file is a flat bincode-encoded list of `(x, y, kind)` records.
//! Particles and entities are not persisted.

pub mod error;
pub mod world_save;

pub use error::{atomic_write, corrupted_data};
pub use world_save::{load_or_generate, load_world, save_world, BlockRecord};

use thiserror::Error;

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Corrupted data: {0}")]
    CorruptedData(String),
}

impl From<bincode::Error> for PersistenceError {
    fn from(err: bincode::Error) -> Self {
        PersistenceError::Serialization(err.to_string())
    }
}
