//! Crate-wide error type
//!
//! Subsystems keep their own error enums; this one wraps them at the
//! boundaries where several subsystems meet (session start-up and shutdown).

use crate::config::ConfigError;
use crate::persistence::PersistenceError;

/// Result type for engine-level operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by engine-level operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("configuration failed: {0}")]
    Config(#[from] ConfigError),
}
