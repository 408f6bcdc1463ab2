//! Persistence helpers

use std::fs;
use std::path::Path;

use super::{PersistenceError, PersistenceResult};
use crate::constants::persistence_constants::TEMP_SUFFIX;

/// Create a corrupted data error
pub fn corrupted_data(reason: impl Into<String>) -> PersistenceError {
    PersistenceError::CorruptedData(reason.into())
}

/// Write `data` to a temporary sibling, then rename it over `path`.
///
/// A crash mid-write leaves the previous file intact.
pub fn atomic_write(path: &Path, data: &[u8]) -> PersistenceResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension(TEMP_SUFFIX);
    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
