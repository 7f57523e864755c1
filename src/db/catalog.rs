use std::path::Path;

use crate::{error::AppResult, models::Catalog};

/// Loads the featured catalog from a JSON array on disk
///
/// The catalog is read once at startup and shared read-only afterwards.
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Catalog> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to read catalog");
        e
    })?;

    let catalog: Catalog = serde_json::from_str(&raw)?;
    Ok(catalog)
}
