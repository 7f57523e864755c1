use std::sync::Arc;

use crate::models::Catalog;

/// Shared application state
///
/// The catalog never changes after startup, so handlers read it without
/// any locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
