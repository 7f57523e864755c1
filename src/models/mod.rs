mod catalog;
mod preferences;
mod recommendation;

pub use catalog::{Catalog, CatalogEntry};
pub use preferences::PreferenceSet;
pub use recommendation::ScoredResult;
