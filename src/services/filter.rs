use crate::models::{CatalogEntry, PreferenceSet};

/// Hard genre gate applied before scoring
///
/// With no preferred genres every entry passes; otherwise the entry needs
/// at least one of them.
pub fn is_eligible(entry: &CatalogEntry, prefs: &PreferenceSet) -> bool {
    if prefs.genres.is_empty() {
        return true;
    }
    let entry_genres = entry.normalized_genres();
    !prefs.genres.is_disjoint(&entry_genres)
}
