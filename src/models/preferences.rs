use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::services::normalize::normalize;

/// Soft preferences for a single recommendation query
///
/// Every field may be empty, which disables the matching rule. Genres, type
/// and era are stored normalized; mood is kept raw because keyword matching
/// normalizes it on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreferenceSet {
    /// Desired genres; non-empty also acts as a hard eligibility filter
    pub genres: BTreeSet<String>,
    /// Desired format ("movie", "tv", "both", or free text)
    #[serde(rename = "type")]
    pub content_type: String,
    /// Desired era ("new", "modern", "old", "anytime")
    pub era: String,
    /// Free-text mood such as "dark and mysterious"
    pub mood: String,
}

impl PreferenceSet {
    pub fn new<I, S>(genres: I, content_type: &str, era: &str, mood: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            genres: genres
                .into_iter()
                .map(|g| normalize(g.as_ref()))
                .filter(|g| !g.is_empty())
                .collect(),
            content_type: normalize(content_type),
            era: normalize(era),
            mood: mood.to_string(),
        }
    }

    /// Splits a comma-separated genre list as sent in a query string
    pub fn split_genres(raw: &str) -> Vec<String> {
        normalize(raw)
            .split(',')
            .map(normalize)
            .filter(|g| !g.is_empty())
            .collect()
    }
}
