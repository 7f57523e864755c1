use serde::Serialize;

use super::CatalogEntry;

/// One ranked catalog entry with its score and the reasons behind it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredResult<'a> {
    pub score: i32,
    /// Reasons in rule order: genre, format, mood, era
    pub reasons: Vec<String>,
    #[serde(rename = "movie")]
    pub entry: &'a CatalogEntry,
}
