use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::services::normalize::normalize;

/// A single recommendable movie or series from the featured catalog
///
/// Only the fields the engine reads are typed; everything else in the
/// source record (title, poster, ids, ...) rides along in `extra` and is
/// serialized back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Genre labels, arbitrary case
    #[serde(default, deserialize_with = "lenient_genres")]
    pub genres: Vec<String>,

    /// Format label such as "movie" or "tv series", free text
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,

    /// Loosely formatted release year or date range
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogEntry {
    pub fn new(genres: &[&str], kind: &str, year: &str) -> Self {
        Self {
            genres: genres.iter().map(|g| g.to_string()).collect(),
            kind: kind.to_string(),
            year: year.to_string(),
            extra: Map::new(),
        }
    }

    /// Adds an untyped field that is carried through to the response
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    /// Genres after normalization, deduplicated and sorted
    pub fn normalized_genres(&self) -> BTreeSet<String> {
        self.genres.iter().map(|g| normalize(g)).collect()
    }

    pub fn normalized_kind(&self) -> String {
        normalize(&self.kind)
    }
}

/// The read-only featured catalog, loaded once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Strings pass through, numbers become their decimal text, anything else is empty
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_genres<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    })
}
