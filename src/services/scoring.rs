use std::collections::BTreeSet;

use crate::models::{CatalogEntry, PreferenceSet};

use super::era::era_matches;
use super::mood::extract_mood_genres;

const GENRE_POINTS: i32 = 3;
const FORMAT_POINTS: i32 = 2;
const MOOD_POINTS: i32 = 2;
const ERA_POINTS: i32 = 1;

/// Relevance of one catalog entry against one preference set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    pub points: i32,
    pub reasons: Vec<String>,
}

/// The scoring rules, evaluated in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Genre,
    Format,
    Mood,
    Era,
}

pub const RULES: [Rule; 4] = [Rule::Genre, Rule::Format, Rule::Mood, Rule::Era];

/// Outcome of a rule that fired
#[derive(Debug, Clone, PartialEq, Eq)]
struct Adjustment {
    points: i32,
    reason: String,
}

impl Adjustment {
    fn new(points: i32, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: reason.into(),
        }
    }
}

impl Rule {
    /// Returns `None` when the rule is skipped or adds nothing
    fn evaluate(
        self,
        entry: &CatalogEntry,
        entry_genres: &BTreeSet<String>,
        prefs: &PreferenceSet,
    ) -> Option<Adjustment> {
        match self {
            Rule::Genre => {
                let overlap = overlap(&prefs.genres, entry_genres);
                (!overlap.is_empty()).then(|| {
                    Adjustment::new(
                        GENRE_POINTS * overlap.len() as i32,
                        format!("genre match: {}", overlap.join(", ")),
                    )
                })
            }
            Rule::Format => {
                let wanted = canonical_format(&prefs.content_type);
                if wanted.is_empty() || wanted == "both" {
                    return None;
                }
                Some(if entry.normalized_kind().contains(wanted) {
                    Adjustment::new(FORMAT_POINTS, "format match")
                } else {
                    Adjustment::new(-FORMAT_POINTS, "format mismatch")
                })
            }
            Rule::Mood => {
                let mood_genres = extract_mood_genres(&prefs.mood);
                let overlap = overlap(&mood_genres, entry_genres);
                (!overlap.is_empty()).then(|| {
                    Adjustment::new(
                        MOOD_POINTS * overlap.len() as i32,
                        format!("mood match: {}", overlap.join(", ")),
                    )
                })
            }
            Rule::Era => {
                if prefs.era.is_empty() || prefs.era == "anytime" {
                    return None;
                }
                Some(if era_matches(&entry.year, &prefs.era) {
                    Adjustment::new(ERA_POINTS, "era match")
                } else {
                    Adjustment::new(-ERA_POINTS, "era mismatch")
                })
            }
        }
    }
}

// Sorted, since BTreeSet iterates in order
fn overlap<'a>(wanted: &'a BTreeSet<String>, have: &BTreeSet<String>) -> Vec<&'a str> {
    wanted
        .iter()
        .filter(|genre| have.contains(*genre))
        .map(String::as_str)
        .collect()
}

/// Maps a normalized format preference onto "movie" or "tv" where it can;
/// anything else is returned as given
pub fn canonical_format(content_type: &str) -> &str {
    if content_type.contains("movie") {
        "movie"
    } else if matches!(content_type, "tv" | "tv series" | "series") {
        "tv"
    } else {
        content_type
    }
}

/// Scores an entry by running every rule in order and collecting the
/// reasons of the ones that fired
pub fn score(entry: &CatalogEntry, prefs: &PreferenceSet) -> Score {
    let entry_genres = entry.normalized_genres();

    RULES
        .iter()
        .filter_map(|rule| rule.evaluate(entry, &entry_genres, prefs))
        .fold(Score::default(), |mut acc, adjustment| {
            acc.points += adjustment.points;
            acc.reasons.push(adjustment.reason);
            acc
        })
}
