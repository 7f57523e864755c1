use std::collections::BTreeSet;

use super::normalize::normalize;

/// Mood keyword to associated genres
///
/// A keyword matches when it appears anywhere in the mood text, so one
/// phrase can pull in several keywords ("dark and mysterious").
pub const MOOD_LEXICON: &[(&str, &[&str])] = &[
    ("dark", &["Horror", "Crime", "Drama"]),
    ("mysterious", &["Horror", "Crime", "Sci-Fi"]),
    ("funny", &["Comedy"]),
    ("romantic", &["Romance", "Drama"]),
    ("action", &["Action"]),
    ("epic", &["Adventure", "Drama"]),
    ("hero", &["Action", "Adventure"]),
    ("scifi", &["Sci-Fi"]),
    ("sci-fi", &["Sci-Fi"]),
];

/// Genres implied by free-text mood, normalized for comparison against
/// normalized catalog genres
pub fn extract_mood_genres(mood_text: &str) -> BTreeSet<String> {
    let mood = normalize(mood_text);
    if mood.is_empty() {
        return BTreeSet::new();
    }

    MOOD_LEXICON
        .iter()
        .filter(|(keyword, _)| mood.contains(keyword))
        .flat_map(|(_, genres)| genres.iter().map(|g| normalize(g)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_multiple_keywords_union() {
        assert_eq!(
            extract_mood_genres("dark and mysterious"),
            set(&["crime", "drama", "horror", "sci-fi"])
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(extract_mood_genres("  FUNNY  "), set(&["comedy"]));
    }

    #[test]
    fn test_substring_match_inside_words() {
        // "superheroes" contains "hero"
        assert_eq!(
            extract_mood_genres("superheroes"),
            set(&["action", "adventure"])
        );
    }

    #[test]
    fn test_both_scifi_spellings() {
        assert_eq!(extract_mood_genres("scifi"), set(&["sci-fi"]));
        assert_eq!(extract_mood_genres("Sci-Fi please"), set(&["sci-fi"]));
    }

    #[test]
    fn test_unmatched_or_empty_is_empty() {
        assert!(extract_mood_genres("").is_empty());
        assert!(extract_mood_genres("cozy").is_empty());
    }
}
