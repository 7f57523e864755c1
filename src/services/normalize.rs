/// Trims surrounding whitespace and lowercases, so all comparisons are
/// case and whitespace insensitive
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Same as [`normalize`], with an absent value becoming the empty string
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
