/// Release era buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    /// 2020 and later
    New,
    /// 2000 through 2019
    Modern,
    /// Before 2000
    Old,
    Anytime,
}

impl Era {
    /// Parses a normalized era name; unknown names yield `None`
    pub fn parse(era: &str) -> Option<Self> {
        match era {
            "new" => Some(Era::New),
            "modern" => Some(Era::Modern),
            "old" => Some(Era::Old),
            "anytime" => Some(Era::Anytime),
            _ => None,
        }
    }

    pub fn contains(self, year: u32) -> bool {
        match self {
            Era::New => year >= 2020,
            Era::Modern => (2000..=2019).contains(&year),
            Era::Old => year < 2000,
            Era::Anytime => true,
        }
    }
}

/// Pulls a year out of loosely formatted text
///
/// All ASCII digits in the text are concatenated and the first four are
/// taken. Digits from unrelated parts of the text count too, so "Ep 12 (2019)"
/// reads as 1220.
pub fn parse_first_year(year_text: &str) -> Option<u32> {
    let digits: String = year_text.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
    if digits.len() < 4 {
        return None;
    }
    digits.parse().ok()
}

/// Whether the year text falls into the named era
///
/// Text without a year, "anytime", and unknown era names always match.
pub fn era_matches(year_text: &str, era: &str) -> bool {
    if era == "anytime" {
        return true;
    }
    let Some(year) = parse_first_year(year_text) else {
        return true;
    };
    match Era::parse(era) {
        Some(bucket) => bucket.contains(year),
        None => true,
    }
}
