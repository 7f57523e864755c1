use crate::models::{CatalogEntry, PreferenceSet, ScoredResult};

use super::filter::is_eligible;
use super::scoring::{score, Score};

/// Filters the catalog by required genre, scores the survivors and orders
/// them by score, highest first
///
/// The sort is stable, so equal scores keep their catalog order.
pub fn rank<'a>(catalog: &'a [CatalogEntry], prefs: &PreferenceSet) -> Vec<ScoredResult<'a>> {
    let mut results: Vec<ScoredResult<'a>> = catalog
        .iter()
        .filter(|entry| is_eligible(entry, prefs))
        .map(|entry| {
            let Score { points, reasons } = score(entry, prefs);
            ScoredResult {
                score: points,
                reasons,
                entry,
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        catalog_size = catalog.len(),
        eligible = results.len(),
        "Ranked catalog"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new(&["Comedy"], "movie", "2015").with_field("title", "Laughs"),
            CatalogEntry::new(&["Action", "Drama"], "movie", "2021").with_field("title", "Blast"),
            CatalogEntry::new(&["Horror", "Crime"], "tv series", "1998").with_field("title", "Night"),
            CatalogEntry::new(&["Action"], "series", "N/A").with_field("title", "Reruns"),
        ]
    }

    fn titles(results: &[ScoredResult<'_>]) -> Vec<String> {
        results
            .iter()
            .map(|r| r.entry.extra["title"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_empty_preferences_return_catalog_in_order() {
        let catalog = catalog();
        let results = rank(&catalog, &PreferenceSet::default());

        assert_eq!(results.len(), catalog.len());
        assert_eq!(titles(&results), vec!["Laughs", "Blast", "Night", "Reruns"]);
        assert!(results.iter().all(|r| r.score == 0 && r.reasons.is_empty()));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(rank(&[], &PreferenceSet::new(["action"], "movie", "new", "dark")).is_empty());
    }

    #[test]
    fn test_genre_filter_then_score_order() {
        let catalog = catalog();
        let prefs = PreferenceSet::new(["action"], "movie", "new", "");
        let results = rank(&catalog, &prefs);

        // Blast: +3 +2 +1, Reruns: +3 -2 +1 (no year)
        assert_eq!(titles(&results), vec!["Blast", "Reruns"]);
        assert_eq!(results[0].score, 6);
        assert_eq!(
            results[0].reasons,
            vec!["genre match: action", "format match", "era match"]
        );
        assert_eq!(results[1].score, 2);
    }

    #[test]
    fn test_every_result_is_eligible() {
        let catalog = catalog();
        let prefs = PreferenceSet::new(["crime", "comedy"], "", "", "dark");
        let results = rank(&catalog, &prefs);

        assert!(results.len() <= catalog.len());
        assert!(results.iter().all(|r| is_eligible(r.entry, &prefs)));
        assert_eq!(titles(&results), vec!["Night", "Laughs"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            CatalogEntry::new(&["Drama"], "movie", "").with_field("title", "First"),
            CatalogEntry::new(&["Comedy"], "movie", "").with_field("title", "Loser"),
            CatalogEntry::new(&["Drama"], "movie", "").with_field("title", "Second"),
            CatalogEntry::new(&["Drama"], "movie", "").with_field("title", "Third"),
        ];
        let prefs = PreferenceSet::new(Vec::<String>::new(), "", "", "romantic");
        let results = rank(&catalog, &prefs);

        assert_eq!(titles(&results), vec!["First", "Second", "Third", "Loser"]);
        assert_eq!(results[3].score, 0);
    }

    #[test]
    fn test_negative_scores_sort_last() {
        let catalog = vec![
            CatalogEntry::new(&[], "series", "1980").with_field("title", "Old Show"),
            CatalogEntry::new(&[], "movie", "2022").with_field("title", "New Film"),
        ];
        let prefs = PreferenceSet::new(Vec::<String>::new(), "movies", "new", "");
        let results = rank(&catalog, &prefs);

        assert_eq!(titles(&results), vec!["New Film", "Old Show"]);
        assert_eq!(results[1].score, -3);
    }
}
