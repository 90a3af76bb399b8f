use crate::models::{Country, QueryResult, SearchMode};
use crate::normalize::normalize;

/// Search countries by name.
///
/// An empty (or whitespace only) query cancels the search instead of
/// matching nothing. Results keep dataset order.
pub fn search_by_name(countries: &[Country], query: &str, mode: SearchMode) -> QueryResult {
    let needle = normalize(query.trim());
    if needle.is_empty() {
        return QueryResult::cancelled();
    }

    let matches: Vec<Country> = countries
        .iter()
        .filter(|country| matches_name(country, &needle, mode))
        .cloned()
        .collect();

    tracing::debug!(query, ?mode, matches = matches.len(), "name search");
    QueryResult::ok(matches)
}

/// Check a country against an already normalized needle
fn matches_name(country: &Country, needle: &str, mode: SearchMode) -> bool {
    let name = normalize(&country.name);
    match mode {
        SearchMode::Exact => name == needle,
        SearchMode::Partial => name.contains(needle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;

    fn sample() -> Vec<Country> {
        vec![
            Country::new("Argentina", 45_376_763, 2_780_400, "América"),
            Country::new("España", 47_450_795, 505_990, "Europa"),
            Country::new("EEUU", 331_893_745, 9_833_520, "América"),
        ]
    }

    #[test]
    fn exact_requires_full_match() {
        let result = search_by_name(&sample(), "Argentin", SearchMode::Exact);
        assert_eq!(result.outcome, Outcome::Ok);
        assert!(result.countries.is_empty());
    }

    #[test]
    fn partial_matches_substring() {
        let result = search_by_name(&sample(), "Argentin", SearchMode::Partial);
        assert_eq!(result.outcome, Outcome::Ok);
        assert_eq!(result.countries.len(), 1);
        assert_eq!(result.countries[0].name, "Argentina");
    }

    #[test]
    fn ignores_accents_and_case() {
        let result = search_by_name(&sample(), "ESPANA", SearchMode::Exact);
        assert_eq!(result.countries.len(), 1);
        assert_eq!(result.countries[0].name, "España");
    }

    #[test]
    fn empty_query_is_cancelled() {
        let result = search_by_name(&sample(), "   ", SearchMode::Partial);
        assert_eq!(result.outcome, Outcome::Cancelled);
        assert!(result.countries.is_empty());
    }

    #[test]
    fn keeps_dataset_order() {
        let result = search_by_name(&sample(), "a", SearchMode::Partial);
        let names: Vec<_> = result.countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Argentina", "España"]);
    }

    #[test]
    fn duplicates_are_distinct_entries() {
        let mut countries = sample();
        countries.push(Country::new("Argentina", 1, 1, "América"));
        let result = search_by_name(&countries, "argentina", SearchMode::Exact);
        assert_eq!(result.countries.len(), 2);
    }
}
