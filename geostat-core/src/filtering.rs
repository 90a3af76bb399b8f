use crate::models::{Bound, Country, InvalidInput, QueryResult, RangeField};
use crate::normalize::normalize;

/// Keep the countries on the given continent.
///
/// Comparison is normalized equality, so "america" matches "América" but
/// "Europa" does not match "Europa/Asia".
pub fn filter_by_continent(countries: &[Country], continent: &str) -> QueryResult {
    let wanted = normalize(continent.trim());
    if wanted.is_empty() {
        return QueryResult::cancelled();
    }

    let matches: Vec<Country> = countries
        .iter()
        .filter(|country| normalize(&country.continent) == wanted)
        .cloned()
        .collect();

    tracing::debug!(continent, matches = matches.len(), "continent filter");
    QueryResult::ok(matches)
}

/// Keep the countries whose `field` lies within `min..=max`.
///
/// A cancelled bound aborts the whole filter. Inverted bounds are rejected,
/// never swapped.
pub fn filter_by_range(
    countries: &[Country],
    field: RangeField,
    min: Bound,
    max: Bound,
) -> QueryResult {
    let (min, max) = match (min, max) {
        (Bound::Value(min), Bound::Value(max)) => (min, max),
        _ => return QueryResult::cancelled(),
    };

    if min > max {
        return QueryResult::invalid(InvalidInput::InvertedRange { min, max });
    }

    let matches: Vec<Country> = countries
        .iter()
        .filter(|country| matches_range(country, field, min, max))
        .cloned()
        .collect();

    tracing::debug!(%field, min, max, matches = matches.len(), "range filter");
    QueryResult::ok(matches)
}

/// Inclusive on both ends
pub fn matches_range(country: &Country, field: RangeField, min: u64, max: u64) -> bool {
    (min..=max).contains(&country.field(field))
}
