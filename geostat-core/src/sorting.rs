use crate::models::{Country, QueryResult, SortDirection, SortKey};
use crate::normalize::normalize;
use std::cmp::Ordering;

/// Sort countries into a new vector, leaving the input untouched.
///
/// The sort is stable in both directions: descending order flips the
/// comparator, so countries with equal keys keep their dataset order.
pub fn sort_countries(
    countries: &[Country],
    key: SortKey,
    direction: SortDirection,
) -> QueryResult {
    let mut sorted = countries.to_vec();

    sorted.sort_by(|a, b| {
        let ordering = compare_countries(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    tracing::debug!(%key, %direction, count = sorted.len(), "sorted countries");
    QueryResult::ok(sorted)
}

/// Ascending comparison on a single key.
/// Names compare in normalized form; numbers compare raw.
pub fn compare_countries(a: &Country, b: &Country, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => normalize(&a.name).cmp(&normalize(&b.name)),
        SortKey::Population => a.population.cmp(&b.population),
        SortKey::Area => a.area.cmp(&b.area),
    }
}
