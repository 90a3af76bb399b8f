use crate::models::{ContinentCount, Country, Outcome, Stats, StatsResult};

/// Summarize the dataset: population extrema, mean population and area,
/// and the number of countries per continent.
///
/// An empty dataset reports `NoData` and produces no `Stats`.
pub fn compute_statistics(countries: &[Country]) -> StatsResult {
    let (Some(most_populous), Some(least_populous)) =
        (most_populous(countries), least_populous(countries))
    else {
        return StatsResult {
            stats: None,
            outcome: Outcome::NoData,
        };
    };

    let total = countries.len();
    let population_sum: u128 = countries.iter().map(|c| u128::from(c.population)).sum();
    let area_sum: u128 = countries.iter().map(|c| u128::from(c.area)).sum();

    let stats = Stats {
        total,
        most_populous: most_populous.clone(),
        least_populous: least_populous.clone(),
        average_population: population_sum as f64 / total as f64,
        average_area: area_sum as f64 / total as f64,
        continent_counts: count_by_continent(countries),
    };

    StatsResult {
        stats: Some(stats),
        outcome: Outcome::Ok,
    }
}

/// Count countries per continent.
///
/// Groups by the literal continent string, so "Europa" and "Europa/Asia"
/// are separate buckets. Buckets come out in first-seen order.
pub fn count_by_continent(countries: &[Country]) -> Vec<ContinentCount> {
    let mut counts: Vec<ContinentCount> = Vec::new();

    for country in countries {
        match counts.iter_mut().find(|c| c.continent == country.continent) {
            Some(entry) => entry.count += 1,
            None => counts.push(ContinentCount {
                continent: country.continent.clone(),
                count: 1,
            }),
        }
    }

    counts
}

// Ties go to the first occurrence. `Iterator::max_by_key` would return the last.
fn most_populous(countries: &[Country]) -> Option<&Country> {
    countries
        .iter()
        .reduce(|best, c| if c.population > best.population { c } else { best })
}

fn least_populous(countries: &[Country]) -> Option<&Country> {
    countries
        .iter()
        .reduce(|best, c| if c.population < best.population { c } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_data() {
        let result = compute_statistics(&[]);
        assert_eq!(result.outcome, Outcome::NoData);
        assert!(result.stats.is_none());
    }

    #[test]
    fn summary_of_three_countries() {
        let countries = vec![
            Country::new("Argentina", 45_376_763, 2_780_400, "América"),
            Country::new("Japón", 125_800_000, 377_975, "Asia"),
            Country::new("Italia", 59_110_000, 301_340, "Europa"),
        ];

        let result = compute_statistics(&countries);
        assert_eq!(result.outcome, Outcome::Ok);
        let stats = result.stats.expect("stats for non-empty input");

        assert_eq!(stats.total, 3);
        assert_eq!(stats.most_populous.name, "Japón");
        assert_eq!(stats.least_populous.name, "Argentina");
        let expected = (45_376_763.0 + 125_800_000.0 + 59_110_000.0) / 3.0;
        assert!((stats.average_population - expected).abs() < 1e-6);
        assert!((stats.average_population - 76_762_254.33).abs() < 0.01);
        let expected_area = (2_780_400.0 + 377_975.0 + 301_340.0) / 3.0;
        assert!((stats.average_area - expected_area).abs() < 1e-6);

        let continents: Vec<_> = stats
            .continent_counts
            .iter()
            .map(|c| (c.continent.as_str(), c.count))
            .collect();
        assert_eq!(continents, [("América", 1), ("Asia", 1), ("Europa", 1)]);
    }

    #[test]
    fn ties_resolve_to_first_occurrence() {
        let countries = vec![
            Country::new("A", 10, 1, "X"),
            Country::new("B", 30, 1, "X"),
            Country::new("C", 10, 1, "X"),
            Country::new("D", 30, 1, "X"),
        ];

        let stats = compute_statistics(&countries).stats.expect("stats");
        assert_eq!(stats.most_populous.name, "B");
        assert_eq!(stats.least_populous.name, "A");
    }

    #[test]
    fn continents_group_by_literal_value() {
        let countries = vec![
            Country::new("Italia", 1, 1, "Europa"),
            Country::new("Rusia", 1, 1, "Europa/Asia"),
            Country::new("España", 1, 1, "Europa"),
            Country::new("Perú", 1, 1, "america"),
            Country::new("México", 1, 1, "América"),
        ];

        let counts = count_by_continent(&countries);
        let pairs: Vec<_> = counts.iter().map(|c| (c.continent.as_str(), c.count)).collect();
        assert_eq!(
            pairs,
            [("Europa", 2), ("Europa/Asia", 1), ("america", 1), ("América", 1)]
        );
    }

    #[test]
    fn single_country_is_both_extrema() {
        let countries = vec![Country::new("Italia", 59_110_000, 301_340, "Europa")];
        let stats = compute_statistics(&countries).stats.expect("stats");
        assert_eq!(stats.most_populous, stats.least_populous);
        assert_eq!(stats.average_area, 301_340.0);
    }
}
