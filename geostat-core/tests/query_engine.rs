use geostat_core::*;

fn dataset() -> Vec<Country> {
    parse_dataset(&render_dataset(&default_countries()))
        .expect("default dataset parses")
        .countries
}

#[test]
fn normalization_equivalences() {
    assert_eq!(normalize("América"), normalize("america"));
    assert_eq!(normalize("america"), normalize("AMÉRICA"));
    for country in dataset() {
        let once = normalize(&country.name);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn search_then_sort_then_summarize() {
    let countries = dataset();

    let americas = filter_by_continent(&countries, "america");
    assert_eq!(americas.outcome, Outcome::Ok);
    assert_eq!(americas.countries.len(), 4);

    let sorted = sort_countries(
        &americas.countries,
        SortKey::Population,
        SortDirection::Descending,
    );
    let names: Vec<_> = sorted.countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["EEUU", "México", "Colombia", "Argentina"]);

    let stats = compute_statistics(&sorted.countries).stats.expect("stats");
    assert_eq!(stats.most_populous.name, "EEUU");
    assert_eq!(stats.least_populous.name, "Argentina");
    assert_eq!(stats.continent_counts.len(), 1);
    assert_eq!(stats.continent_counts[0].count, 4);
}

#[test]
fn population_window_over_default_data() {
    let countries = dataset();
    let result = filter_by_range(
        &countries,
        RangeField::Population,
        Bound::Value(45_000_000),
        Bound::Value(50_000_000),
    );
    let names: Vec<_> = result.countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Argentina", "España"]);
}

#[test]
fn outcomes_stay_distinct() {
    let countries = dataset();

    assert_eq!(search_by_name(&countries, "", SearchMode::Exact).outcome, Outcome::Cancelled);
    assert_eq!(search_by_name(&countries, "Atlantis", SearchMode::Exact).outcome, Outcome::Ok);
    assert!(matches!(
        filter_by_range(&countries, RangeField::Area, Bound::Value(10), Bound::Value(1)).outcome,
        Outcome::InvalidInput(_)
    ));
    assert_eq!(compute_statistics(&[]).outcome, Outcome::NoData);

    let mode = "x".parse::<SearchMode>();
    let result = mode.map_or_else(QueryResult::invalid, |m| search_by_name(&countries, "Peru", m));
    assert_eq!(
        result.outcome,
        Outcome::InvalidInput(InvalidInput::UnknownSearchMode("x".to_string()))
    );
    assert!(result.countries.is_empty());
}

#[test]
fn default_statistics() {
    let stats = compute_statistics(&dataset()).stats.expect("stats");
    assert_eq!(stats.total, 9);
    assert_eq!(stats.most_populous.name, "EEUU");
    assert_eq!(stats.least_populous.name, "Argentina");

    let continents: Vec<_> = stats
        .continent_counts
        .iter()
        .map(|c| (c.continent.as_str(), c.count))
        .collect();
    assert_eq!(
        continents,
        [("América", 4), ("Europa/Asia", 1), ("Asia", 1), ("Europa", 3)]
    );
}
