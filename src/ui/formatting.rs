use colored::Colorize;
use geostat_core::{Country, Outcome, Stats};

const RULE_WIDTH: usize = 74;

/// Group digits in threes: 45376763 -> "45,376,763"
pub fn format_thousands(value: impl Into<u128>) -> String {
    let digits = value.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Two decimals with grouped thousands: 76762254.333 -> "76,762,254.33"
pub fn format_decimal(value: f64) -> String {
    let cents = (value.max(0.0) * 100.0).round() as u128;
    format!("{}.{:02}", format_thousands(cents / 100), cents % 100)
}

/// Render countries as a table, or a notice when there are none
pub fn format_country_table(countries: &[Country]) -> String {
    if countries.is_empty() {
        return format!("{}\n", "No countries matched the criteria.".yellow());
    }

    let header = format!(
        "{:<20} | {:<15} | {:<18} | {:<15}",
        "Name", "Population", "Area (km²)", "Continent"
    );
    let rule = "-".repeat(RULE_WIDTH);

    let mut lines = vec![header.bold().to_string(), rule.clone()];
    lines.extend(countries.iter().map(format_country_row));
    lines.push(rule);
    lines.push(format!("Total countries shown: {}", countries.len()));

    lines.join("\n") + "\n"
}

fn format_country_row(country: &Country) -> String {
    format!(
        "{:<20} | {:<15} | {:<18} | {:<15}",
        country.name,
        format_thousands(country.population),
        format_thousands(country.area),
        country.continent
    )
}

/// Render the statistics summary
pub fn format_stats(stats: &Stats) -> String {
    let mut lines = vec![
        "Global Statistics".bold().to_string(),
        String::new(),
        "[Population]".cyan().to_string(),
        format!(
            "Most populous: {} ({})",
            stats.most_populous.name,
            format_thousands(stats.most_populous.population)
        ),
        format!(
            "Least populous: {} ({})",
            stats.least_populous.name,
            format_thousands(stats.least_populous.population)
        ),
        format!("Average population: {} inhabitants", format_decimal(stats.average_population)),
        String::new(),
        "[Area]".cyan().to_string(),
        format!("Average area: {} km²", format_decimal(stats.average_area)),
        String::new(),
        "[Continents]".cyan().to_string(),
        format!("Countries per continent ({} total):", stats.total),
    ];

    lines.extend(
        stats
            .continent_counts
            .iter()
            .map(|c| format!("- {}: {}", c.continent, c.count)),
    );
    lines.push("-".repeat(30));

    lines.join("\n") + "\n"
}

/// Message for a query that did not run to completion.
/// `None` for `Outcome::Ok`, where the results speak for themselves.
pub fn format_outcome(outcome: &Outcome, action: &str) -> Option<String> {
    match outcome {
        Outcome::Ok => None,
        Outcome::Cancelled => Some(format!("{} cancelled.", action).yellow().to_string()),
        Outcome::InvalidInput(reason) => {
            Some(format!("Invalid input: {}.", reason).red().to_string())
        }
        Outcome::NoData => Some(format!("{}: no data loaded.", action).yellow().to_string()),
    }
}
