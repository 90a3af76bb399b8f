use geostat_core::*;
use std::io::{self, BufRead, Write};

use crate::operations::{parse_count_input, CountInput};
use crate::state::AppState;
use crate::ui::{format_country_table, format_outcome, format_stats, Console};

/// Print a query result: the outcome message if it did not run, the table otherwise
pub fn show_query_result<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: &QueryResult,
    action: &str,
) -> io::Result<()> {
    match format_outcome(&result.outcome, action) {
        Some(message) => console.println(&message),
        None => console.print(&format_country_table(&result.countries)),
    }
}

/// Print a notice and return false when there is nothing to query
fn require_data<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
    action: &str,
) -> io::Result<bool> {
    if state.has_data() {
        return Ok(true);
    }
    console.println(&format!("No data loaded to {}.", action))?;
    Ok(false)
}

/// Search countries by exact or partial name
pub fn handle_search<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if !require_data(state, console, "search")? {
        return Ok(());
    }

    let query = console.prompt("Enter the country name to search: ")?;
    if normalize(&query).trim().is_empty() {
        return show_query_result(console, &QueryResult::cancelled(), "Search");
    }

    let mode = console.prompt("Exact (E) or partial (P) match?: ")?;
    let result = match mode.parse::<SearchMode>() {
        Ok(mode) => search_by_name(&state.countries, &query, mode),
        Err(reason) => QueryResult::invalid(reason),
    };

    show_query_result(console, &result, "Search")
}

pub fn handle_continent_filter<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if !require_data(state, console, "filter")? {
        return Ok(());
    }

    let continent = console.prompt("Enter the continent name: ")?;
    let result = filter_by_continent(&state.countries, &continent);
    show_query_result(console, &result, "Filter")
}

/// Ask for a min/max pair and filter on `field`.
/// Cancelling the minimum skips the maximum prompt.
pub fn handle_range_filter<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
    field: RangeField,
) -> io::Result<()> {
    if !require_data(state, console, "filter")? {
        return Ok(());
    }

    console.println(&format!("Enter the {} range (type 'c' to cancel).", field))?;

    let min_label = format!("minimum {}", field);
    let min = read_bound(console, &min_label, &format!("Minimum {} (e.g. 0): ", field))?;
    let max = match min {
        Bound::Cancelled => Bound::Cancelled,
        Bound::Value(_) => {
            let max_label = format!("maximum {}", field);
            read_bound(console, &max_label, &format!("Maximum {}: ", field))?
        }
    };

    let result = filter_by_range(&state.countries, field, min, max);
    show_query_result(console, &result, "Filter")
}

/// Prompt until a valid count or 'c' is entered
pub fn read_bound<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
    message: &str,
) -> io::Result<Bound> {
    loop {
        let input = console.prompt(message)?;
        if console.at_eof() {
            return Ok(Bound::Cancelled);
        }

        match parse_count_input(label, &input) {
            Ok(CountInput::Value(value)) => return Ok(Bound::Value(value)),
            Ok(CountInput::Cancel) => return Ok(Bound::Cancelled),
            Err(err) => console.println(&format!("Error: {}", err))?,
        }
    }
}

pub fn handle_sort<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if !require_data(state, console, "sort")? {
        return Ok(());
    }

    console.println("Sort by:")?;
    console.println("1. Name")?;
    console.println("2. Population")?;
    console.println("3. Area")?;

    let key = match console.prompt("Option (1-3): ")?.parse::<SortKey>() {
        Ok(key) => key,
        Err(reason) => return show_query_result(console, &QueryResult::invalid(reason), "Sort"),
    };

    let result = match console
        .prompt("Ascending (A) or descending (D)?: ")?
        .parse::<SortDirection>()
    {
        Ok(direction) => sort_countries(&state.countries, key, direction),
        Err(reason) => QueryResult::invalid(reason),
    };

    show_query_result(console, &result, "Sort")
}

pub fn handle_statistics<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let result = compute_statistics(&state.countries);

    match (&result.stats, format_outcome(&result.outcome, "Statistics")) {
        (Some(stats), None) => console.print(&format_stats(stats)),
        (_, Some(message)) => console.println(&message),
        (None, None) => Ok(()),
    }
}

pub fn handle_list<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.print(&format_country_table(&state.countries))
}
