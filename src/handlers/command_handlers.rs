use anyhow::{Context, Result};
use geostat_core::{Outcome, QueryResult, StatsResult};
use std::io::Write;

use crate::ui::{format_country_table, format_outcome, format_stats};

/// Exit status for a query that was rejected as invalid
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Write a query result as a table (or JSON) and pick the exit status
pub fn print_query_result<W: Write>(
    out: &mut W,
    result: &QueryResult,
    action: &str,
    json: bool,
) -> Result<i32> {
    if json {
        let text =
            serde_json::to_string_pretty(result).context("failed to serialize query result")?;
        writeln!(out, "{}", text)?;
    } else {
        match format_outcome(&result.outcome, action) {
            Some(message) => writeln!(out, "{}", message)?,
            None => write!(out, "{}", format_country_table(&result.countries))?,
        }
    }

    Ok(exit_status(&result.outcome))
}

/// Write statistics as a summary (or JSON) and pick the exit status
pub fn print_stats_result<W: Write>(out: &mut W, result: &StatsResult, json: bool) -> Result<i32> {
    if json {
        let text = serde_json::to_string_pretty(result).context("failed to serialize statistics")?;
        writeln!(out, "{}", text)?;
    } else if let Some(stats) = &result.stats {
        write!(out, "{}", format_stats(stats))?;
    } else if let Some(message) = format_outcome(&result.outcome, "Statistics") {
        writeln!(out, "{}", message)?;
    }

    Ok(exit_status(&result.outcome))
}

fn exit_status(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::InvalidInput(_) => EXIT_INVALID_INPUT,
        _ => 0,
    }
}
