mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use geostat_core::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use crate::errors::map_dataset_load_error;
use crate::handlers::{print_query_result, print_stats_result, run_main_menu};
use crate::state::AppState;
use crate::ui::Console;

/// Country dataset browser - search, filter, sort and summarize countries
///
/// Examples:
///   # Interactive menu over ./paises.csv (created with default data if missing)
///   geostat
///
///   # Partial, accent-insensitive name search
///   geostat search argentin
///
///   # Countries with 45 to 50 million inhabitants
///   geostat population --min 45000000 --max 50000000
///
///   # Largest countries first, as JSON
///   geostat --json sort --by area --order desc
#[derive(Parser, Debug)]
#[command(name = "geostat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Matching Rules:\n  \
    - Name and continent matching ignore case and accents\n  \
    - Continent filters require the whole continent name\n  \
    - Range bounds are inclusive; the minimum may not exceed the maximum\n\n\
Logging:\n  \
    - Set RUST_LOG (e.g. RUST_LOG=geostat_core=debug) or pass -v")]
struct Cli {
    /// Path to the country dataset (comma-delimited)
    #[arg(short, long = "data", value_name = "FILE", default_value = "paises.csv", global = true)]
    data: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default)
    Menu,

    /// Show every loaded country
    List,

    /// Search countries by name
    Search {
        /// Name or part of a name
        query: String,

        /// Match the whole name or any part of it
        #[arg(short, long, value_enum, default_value_t = ModeArg::Partial)]
        mode: ModeArg,
    },

    /// Countries on one continent
    Continent {
        /// Continent name (case and accent insensitive)
        name: String,
    },

    /// Countries within a population range
    Population {
        #[arg(long, value_name = "N")]
        min: u64,
        #[arg(long, value_name = "N")]
        max: u64,
    },

    /// Countries within an area range (km²)
    Area {
        #[arg(long, value_name = "N")]
        min: u64,
        #[arg(long, value_name = "N")]
        max: u64,
    },

    /// Sort countries
    Sort {
        #[arg(short, long, value_enum, default_value_t = KeyArg::Name)]
        by: KeyArg,

        #[arg(short, long, value_enum, default_value_t = OrderArg::Asc)]
        order: OrderArg,
    },

    /// Population extrema, averages and countries per continent
    Stats,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Exact,
    Partial,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KeyArg {
    Name,
    Population,
    Area,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exact => SearchMode::Exact,
            ModeArg::Partial => SearchMode::Partial,
        }
    }
}

impl From<KeyArg> for SortKey {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::Name => SortKey::Name,
            KeyArg::Population => SortKey::Population,
            KeyArg::Area => SortKey::Area,
        }
    }
}

impl From<OrderArg> for SortDirection {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => SortDirection::Ascending,
            OrderArg::Desc => SortDirection::Descending,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(status) => process::exit(status),
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            process::exit(1);
        }
    }
}

/// Logs go to stderr; RUST_LOG wins over -v
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(&cli.data),
        command => run_command(&cli.data, cli.json, command),
    }
}

/// Interactive session. A dataset that fails to load leaves the menu usable
/// with no countries.
fn run_menu(data: &Path) -> Result<i32> {
    let (state, load_error) = AppState::load_or_empty(data);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match load_error {
        Some(message) => writeln!(out, "{}", message.red())?,
        None => writeln!(out, "{}", state.load_summary())?,
    }
    if !state.has_data() {
        writeln!(
            out,
            "{}",
            "No countries could be loaded; queries will find nothing.".yellow()
        )?;
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), out);
    run_main_menu(&state, &mut console)?;
    Ok(0)
}

/// One-shot query; a dataset that fails to load is fatal
fn run_command(data: &Path, json: bool, command: Command) -> Result<i32> {
    let state = AppState::load(data).map_err(|err| {
        let (title, message) = map_dataset_load_error(&err, data);
        anyhow!("{}: {}", title, message)
    })?;
    let countries = &state.countries;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Menu => unreachable!("menu is handled by run_menu"),
        Command::List => {
            print_query_result(&mut out, &QueryResult::ok(countries.clone()), "List", json)
        }
        Command::Search { query, mode } => {
            let result = search_by_name(countries, &query, mode.into());
            print_query_result(&mut out, &result, "Search", json)
        }
        Command::Continent { name } => {
            let result = filter_by_continent(countries, &name);
            print_query_result(&mut out, &result, "Filter", json)
        }
        Command::Population { min, max } => {
            let result = filter_by_range(countries, RangeField::Population, min.into(), max.into());
            print_query_result(&mut out, &result, "Filter", json)
        }
        Command::Area { min, max } => {
            let result = filter_by_range(countries, RangeField::Area, min.into(), max.into());
            print_query_result(&mut out, &result, "Filter", json)
        }
        Command::Sort { by, order } => {
            let result = sort_countries(countries, by.into(), order.into());
            print_query_result(&mut out, &result, "Sort", json)
        }
        Command::Stats => print_stats_result(&mut out, &compute_statistics(countries), json),
    }
}
