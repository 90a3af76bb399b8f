use geostat_core::RangeField;
use std::io::{self, BufRead, Write};

use super::query_handlers::{
    handle_continent_filter, handle_list, handle_range_filter, handle_search, handle_sort,
    handle_statistics,
};
use crate::state::AppState;
use crate::ui::Console;

const MAIN_MENU: &str = "\n--- Country Data Management ---\n\
1. Search country by name\n\
2. Filter countries (continent, population or area)\n\
3. Sort countries (name, population or area)\n\
4. Show statistics\n\
5. Show all loaded countries\n\
0. Exit";

const FILTER_MENU: &str = "\n--- Filters ---\n\
1. Filter by continent\n\
2. Filter by population range\n\
3. Filter by area range\n\
0. Back to main menu";

/// Run the main menu until the user exits or input runs out
pub fn run_main_menu<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        console.println(MAIN_MENU)?;
        let option = console.prompt("Select an option (0-5): ")?;
        if console.at_eof() {
            break;
        }

        match option.as_str() {
            "1" => handle_search(state, console)?,
            "2" => run_filter_menu(state, console)?,
            "3" => handle_sort(state, console)?,
            "4" => handle_statistics(state, console)?,
            "5" => handle_list(state, console)?,
            "0" => {
                console.println("Goodbye!")?;
                break;
            }
            other => {
                tracing::debug!(option = other, "unknown main menu option");
                console.println("Invalid option. Please try again.")?;
            }
        }
    }

    Ok(())
}

/// Filter submenu; returns to the main menu on '0'
pub fn run_filter_menu<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        console.println(FILTER_MENU)?;
        let option = console.prompt("Select a filter option: ")?;
        if console.at_eof() {
            break;
        }

        match option.as_str() {
            "1" => handle_continent_filter(state, console)?,
            "2" => handle_range_filter(state, console, RangeField::Population)?,
            "3" => handle_range_filter(state, console, RangeField::Area)?,
            "0" => break,
            _ => console.println("Invalid option. Please try again.")?,
        }
    }

    Ok(())
}
