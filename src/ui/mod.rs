pub mod console;
pub mod formatting;

pub use console::Console;
pub use formatting::{format_country_table, format_outcome, format_stats};
