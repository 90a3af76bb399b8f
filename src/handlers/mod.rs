pub mod command_handlers;
pub mod menu_handlers;
pub mod query_handlers;

pub use command_handlers::{print_query_result, print_stats_result};
pub use menu_handlers::run_main_menu;
