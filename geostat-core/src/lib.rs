// Public modules
pub mod error;
pub mod filtering;
pub mod io;
pub mod models;
pub mod normalize;
pub mod searching;
pub mod sorting;
pub mod statistics;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{DatasetError, RowError};
pub use filtering::{filter_by_continent, filter_by_range, matches_range};
pub use io::{
    default_countries, load_dataset, load_or_create, parse_dataset, render_dataset, save_dataset,
    LoadReport, SkippedRow,
};
pub use models::{
    Bound, ContinentCount, Country, InvalidInput, Outcome, QueryResult, RangeField, SearchMode,
    SortDirection, SortKey, Stats, StatsResult,
};
pub use normalize::{normalize, normalize_opt};
pub use searching::search_by_name;
pub use sorting::{compare_countries, sort_countries};
pub use statistics::{compute_statistics, count_by_continent};
pub use validation::{validate_row, ColumnLayout};
