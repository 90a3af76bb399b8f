pub mod validation;

pub use validation::{parse_count_input, CountInput};
