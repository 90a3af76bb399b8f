use regex::Regex;
use std::sync::LazyLock;

/// Plain digits, or digits grouped in threes by '.', ',' or '_'
static COUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+|\d{1,3}([.,_]\d{3})+)$").expect("count pattern compiles")
});

/// Validation error with field and message
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// What the user typed at a numeric prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountInput {
    Value(u64),
    Cancel,
}

/// Parse a non-negative count typed at a prompt. 'c' cancels.
pub fn parse_count_input(field: &str, input: &str) -> Result<CountInput, ValidationError> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("c") {
        return Ok(CountInput::Cancel);
    }

    if input.strip_prefix('-').is_some_and(|rest| COUNT_PATTERN.is_match(rest)) {
        return Err(ValidationError {
            field: field.to_string(),
            message: "The number must not be negative".to_string(),
        });
    }

    if !COUNT_PATTERN.is_match(input) {
        return Err(ValidationError {
            field: field.to_string(),
            message: format!("'{}' is not a whole number", input),
        });
    }

    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    digits
        .parse::<u64>()
        .map(CountInput::Value)
        .map_err(|_| ValidationError {
            field: field.to_string(),
            message: format!("'{}' is too large", input),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_grouped_numbers() {
        assert_eq!(parse_count_input("min", "0"), Ok(CountInput::Value(0)));
        assert_eq!(parse_count_input("min", " 45376763 "), Ok(CountInput::Value(45_376_763)));
        assert_eq!(parse_count_input("min", "45,376,763"), Ok(CountInput::Value(45_376_763)));
        assert_eq!(parse_count_input("min", "45.376.763"), Ok(CountInput::Value(45_376_763)));
        assert_eq!(parse_count_input("min", "1_000"), Ok(CountInput::Value(1_000)));
    }

    #[test]
    fn cancel_keyword() {
        assert_eq!(parse_count_input("max", "c"), Ok(CountInput::Cancel));
        assert_eq!(parse_count_input("max", "C"), Ok(CountInput::Cancel));
    }

    #[test]
    fn rejects_negatives_and_garbage() {
        let err = parse_count_input("min", "-5").unwrap_err();
        assert_eq!(err.field, "min");
        assert!(err.message.contains("negative"));

        assert!(parse_count_input("min", "").is_err());
        assert!(parse_count_input("min", "12a").is_err());
        assert!(parse_count_input("min", "1,00").is_err());
        assert!(parse_count_input("min", "99999999999999999999999").is_err());
    }
}
