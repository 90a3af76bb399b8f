use crate::error::RowError;
use crate::models::Country;

/// Column positions of the required fields within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub population: usize,
    pub area: usize,
    pub continent: usize,
}

impl ColumnLayout {
    /// Fields a row needs to reach every required column
    pub fn width(&self) -> usize {
        [self.name, self.population, self.area, self.continent]
            .into_iter()
            .max()
            .map_or(0, |last| last + 1)
    }
}

/// Turn one split row into a `Country`, or say why it cannot be one
pub fn validate_row(fields: &[String], layout: &ColumnLayout) -> Result<Country, RowError> {
    let width = layout.width();
    if fields.len() < width {
        return Err(RowError::FieldCount {
            expected: width,
            found: fields.len(),
        });
    }

    let population = parse_count("poblacion", &fields[layout.population])?;
    let area = parse_count("superficie", &fields[layout.area])?;

    let name = fields[layout.name].trim();
    let continent = fields[layout.continent].trim();

    if name.is_empty() {
        return Err(RowError::EmptyName);
    }
    if continent.is_empty() {
        return Err(RowError::EmptyContinent);
    }

    Ok(Country::new(name, population, area, continent))
}

/// Parse a non-negative integer field
fn parse_count(field: &'static str, raw: &str) -> Result<u64, RowError> {
    let raw = raw.trim();
    let value: i64 = raw.parse().map_err(|_| RowError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;

    u64::try_from(value).map_err(|_| RowError::Negative { field, value })
}
