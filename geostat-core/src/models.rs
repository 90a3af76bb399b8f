use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One country as loaded from the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub population: u64,
    /// Surface in km²
    pub area: u64,
    pub continent: String,
}

impl Country {
    pub fn new(
        name: impl Into<String>,
        population: u64,
        area: u64,
        continent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            population,
            area,
            continent: continent.into(),
        }
    }

    /// Value of a numeric field
    pub fn field(&self, field: RangeField) -> u64 {
        match field {
            RangeField::Population => self.population,
            RangeField::Area => self.area,
        }
    }
}

/// Why a query was rejected before it ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidInput {
    UnknownSearchMode(String),
    UnknownRangeField(String),
    UnknownSortKey(String),
    UnknownSortDirection(String),
    InvertedRange { min: u64, max: u64 },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::UnknownSearchMode(s) => write!(f, "unknown search mode '{}'", s),
            InvalidInput::UnknownRangeField(s) => write!(f, "unknown range field '{}'", s),
            InvalidInput::UnknownSortKey(s) => write!(f, "unknown sort key '{}'", s),
            InvalidInput::UnknownSortDirection(s) => write!(f, "unknown sort direction '{}'", s),
            InvalidInput::InvertedRange { min, max } => {
                write!(f, "minimum {} is greater than maximum {}", min, max)
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

/// How a query ended.
///
/// `Ok` with an empty result means the query ran and found nothing, which is
/// never the same thing as `Cancelled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ok,
    Cancelled,
    InvalidInput(InvalidInput),
    NoData,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok)
    }
}

/// Countries produced by a search, filter or sort
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub countries: Vec<Country>,
    pub outcome: Outcome,
}

impl QueryResult {
    pub fn ok(countries: Vec<Country>) -> Self {
        Self {
            countries,
            outcome: Outcome::Ok,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            countries: Vec::new(),
            outcome: Outcome::Cancelled,
        }
    }

    pub fn invalid(reason: InvalidInput) -> Self {
        Self {
            countries: Vec::new(),
            outcome: Outcome::InvalidInput(reason),
        }
    }
}

/// Number of countries sharing one literal continent value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinentCount {
    pub continent: String,
    pub count: usize,
}

/// Aggregate summary over a non-empty dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub most_populous: Country,
    pub least_populous: Country,
    pub average_population: f64,
    pub average_area: f64,
    /// In first-seen order
    pub continent_counts: Vec<ContinentCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResult {
    pub stats: Option<Stats>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    Exact,
    Partial,
}

impl FromStr for SearchMode {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "e" | "exact" => Ok(SearchMode::Exact),
            "p" | "partial" => Ok(SearchMode::Partial),
            other => Err(InvalidInput::UnknownSearchMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeField {
    Population,
    Area,
}

impl FromStr for RangeField {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "population" | "poblacion" | "población" => Ok(RangeField::Population),
            "area" | "superficie" => Ok(RangeField::Area),
            other => Err(InvalidInput::UnknownRangeField(other.to_string())),
        }
    }
}

impl fmt::Display for RangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeField::Population => write!(f, "population"),
            RangeField::Area => write!(f, "area"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Population,
    Area,
}

impl FromStr for SortKey {
    type Err = InvalidInput;

    /// Accepts the menu digits as well as the field names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "name" | "nombre" => Ok(SortKey::Name),
            "2" | "population" | "poblacion" | "población" => Ok(SortKey::Population),
            "3" | "area" | "superficie" => Ok(SortKey::Area),
            other => Err(InvalidInput::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Population => write!(f, "population"),
            SortKey::Area => write!(f, "area"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "asc" | "ascending" => Ok(SortDirection::Ascending),
            "d" | "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(InvalidInput::UnknownSortDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// One end of a numeric range as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Value(u64),
    Cancelled,
}

impl From<u64> for Bound {
    fn from(value: u64) -> Self {
        Bound::Value(value)
    }
}

impl From<Option<u64>> for Bound {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Bound::Cancelled, Bound::Value)
    }
}
