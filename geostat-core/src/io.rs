use crate::error::{DatasetError, Result, RowError};
use crate::models::Country;
use crate::validation::{validate_row, ColumnLayout};
use std::fs;
use std::path::Path;

pub const NAME_COLUMN: &str = "nombre";
pub const POPULATION_COLUMN: &str = "poblacion";
pub const AREA_COLUMN: &str = "superficie";
pub const CONTINENT_COLUMN: &str = "continente";

/// A row that failed validation and was left out of the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file, header included
    pub line: usize,
    pub error: RowError,
}

/// Result of loading a dataset file
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub countries: Vec<Country>,
    pub skipped: Vec<SkippedRow>,
    /// The file was missing and the default dataset was written in its place
    pub created_default: bool,
}

/// The dataset written when no file exists yet
pub fn default_countries() -> Vec<Country> {
    vec![
        Country::new("Argentina", 45_376_763, 2_780_400, "América"),
        Country::new("EEUU", 331_893_745, 9_833_520, "América"),
        Country::new("Rusia", 145_934_462, 17_098_242, "Europa/Asia"),
        Country::new("Japón", 125_800_000, 377_975, "Asia"),
        Country::new("Italia", 59_110_000, 301_340, "Europa"),
        Country::new("México", 128_932_753, 1_964_375, "América"),
        Country::new("Francia", 65_273_511, 551_695, "Europa"),
        Country::new("Colombia", 51_049_498, 1_141_748, "América"),
        Country::new("España", 47_450_795, 505_990, "Europa"),
    ]
}

/// Load a dataset file, writing the default dataset first if it is missing
pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "dataset file not found, creating it with default data"
        );
        let countries = default_countries();
        save_dataset(&countries, path)?;
        tracing::info!(path = %path.display(), count = countries.len(), "default dataset created");
        return Ok(LoadReport {
            countries,
            skipped: Vec::new(),
            created_default: true,
        });
    }

    load_dataset(path)
}

/// Load and validate a dataset file
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let report = parse_dataset(&contents)?;

    tracing::info!(
        path = %path.display(),
        loaded = report.countries.len(),
        skipped = report.skipped.len(),
        "dataset loaded"
    );
    Ok(report)
}

/// Parse dataset text.
///
/// Columns are located by header name. Invalid rows are skipped and
/// reported; a header missing a required column fails the whole parse.
pub fn parse_dataset(contents: &str) -> Result<LoadReport> {
    let mut records = split_records(contents).into_iter();

    let (_, header) = records.next().ok_or(DatasetError::EmptyFile)?;
    let layout = parse_header(&header)?;

    let mut countries = Vec::new();
    let mut skipped = Vec::new();

    for (line_no, fields) in records {
        match validate_row(&fields, &layout) {
            Ok(country) => countries.push(country),
            Err(error) => {
                tracing::warn!(line = line_no, %error, "skipping invalid row");
                skipped.push(SkippedRow { line: line_no, error });
            }
        }
    }

    Ok(LoadReport {
        countries,
        skipped,
        created_default: false,
    })
}

/// Write countries to a dataset file, header first
pub fn save_dataset<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    fs::write(path, render_dataset(countries))?;
    Ok(())
}

/// Render countries in the dataset file format
pub fn render_dataset(countries: &[Country]) -> String {
    let mut out = format!(
        "{},{},{},{}\n",
        NAME_COLUMN, POPULATION_COLUMN, AREA_COLUMN, CONTINENT_COLUMN
    );

    for country in countries {
        out.push_str(&format!(
            "{},{},{},{}\n",
            quote_field(&country.name),
            country.population,
            country.area,
            quote_field(&country.continent)
        ));
    }

    out
}

fn parse_header(header: &[String]) -> Result<ColumnLayout> {
    let columns: Vec<String> = header
        .iter()
        .map(|c| c.trim_start_matches('\u{feff}').to_lowercase())
        .collect();

    let find = |name: &'static str| {
        columns
            .iter()
            .position(|c| c == name)
            .ok_or(DatasetError::MissingColumn(name))
    };

    Ok(ColumnLayout {
        name: find(NAME_COLUMN)?,
        population: find(POPULATION_COLUMN)?,
        area: find(AREA_COLUMN)?,
        continent: find(CONTINENT_COLUMN)?,
    })
}

/// Split text into records of trimmed fields, each tagged with the 1-based
/// line it starts on. Blank lines yield no record.
///
/// A double quote opens a quoted field only as the first character of the
/// field; elsewhere it is kept literally. Inside quotes, commas and newlines
/// belong to the field and `""` is a literal quote.
fn split_records(contents: &str) -> Vec<(usize, Vec<String>)> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_start = true;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = contents.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current).trim().to_string());
                field_start = true;
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                fields.push(std::mem::take(&mut current).trim().to_string());
                push_record(&mut records, record_line, std::mem::take(&mut fields));
                line += 1;
                record_line = line;
                field_start = true;
            }
            _ => {
                if c == '\n' {
                    line += 1;
                }
                if !c.is_whitespace() {
                    field_start = false;
                }
                current.push(c);
            }
        }
    }

    if !current.is_empty() || !fields.is_empty() {
        fields.push(current.trim().to_string());
        push_record(&mut records, record_line, fields);
    }

    records
}

fn push_record(records: &mut Vec<(usize, Vec<String>)>, line: usize, fields: Vec<String>) {
    let blank = fields.len() == 1 && fields[0].is_empty();
    if !blank {
        records.push((line, fields));
    }
}

fn quote_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
