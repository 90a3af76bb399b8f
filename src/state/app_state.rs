use geostat_core::*;
use std::path::{Path, PathBuf};

use crate::errors::map_dataset_load_error;

/// Application state: the loaded dataset and where it came from.
/// Query handlers only ever read `countries`.
#[derive(Debug)]
pub struct AppState {
    /// Countries in file order
    pub countries: Vec<Country>,
    /// Path to the dataset file
    pub data_file: PathBuf,
    /// Rows left out during the load
    pub skipped: Vec<SkippedRow>,
    /// Whether the default dataset had to be written
    pub created_default: bool,
}

impl AppState {
    /// Load the dataset at `path`, creating it with default data when absent
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let report = load_or_create(path)?;

        Ok(Self {
            countries: report.countries,
            data_file: path.to_path_buf(),
            skipped: report.skipped,
            created_default: report.created_default,
        })
    }

    /// Load like [`AppState::load`], but fall back to an empty dataset.
    /// The second value is the user-facing reason when the load failed.
    pub fn load_or_empty(path: &Path) -> (Self, Option<String>) {
        match Self::load(path) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "dataset load failed");
                let (title, message) = map_dataset_load_error(&err, path);
                (Self::empty(path), Some(format!("{}: {}", title, message)))
            }
        }
    }

    fn empty(path: &Path) -> Self {
        Self {
            countries: Vec::new(),
            data_file: path.to_path_buf(),
            skipped: Vec::new(),
            created_default: false,
        }
    }

    /// State over an already validated set of countries
    #[cfg(test)]
    pub fn from_countries(countries: Vec<Country>) -> Self {
        Self {
            countries,
            data_file: PathBuf::new(),
            skipped: Vec::new(),
            created_default: false,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.countries.is_empty()
    }

    /// One-line summary of the load, shown before the menu
    pub fn load_summary(&self) -> String {
        if self.created_default {
            format!(
                "Dataset '{}' not found; created it with {} default countries.",
                self.data_file.display(),
                self.countries.len()
            )
        } else if self.skipped.is_empty() {
            format!(
                "Loaded {} countries from '{}'.",
                self.countries.len(),
                self.data_file.display()
            )
        } else {
            format!(
                "Loaded {} countries from '{}' ({} invalid rows skipped).",
                self.countries.len(),
                self.data_file.display(),
                self.skipped.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::run_main_menu;
    use crate::ui::Console;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn load_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("paises.csv");

        let state = AppState::load(&path).unwrap();
        assert!(state.created_default);
        assert!(state.has_data());
        assert!(state.load_summary().contains("created it with 9 default countries"));
    }

    #[test]
    fn summary_mentions_skipped_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("paises.csv");
        fs::write(
            &path,
            "nombre,poblacion,superficie,continente\nItalia,59110000,301340,Europa\nX,?,1,Asia\n",
        )
        .unwrap();

        let state = AppState::load(&path).unwrap();
        assert_eq!(state.countries.len(), 1);
        assert_eq!(state.skipped.len(), 1);
        assert!(state.load_summary().contains("1 invalid rows skipped"));
    }

    #[test]
    fn failed_load_falls_back_to_empty_menu() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("paises.csv");
        fs::write(&path, "nombre,poblacion,continente\nItalia,59110000,Europa\n").unwrap();

        let (state, error) = AppState::load_or_empty(&path);
        assert!(!state.has_data());
        let error = error.unwrap();
        assert!(error.starts_with("Invalid Dataset: "));
        assert!(error.contains("'superficie'"));

        let mut console = Console::new(Cursor::new("1\n0\n".to_string()), Vec::new());
        run_main_menu(&state, &mut console).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("No data loaded to search."));
    }

    #[test]
    fn successful_load_has_no_error() {
        let dir = tempdir().unwrap();
        let (state, error) = AppState::load_or_empty(&dir.path().join("paises.csv"));
        assert!(error.is_none());
        assert_eq!(state.countries.len(), 9);
    }

    #[test]
    fn empty_state_has_no_data() {
        assert!(!AppState::from_countries(Vec::new()).has_data());
    }
}
