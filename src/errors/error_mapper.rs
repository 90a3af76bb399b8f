use geostat_core::DatasetError;
use std::io::ErrorKind;
use std::path::Path;

/// Map dataset loading errors to user-friendly messages
/// Returns (title, message)
pub fn map_dataset_load_error(error: &DatasetError, path: &Path) -> (String, String) {
    match error {
        DatasetError::MissingColumn(column) => (
            "Invalid Dataset".to_string(),
            format!(
                "'{}' has no '{}' column. Expected header: nombre,poblacion,superficie,continente",
                path.display(),
                column
            ),
        ),
        DatasetError::EmptyFile => (
            "Invalid Dataset".to_string(),
            format!("'{}' is empty. Delete it to regenerate the default dataset.", path.display()),
        ),
        DatasetError::Io(io) if io.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            format!(
                "'{}' could not be found. Do not remove it while the program runs.",
                path.display()
            ),
        ),
        DatasetError::Io(io) if io.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            format!("You don't have permission to read or create '{}'.", path.display()),
        ),
        DatasetError::Io(io) if io.kind() == ErrorKind::InvalidData => (
            "Invalid Encoding".to_string(),
            format!("'{}' is not valid UTF-8 text.", path.display()),
        ),
        other => (
            "Error Loading Dataset".to_string(),
            format!("Failed to load '{}': {}", path.display(), other),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_column_names_the_column() {
        let error = DatasetError::MissingColumn("superficie");
        let (title, message) = map_dataset_load_error(&error, Path::new("paises.csv"));
        assert_eq!(title, "Invalid Dataset");
        assert!(message.contains("'superficie'"));
        assert!(message.contains("paises.csv"));
    }

    #[test]
    fn io_errors_by_kind() {
        let path = Path::new("data.csv");

        let denied = DatasetError::Io(io::Error::new(ErrorKind::PermissionDenied, "denied"));
        assert_eq!(map_dataset_load_error(&denied, path).0, "Permission Denied");

        let missing = DatasetError::Io(io::Error::new(ErrorKind::NotFound, "gone"));
        assert_eq!(map_dataset_load_error(&missing, path).0, "File Not Found");

        let other = DatasetError::Io(io::Error::new(ErrorKind::Other, "disk on fire"));
        let (title, message) = map_dataset_load_error(&other, path);
        assert_eq!(title, "Error Loading Dataset");
        assert!(message.contains("disk on fire"));
    }
}
