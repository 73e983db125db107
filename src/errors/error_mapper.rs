use std::io::ErrorKind;
use std::path::Path;

use coursecat_core::CatalogError;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_load_error(error: &CatalogError, data_dir: &Path) -> (String, String, String) {
    match error {
        CatalogError::Fetch { path, source } if source.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "A catalog table could not be found.".to_string(),
            format!(
                "Path: {}\n\nThe data directory {} must contain classes.csv, modules.csv and units.csv.",
                path.display(),
                data_dir.display()
            ),
        ),
        CatalogError::Fetch { path, source } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        _ => (
            "Error Loading Catalog".to_string(),
            "Failed to load the course catalog.".to_string(),
            error.to_string(),
        ),
    }
}

/// Map export errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_export_error(error: &CatalogError) -> (String, String, String) {
    match error {
        CatalogError::Write { path, source } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to write to:\n{}", path.display()),
        ),
        CatalogError::Write { path, source } if source.kind() == ErrorKind::NotFound => (
            "Directory Not Found".to_string(),
            "The output directory does not exist.".to_string(),
            format!("Path: {}", path.display()),
        ),
        _ => (
            "Error Saving Selection".to_string(),
            "Failed to save the selected courses.".to_string(),
            error.to_string(),
        ),
    }
}

/// Message shown in place of the catalog page when loading fails
pub fn error_page_message(error: &CatalogError) -> String {
    format!(
        "Error loading course data. Please check the CSV files for correct formatting \
         (semicolon-separated, quotes around fields containing semicolons or double quotes) \
         and ensure the files are accessible. Details: {}",
        error
    )
}
