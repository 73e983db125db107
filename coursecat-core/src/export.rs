use crate::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the downloaded selection (CSV-shaped despite the extension)
pub const SELECTION_FILE_NAME: &str = "selected_courses.txt";

/// Single column header of the selection file
pub const SELECTION_HEADER: &str = "Course Name";

/// Name written for a visible tile whose module cannot be found
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// Build the selection file contents: the header, then one name per line.
/// Fails with `NothingSelected` when no name is given.
pub fn build_selection_export<S: AsRef<str>>(names: &[S]) -> Result<String> {
    if names.is_empty() {
        return Err(CatalogError::NothingSelected);
    }

    let mut contents = String::from(SELECTION_HEADER);
    for name in names {
        contents.push('\n');
        contents.push_str(name.as_ref());
    }
    Ok(contents)
}

/// Write a selection into `dir`, returning the path of the written file
pub fn save_selection<S: AsRef<str>>(dir: &Path, names: &[S]) -> Result<PathBuf> {
    let contents = build_selection_export(names)?;
    let path = dir.join(SELECTION_FILE_NAME);

    fs::write(&path, contents).map_err(|source| CatalogError::Write {
        path: path.clone(),
        source,
    })?;

    log::info!("Saved {} courses to {}", names.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_rejected() {
        let names: Vec<String> = Vec::new();
        let err = build_selection_export(&names).unwrap_err();
        assert!(matches!(err, CatalogError::NothingSelected));
        assert_eq!(err.to_string(), "No courses selected for download.");
    }

    #[test]
    fn test_header_and_one_line_per_name() {
        let contents = build_selection_export(&["Calculus", "Deep Learning"]).unwrap();
        assert_eq!(contents, "Course Name\nCalculus\nDeep Learning");
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_save_selection_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_selection(dir.path(), &["Calculus"]).unwrap();

        assert!(path.ends_with(SELECTION_FILE_NAME));
        assert_eq!(fs::read_to_string(path).unwrap(), "Course Name\nCalculus");
    }

    #[test]
    fn test_save_nothing_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let names: [&str; 0] = [];
        assert!(save_selection(dir.path(), &names).is_err());
        assert!(!dir.path().join(SELECTION_FILE_NAME).exists());
    }
}
