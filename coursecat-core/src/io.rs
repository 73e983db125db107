use crate::csv::{parse_csv_text, CsvRow};
use crate::diagnostics::{collect_diagnostics, Diagnostic};
use crate::error::{CatalogError, Result};
use crate::joining::join_catalog;
use crate::models::{CatalogData, UnitRecord};
use crate::records::records_from_rows;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

pub const CLASSES_FILE: &str = "classes.csv";
pub const MODULES_FILE: &str = "modules.csv";
pub const UNITS_FILE: &str = "units.csv";

/// Parsed rows of the three source tables
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub classes: Vec<CsvRow>,
    pub modules: Vec<CsvRow>,
    pub units: Vec<CsvRow>,
}

/// Read a table and parse it
pub fn fetch_and_parse_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CsvRow>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| CatalogError::Fetch {
        path: path.to_path_buf(),
        source,
    })?;

    // Invalid UTF-8 sequences decode to U+FFFD instead of failing the load
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(&e.into_bytes()).into_owned()
        }
    };

    let rows = parse_csv_text(&text);
    log::debug!("Parsed {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read the three tables of a data directory concurrently.
/// All or nothing: the first failure, in classes/modules/units order, wins.
pub fn load_catalog_sources<P: AsRef<Path>>(dir: P) -> Result<CatalogSources> {
    let dir = dir.as_ref();
    let paths: [PathBuf; 3] = [
        dir.join(CLASSES_FILE),
        dir.join(MODULES_FILE),
        dir.join(UNITS_FILE),
    ];

    let [classes, modules, units] = thread::scope(|scope| {
        let handles = paths
            .each_ref()
            .map(|path| scope.spawn(move || fetch_and_parse_csv(path)));
        handles.map(|handle| {
            handle
                .join()
                .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
        })
    });

    Ok(CatalogSources {
        classes: classes?,
        modules: modules?,
        units: units?,
    })
}

/// Load and join the catalog stored in a data directory
pub fn load_catalog<P: AsRef<Path>>(dir: P) -> Result<CatalogData> {
    load_catalog_with_diagnostics(dir).map(|(data, _)| data)
}

/// Load and join a catalog, also returning the findings about its contents
pub fn load_catalog_with_diagnostics<P: AsRef<Path>>(
    dir: P,
) -> Result<(CatalogData, Vec<Diagnostic>)> {
    let sources = load_catalog_sources(&dir)?;
    let units: Vec<UnitRecord> = records_from_rows(&sources.units);

    let data = join_catalog(
        records_from_rows(&sources.classes),
        records_from_rows(&sources.modules),
        units.clone(),
    );
    let diagnostics = collect_diagnostics(&data, &units);
    for diagnostic in &diagnostics {
        log::debug!("{}", diagnostic);
    }

    log::info!(
        "Loaded {} classes and {} modules from {}",
        data.classes.len(),
        data.modules.len(),
        dir.as_ref().display()
    );
    Ok((data, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_a_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = fetch_and_parse_csv(dir.path().join("nope.csv")).unwrap_err();

        match &err {
            CatalogError::Fetch { path, .. } => assert!(path.ends_with("nope.csv")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Failed to fetch"));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CLASSES_FILE);
        fs::write(&path, b"ClassID;ButtonText\nT\xfcKITZmed;Medicine\n").unwrap();

        let rows = fetch_and_parse_csv(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value("ClassID"), "T\u{FFFD}KITZmed");
        assert_eq!(rows[0].value("ButtonText"), "Medicine");
    }

    #[test]
    fn test_load_fails_when_any_table_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CLASSES_FILE), "ClassID;ButtonText\n").unwrap();
        fs::write(dir.path().join(UNITS_FILE), "ModuleID;UnitName\n").unwrap();

        let err = load_catalog(dir.path()).unwrap_err();
        assert!(err.to_string().contains(MODULES_FILE));
    }
}
