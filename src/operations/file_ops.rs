use std::fs;
use std::path::Path;

use anyhow::Context;
use coursecat_core::{load_catalog_with_diagnostics, CatalogError, Diagnostic};

use crate::errors::{error_page_message, map_load_error};
use crate::state::AppState;
use crate::ui::{render_error_page, render_page, set_status, show_error, StatusLevel};

/// Title of the rendered catalog page
pub const PAGE_TITLE: &str = "Course Catalog";

/// File operations orchestration
/// Handles catalog loading and page output with proper error reporting
pub struct FileOperations<'a> {
    data_dir: &'a Path,
}

impl<'a> FileOperations<'a> {
    pub fn new(data_dir: &'a Path) -> Self {
        Self { data_dir }
    }

    /// Load the catalog tables of the data directory.
    /// Failures are reported to the user before being returned.
    pub fn load(&self) -> Result<(AppState, Vec<Diagnostic>), CatalogError> {
        match load_catalog_with_diagnostics(self.data_dir) {
            Ok((data, diagnostics)) => {
                let state = AppState::new(data, self.data_dir.to_path_buf());
                Ok((state, diagnostics))
            }
            Err(e) => {
                let (title, message, details) = map_load_error(&e, self.data_dir);
                show_error(title, message, details);
                Err(e)
            }
        }
    }

    /// Write the interactive catalog page
    pub fn write_page(&self, state: &AppState, output: &Path) -> anyhow::Result<()> {
        let html = render_page(&state.data, &state.view, PAGE_TITLE)?;
        fs::write(output, html)
            .with_context(|| format!("failed to write page: {}", output.display()))?;

        set_status(
            format!(
                "Wrote {} courses to {}",
                state.view.tile_count(),
                output.display()
            ),
            StatusLevel::Success,
        );
        Ok(())
    }

    /// Write the page shown in place of the catalog when loading failed
    pub fn write_error_page(&self, error: &CatalogError, output: &Path) -> anyhow::Result<()> {
        let html = render_error_page(&error_page_message(error));
        fs::write(output, html)
            .with_context(|| format!("failed to write page: {}", output.display()))?;

        set_status(
            format!("Wrote error page to {}", output.display()),
            StatusLevel::Warning,
        );
        Ok(())
    }
}
