use std::path::{Path, PathBuf};

use coursecat_core::{save_selection, CatalogError};

use crate::state::AppState;
use crate::ui::show_alert;

/// Result of a download request
#[derive(Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    NothingSelected,
}

/// Download button handler: save the visible courses into `out_dir`
pub fn handle_download(state: &AppState, out_dir: &Path) -> Result<DownloadOutcome, CatalogError> {
    let names = state.selected_course_names();

    match save_selection(out_dir, &names) {
        Ok(path) => Ok(DownloadOutcome::Saved(path)),
        Err(CatalogError::NothingSelected) => {
            show_alert(CatalogError::NothingSelected.to_string());
            Ok(DownloadOutcome::NothingSelected)
        }
        Err(e) => Err(e),
    }
}
