use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use crate::cli::{FilterArgs, GlobalOptions};
use crate::errors::map_export_error;
use crate::handlers::{apply_filter_args, handle_download, DownloadOutcome};
use crate::operations::FileOperations;
use crate::ui::{print_output, set_status, show_error, StatusLevel};

#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub path: String,
    pub courses: Vec<String>,
}

pub fn run(filters: &FilterArgs, output: &Path, opts: &GlobalOptions) -> anyhow::Result<ExitCode> {
    let Ok((mut state, _)) = FileOperations::new(&opts.data_dir).load() else {
        return Ok(ExitCode::FAILURE);
    };
    apply_filter_args(&mut state, filters);

    match handle_download(&state, output) {
        Ok(DownloadOutcome::Saved(path)) => {
            let result = ExportResult {
                path: path.display().to_string(),
                courses: state.selected_course_names(),
            };
            print_output(&result, opts, |r| {
                set_status(
                    format!("Saved {} course(s) to {}", r.courses.len(), r.path),
                    StatusLevel::Success,
                );
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(DownloadOutcome::NothingSelected) => Ok(ExitCode::FAILURE),
        Err(e) => {
            let (title, message, details) = map_export_error(&e);
            show_error(title, message, details);
            Ok(ExitCode::FAILURE)
        }
    }
}
