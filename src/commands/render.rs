use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use crate::cli::GlobalOptions;
use crate::operations::FileOperations;
use crate::ui::{print_output, set_status, StatusLevel};

#[derive(Debug, Serialize)]
pub struct RenderResult {
    pub output: String,
    pub courses: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn run(output: &Path, opts: &GlobalOptions) -> anyhow::Result<ExitCode> {
    let ops = FileOperations::new(&opts.data_dir);

    let result = match ops.load() {
        Ok((state, _)) => {
            ops.write_page(&state, output)?;
            RenderResult {
                output: output.display().to_string(),
                courses: state.view.tile_count(),
                skipped: state.view.skipped.len(),
                error: None,
            }
        }
        Err(e) => {
            ops.write_error_page(&e, output)?;
            RenderResult {
                output: output.display().to_string(),
                courses: 0,
                skipped: 0,
                error: Some(e.to_string()),
            }
        }
    };

    print_output(&result, opts, |r| {
        if r.skipped > 0 {
            set_status(
                format!("{} module(s) skipped, run `check` for details", r.skipped),
                StatusLevel::Info,
            );
        }
    })?;

    Ok(if result.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
