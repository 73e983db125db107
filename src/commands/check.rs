use std::process::ExitCode;

use coursecat_core::Diagnostic;
use serde::Serialize;

use crate::cli::GlobalOptions;
use crate::operations::FileOperations;
use crate::ui::{print_diagnostics, print_output};

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub data_dir: String,
    pub classes: usize,
    pub modules: usize,
    pub courses: usize,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<ExitCode> {
    let Ok((state, diagnostics)) = FileOperations::new(&opts.data_dir).load() else {
        return Ok(ExitCode::FAILURE);
    };

    let result = CheckResult {
        data_dir: state.data_dir.display().to_string(),
        classes: state.data.classes.len(),
        modules: state.data.modules.len(),
        courses: state.view.tile_count(),
        diagnostics,
    };

    print_output(&result, opts, |r| {
        println!(
            "{}: {} classes, {} modules, {} courses on the page",
            r.data_dir, r.classes, r.modules, r.courses
        );
        print_diagnostics(&r.diagnostics);
    })?;

    Ok(if result.diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
