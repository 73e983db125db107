use std::process::ExitCode;

use serde::Serialize;

use crate::cli::GlobalOptions;
use crate::handlers::{handle_section_click, handle_tile_click};
use crate::operations::FileOperations;
use crate::state::{PopupView, UiState};
use crate::ui::{print_output, print_popup, set_status, StatusLevel};

#[derive(Debug, Serialize)]
pub struct ShowResult<'a> {
    #[serde(flatten)]
    pub popup: &'a PopupView,
    /// 1-based numbers of the expanded sections
    pub open: Vec<usize>,
}

pub fn run(module_id: &str, open: &[usize], opts: &GlobalOptions) -> anyhow::Result<ExitCode> {
    let Ok((state, _)) = FileOperations::new(&opts.data_dir).load() else {
        return Ok(ExitCode::FAILURE);
    };

    let mut ui_state = UiState::new();
    if !handle_tile_click(&state, &mut ui_state, module_id) {
        set_status(format!("Unknown module: {}", module_id), StatusLevel::Error);
        return Ok(ExitCode::FAILURE);
    }
    for &number in open {
        handle_section_click(&mut ui_state, number);
    }

    let Some(popup) = &ui_state.popup else {
        return Ok(ExitCode::FAILURE);
    };
    let result = ShowResult {
        popup,
        open: (0..popup.sections.len())
            .filter(|&i| ui_state.is_section_open(i))
            .map(|i| i + 1)
            .collect(),
    };

    print_output(&result, opts, |_| print_popup(&ui_state))?;
    Ok(ExitCode::SUCCESS)
}
