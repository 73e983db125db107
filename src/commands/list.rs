use std::process::ExitCode;

use coursecat_core::TileView;
use serde::Serialize;

use crate::cli::{FilterArgs, GlobalOptions};
use crate::handlers::apply_filter_args;
use crate::operations::FileOperations;
use crate::ui::{print_catalog, print_output};

#[derive(Debug, Serialize)]
pub struct ListResult<'a> {
    pub active_button: Option<String>,
    pub difficulty: String,
    pub total: usize,
    pub tiles: Vec<&'a TileView>,
}

pub fn run(filters: &FilterArgs, opts: &GlobalOptions) -> anyhow::Result<ExitCode> {
    let Ok((mut state, _)) = FileOperations::new(&opts.data_dir).load() else {
        return Ok(ExitCode::FAILURE);
    };
    apply_filter_args(&mut state, filters);

    let result = ListResult {
        active_button: state.filters.active_button.as_ref().map(|b| b.to_string()),
        difficulty: state.filters.difficulty.as_str().to_string(),
        total: state.view.tile_count(),
        tiles: state.visible_tiles(),
    };

    print_output(&result, opts, |_| print_catalog(&state))?;
    Ok(ExitCode::SUCCESS)
}
