use coursecat_core::{DifficultyFilter, FilterButton};

use crate::cli::FilterArgs;
use crate::operations::validate_filter_input;
use crate::state::AppState;
use crate::ui::{set_status, StatusLevel};

/// Replay the filter interactions requested on the command line
pub fn apply_filter_args(state: &mut AppState, args: &FilterArgs) {
    for warning in validate_filter_input(&state.data, args) {
        set_status(warning, StatusLevel::Warning);
    }

    for click in &args.clicks {
        handle_filter_click(state, FilterButton::parse(click));
    }
    handle_difficulty_change(state, DifficultyFilter::parse(&args.difficulty));
}

/// Filter button click handler
pub fn handle_filter_click(state: &mut AppState, button: FilterButton) {
    state.click_filter(button);
    log::debug!(
        "Active filter button: {}",
        state
            .filters
            .active_button
            .as_ref()
            .map(|b| b.to_string())
            .unwrap_or_default()
    );
}

/// Difficulty selector change handler
pub fn handle_difficulty_change(state: &mut AppState, difficulty: DifficultyFilter) {
    state.select_difficulty(difficulty);
    log::debug!("Difficulty selector: {}", state.filters.difficulty.as_str());
}
