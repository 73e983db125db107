use crate::state::{AppState, PopupView, UiState};

/// Tile click handler: open the popup for a module.
/// An unknown module id is logged and leaves the popup untouched.
pub fn handle_tile_click(state: &AppState, ui_state: &mut UiState, module_id: &str) -> bool {
    match state.get_module(module_id) {
        Some(module) => {
            ui_state.open_popup(PopupView::for_module(module));
            true
        }
        None => {
            log::error!("Module data not found for tile: {}", module_id);
            false
        }
    }
}

/// Section header click handler (1-based section number)
pub fn handle_section_click(ui_state: &mut UiState, number: usize) {
    let toggled = number
        .checked_sub(1)
        .and_then(|index| ui_state.toggle_section(index));

    if toggled.is_none() {
        log::warn!("No section {} in this popup", number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursecat_core::{join_catalog, ModuleRecord, UnitRecord};
    use std::path::PathBuf;

    fn state() -> AppState {
        let data = join_catalog(
            Vec::new(),
            vec![ModuleRecord {
                module_id: "M1".to_string(),
                module_name: "Calculus".to_string(),
                module_description: Some("Limits and series".to_string()),
                category: "Mathematics".to_string(),
                difficulty: "Beginner".to_string(),
                major_class_ids: None,
            }],
            vec![UnitRecord {
                unit_id: None,
                module_id: "M1".to_string(),
                unit_name: "Limits".to_string(),
                unit_description: None,
            }],
        );
        AppState::new(data, PathBuf::from("."))
    }

    #[test]
    fn test_tile_click_opens_popup() {
        let state = state();
        let mut ui = UiState::new();

        assert!(handle_tile_click(&state, &mut ui, "M1"));
        let popup = ui.popup.as_ref().unwrap();
        assert_eq!(popup.description, "Limits and series");
        assert_eq!(popup.sections[0].details, "Details not available.");

        handle_section_click(&mut ui, 1);
        assert!(ui.is_section_open(0));
        handle_section_click(&mut ui, 0);
        handle_section_click(&mut ui, 9);
        assert!(ui.is_section_open(0));

        ui.close_popup();
        assert!(ui.popup.is_none());
    }

    #[test]
    fn test_unknown_module_is_a_no_op() {
        let state = state();
        let mut ui = UiState::new();
        assert!(handle_tile_click(&state, &mut ui, "M1"));

        assert!(!handle_tile_click(&state, &mut ui, "missing"));
        assert_eq!(ui.popup.as_ref().map(|p| p.module_id.as_str()), Some("M1"));
    }
}
