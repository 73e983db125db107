use std::collections::BTreeSet;
use coursecat_core::{sections_for_units, AccordionSection, EnrichedModule};
use serde::Serialize;

/// Shown when a module has no description
pub const MISSING_DESCRIPTION: &str = "No general description available.";

/// Contents of the module detail popup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupView {
    pub module_id: String,
    pub title: String,
    pub description: String,
    pub sections: Vec<AccordionSection>,
}

impl PopupView {
    pub fn for_module(module: &EnrichedModule) -> Self {
        Self {
            module_id: module.id().to_string(),
            title: module.name().to_string(),
            description: module
                .record
                .module_description
                .clone()
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
            sections: sections_for_units(&module.units),
        }
    }
}

/// UI flow state management
/// This struct contains only UI-specific state (the popup and its sections)
#[derive(Debug, Default)]
pub struct UiState {
    /// Popup currently shown
    pub popup: Option<PopupView>,
    /// Indices of expanded sections
    open_sections: BTreeSet<usize>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a popup, replacing any previous one with all sections collapsed
    pub fn open_popup(&mut self, popup: PopupView) {
        self.popup = Some(popup);
        self.open_sections.clear();
    }

    /// Toggle one section; sections expand and collapse independently.
    /// Returns whether the section is now open, `None` for an unknown section.
    pub fn toggle_section(&mut self, index: usize) -> Option<bool> {
        let count = self.popup.as_ref().map(|p| p.sections.len())?;
        if index >= count {
            return None;
        }

        if self.open_sections.remove(&index) {
            Some(false)
        } else {
            self.open_sections.insert(index);
            Some(true)
        }
    }

    pub fn is_section_open(&self, index: usize) -> bool {
        self.open_sections.contains(&index)
    }

    /// Hide the popup and collapse every section
    pub fn close_popup(&mut self) {
        self.popup = None;
        self.open_sections.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursecat_core::{ModuleRecord, UnitRecord};

    fn module() -> EnrichedModule {
        let units = vec![
            UnitRecord {
                unit_id: None,
                module_id: "M1".to_string(),
                unit_name: "Limits".to_string(),
                unit_description: Some("Epsilon".to_string()),
            },
            UnitRecord {
                unit_id: None,
                module_id: "M1".to_string(),
                unit_name: "  ".to_string(),
                unit_description: None,
            },
            UnitRecord {
                unit_id: None,
                module_id: "M1".to_string(),
                unit_name: "Series".to_string(),
                unit_description: None,
            },
        ];
        EnrichedModule {
            record: ModuleRecord {
                module_id: "M1".to_string(),
                module_name: "Calculus".to_string(),
                module_description: None,
                category: "Mathematics".to_string(),
                difficulty: "beginner".to_string(),
                major_class_ids: None,
            },
            major_class_ids: Vec::new(),
            accordion_data: coursecat_core::encode_accordion(&units),
            units,
        }
    }

    #[test]
    fn test_popup_view_defaults() {
        let popup = PopupView::for_module(&module());
        assert_eq!(popup.title, "Calculus");
        assert_eq!(popup.description, MISSING_DESCRIPTION);
        let names: Vec<_> = popup.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Limits", "Series"]);
    }

    #[test]
    fn test_sections_toggle_independently() {
        let mut ui = UiState::new();
        assert_eq!(ui.toggle_section(0), None);

        ui.open_popup(PopupView::for_module(&module()));
        assert_eq!(ui.toggle_section(0), Some(true));
        assert_eq!(ui.toggle_section(1), Some(true));
        assert!(ui.is_section_open(0) && ui.is_section_open(1));

        assert_eq!(ui.toggle_section(0), Some(false));
        assert!(!ui.is_section_open(0));
        assert!(ui.is_section_open(1));
        assert_eq!(ui.toggle_section(5), None);
    }

    #[test]
    fn test_close_collapses_sections() {
        let mut ui = UiState::new();
        ui.open_popup(PopupView::for_module(&module()));
        ui.toggle_section(1);

        ui.close_popup();
        assert!(ui.popup.is_none());
        assert!(!ui.is_section_open(1));
    }
}
