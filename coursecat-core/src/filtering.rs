use crate::models::{normalize_label, EnrichedModule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of the difficulty selector that disables the difficulty filter
pub const ALL_DIFFICULTIES: &str = "all";

/// A filter button in the page header
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterButton {
    /// The synthetic "Show All" button
    ShowAll,
    /// A button generated from a class
    Class(String),
}

impl FilterButton {
    /// `all` (any case) is the Show All button, anything else a class id
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            FilterButton::ShowAll
        } else {
            FilterButton::Class(value.to_string())
        }
    }
}

impl fmt::Display for FilterButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterButton::ShowAll => write!(f, "Show All"),
            FilterButton::Class(id) => write!(f, "{}", id),
        }
    }
}

/// Current value of the difficulty selector
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DifficultyFilter {
    #[default]
    All,
    /// Normalized difficulty class
    Only(String),
}

impl DifficultyFilter {
    pub fn parse(value: &str) -> Self {
        let value = normalize_label(value);
        if value == ALL_DIFFICULTIES || value.is_empty() {
            DifficultyFilter::All
        } else {
            DifficultyFilter::Only(value)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DifficultyFilter::All => ALL_DIFFICULTIES,
            DifficultyFilter::Only(level) => level,
        }
    }
}

/// Filter state of the catalog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// `None` only when the page has no active button at all
    pub active_button: Option<FilterButton>,
    pub difficulty: DifficultyFilter,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            active_button: Some(FilterButton::ShowAll),
            difficulty: DifficultyFilter::All,
        }
    }
}

impl Filters {
    /// Apply a button click.
    /// Clicking the active class button falls back to Show All; any other
    /// click makes the clicked button the only active one.
    pub fn click(&mut self, button: FilterButton) {
        self.active_button = next_active_button(self.active_button.as_ref(), button);
    }

    pub fn select_difficulty(&mut self, difficulty: DifficultyFilter) {
        self.difficulty = difficulty;
    }

    /// Class id the tiles must carry, if any
    pub fn required_class(&self) -> Option<&str> {
        match &self.active_button {
            Some(FilterButton::Class(id)) => Some(id),
            _ => None,
        }
    }
}

/// Button that is active after `clicked` is clicked
pub fn next_active_button(
    active: Option<&FilterButton>,
    clicked: FilterButton,
) -> Option<FilterButton> {
    match (active, &clicked) {
        (Some(current), FilterButton::Class(_)) if *current == clicked => {
            Some(FilterButton::ShowAll)
        }
        _ => Some(clicked),
    }
}

/// Visibility of a tile with the given tags.
/// AND between the class filter and the difficulty filter.
pub fn tile_visible(class_tags: &[String], difficulty_class: &str, filters: &Filters) -> bool {
    let matches_class = match filters.required_class() {
        Some(class_id) => class_tags.iter().any(|tag| tag == class_id),
        None => true,
    };

    let matches_difficulty = match &filters.difficulty {
        DifficultyFilter::All => true,
        DifficultyFilter::Only(level) => difficulty_class == level,
    };

    matches_class && matches_difficulty
}

/// Check if a module's tile is visible under the given filters
pub fn matches_filters(module: &EnrichedModule, filters: &Filters) -> bool {
    tile_visible(&module.major_class_ids, &module.difficulty_class(), filters)
}

/// Apply filters to a list of modules, returning only those that match
pub fn apply_filters<'a>(modules: &'a [EnrichedModule], filters: &Filters) -> Vec<&'a EnrichedModule> {
    modules
        .iter()
        .filter(|module| matches_filters(module, filters))
        .collect()
}

/// Check if any filter restricts the catalog
pub fn has_filters(filters: &Filters) -> bool {
    filters.required_class().is_some() || filters.difficulty != DifficultyFilter::All
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_predicate_truth_table() {
        let buttons = [
            None,
            Some(FilterButton::ShowAll),
            Some(FilterButton::Class("MED".to_string())),
        ];
        let difficulties = [
            DifficultyFilter::All,
            DifficultyFilter::Only("expert".to_string()),
        ];
        let tiles = [
            (tags(&["MED"]), "expert"),
            (tags(&["MED"]), "beginner"),
            (tags(&["CS"]), "expert"),
            (tags(&[]), "beginner"),
        ];

        for button in &buttons {
            for difficulty in &difficulties {
                let filters = Filters {
                    active_button: button.clone(),
                    difficulty: difficulty.clone(),
                };
                for (class_tags, level) in &tiles {
                    let class_ok = match button {
                        Some(FilterButton::Class(id)) => class_tags.contains(id),
                        _ => true,
                    };
                    let difficulty_ok = match difficulty {
                        DifficultyFilter::All => true,
                        DifficultyFilter::Only(l) => l == level,
                    };
                    assert_eq!(
                        tile_visible(class_tags, level, &filters),
                        class_ok && difficulty_ok,
                        "button={:?} difficulty={:?} tile={:?}/{}",
                        button,
                        difficulty,
                        class_tags,
                        level
                    );
                }
            }
        }
    }

    #[test]
    fn test_click_toggles_active_class_back_to_show_all() {
        let mut filters = Filters::default();
        filters.click(FilterButton::Class("MED".to_string()));
        assert_eq!(filters.required_class(), Some("MED"));

        filters.click(FilterButton::Class("MED".to_string()));
        assert_eq!(filters.active_button, Some(FilterButton::ShowAll));
    }

    #[test]
    fn test_click_is_single_select() {
        let mut filters = Filters::default();
        filters.click(FilterButton::Class("MED".to_string()));
        filters.click(FilterButton::Class("CS".to_string()));
        assert_eq!(filters.required_class(), Some("CS"));

        filters.click(FilterButton::ShowAll);
        assert_eq!(filters.active_button, Some(FilterButton::ShowAll));

        // Show All stays active when clicked again
        filters.click(FilterButton::ShowAll);
        assert_eq!(filters.active_button, Some(FilterButton::ShowAll));
    }

    #[test]
    fn test_click_without_active_button() {
        assert_eq!(
            next_active_button(None, FilterButton::Class("X".to_string())),
            Some(FilterButton::Class("X".to_string()))
        );
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!(FilterButton::parse(" ALL "), FilterButton::ShowAll);
        assert_eq!(FilterButton::parse("MED"), FilterButton::Class("MED".to_string()));
        assert_eq!(DifficultyFilter::parse("All"), DifficultyFilter::All);
        assert_eq!(
            DifficultyFilter::parse("Expert"),
            DifficultyFilter::Only("expert".to_string())
        );
        assert_eq!(DifficultyFilter::parse("expert").as_str(), "expert");
        assert_eq!(
            DifficultyFilter::parse("Ｅｘｐｅｒｔ"),
            DifficultyFilter::Only("expert".to_string())
        );
    }

    #[test]
    fn test_has_filters() {
        let mut filters = Filters::default();
        assert!(!has_filters(&filters));
        filters.select_difficulty(DifficultyFilter::parse("beginner"));
        assert!(has_filters(&filters));
        filters.select_difficulty(DifficultyFilter::All);
        filters.click(FilterButton::Class("MED".to_string()));
        assert!(has_filters(&filters));
    }
}
