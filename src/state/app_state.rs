use std::collections::HashMap;
use std::path::PathBuf;
use coursecat_core::*;

/// Application state management - Domain state only
/// This struct contains the loaded catalog, its layout and the filter state
#[derive(Debug)]
pub struct AppState {
    /// Joined catalog
    pub data: CatalogData,
    /// Presentation model built from `data`
    pub view: CatalogView,
    /// Active filter button and difficulty selector
    pub filters: Filters,
    /// Directory the catalog was loaded from
    pub data_dir: PathBuf,
    /// Module id -> index into `data.modules`
    module_index: HashMap<String, usize>,
}

impl AppState {
    pub fn new(data: CatalogData, data_dir: PathBuf) -> Self {
        let view = layout_catalog(&data);

        // Later rows win on duplicate ids
        let module_index = data
            .modules
            .iter()
            .enumerate()
            .map(|(index, module)| (module.id().to_string(), index))
            .collect();

        Self {
            data,
            view,
            filters: Filters::default(),
            data_dir,
            module_index,
        }
    }

    /// Apply a filter button click
    pub fn click_filter(&mut self, button: FilterButton) {
        self.filters.click(button);
    }

    /// Change the difficulty selector
    pub fn select_difficulty(&mut self, difficulty: DifficultyFilter) {
        self.filters.select_difficulty(difficulty);
    }

    /// Tiles visible under the current filters, in page order
    pub fn visible_tiles(&self) -> Vec<&TileView> {
        self.view.visible_tiles(&self.filters).collect()
    }

    /// Look up a module by id
    pub fn get_module(&self, module_id: &str) -> Option<&EnrichedModule> {
        self.module_index
            .get(module_id)
            .and_then(|&index| self.data.modules.get(index))
    }

    /// Names of the visible courses, in page order
    pub fn selected_course_names(&self) -> Vec<String> {
        self.visible_tiles()
            .iter()
            .map(|tile| {
                self.get_module(&tile.module_id)
                    .map(|module| module.name().to_string())
                    .unwrap_or_else(|| UNKNOWN_COURSE.to_string())
            })
            .collect()
    }

    /// One-line summary of what is shown
    pub fn get_status_line(&self) -> String {
        let filter = self
            .filters
            .active_button
            .as_ref()
            .map(|button| button.to_string())
            .unwrap_or_else(|| "none".to_string());

        format!(
            "Showing {} of {} courses (filter: {}, difficulty: {})",
            self.visible_tiles().len(),
            self.view.tile_count(),
            filter,
            self.filters.difficulty.as_str()
        )
    }
}
