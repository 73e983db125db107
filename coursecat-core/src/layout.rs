//! Presentation model of the catalog page.
//!
//! `layout_catalog` decides what the page shows: one filter button per
//! class, and one tile per module placed in its category bucket. The HTML
//! and terminal renderers only format this model.

use crate::filtering::{tile_visible, Filters};
use crate::models::{CatalogData, Category, Difficulty, EnrichedModule};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Segments of the skill-level indicator
pub const SKILL_SEGMENTS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButtonView {
    pub class_id: String,
    pub label: String,
    pub color: Option<String>,
}

/// Colored dot showing a class membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorView {
    pub class_id: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileView {
    pub module_id: String,
    pub name: String,
    pub category: Category,
    pub difficulty_class: String,
    pub class_tags: Vec<String>,
    pub accordion_data: String,
    pub unit_labels: Vec<String>,
    pub indicators: Vec<IndicatorView>,
    /// Filled skill segments, 0 for an unknown difficulty
    pub skill_level: u8,
}

impl TileView {
    pub fn is_visible(&self, filters: &Filters) -> bool {
        tile_visible(&self.class_tags, &self.difficulty_class, filters)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBucket {
    pub category: Category,
    pub tiles: Vec<TileView>,
}

/// A module left out because its category matched no container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedModule {
    pub module_id: String,
    pub module_name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub buttons: Vec<FilterButtonView>,
    pub buckets: Vec<CategoryBucket>,
    pub skipped: Vec<SkippedModule>,
}

impl CatalogView {
    /// Tiles in page order: buckets in container order, source order inside
    pub fn tiles(&self) -> impl Iterator<Item = &TileView> {
        self.buckets.iter().flat_map(|b| b.tiles.iter())
    }

    pub fn visible_tiles<'a>(&'a self, filters: &'a Filters) -> impl Iterator<Item = &'a TileView> {
        self.tiles().filter(move |tile| tile.is_visible(filters))
    }

    pub fn tile_count(&self) -> usize {
        self.buckets.iter().map(|b| b.tiles.len()).sum()
    }
}

/// Build the presentation model for a joined catalog
pub fn layout_catalog(data: &CatalogData) -> CatalogView {
    let buttons: Vec<FilterButtonView> = data
        .classes
        .iter()
        .map(|class| FilterButtonView {
            class_id: class.class_id.clone(),
            label: class.button_text.clone(),
            color: class.color.as_deref().and_then(sanitize_color),
        })
        .collect();

    let class_colors: HashMap<&str, Option<String>> = buttons
        .iter()
        .map(|b| (b.class_id.as_str(), b.color.clone()))
        .collect();

    let mut buckets: Vec<CategoryBucket> = Category::ALL
        .iter()
        .map(|&category| CategoryBucket {
            category,
            tiles: Vec::new(),
        })
        .collect();
    let mut skipped = Vec::new();

    for module in &data.modules {
        match module.category() {
            Some(category) => {
                let tile = build_tile(module, category, &class_colors);
                if let Some(bucket) = buckets.iter_mut().find(|b| b.category == category) {
                    bucket.tiles.push(tile);
                }
            }
            None => {
                log::warn!(
                    "No container found for category: {} (Module: {})",
                    module.record.category,
                    module.name()
                );
                skipped.push(SkippedModule {
                    module_id: module.id().to_string(),
                    module_name: module.name().to_string(),
                    category: module.record.category.clone(),
                });
            }
        }
    }

    CatalogView {
        buttons,
        buckets,
        skipped,
    }
}

fn build_tile(
    module: &EnrichedModule,
    category: Category,
    class_colors: &HashMap<&str, Option<String>>,
) -> TileView {
    let indicators = module
        .major_class_ids
        .iter()
        .map(|class_id| IndicatorView {
            class_id: class_id.clone(),
            color: class_colors.get(class_id.as_str()).cloned().flatten(),
        })
        .collect();

    TileView {
        module_id: module.id().to_string(),
        name: module.name().to_string(),
        category,
        difficulty_class: module.difficulty_class(),
        class_tags: module.major_class_ids.clone(),
        accordion_data: module.accordion_data.clone(),
        unit_labels: module.units.iter().map(|u| u.unit_name.clone()).collect(),
        indicators,
        skill_level: Difficulty::from_label(&module.record.difficulty)
            .map(|d| d.level())
            .unwrap_or(0),
    }
}

fn color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?i)(#[0-9a-f]{3,4}|#[0-9a-f]{6}|#[0-9a-f]{8}|(rgb|rgba|hsl|hsla)\(\s*[0-9.%]+(\s*,\s*[0-9.%]+){2,3}\s*\)|[a-z]{3,20})$",
        )
        .expect("color pattern is a valid regex")
    })
}

/// Accept a CSS color that is safe to inline into a style attribute
pub fn sanitize_color(raw: &str) -> Option<String> {
    let color = raw.trim();
    if color.is_empty() {
        return None;
    }

    if color_pattern().is_match(color) {
        Some(color.to_string())
    } else {
        log::warn!("Ignoring unsupported color value: {}", color);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joining::join_catalog;
    use crate::models::{ClassRecord, ModuleRecord, UnitRecord};

    fn module(id: &str, category: &str, difficulty: &str, classes: &str) -> ModuleRecord {
        ModuleRecord {
            module_id: id.to_string(),
            module_name: format!("Module {}", id),
            module_description: None,
            category: category.to_string(),
            difficulty: difficulty.to_string(),
            major_class_ids: Some(classes.to_string()),
        }
    }

    fn sample() -> CatalogData {
        join_catalog(
            vec![
                ClassRecord {
                    class_id: "MED".to_string(),
                    button_text: "Medicine".to_string(),
                    color: Some("#c0392b".to_string()),
                },
                ClassRecord {
                    class_id: "CS".to_string(),
                    button_text: "Computing".to_string(),
                    color: Some("red;background:url(x)".to_string()),
                },
            ],
            vec![
                module("A1", "Applications", "Expert", "MED"),
                module("M1", "mathematics", "Beginner", "MED+CS"),
                module("X1", "Physics", "Beginner", "CS"),
                module("L1", "Machine Learning", "Intermediate", "CS"),
                module("M2", "Mathematics", "unknown", ""),
            ],
            vec![UnitRecord {
                unit_id: None,
                module_id: "M1".to_string(),
                unit_name: "Limits".to_string(),
                unit_description: None,
            }],
        )
    }

    #[test]
    fn test_buttons_and_colors() {
        let view = layout_catalog(&sample());
        assert_eq!(view.buttons.len(), 2);
        assert_eq!(view.buttons[0].label, "Medicine");
        assert_eq!(view.buttons[0].color.as_deref(), Some("#c0392b"));
        assert_eq!(view.buttons[1].color, None);
    }

    #[test]
    fn test_tiles_are_bucketed_in_page_order() {
        let view = layout_catalog(&sample());
        let order: Vec<_> = view.tiles().map(|t| t.module_id.as_str()).collect();
        assert_eq!(order, vec!["M1", "M2", "L1", "A1"]);
        assert_eq!(view.tile_count(), 4);
        assert_eq!(view.buckets[0].category, Category::Mathematics);
    }

    #[test]
    fn test_unmapped_category_is_skipped() {
        let view = layout_catalog(&sample());
        assert_eq!(view.skipped.len(), 1);
        assert_eq!(view.skipped[0].module_id, "X1");
        assert_eq!(view.skipped[0].category, "Physics");
    }

    #[test]
    fn test_tile_contents() {
        let view = layout_catalog(&sample());
        let m1 = view.tiles().find(|t| t.module_id == "M1").unwrap();

        assert_eq!(m1.difficulty_class, "beginner");
        assert_eq!(m1.class_tags, vec!["MED", "CS"]);
        assert_eq!(m1.unit_labels, vec!["Limits"]);
        assert_eq!(m1.accordion_data, "Limits:Details not available.");
        assert_eq!(m1.skill_level, 1);
        assert_eq!(m1.indicators[0].color.as_deref(), Some("#c0392b"));
        assert_eq!(m1.indicators[1].color, None);

        let m2 = view.tiles().find(|t| t.module_id == "M2").unwrap();
        assert_eq!(m2.skill_level, 0);
        assert!(m2.indicators.is_empty());
    }

    #[test]
    fn test_visible_tiles() {
        let view = layout_catalog(&sample());
        let mut filters = Filters::default();
        filters.click(crate::filtering::FilterButton::Class("CS".to_string()));

        let visible: Vec<_> = view
            .visible_tiles(&filters)
            .map(|t| t.module_id.as_str())
            .collect();
        assert_eq!(visible, vec!["M1", "L1"]);
    }

    #[test]
    fn test_sanitize_color() {
        assert_eq!(sanitize_color(" #FFF "), Some("#FFF".to_string()));
        assert_eq!(sanitize_color("rebeccapurple"), Some("rebeccapurple".to_string()));
        assert_eq!(
            sanitize_color("rgba(10, 20, 30, 0.5)"),
            Some("rgba(10, 20, 30, 0.5)".to_string())
        );
        assert_eq!(sanitize_color(""), None);
        assert_eq!(sanitize_color("#12345"), None);
        assert_eq!(sanitize_color("red\" onclick=\"x"), None);
    }
}
