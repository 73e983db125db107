use crate::models::{CatalogData, Category, Difficulty, UnitRecord};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A non-fatal finding about a joined catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    DuplicateClassId { class_id: String },
    DuplicateModuleId { module_id: String },
    OrphanUnit { unit_name: String, module_id: String },
    UnknownClassReference { module_id: String, class_id: String },
    UnmappedCategory { module_id: String, category: String },
    UnknownDifficulty { module_id: String, difficulty: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateClassId { class_id } => {
                write!(f, "Class '{}' is defined more than once", class_id)
            }
            Diagnostic::DuplicateModuleId { module_id } => {
                write!(f, "Module '{}' is defined more than once", module_id)
            }
            Diagnostic::OrphanUnit {
                unit_name,
                module_id,
            } => write!(
                f,
                "Unit '{}' references unknown module '{}' and is not shown",
                unit_name, module_id
            ),
            Diagnostic::UnknownClassReference {
                module_id,
                class_id,
            } => write!(
                f,
                "Module '{}' references unknown class '{}'",
                module_id, class_id
            ),
            Diagnostic::UnmappedCategory {
                module_id,
                category,
            } => write!(
                f,
                "Module '{}' has category '{}' which matches no container",
                module_id, category
            ),
            Diagnostic::UnknownDifficulty {
                module_id,
                difficulty,
            } => write!(
                f,
                "Module '{}' has unknown difficulty '{}'",
                module_id, difficulty
            ),
        }
    }
}

/// Inspect a joined catalog together with the raw unit table.
/// Findings never stop the catalog from loading.
pub fn collect_diagnostics(data: &CatalogData, units: &[UnitRecord]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let mut class_ids = HashSet::new();
    for class in &data.classes {
        if !class_ids.insert(class.class_id.as_str()) {
            diagnostics.push(Diagnostic::DuplicateClassId {
                class_id: class.class_id.clone(),
            });
        }
    }

    let mut module_ids = HashSet::new();
    for module in &data.modules {
        if !module_ids.insert(module.id()) {
            diagnostics.push(Diagnostic::DuplicateModuleId {
                module_id: module.id().to_string(),
            });
        }

        for class_id in &module.major_class_ids {
            if !class_ids.contains(class_id.as_str()) {
                diagnostics.push(Diagnostic::UnknownClassReference {
                    module_id: module.id().to_string(),
                    class_id: class_id.clone(),
                });
            }
        }

        if Category::from_label(&module.record.category).is_none() {
            diagnostics.push(Diagnostic::UnmappedCategory {
                module_id: module.id().to_string(),
                category: module.record.category.clone(),
            });
        }

        if Difficulty::from_label(&module.record.difficulty).is_none() {
            diagnostics.push(Diagnostic::UnknownDifficulty {
                module_id: module.id().to_string(),
                difficulty: module.record.difficulty.clone(),
            });
        }
    }

    for unit in units {
        if !module_ids.contains(unit.module_id.as_str()) {
            diagnostics.push(Diagnostic::OrphanUnit {
                unit_name: unit.unit_name.clone(),
                module_id: unit.module_id.clone(),
            });
        }
    }

    diagnostics
}
