use crate::accordion::encode_accordion;
use crate::models::{CatalogData, ClassRecord, EnrichedModule, ModuleRecord, UnitRecord};
use std::collections::HashMap;

/// Group units by the module they belong to
/// Source order is kept within each group
pub fn group_units_by_module(units: &[UnitRecord]) -> HashMap<String, Vec<UnitRecord>> {
    let mut groups: HashMap<String, Vec<UnitRecord>> = HashMap::new();

    for unit in units {
        groups
            .entry(unit.module_id.clone())
            .or_default()
            .push(unit.clone());
    }

    groups
}

/// Split a '+'-joined class list, trimming each id and dropping empty parts
pub fn split_major_class_ids(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split('+')
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Attach a module's units and derive its filter keys
pub fn enrich_module(
    module: ModuleRecord,
    units_by_module: &HashMap<String, Vec<UnitRecord>>,
) -> EnrichedModule {
    let units = units_by_module
        .get(&module.module_id)
        .cloned()
        .unwrap_or_default();
    let major_class_ids = split_major_class_ids(module.major_class_ids.as_deref());
    let accordion_data = encode_accordion(&units);

    EnrichedModule {
        record: module,
        major_class_ids,
        units,
        accordion_data,
    }
}

/// Join the three tables. Classes pass through unchanged, modules keep their
/// order, and units whose module does not exist are dropped.
pub fn join_catalog(
    classes: Vec<ClassRecord>,
    modules: Vec<ModuleRecord>,
    units: Vec<UnitRecord>,
) -> CatalogData {
    let units_by_module = group_units_by_module(&units);

    let modules: Vec<EnrichedModule> = modules
        .into_iter()
        .map(|module| enrich_module(module, &units_by_module))
        .collect();

    let attached = units
        .iter()
        .filter(|u| modules.iter().any(|m| m.id() == u.module_id))
        .count();
    log::debug!(
        "Joined {} modules with {} of {} units ({} classes)",
        modules.len(),
        attached,
        units.len(),
        classes.len()
    );

    CatalogData { classes, modules }
}
