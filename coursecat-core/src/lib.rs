// Public modules
pub mod accordion;
pub mod csv;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod filtering;
pub mod io;
pub mod joining;
pub mod layout;
pub mod models;
pub mod records;

// Re-export commonly used types for convenience
pub use accordion::{decode_accordion, encode_accordion, sections_for_units, AccordionSection};
pub use csv::{parse_csv_text, CsvRow};
pub use diagnostics::{collect_diagnostics, Diagnostic};
pub use error::{CatalogError, Result};
pub use export::{build_selection_export, save_selection, SELECTION_FILE_NAME, UNKNOWN_COURSE};
pub use filtering::{
    apply_filters, has_filters, matches_filters, next_active_button, tile_visible,
    DifficultyFilter, FilterButton, Filters,
};
pub use io::{load_catalog, load_catalog_sources, load_catalog_with_diagnostics};
pub use joining::{group_units_by_module, join_catalog, split_major_class_ids};
pub use layout::{layout_catalog, CatalogView, FilterButtonView, TileView};
pub use models::{
    CatalogData, Category, ClassRecord, Difficulty, EnrichedModule, ModuleRecord, UnitRecord,
};
pub use records::{records_from_rows, FromRow};
