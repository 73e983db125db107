use crate::csv::CsvRow;
use crate::models::{ClassRecord, ModuleRecord, UnitRecord};

/// Column names of the three source tables
pub mod columns {
    pub const CLASS_ID: &str = "ClassID";
    pub const BUTTON_TEXT: &str = "ButtonText";
    pub const COLOR: &str = "Color";

    pub const MODULE_ID: &str = "ModuleID";
    pub const MODULE_NAME: &str = "ModuleName";
    pub const MODULE_DESCRIPTION: &str = "ModuleDescription";
    pub const CATEGORY: &str = "Category";
    pub const DIFFICULTY: &str = "Difficulty";
    pub const MAJOR_CLASS_IDS: &str = "MajorClassIDs";

    pub const UNIT_ID: &str = "UnitID";
    pub const UNIT_NAME: &str = "UnitName";
    pub const UNIT_DESCRIPTION: &str = "UnitDescription";
}

/// Build a typed record from a parsed row.
///
/// Missing required columns read as empty strings and missing optional
/// columns as `None`; a row never fails to convert.
pub trait FromRow: Sized {
    fn from_row(row: &CsvRow) -> Self;
}

impl FromRow for ClassRecord {
    fn from_row(row: &CsvRow) -> Self {
        Self {
            class_id: row.value(columns::CLASS_ID).to_string(),
            button_text: row.value(columns::BUTTON_TEXT).to_string(),
            color: row.optional(columns::COLOR).map(str::to_string),
        }
    }
}

impl FromRow for ModuleRecord {
    fn from_row(row: &CsvRow) -> Self {
        Self {
            module_id: row.value(columns::MODULE_ID).to_string(),
            module_name: row.value(columns::MODULE_NAME).to_string(),
            module_description: row.optional(columns::MODULE_DESCRIPTION).map(str::to_string),
            category: row.value(columns::CATEGORY).to_string(),
            difficulty: row.value(columns::DIFFICULTY).to_string(),
            major_class_ids: row.optional(columns::MAJOR_CLASS_IDS).map(str::to_string),
        }
    }
}

impl FromRow for UnitRecord {
    fn from_row(row: &CsvRow) -> Self {
        Self {
            unit_id: row.optional(columns::UNIT_ID).map(str::to_string),
            module_id: row.value(columns::MODULE_ID).to_string(),
            unit_name: row.value(columns::UNIT_NAME).to_string(),
            unit_description: row.optional(columns::UNIT_DESCRIPTION).map(str::to_string),
        }
    }
}

/// Convert every row of a table
pub fn records_from_rows<T: FromRow>(rows: &[CsvRow]) -> Vec<T> {
    rows.iter().map(T::from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse_csv_text;

    #[test]
    fn test_class_record_optional_color() {
        let rows = parse_csv_text("ClassID;ButtonText;Color\nMED;Medicine;#ff0000\nCS;Computing;");
        let classes: Vec<ClassRecord> = records_from_rows(&rows);

        assert_eq!(classes[0].class_id, "MED");
        assert_eq!(classes[0].button_text, "Medicine");
        assert_eq!(classes[0].color.as_deref(), Some("#ff0000"));
        assert_eq!(classes[1].color, None);
    }

    #[test]
    fn test_module_record_missing_columns() {
        let rows = parse_csv_text("ModuleID;ModuleName\nM1;Calculus");
        let module = ModuleRecord::from_row(&rows[0]);

        assert_eq!(module.module_id, "M1");
        assert_eq!(module.module_name, "Calculus");
        assert_eq!(module.category, "");
        assert_eq!(module.difficulty, "");
        assert_eq!(module.module_description, None);
        assert_eq!(module.major_class_ids, None);
    }

    #[test]
    fn test_unit_record() {
        let rows = parse_csv_text(
            "UnitID;ModuleID;UnitName;UnitDescription\nU1;M1;Limits;\"Epsilon; delta\"\n;M1;Series;",
        );
        let units: Vec<UnitRecord> = records_from_rows(&rows);

        assert_eq!(units[0].unit_id.as_deref(), Some("U1"));
        assert_eq!(units[0].unit_description.as_deref(), Some("Epsilon; delta"));
        assert_eq!(units[1].unit_id, None);
        assert_eq!(units[1].unit_description, None);
    }
}
