use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A row of `classes.csv`: one filter button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    #[serde(rename = "ClassID")]
    pub class_id: String,
    #[serde(rename = "ButtonText")]
    pub button_text: String,
    #[serde(rename = "Color", default)]
    pub color: Option<String>,
}

/// A row of `modules.csv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    #[serde(rename = "ModuleID")]
    pub module_id: String,
    #[serde(rename = "ModuleName")]
    pub module_name: String,
    #[serde(rename = "ModuleDescription", default)]
    pub module_description: Option<String>,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Difficulty")]
    pub difficulty: String,
    /// Raw '+'-joined class references, e.g. `MED+LIFE`
    #[serde(rename = "MajorClassIDs", default)]
    pub major_class_ids: Option<String>,
}

/// A row of `units.csv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    #[serde(rename = "UnitID", default)]
    pub unit_id: Option<String>,
    #[serde(rename = "ModuleID")]
    pub module_id: String,
    #[serde(rename = "UnitName")]
    pub unit_name: String,
    #[serde(rename = "UnitDescription", default)]
    pub unit_description: Option<String>,
}

/// A module joined with its units and the keys derived for filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedModule {
    #[serde(flatten)]
    pub record: ModuleRecord,
    #[serde(rename = "majorClassIDs")]
    pub major_class_ids: Vec<String>,
    pub units: Vec<UnitRecord>,
    #[serde(rename = "accordionDataString")]
    pub accordion_data: String,
}

impl EnrichedModule {
    pub fn id(&self) -> &str {
        &self.record.module_id
    }

    pub fn name(&self) -> &str {
        &self.record.module_name
    }

    /// Normalized difficulty, the tag matched by the difficulty selector
    pub fn difficulty_class(&self) -> String {
        normalize_label(&self.record.difficulty)
    }

    pub fn category(&self) -> Option<Category> {
        Category::from_label(&self.record.category)
    }

    pub fn has_class(&self, class_id: &str) -> bool {
        self.major_class_ids.iter().any(|id| id == class_id)
    }
}

/// Output of the joiner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    pub classes: Vec<ClassRecord>,
    pub modules: Vec<EnrichedModule>,
}

impl CatalogData {
    pub fn find_class(&self, class_id: &str) -> Option<&ClassRecord> {
        self.classes.iter().find(|c| c.class_id == class_id)
    }

    pub fn find_module(&self, module_id: &str) -> Option<&EnrichedModule> {
        self.modules.iter().find(|m| m.id() == module_id)
    }
}

/// The three topic containers a tile can land in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Mathematics,
    MachineLearning,
    Applications,
}

impl Category {
    /// Containers in page order
    pub const ALL: [Category; 3] = [
        Category::Mathematics,
        Category::MachineLearning,
        Category::Applications,
    ];

    /// Case-insensitive match against the category column
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "mathematics" => Some(Category::Mathematics),
            "machine learning" => Some(Category::MachineLearning),
            "applications" => Some(Category::Applications),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Mathematics => "Mathematics",
            Category::MachineLearning => "Machine Learning",
            Category::Applications => "Applications",
        }
    }

    /// Id of the page element holding this category's tiles
    pub fn container_id(&self) -> &'static str {
        match self {
            Category::Mathematics => "math-container",
            Category::MachineLearning => "ml-container",
            Category::Applications => "applications-container",
        }
    }
}

/// Known difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Expert => "expert",
        }
    }

    /// Filled segments of the 3-segment skill indicator
    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Expert => 3,
        }
    }
}

/// Normalize a label for comparison
/// - Unicode NFKC, then lowercase
/// - Collapse internal whitespace
pub fn normalize_label(s: &str) -> String {
    let normalized: String = s.nfkc().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}
