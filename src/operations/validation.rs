use coursecat_core::{CatalogData, Difficulty, DifficultyFilter, FilterButton};

use crate::cli::FilterArgs;

/// Validation error with field and message
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Check filter input against the loaded catalog.
/// Unknown values are still applied (they just match nothing), so these
/// are warnings rather than failures.
pub fn validate_filter_input(data: &CatalogData, args: &FilterArgs) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for click in &args.clicks {
        if let FilterButton::Class(class_id) = FilterButton::parse(click) {
            if data.find_class(&class_id).is_none() {
                errors.push(ValidationError {
                    field: "click".to_string(),
                    message: format!("No filter button for class '{}'", class_id),
                });
            }
        }
    }

    if let DifficultyFilter::Only(level) = DifficultyFilter::parse(&args.difficulty) {
        if Difficulty::from_label(&level).is_none() {
            errors.push(ValidationError {
                field: "difficulty".to_string(),
                message: format!(
                    "Unknown level '{}', expected all, beginner, intermediate or expert",
                    level
                ),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursecat_core::ClassRecord;

    fn data() -> CatalogData {
        CatalogData {
            classes: vec![ClassRecord {
                class_id: "MED".to_string(),
                button_text: "Medicine".to_string(),
                color: None,
            }],
            modules: Vec::new(),
        }
    }

    #[test]
    fn test_valid_input() {
        let args = FilterArgs {
            clicks: vec!["MED".to_string(), "all".to_string()],
            difficulty: "Beginner".to_string(),
        };
        assert!(validate_filter_input(&data(), &args).is_empty());
    }

    #[test]
    fn test_unknown_class_and_level() {
        let args = FilterArgs {
            clicks: vec!["BIO".to_string()],
            difficulty: "wizard".to_string(),
        };
        let errors = validate_filter_input(&data(), &args);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "click: No filter button for class 'BIO'");
        assert_eq!(errors[1].field, "difficulty");
    }
}
