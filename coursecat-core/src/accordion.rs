use crate::models::UnitRecord;
use serde::{Deserialize, Serialize};

/// Shown for a unit without a description
pub const MISSING_DETAILS: &str = "Details not available.";

const ITEM_SEPARATOR: char = '|';
const NAME_SEPARATOR: char = ':';

/// One collapsible section of the module popup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionSection {
    pub name: String,
    pub details: String,
}

/// Encode units as `name:details|name:details`.
/// Names or details containing ':' or '|' do not survive a decode.
pub fn encode_accordion(units: &[UnitRecord]) -> String {
    units
        .iter()
        .map(|u| {
            format!(
                "{}{}{}",
                u.unit_name,
                NAME_SEPARATOR,
                unit_details(u)
            )
        })
        .collect::<Vec<_>>()
        .join(&ITEM_SEPARATOR.to_string())
}

/// Decode an accordion string, splitting each item on its first ':'.
/// Items with a blank name are skipped.
pub fn decode_accordion(data: &str) -> Vec<AccordionSection> {
    if data.is_empty() {
        return Vec::new();
    }

    data.split(ITEM_SEPARATOR)
        .filter_map(|item| {
            let (name, details) = item.split_once(NAME_SEPARATOR).unwrap_or((item, ""));
            if name.trim().is_empty() {
                None
            } else {
                Some(AccordionSection {
                    name: name.to_string(),
                    details: details.to_string(),
                })
            }
        })
        .collect()
}

/// Popup sections built straight from a module's units
pub fn sections_for_units(units: &[UnitRecord]) -> Vec<AccordionSection> {
    units
        .iter()
        .filter(|u| !u.unit_name.trim().is_empty())
        .map(|u| AccordionSection {
            name: u.unit_name.clone(),
            details: unit_details(u).to_string(),
        })
        .collect()
}

fn unit_details(unit: &UnitRecord) -> &str {
    unit.unit_description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(MISSING_DETAILS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(name: &str, description: Option<&str>) -> UnitRecord {
        UnitRecord {
            unit_id: None,
            module_id: "M1".to_string(),
            unit_name: name.to_string(),
            unit_description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_encode_uses_default_details() {
        let units = vec![unit("Limits", Some("Epsilon and delta")), unit("Series", None)];
        assert_eq!(
            encode_accordion(&units),
            "Limits:Epsilon and delta|Series:Details not available."
        );
    }

    #[test]
    fn test_round_trip_without_separators() {
        let units = vec![
            unit("Vectors", Some("Spaces and bases")),
            unit("Matrices", Some("Products, inverses")),
            unit("Eigenvalues", None),
        ];

        let decoded = decode_accordion(&encode_accordion(&units));
        assert_eq!(decoded, sections_for_units(&units));
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[2].details, MISSING_DETAILS);
    }

    #[test]
    fn test_decode_splits_on_first_colon() {
        let sections = decode_accordion("Time:12:30 lecture|Plain");
        assert_eq!(sections[0].name, "Time");
        assert_eq!(sections[0].details, "12:30 lecture");
        assert_eq!(sections[1].name, "Plain");
        assert_eq!(sections[1].details, "");
    }

    #[test]
    fn test_decode_skips_blank_names() {
        assert!(decode_accordion("").is_empty());
        let sections = decode_accordion(" :orphan|A:a");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "A");
    }

    #[test]
    fn test_structured_sections_keep_separators() {
        let units = vec![unit("Ratio: a|b", Some("x:y"))];
        let sections = sections_for_units(&units);
        assert_eq!(sections[0].name, "Ratio: a|b");
        assert_eq!(sections[0].details, "x:y");
    }
}
