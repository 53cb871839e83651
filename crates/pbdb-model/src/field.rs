use serde::{Deserialize, Serialize};

/// Display marker for a verbose name that no compact code maps to.
pub const NOT_AVAILABLE: &str = "N/A";

/// One compact/verbose pair of the field table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldEntry {
    /// Short code used by the compact download format (e.g., "tna").
    pub compact_code: String,
    /// Full field name used by the verbose download format (e.g., "accepted_name").
    pub verbose_name: String,
}

impl FieldEntry {
    pub fn new(compact_code: impl Into<String>, verbose_name: impl Into<String>) -> Self {
        Self {
            compact_code: compact_code.into(),
            verbose_name: verbose_name.into(),
        }
    }
}

/// Resolved metadata for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub compact_code: String,
    pub verbose_name: String,
    /// First category (in declared order) that lists the verbose name.
    pub category: Option<String>,
}

/// A verbose name listed under a category, with its compact code if one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryField {
    pub compact_code: Option<String>,
    pub verbose_name: String,
}

impl CategoryField {
    /// Compact code, or [`NOT_AVAILABLE`] when none maps to this name.
    pub fn compact_or_marker(&self) -> &str {
        self.compact_code.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// All fields of one category, in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListing {
    pub category: String,
    pub fields: Vec<CategoryField>,
}

impl CategoryListing {
    /// Heading form of the category name ("stratigraphic_units" -> "STRATIGRAPHIC UNITS").
    pub fn title(&self) -> String {
        self.category.to_uppercase().replace('_', " ")
    }

    /// Number of listed fields without a compact code.
    pub fn unmapped_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|field| field.compact_code.is_none())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_title_and_marker() {
        let listing = CategoryListing {
            category: "spatial_data".to_string(),
            fields: vec![
                CategoryField {
                    compact_code: Some("lat".to_string()),
                    verbose_name: "lat".to_string(),
                },
                CategoryField {
                    compact_code: None,
                    verbose_name: "country".to_string(),
                },
            ],
        };
        assert_eq!(listing.title(), "SPATIAL DATA");
        assert_eq!(listing.fields[1].compact_or_marker(), NOT_AVAILABLE);
        assert_eq!(listing.unmapped_count(), 1);
    }
}
