//! Static category table: which attribute fields each product category uses.

use super::fields::Field;

/// A product classification selecting which attribute fields are relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// String-encoded category identifier, as submitted to the endpoint.
    pub id: &'static str,
    /// Display name for the category dropdown.
    pub name: &'static str,
    /// Fields shown while this category is selected.
    pub fields: &'static [Field],
}

/// Category preselected when the form loads.
pub const DEFAULT_CATEGORY_ID: &str = "46051";

/// All known categories, in dropdown order.
pub const CATEGORIES: [Category; 6] = [
    Category {
        id: "46051",
        name: "Small Appliances",
        fields: &[Field::Weight],
    },
    Category {
        id: "38371",
        name: "Notebooks",
        fields: &[Field::Weight, Field::StorageSize, Field::ScreenSize],
    },
    Category {
        id: "5651",
        name: "Furniture",
        fields: &[Field::Depth, Field::Height, Field::Length, Field::Width],
    },
    Category {
        id: "34501",
        name: "Blinds",
        fields: &[Field::Width],
    },
    Category {
        id: "46071",
        name: "Tablets",
        fields: &[Field::ScreenSize, Field::StorageSize],
    },
    Category {
        id: "36731",
        name: "Smartphones",
        fields: &[Field::ScreenSize, Field::CameraPixel],
    },
];

/// Look up the field set for a category identifier.
///
/// Unknown identifiers return `None`; the form treats that as a no-op
/// and keeps the currently visible field set.
pub fn visible_fields(category_id: &str) -> Option<&'static [Field]> {
    CATEGORIES
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_shows_only_weight() {
        assert_eq!(visible_fields(DEFAULT_CATEGORY_ID), Some(&[Field::Weight][..]));
    }

    #[test]
    fn test_every_category_resolves_to_its_field_set() {
        for category in CATEGORIES {
            assert_eq!(visible_fields(category.id), Some(category.fields));
            assert!(!category.fields.is_empty());
        }
    }

    #[test]
    fn test_notebook_field_set() {
        assert_eq!(
            visible_fields("38371"),
            Some(&[Field::Weight, Field::StorageSize, Field::ScreenSize][..])
        );
    }

    #[test]
    fn test_unknown_category_has_no_field_set() {
        assert_eq!(visible_fields("99999"), None);
        assert_eq!(visible_fields(""), None);
    }
}
