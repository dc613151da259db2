//! DOM-free view state of the attribute entry form.
//!
//! Everything here is pure data plus pure functions, so the visibility
//! and outcome logic is testable without a browser.

use contracts::attributes::{visible_fields, Field, FieldVerdict, ValidateQuery, DEFAULT_CATEGORY_ID};

/// Which fields are currently shown.
///
/// A field is visible iff it is in the most recently applied show-set,
/// so visible and hidden fields always partition the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility([bool; Field::COUNT]);

impl FieldVisibility {
    /// Visibility state showing exactly the given fields.
    pub fn showing(show: &[Field]) -> Self {
        let mut visible = [false; Field::COUNT];
        for field in show {
            visible[field.index()] = true;
        }
        Self(visible)
    }

    pub fn is_visible(&self, field: Field) -> bool {
        self.0[field.index()]
    }

    pub fn visible(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|f| self.is_visible(*f)).collect()
    }
}

impl Default for FieldVisibility {
    fn default() -> Self {
        // The show-set of the default category.
        Self::showing(visible_fields(DEFAULT_CATEGORY_ID).unwrap_or(&[]))
    }
}

/// Visibility after a category selection.
///
/// Unknown category identifiers leave the current visibility unchanged,
/// matching the observed behavior of the form.
pub fn apply_category(current: FieldVisibility, category_id: &str) -> FieldVisibility {
    match visible_fields(category_id) {
        Some(show) => FieldVisibility::showing(show),
        None => current,
    }
}

/// Raw values of the form controls.
///
/// Hidden fields keep whatever was entered; all values are submitted as
/// entered, without coercion or client-side checks.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeValues {
    pub category_id: String,
    values: [String; Field::COUNT],
}

impl Default for AttributeValues {
    fn default() -> Self {
        Self {
            category_id: DEFAULT_CATEGORY_ID.to_string(),
            values: Default::default(),
        }
    }
}

impl AttributeValues {
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        self.values[field.index()] = value;
    }

    pub fn to_query(&self) -> ValidateQuery {
        ValidateQuery {
            category_id: self.category_id.clone(),
            weight: self.values[Field::Weight.index()].clone(),
            width: self.values[Field::Width.index()].clone(),
            length: self.values[Field::Length.index()].clone(),
            depth: self.values[Field::Depth.index()].clone(),
            height: self.values[Field::Height.index()].clone(),
            storage_size: self.values[Field::StorageSize.index()].clone(),
            screen_size: self.values[Field::ScreenSize.index()].clone(),
            camera_pixel: self.values[Field::CameraPixel.index()].clone(),
        }
    }
}

/// One rendered outlier warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlierHint {
    pub label: String,
    pub direction: String,
}

impl OutlierHint {
    pub fn message(&self) -> String {
        format!("{}: Too {}", self.label, self.direction)
    }
}

/// Result of one processed validation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    AllValid,
    Outliers(Vec<OutlierHint>),
}

/// Fold a validation response into an outcome.
///
/// Invalid verdicts become outlier hints in response order. A verdict
/// whose field key is not in the registry is labeled with the raw key
/// instead of a broken fragment.
pub fn summarize(verdicts: &[FieldVerdict]) -> ValidationOutcome {
    let hints: Vec<OutlierHint> = verdicts
        .iter()
        .filter(|v| !v.is_valid())
        .map(|v| OutlierHint {
            label: match Field::from_key(v.field_key()) {
                Some(field) => field.label().to_string(),
                None => v.field_key().to_string(),
            },
            direction: v.direction().to_string(),
        })
        .collect();

    if hints.is_empty() {
        ValidationOutcome::AllValid
    } else {
        ValidationOutcome::Outliers(hints)
    }
}

/// What a finished validation request does to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestCompletion {
    Outcome(ValidationOutcome),
    Failed(String),
}

/// Process the completion of a validation request.
///
/// A completion whose generation is no longer current belonged to a
/// request that was superseded while in flight; it returns `None` and
/// must leave all state untouched, including the in-flight flag (the
/// newer request clears it when it completes). A current completion
/// always clears the in-flight flag, whether it carries an outcome or
/// a failure message.
pub fn complete_request(
    current_generation: u64,
    request_generation: u64,
    result: Result<Vec<FieldVerdict>, String>,
) -> Option<RequestCompletion> {
    if current_generation != request_generation {
        return None;
    }

    Some(match result {
        Ok(verdicts) => RequestCompletion::Outcome(summarize(&verdicts)),
        Err(e) => RequestCompletion::Failed(format!("Validation request failed: {}", e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::attributes::CATEGORIES;

    #[test]
    fn test_default_visibility_shows_only_weight() {
        let visibility = FieldVisibility::default();
        assert_eq!(visibility.visible(), vec![Field::Weight]);
    }

    #[test]
    fn test_each_category_shows_exactly_its_field_set() {
        for category in CATEGORIES {
            let visibility = apply_category(FieldVisibility::default(), category.id);
            for field in Field::ALL {
                assert_eq!(
                    visibility.is_visible(field),
                    category.fields.contains(&field),
                    "category {} field {:?}",
                    category.id,
                    field
                );
            }
        }
    }

    #[test]
    fn test_unknown_category_keeps_current_visibility() {
        let current = apply_category(FieldVisibility::default(), "5651");
        assert_eq!(apply_category(current, "99999"), current);
        assert_eq!(apply_category(current, ""), current);
    }

    #[test]
    fn test_reapplying_a_category_is_idempotent() {
        for category in CATEGORIES {
            let once = apply_category(FieldVisibility::default(), category.id);
            let twice = apply_category(once, category.id);
            assert_eq!(twice, once);
            assert_eq!(twice.visible(), once.visible());
        }
    }

    #[test]
    fn test_visible_and_hidden_partition_the_registry() {
        let visibility = FieldVisibility::showing(&[Field::ScreenSize, Field::CameraPixel]);
        let visible = visibility.visible();
        let hidden: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| !visibility.is_visible(*f))
            .collect();

        assert!(visible.iter().all(|f| !hidden.contains(f)));
        assert_eq!(visible.len() + hidden.len(), Field::COUNT);
    }

    #[test]
    fn test_values_survive_category_switches() {
        let mut values = AttributeValues::default();
        values.set_value(Field::Weight, "2.5".to_string());
        values.category_id = "5651".to_string();
        assert_eq!(values.value(Field::Weight), "2.5");
    }

    #[test]
    fn test_query_carries_raw_values() {
        let mut values = AttributeValues::default();
        values.category_id = "38371".to_string();
        values.set_value(Field::StorageSize, "512".to_string());
        values.set_value(Field::ScreenSize, "not a number".to_string());

        let query = values.to_query();
        assert_eq!(query.category_id, "38371");
        assert_eq!(query.storage_size, "512");
        assert_eq!(query.screen_size, "not a number");
        assert_eq!(query.weight, "");
    }

    #[test]
    fn test_all_valid_response_summarizes_to_all_valid() {
        let verdicts = vec![
            FieldVerdict::new(true, "weight", "low"),
            FieldVerdict::new(true, "storage_size", "high"),
        ];
        assert_eq!(summarize(&verdicts), ValidationOutcome::AllValid);
    }

    #[test]
    fn test_empty_response_summarizes_to_all_valid() {
        assert_eq!(summarize(&[]), ValidationOutcome::AllValid);
    }

    #[test]
    fn test_invalid_verdicts_become_hints_in_response_order() {
        let verdicts = vec![
            FieldVerdict::new(true, "weight", "low"),
            FieldVerdict::new(false, "width", "high"),
            FieldVerdict::new(false, "height", "low"),
        ];

        match summarize(&verdicts) {
            ValidationOutcome::Outliers(hints) => {
                assert_eq!(hints.len(), 2);
                assert_eq!(hints[0].message(), "Width: Too high");
                assert_eq!(hints[1].message(), "Height: Too low");
            }
            other => panic!("expected outliers, got {:?}", other),
        }
    }

    #[test]
    fn test_server_side_camera_pixel_key_resolves_to_label() {
        let verdicts = vec![FieldVerdict::new(false, "camera_pixel_max", "high")];
        match summarize(&verdicts) {
            ValidationOutcome::Outliers(hints) => {
                assert_eq!(hints[0].message(), "Camera Pixel: Too high");
            }
            other => panic!("expected outliers, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        // A second request was issued while the first was in flight;
        // the first response must not touch any state.
        let result = Ok(vec![FieldVerdict::new(false, "width", "high")]);
        assert_eq!(complete_request(2, 1, result), None);
    }

    #[test]
    fn test_current_completion_applies_the_outcome() {
        let result = Ok(vec![FieldVerdict::new(true, "weight", "low")]);
        assert_eq!(
            complete_request(1, 1, result),
            Some(RequestCompletion::Outcome(ValidationOutcome::AllValid))
        );
    }

    #[test]
    fn test_failed_completion_carries_the_error_message() {
        let result = Err("HTTP error: 500".to_string());
        assert_eq!(
            complete_request(3, 3, result),
            Some(RequestCompletion::Failed(
                "Validation request failed: HTTP error: 500".to_string()
            ))
        );
    }

    #[test]
    fn test_unregistered_field_key_falls_back_to_raw_key() {
        let verdicts = vec![FieldVerdict::new(false, "battery_capacity", "low")];
        match summarize(&verdicts) {
            ValidationOutcome::Outliers(hints) => {
                assert_eq!(hints[0].message(), "battery_capacity: Too low");
            }
            other => panic!("expected outliers, got {:?}", other),
        }
    }
}
