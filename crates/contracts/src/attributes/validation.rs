//! Wire types of the `GET /validate` endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters of a validation request.
///
/// Values are sent exactly as entered, possibly empty; the endpoint
/// decides itself which of them it can interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateQuery {
    pub category_id: String,
    pub weight: String,
    pub width: String,
    pub length: String,
    pub depth: String,
    pub height: String,
    pub storage_size: String,
    pub screen_size: String,
    pub camera_pixel: String,
}

/// One record of a validation response.
///
/// The endpoint returns a JSON array of 3-element arrays
/// `[is_valid, field_key, direction]`, one per field it considered,
/// in its own iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldVerdict(pub bool, pub String, pub String);

impl FieldVerdict {
    pub fn new(is_valid: bool, field_key: impl Into<String>, direction: impl Into<String>) -> Self {
        Self(is_valid, field_key.into(), direction.into())
    }

    pub fn is_valid(&self) -> bool {
        self.0
    }

    pub fn field_key(&self) -> &str {
        &self.1
    }

    /// Which way the value deviates, e.g. "high" or "low".
    pub fn direction(&self) -> &str {
        &self.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdicts_deserialize_from_array_of_triples() {
        let json = r#"[[true, "weight", "low"], [false, "width", "high"]]"#;
        let verdicts: Vec<FieldVerdict> = serde_json::from_str(json).unwrap();

        assert_eq!(verdicts.len(), 2);
        assert!(verdicts[0].is_valid());
        assert_eq!(verdicts[0].field_key(), "weight");
        assert!(!verdicts[1].is_valid());
        assert_eq!(verdicts[1].field_key(), "width");
        assert_eq!(verdicts[1].direction(), "high");
    }

    #[test]
    fn test_empty_response_deserializes() {
        let verdicts: Vec<FieldVerdict> = serde_json::from_str("[]").unwrap();
        assert!(verdicts.is_empty());
    }

    #[test]
    fn test_verdict_serializes_as_triple() {
        let verdict = FieldVerdict::new(false, "screen_size", "low");
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(json, r#"[false,"screen_size","low"]"#);
    }
}
