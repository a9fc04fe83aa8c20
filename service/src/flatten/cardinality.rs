//! Cardinality notation for flattened properties

use super::shape::declares_type;
use serde_json::Value;
use std::fmt;

/// How many values a property takes
///
/// Only `minItems`/`maxItems` of array properties refine the plain
/// required/optional distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// `1..1`
    Required,
    /// `0..1`
    Optional,
    /// `0..1 (array)`: an optional array, whatever its bounds
    OptionalArray,
    /// `min..max`, or `min..*` when unbounded
    Array {
        /// Lower bound
        min: u64,
        /// Upper bound, `None` when unbounded
        max: Option<u64>,
    },
}

impl Cardinality {
    /// Derive the cardinality of property `name` from its schema and the
    /// `required` list of the object declaring it
    #[must_use]
    pub fn derive(fragment: &Value, required: &[&str], name: &str) -> Self {
        let is_required = required.contains(&name);

        if !declares_type(fragment, "array") {
            return if is_required {
                Self::Required
            } else {
                Self::Optional
            };
        }

        if !is_required {
            return Self::OptionalArray;
        }

        Self::Array {
            min: fragment
                .get("minItems")
                .and_then(Value::as_u64)
                .unwrap_or(0),
            max: fragment.get("maxItems").and_then(Value::as_u64),
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("1..1"),
            Self::Optional => f.write_str("0..1"),
            Self::OptionalArray => f.write_str("0..1 (array)"),
            Self::Array { min, max: Some(max) } => write!(f, "{min}..{max}"),
            Self::Array { min, max: None } => write!(f, "{min}..*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notation(fragment: &Value, required: &[&str]) -> String {
        Cardinality::derive(fragment, required, "p").to_string()
    }

    #[test]
    fn test_scalar_cardinality() {
        let fragment = json!({"type": "string"});
        assert_eq!(notation(&fragment, &["p"]), "1..1");
        assert_eq!(notation(&fragment, &["other"]), "0..1");
        assert_eq!(notation(&json!({}), &[]), "0..1");
    }

    #[test]
    fn test_required_array_bounds() {
        assert_eq!(
            notation(&json!({"type": "array", "minItems": 1}), &["p"]),
            "1..*"
        );
        assert_eq!(
            notation(&json!({"type": "array", "minItems": 2, "maxItems": 5}), &["p"]),
            "2..5"
        );
        assert_eq!(notation(&json!({"type": "array"}), &["p"]), "0..*");
        assert_eq!(
            notation(&json!({"type": "array", "maxItems": 3}), &["p"]),
            "0..3"
        );
    }

    #[test]
    fn test_optional_array_ignores_bounds() {
        assert_eq!(
            notation(&json!({"type": "array", "minItems": 1, "maxItems": 4}), &[]),
            "0..1 (array)"
        );
    }
}
