//! Classification of schema fragments
//!
//! The walker dispatches on the first rule that matches, in this order:
//!
//! | rule | fragment has                              | shape          |
//! |------|-------------------------------------------|----------------|
//! | 1    | a string `$ref`                           | `Reference`    |
//! | 2    | `allOf`, `anyOf` or `oneOf` (first wins)  | `Combinator`   |
//! | 3    | `type: object` or a `properties` key      | `Object`       |
//! | 4    | `type: array` and `items`                 | `Array`        |
//! | 5    | anything else                             | `Leaf`         |
//!
//! Keys next to a `$ref` or a combinator are ignored.

use serde_json::{Map, Value};

/// Schema combinator keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `allOf`
    AllOf,
    /// `anyOf`
    AnyOf,
    /// `oneOf`
    OneOf,
}

impl Combinator {
    /// Precedence when a fragment carries several combinators
    pub const WALK_ORDER: [Self; 3] = [Self::AllOf, Self::AnyOf, Self::OneOf];

    /// Keyword as written in a schema
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::AllOf => "allOf",
            Self::AnyOf => "anyOf",
            Self::OneOf => "oneOf",
        }
    }
}

/// Shape of a schema fragment, as far as flattening is concerned
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaShape<'a> {
    /// Rule 1
    Reference(&'a str),
    /// Rule 2; a combinator whose value is not a sequence has no branches
    Combinator {
        /// Which keyword matched
        kind: Combinator,
        /// Branch schemas
        branches: &'a [Value],
    },
    /// Rule 3
    Object {
        /// Declared properties, in document order
        properties: Option<&'a Map<String, Value>>,
        /// Names listed under `required`
        required: Vec<&'a str>,
    },
    /// Rule 4
    Array {
        /// The `items` schema
        items: &'a Value,
    },
    /// Rule 5
    Leaf,
}

impl<'a> SchemaShape<'a> {
    /// Classify a fragment
    #[must_use]
    pub fn classify(fragment: &'a Value) -> Self {
        let Some(map) = fragment.as_object() else {
            return Self::Leaf;
        };

        if let Some(reference) = reference_of(fragment) {
            return Self::Reference(reference);
        }

        for kind in Combinator::WALK_ORDER {
            if let Some(value) = map.get(kind.keyword()) {
                return Self::Combinator {
                    kind,
                    branches: value.as_array().map(Vec::as_slice).unwrap_or_default(),
                };
            }
        }

        if is_object_like(fragment) {
            return Self::Object {
                properties: map.get("properties").and_then(Value::as_object),
                required: required_names(fragment),
            };
        }

        if declares_type(fragment, "array")
            && let Some(items) = map.get("items")
        {
            return Self::Array { items };
        }

        Self::Leaf
    }
}

/// `type: object` or a `properties` key
#[must_use]
pub fn is_object_like(fragment: &Value) -> bool {
    declares_type(fragment, "object") || fragment.get("properties").is_some()
}

/// Whether `type` is exactly the string `name`
#[must_use]
pub fn declares_type(fragment: &Value, name: &str) -> bool {
    fragment.get("type").and_then(Value::as_str) == Some(name)
}

/// The `$ref` string of a fragment, if it has one
#[must_use]
pub fn reference_of(fragment: &Value) -> Option<&str> {
    fragment.get("$ref").and_then(Value::as_str)
}

/// Names listed under `required`, ignoring non-string entries
#[must_use]
pub fn required_names(fragment: &Value) -> Vec<&str> {
    fragment
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}
