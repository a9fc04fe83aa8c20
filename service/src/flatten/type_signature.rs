//! Human readable type signatures

use serde_json::Value;

/// Signature checks in priority order after `type` and `enum`
const COMBINATOR_KEYWORDS: [&str; 3] = ["oneOf", "anyOf", "allOf"];

/// Derive a one-line type description for a schema fragment
///
/// Enums with at most `enum_inline_limit` values list them, larger ones
/// only give their size.
#[must_use]
pub fn type_signature(fragment: &Value, enum_inline_limit: usize) -> String {
    let Some(map) = fragment.as_object() else {
        return "unknown".to_string();
    };

    if let Some(declared) = map.get("type") {
        return match declared {
            Value::Array(names) => names.iter().map(display).collect::<Vec<_>>().join(" | "),
            Value::String(name) if name == "array" => {
                match map.get("items").filter(|items| is_truthy(items)) {
                    Some(items) => format!("array<{}>", type_signature(items, enum_inline_limit)),
                    None => "array<any>".to_string(),
                }
            }
            other => display(other),
        };
    }

    if let Some(values) = map.get("enum") {
        return match values {
            Value::Array(values) if values.len() <= enum_inline_limit => {
                let listed: Vec<String> = values.iter().map(display).collect();
                format!("enum({})", listed.join(", "))
            }
            Value::Array(values) => format!("enum({} values)", values.len()),
            other => format!("enum({})", display(other)),
        };
    }

    if let Some(keyword) = COMBINATOR_KEYWORDS.iter().find(|k| map.contains_key(**k)) {
        return (*keyword).to_string();
    }

    if let Some(reference) = map.get("$ref") {
        return format!("ref({})", display(reference));
    }

    "unknown".to_string()
}

/// Strings are shown raw, everything else in JSON notation
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
