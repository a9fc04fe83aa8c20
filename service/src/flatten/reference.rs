//! Reference tokens, JSON pointers and the visited-reference guard

use serde_json::{Value, json};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use url::Url;

/// Classified `$ref` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceToken {
    /// `#/a/b` or `#`, pointing into the current document
    Internal {
        /// Everything after `#`
        fragment: String,
    },
    /// `file.yaml#/a/b`, `file.yaml` or a `file://` URL
    File {
        /// Path as written, relative paths resolve against the referencing document
        file: PathBuf,
        /// Everything after `#`, if present
        fragment: Option<String>,
    },
    /// Any other URI, never fetched
    Remote {
        /// The reference as written
        uri: String,
    },
}

impl ReferenceToken {
    /// Classify a reference string
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        if let Some(fragment) = reference.strip_prefix('#') {
            return Self::Internal {
                fragment: fragment.to_string(),
            };
        }

        // A one-letter scheme is a Windows drive letter, not a URI
        if let Ok(url) = Url::parse(reference)
            && url.scheme().len() > 1
        {
            if url.scheme() != "file" {
                return Self::Remote {
                    uri: reference.to_string(),
                };
            }
            if let Ok(file) = url.to_file_path() {
                return Self::File {
                    file,
                    fragment: url.fragment().map(str::to_string),
                };
            }
        }

        match reference.split_once('#') {
            Some((file, fragment)) => Self::File {
                file: PathBuf::from(file),
                fragment: Some(fragment.to_string()),
            },
            None => Self::File {
                file: PathBuf::from(reference),
                fragment: None,
            },
        }
    }
}

/// Split a fragment into JSON pointer segments
///
/// An empty fragment addresses the whole document. A fragment that is not a
/// pointer (a plain anchor such as `#Node`) yields `None`.
#[must_use]
pub fn pointer_segments(fragment: &str) -> Option<Vec<String>> {
    if fragment.is_empty() {
        return Some(Vec::new());
    }
    let pointer = fragment.strip_prefix('/')?;
    Some(
        pointer
            .split('/')
            .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
            .collect(),
    )
}

/// Walk pointer segments from `root`
///
/// Mapping segments are keys; sequence segments must be decimal indices.
#[must_use]
pub fn walk_pointer<'a>(root: &'a Value, segments: &[String]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(root, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Stand-ins substituted when a reference cannot be descended into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// The reference is already being resolved further up
    Cycle,
    /// The target file or pointer does not exist
    Unresolved,
    /// The reference points at a remote URI
    External,
}

impl Placeholder {
    /// Schema fragment standing in for `reference`
    #[must_use]
    pub fn fragment(self, reference: &str) -> Value {
        match self {
            Self::Cycle => json!({
                "type": "object",
                "description": format!("Circular reference to {reference}"),
            }),
            Self::Unresolved => json!({
                "type": "unknown",
                "description": format!("Unresolved reference: {reference}"),
            }),
            Self::External => json!({
                "type": "external",
                "description": format!("External reference: {reference}"),
            }),
        }
    }
}

/// Canonical key for a reference target: absolute document path plus fragment
#[must_use]
pub fn canonical_key(document: &Path, fragment: &str) -> String {
    format!("{}#{fragment}", document.display())
}

/// Set of reference targets currently being descended into
#[derive(Debug, Default)]
pub struct VisitGuard {
    active: HashSet<String>,
}

impl VisitGuard {
    /// Create an empty guard
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as active; returns `false` if it already was
    pub fn enter(&mut self, key: &str) -> bool {
        self.active.insert(key.to_string())
    }

    /// Mark `key` as no longer active
    pub fn leave(&mut self, key: &str) {
        self.active.remove(key);
    }

    /// Whether `key` is being descended into
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.active.contains(key)
    }

    /// Number of active keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no key is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Forget every active key
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_internal() {
        assert_eq!(
            ReferenceToken::parse("#/definitions/Node"),
            ReferenceToken::Internal {
                fragment: "/definitions/Node".to_string()
            }
        );
        assert_eq!(
            ReferenceToken::parse("#"),
            ReferenceToken::Internal {
                fragment: String::new()
            }
        );
    }

    #[test]
    fn test_classify_file() {
        assert_eq!(
            ReferenceToken::parse("common.yaml#/Address"),
            ReferenceToken::File {
                file: PathBuf::from("common.yaml"),
                fragment: Some("/Address".to_string())
            }
        );
        assert_eq!(
            ReferenceToken::parse("../shared/person.json"),
            ReferenceToken::File {
                file: PathBuf::from("../shared/person.json"),
                fragment: None
            }
        );
    }

    #[test]
    fn test_classify_remote_and_file_url() {
        assert_eq!(
            ReferenceToken::parse("https://example.org/schema.json#/Thing"),
            ReferenceToken::Remote {
                uri: "https://example.org/schema.json#/Thing".to_string()
            }
        );
        assert_eq!(
            ReferenceToken::parse("file:///tmp/schemas/a.yaml#/X"),
            ReferenceToken::File {
                file: PathBuf::from("/tmp/schemas/a.yaml"),
                fragment: Some("/X".to_string())
            }
        );
    }

    #[test]
    fn test_pointer_segments() {
        assert_eq!(pointer_segments(""), Some(vec![]));
        assert_eq!(
            pointer_segments("/a~1b/c~0d"),
            Some(vec!["a/b".to_string(), "c~d".to_string()])
        );
        assert_eq!(pointer_segments("Node"), None);
    }

    #[test]
    fn test_walk_pointer() {
        let root = json!({"a": {"b": [{"c": 1}, {"c": 2}]}});
        let segments = pointer_segments("/a/b/1/c").unwrap_or_default();
        assert_eq!(walk_pointer(&root, &segments), Some(&json!(2)));

        let missing = pointer_segments("/a/x").unwrap_or_default();
        assert_eq!(walk_pointer(&root, &missing), None);
        assert_eq!(walk_pointer(&root, &[]), Some(&root));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            Placeholder::Cycle.fragment("#/definitions/Node"),
            json!({"type": "object", "description": "Circular reference to #/definitions/Node"})
        );
        assert_eq!(
            Placeholder::Unresolved.fragment("#/nope")["type"],
            json!("unknown")
        );
        assert_eq!(
            Placeholder::External.fragment("http://x")["type"],
            json!("external")
        );
    }

    #[test]
    fn test_visit_guard() {
        let mut guard = VisitGuard::new();
        assert!(guard.enter("a.yaml#/X"));
        assert!(!guard.enter("a.yaml#/X"));
        assert!(guard.contains("a.yaml#/X"));
        guard.leave("a.yaml#/X");
        assert!(guard.is_empty());
    }
}
