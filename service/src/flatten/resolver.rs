//! `$ref` resolution across documents
//!
//! A successful resolution marks its target as active in the [`VisitGuard`]
//! until the caller hands it back through [`ReferenceResolver::release`].
//! Resolving an active target again yields the cycle placeholder instead of
//! the fragment, which is what terminates recursive schemas.

use super::loader::{DocumentLoader, LoaderStats, SchemaDocument};
use super::reference::{
    Placeholder, ReferenceToken, VisitGuard, canonical_key, pointer_segments, walk_pointer,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

static NULL: Value = Value::Null;

#[derive(Debug)]
enum Target {
    Pointer(Vec<String>),
    Placeholder(Placeholder, Value),
}

/// Outcome of resolving one reference
///
/// Carries the document the fragment lives in, which becomes the context for
/// references nested inside the fragment.
#[derive(Debug)]
pub struct Resolved {
    document: Arc<SchemaDocument>,
    target: Target,
    guard_key: Option<String>,
}

impl Resolved {
    /// The resolved schema fragment, or a placeholder fragment
    #[must_use]
    pub fn fragment(&self) -> &Value {
        match &self.target {
            Target::Pointer(segments) => walk_pointer(self.document.root(), segments).unwrap_or(&NULL),
            Target::Placeholder(_, fragment) => fragment,
        }
    }

    /// Document the fragment belongs to
    #[must_use]
    pub const fn document(&self) -> &Arc<SchemaDocument> {
        &self.document
    }

    /// Which placeholder was substituted, if any
    #[must_use]
    pub const fn placeholder(&self) -> Option<Placeholder> {
        match &self.target {
            Target::Pointer(_) => None,
            Target::Placeholder(kind, _) => Some(*kind),
        }
    }
}

/// Placeholder substitutions since the last reset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    /// References cut because their target was already being visited
    pub cycles: usize,
    /// Remote references left unfollowed
    pub external: usize,
    /// References whose target does not exist, as written
    pub unresolved: Vec<String>,
}

/// Resolves references against cached documents
pub struct ReferenceResolver {
    loader: DocumentLoader,
    guard: VisitGuard,
    stats: ResolutionStats,
}

impl ReferenceResolver {
    /// Create a resolver on top of a document loader
    #[must_use]
    pub fn new(loader: DocumentLoader) -> Self {
        Self {
            loader,
            guard: VisitGuard::new(),
            stats: ResolutionStats::default(),
        }
    }

    /// Underlying loader
    #[must_use]
    pub const fn loader(&self) -> &DocumentLoader {
        &self.loader
    }

    /// Underlying loader, mutably
    pub fn loader_mut(&mut self) -> &mut DocumentLoader {
        &mut self.loader
    }

    /// Loader counters since the last reset
    #[must_use]
    pub const fn loader_stats(&self) -> LoaderStats {
        self.loader.stats()
    }

    /// Targets currently being descended into
    #[must_use]
    pub const fn guard(&self) -> &VisitGuard {
        &self.guard
    }

    /// Placeholders substituted since the last reset
    #[must_use]
    pub const fn stats(&self) -> &ResolutionStats {
        &self.stats
    }

    /// Clear the document cache, the visit guard and the counters
    pub fn reset(&mut self) {
        self.loader.clear();
        self.guard.clear();
        self.stats = ResolutionStats::default();
    }

    /// Resolve `reference` as written inside `document`
    pub fn resolve(&mut self, reference: &str, document: &Arc<SchemaDocument>) -> Resolved {
        match ReferenceToken::parse(reference) {
            ReferenceToken::Remote { .. } => {
                debug!("Not following external reference {reference}");
                self.substitute(Placeholder::External, reference, document)
            }
            ReferenceToken::Internal { fragment } => {
                self.locate(reference, Arc::clone(document), &fragment)
            }
            ReferenceToken::File { file, fragment } => {
                let path = if file.is_absolute() {
                    file
                } else {
                    document.directory().join(file)
                };
                let target = self.loader.load(&path);
                self.locate(reference, target, fragment.as_deref().unwrap_or_default())
            }
        }
    }

    fn locate(&mut self, reference: &str, document: Arc<SchemaDocument>, fragment: &str) -> Resolved {
        let key = canonical_key(document.path(), fragment);
        if self.guard.contains(&key) {
            debug!("Circular reference {reference} at {key}");
            return self.substitute(Placeholder::Cycle, reference, &document);
        }

        match pointer_segments(fragment) {
            Some(segments) if walk_pointer(document.root(), &segments).is_some() => {
                self.guard.enter(&key);
                Resolved {
                    document,
                    target: Target::Pointer(segments),
                    guard_key: Some(key),
                }
            }
            _ => {
                debug!("Unresolved reference {reference}");
                self.substitute(Placeholder::Unresolved, reference, &document)
            }
        }
    }

    /// Hand a resolution back once its fragment has been fully visited
    pub fn release(&mut self, resolved: Resolved) {
        if let Some(key) = resolved.guard_key {
            self.guard.leave(&key);
        }
    }

    /// Replace every `$ref` below `value` with its target, recursively
    ///
    /// Cycles are cut with the cycle placeholder, unresolvable and remote
    /// references with theirs.
    pub fn inline(&mut self, value: &Value, document: &Arc<SchemaDocument>) -> Value {
        match value {
            Value::Object(map) => {
                if let Some(Value::String(reference)) = map.get("$ref") {
                    let resolved = self.resolve(reference, document);
                    let inlined = self.inline(resolved.fragment(), resolved.document());
                    self.release(resolved);
                    return inlined;
                }
                Value::Object(
                    map.iter()
                        .map(|(key, child)| (key.clone(), self.inline(child, document)))
                        .collect(),
                )
            }
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.inline(item, document)).collect())
            }
            other => other.clone(),
        }
    }

    fn substitute(
        &mut self,
        kind: Placeholder,
        reference: &str,
        document: &Arc<SchemaDocument>,
    ) -> Resolved {
        match kind {
            Placeholder::Cycle => self.stats.cycles += 1,
            Placeholder::External => self.stats.external += 1,
            Placeholder::Unresolved => self.stats.unresolved.push(reference.to_string()),
        }
        Resolved {
            document: Arc::clone(document),
            target: Target::Placeholder(kind, kind.fragment(reference)),
            guard_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn in_memory(root: Value) -> Arc<SchemaDocument> {
        Arc::new(SchemaDocument::new("/virtual/root.json", root))
    }

    #[test]
    fn test_internal_reference() {
        let document = in_memory(json!({"definitions": {"Id": {"type": "string"}}}));
        let mut resolver = ReferenceResolver::new(DocumentLoader::new("/virtual"));

        let resolved = resolver.resolve("#/definitions/Id", &document);
        assert_eq!(resolved.fragment(), &json!({"type": "string"}));
        assert_eq!(resolved.placeholder(), None);
        assert_eq!(resolver.guard().len(), 1);

        resolver.release(resolved);
        assert!(resolver.guard().is_empty());
    }

    #[test]
    fn test_active_target_yields_cycle_placeholder() {
        let document = in_memory(json!({"definitions": {"Node": {"type": "object"}}}));
        let mut resolver = ReferenceResolver::new(DocumentLoader::new("/virtual"));

        let outer = resolver.resolve("#/definitions/Node", &document);
        let inner = resolver.resolve("#/definitions/Node", &document);
        assert_eq!(inner.placeholder(), Some(Placeholder::Cycle));
        assert_eq!(
            inner.fragment()["description"],
            json!("Circular reference to #/definitions/Node")
        );

        resolver.release(inner);
        assert_eq!(resolver.guard().len(), 1);
        resolver.release(outer);
        assert!(resolver.guard().is_empty());
        assert_eq!(resolver.stats().cycles, 1);
    }

    #[test]
    fn test_unknown_pointer_is_unresolved() {
        let document = in_memory(json!({}));
        let mut resolver = ReferenceResolver::new(DocumentLoader::new("/virtual"));

        let resolved = resolver.resolve("#/definitions/Missing", &document);
        assert_eq!(resolved.placeholder(), Some(Placeholder::Unresolved));
        assert_eq!(
            resolved.fragment(),
            &json!({"type": "unknown", "description": "Unresolved reference: #/definitions/Missing"})
        );
        assert!(resolver.guard().is_empty());
        assert_eq!(resolver.stats().unresolved, ["#/definitions/Missing"]);

        resolver.reset();
        assert_eq!(resolver.stats(), &ResolutionStats::default());
    }

    #[test]
    fn test_remote_reference_is_external() {
        let document = in_memory(json!({}));
        let mut resolver = ReferenceResolver::new(DocumentLoader::new("/virtual"));

        let resolved = resolver.resolve("https://example.org/x.json", &document);
        assert_eq!(resolved.placeholder(), Some(Placeholder::External));
        assert_eq!(resolved.fragment()["type"], json!("external"));
    }

    #[test]
    fn test_file_reference_switches_document() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::create_dir(temp_dir.path().join("shared"))?;
        fs::write(
            temp_dir.path().join("shared/common.yaml"),
            "Address:\n  type: object\n",
        )?;
        fs::write(
            temp_dir.path().join("root.yaml"),
            "$ref: 'shared/common.yaml#/Address'\n",
        )?;

        let mut resolver = ReferenceResolver::new(DocumentLoader::new(temp_dir.path()));
        let root = resolver.loader_mut().load(Path::new("root.yaml"));
        let resolved = resolver.resolve("shared/common.yaml#/Address", &root);

        assert_eq!(resolved.fragment(), &json!({"type": "object"}));
        assert!(resolved.document().path().ends_with("shared/common.yaml"));
        Ok(())
    }

    #[test]
    fn test_inline_cuts_cycles() {
        let document = in_memory(json!({
            "definitions": {
                "Node": {
                    "type": "object",
                    "properties": {"next": {"$ref": "#/definitions/Node"}}
                }
            },
            "$ref": "#/definitions/Node"
        }));
        let mut resolver = ReferenceResolver::new(DocumentLoader::new("/virtual"));

        let inlined = resolver.inline(document.root(), &document);
        assert_eq!(
            inlined,
            json!({
                "type": "object",
                "properties": {
                    "next": {
                        "type": "object",
                        "description": "Circular reference to #/definitions/Node"
                    }
                }
            })
        );
        assert!(resolver.guard().is_empty());
    }
}
