//! OpenAPI component schemas as an RDF vocabulary

use super::graph::VocabularyGraph;
use super::namespace::{oas, rdf, rdfs, schema, skos, xsd};
use crate::flatten::{DocumentLoader, ReferenceResolver};
use indexmap::IndexMap;
use oxigraph::model::{Literal, NamedNode, NamedNodeRef};
use schemaviz_core::error::{Result, SchemaVizError};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Converts `components.schemas` of an OpenAPI document into classes and properties
#[derive(Debug, Clone)]
pub struct OpenApiConverter {
    base: String,
    prefix: String,
}

impl OpenApiConverter {
    /// Create a converter minting IRIs under `base`, bound to the prefix `api`
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            prefix: "api".to_string(),
        }
    }

    /// Use a different prefix for the base IRI
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Base IRI of minted terms
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Load an OpenAPI document, inline its references and convert it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded, if a reference inside it
    /// points at nothing, or if [`Self::convert`] fails.
    pub fn convert_file(&self, path: &Path, schema_names: &[String]) -> Result<VocabularyGraph> {
        info!("Loading OpenAPI spec from {}...", path.display());
        let mut resolver = ReferenceResolver::new(DocumentLoader::new(""));
        let document = resolver.loader_mut().try_load(path)?;
        let inlined = resolver.inline(document.root(), &document);
        if let Some(reference) = resolver.stats().unresolved.first() {
            return Err(SchemaVizError::reference(
                reference.as_str(),
                format!("no such target from {}", path.display()),
            ));
        }
        self.convert(&inlined, schema_names)
    }

    /// Convert an OpenAPI document whose references are already inlined
    ///
    /// An empty `schema_names` converts every component schema.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `info.title` or a requested schema is
    /// missing, and an RDF error if a name does not form a valid IRI.
    pub fn convert(&self, document: &Value, schema_names: &[String]) -> Result<VocabularyGraph> {
        let mut graph = VocabularyGraph::with_prefixes([
            (self.prefix.as_str(), self.base.as_str()),
            ("oas", oas::NS),
            ("skos", skos::NS),
            ("schema", schema::NS),
            ("rdf", rdf::NS),
            ("rdfs", rdfs::NS),
            ("xsd", xsd::NS),
        ]);

        let info = document.get("info");
        let title = info
            .and_then(|info| info.get("title"))
            .ok_or_else(|| SchemaVizError::not_found("info.title in OpenAPI document"))?;
        let definition = info
            .and_then(|info| info.get("description"))
            .map_or_else(|| "No description".to_string(), text_of);

        let api = self.term("api")?;
        graph.insert(api.clone(), rdf::TYPE, oas::API);
        graph.insert(api.clone(), rdfs::LABEL, Literal::new_simple_literal(text_of(title)));
        graph.insert(api, skos::DEFINITION, Literal::new_simple_literal(definition));

        let schemas = document
            .pointer("/components/schemas")
            .and_then(Value::as_object);

        let names: Vec<String> = if schema_names.is_empty() {
            schemas
                .ok_or_else(|| SchemaVizError::not_found("components.schemas in OpenAPI document"))?
                .keys()
                .cloned()
                .collect()
        } else {
            schema_names.to_vec()
        };

        for name in &names {
            let details = schemas.and_then(|s| s.get(name)).ok_or_else(|| {
                SchemaVizError::not_found(format!("schema '{name}' in components.schemas"))
            })?;
            self.add_schema(&mut graph, name, details)?;
        }

        debug!("Converted {} schemas into {} triples", names.len(), graph.len());
        Ok(graph)
    }

    fn add_schema(&self, graph: &mut VocabularyGraph, name: &str, details: &Value) -> Result<()> {
        let class = self.term(name)?;
        graph.insert(class.clone(), rdf::TYPE, rdfs::CLASS);
        graph.insert(class.clone(), rdfs::LABEL, Literal::new_simple_literal(name));

        let all_of = details
            .get("allOf")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let comment = details.get("description").or_else(|| {
            all_of
                .iter()
                .rev()
                .find_map(|member| member.get("description"))
        });
        if let Some(comment) = comment {
            graph.insert(class.clone(), rdfs::COMMENT, Literal::new_simple_literal(text_of(comment)));
        }

        let mut properties: IndexMap<&str, &Value> = IndexMap::new();
        let sources = std::iter::once(details).chain(all_of);
        for source in sources {
            if let Some(declared) = source.get("properties").and_then(Value::as_object) {
                for (prop_name, prop_details) in declared {
                    properties.insert(prop_name, prop_details);
                }
            }
        }

        for (prop_name, prop_details) in properties {
            let property = self.term(prop_name)?;
            graph.insert(property.clone(), rdf::TYPE, rdf::PROPERTY);
            graph.insert(property.clone(), rdfs::LABEL, Literal::new_simple_literal(prop_name));
            graph.insert(property.clone(), schema::DOMAIN_INCLUDES, class.clone());

            let comment = prop_details.get("description").or_else(|| {
                prop_details
                    .get("oneOf")
                    .and_then(Value::as_array)
                    .and_then(|members| members.iter().find_map(|m| m.get("description")))
            });
            if let Some(comment) = comment {
                graph.insert(
                    property.clone(),
                    rdfs::COMMENT,
                    Literal::new_simple_literal(text_of(comment)),
                );
            }
            graph.insert(property, rdfs::RANGE, range_of(prop_details));
        }
        Ok(())
    }

    fn term(&self, local: &str) -> Result<NamedNode> {
        let iri = format!("{}{local}", self.base);
        NamedNode::new(&iri).map_err(|e| SchemaVizError::rdf(format!("Invalid IRI <{iri}>: {e}")))
    }
}

/// `rdfs:range` for a property schema
#[must_use]
pub fn range_of(details: &Value) -> NamedNodeRef<'static> {
    if let Some(declared) = details.get("type") {
        return if type_includes(declared, "string") {
            xsd::STRING
        } else if type_includes(declared, "integer") {
            xsd::INTEGER
        } else if type_includes(declared, "object") {
            rdfs::CLASS
        } else if type_includes(declared, "array") {
            details.get("items").map_or(rdfs::LITERAL, range_of)
        } else {
            rdfs::LITERAL
        };
    }

    details
        .get("oneOf")
        .and_then(Value::as_array)
        .and_then(|members| members.first())
        .map_or(rdfs::LITERAL, range_of)
}

fn type_includes(declared: &Value, name: &str) -> bool {
    match declared {
        Value::String(s) => s == name,
        Value::Array(names) => names.iter().any(|n| n.as_str() == Some(name)),
        _ => false,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::model::Term;
    use serde_json::json;

    const BASE: &str = "http://example.org/api#";

    fn iri(local: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{BASE}{local}"))
    }

    fn document() -> Value {
        json!({
            "info": {"title": "Course API"},
            "components": {
                "schemas": {
                    "Course": {
                        "allOf": [
                            {"properties": {"code": {"type": "string", "description": "old"}}},
                            {
                                "description": "A course",
                                "properties": {
                                    "code": {"type": "string", "description": "Course code"},
                                    "ects": {"type": ["integer", "null"]}
                                }
                            }
                        ],
                        "properties": {"name": {"oneOf": [{"type": "string", "description": "Name"}]}}
                    },
                    "Person": {"type": "object", "properties": {"tags": {"type": "array"}}}
                }
            }
        })
    }

    #[test]
    fn test_api_node() -> schemaviz_core::Result<()> {
        let graph = OpenApiConverter::new(BASE).convert(&document(), &[])?;
        assert!(graph.contains(iri("api"), rdf::TYPE, oas::API));
        assert!(graph.contains(
            iri("api"),
            skos::DEFINITION,
            Literal::new_simple_literal("No description")
        ));
        Ok(())
    }

    #[test]
    fn test_all_of_properties_are_merged() -> schemaviz_core::Result<()> {
        let graph = OpenApiConverter::new(BASE).convert(&document(), &["Course".to_string()])?;

        assert!(graph.contains(iri("Course"), rdfs::COMMENT, Literal::new_simple_literal("A course")));
        assert!(graph.contains(iri("code"), rdfs::COMMENT, Literal::new_simple_literal("Course code")));
        assert!(!graph.contains(iri("code"), rdfs::COMMENT, Literal::new_simple_literal("old")));
        assert!(graph.contains(iri("ects"), rdfs::RANGE, xsd::INTEGER));
        assert!(graph.contains(iri("name"), rdfs::COMMENT, Literal::new_simple_literal("Name")));
        assert!(graph.contains(iri("name"), rdfs::RANGE, xsd::STRING));
        assert!(graph.contains(iri("name"), schema::DOMAIN_INCLUDES, iri("Course")));
        assert!(!graph.contains(iri("Person"), rdf::TYPE, rdfs::CLASS));

        let labels: Vec<&Term> = graph
            .objects(iri("code").as_ref().into(), rdfs::LABEL)
            .collect();
        assert_eq!(labels.len(), 1);
        Ok(())
    }

    #[test]
    fn test_array_without_items_is_literal() -> schemaviz_core::Result<()> {
        let graph = OpenApiConverter::new(BASE).convert(&document(), &[])?;
        assert!(graph.contains(iri("tags"), rdfs::RANGE, rdfs::LITERAL));
        Ok(())
    }

    #[test]
    fn test_range_mapping() {
        assert_eq!(range_of(&json!({"type": "object"})), rdfs::CLASS);
        assert_eq!(
            range_of(&json!({"type": "array", "items": {"type": "integer"}})),
            xsd::INTEGER
        );
        assert_eq!(range_of(&json!({"type": "boolean"})), rdfs::LITERAL);
        assert_eq!(range_of(&json!({})), rdfs::LITERAL);
    }

    #[test]
    fn test_missing_schema_and_title() {
        let missing = OpenApiConverter::new(BASE).convert(&document(), &["Nope".to_string()]);
        assert!(matches!(missing, Err(SchemaVizError::NotFound(_))));

        let untitled = OpenApiConverter::new(BASE).convert(&json!({"info": {}}), &[]);
        assert!(matches!(untitled, Err(SchemaVizError::NotFound(_))));
    }

    #[test]
    fn test_dangling_reference_in_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("api.json");
        std::fs::write(
            &path,
            r##"{
                "info": {"title": "Broken"},
                "components": {"schemas": {"Course": {"$ref": "#/components/schemas/Gone"}}}
            }"##,
        )?;

        let result = OpenApiConverter::new(BASE).convert_file(&path, &[]);
        match result {
            Err(SchemaVizError::ReferenceError { reference, .. }) => {
                assert_eq!(reference, "#/components/schemas/Gone");
            }
            other => panic!("expected a reference error, got {other:?}"),
        }
        Ok(())
    }
}
