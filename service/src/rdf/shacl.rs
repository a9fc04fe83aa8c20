//! SHACL node shapes as DESM property graphs
//!
//! For every `sh:NodeShape` the target class is copied along with one
//! `rdf:Property` per `sh:property` path, domain set to the target class.

use super::graph::VocabularyGraph;
use super::namespace::{WELL_KNOWN_PREFIXES, owl, rdf, rdfs, schema, sh};
use super::source::RdfSource;
use oxigraph::model::{NamedOrBlankNode, NamedOrBlankNodeRef, Term};
use schemaviz_core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The DESM graph derived from one shape
#[derive(Debug, Clone)]
pub struct ShapeGraph {
    /// The shape node
    pub shape: NamedOrBlankNode,
    /// Compact name of the shape, e.g. `elm:LearningOutcomeShape`
    pub name: String,
    /// Derived triples
    pub graph: VocabularyGraph,
}

impl ShapeGraph {
    /// File name the graph is written to: the compact name with every
    /// character outside `[A-Za-z0-9-_+]` replaced by `_`, plus `.ttl`
    #[must_use]
    pub fn file_name(&self) -> String {
        let stem: String = self
            .name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{stem}.ttl")
    }
}

/// Derives DESM graphs from SHACL shapes and the ontologies they describe
pub struct ShaclConverter {
    source: RdfSource,
}

impl ShaclConverter {
    /// Wrap already loaded shapes and ontologies
    #[must_use]
    pub const fn new(source: RdfSource) -> Self {
        Self { source }
    }

    /// Load shape and ontology files, keeping only literals in `language`
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed.
    pub fn from_files<P: AsRef<Path>>(paths: &[P], language: &str) -> Result<Self> {
        let source = RdfSource::from_files(paths, Some(language))?;
        info!("Loaded {} triples", source.len()?);
        Ok(Self::new(source))
    }

    /// Loaded input
    #[must_use]
    pub const fn source(&self) -> &RdfSource {
        &self.source
    }

    /// Empty output graph with the usual prefixes bound
    #[must_use]
    pub fn new_graph() -> VocabularyGraph {
        VocabularyGraph::with_prefixes(WELL_KNOWN_PREFIXES)
    }

    /// Every `sh:NodeShape` in the input
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn shapes(&self) -> Result<Vec<NamedOrBlankNode>> {
        self.source.subjects(rdf::TYPE, sh::NODE_SHAPE.into())
    }

    /// Derive the DESM graph of one shape, `None` if it has no target class
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn shape_to_desm(&self, shape: NamedOrBlankNodeRef<'_>) -> Result<Option<VocabularyGraph>> {
        info!("Processing {shape}:");
        let Some(target) = self
            .source
            .object(shape, sh::TARGET_CLASS)?
            .and_then(as_resource)
        else {
            warn!(" - shape has no targetClass, skipping.");
            return Ok(None);
        };
        info!(" - targetClass: {target}");

        let mut graph = Self::new_graph();
        for (predicate, object) in self.source.predicate_objects(target.as_ref())? {
            graph.insert(target.clone(), predicate, object);
        }

        for property in self.source.objects(shape, sh::PROPERTY)? {
            let Some(property) = as_resource(property) else {
                continue;
            };
            let Some(path) = self
                .source
                .object(property.as_ref(), sh::PATH)?
                .and_then(as_resource)
            else {
                debug!(" - property {property} has no sh:path, skipping.");
                continue;
            };

            graph.insert(path.clone(), rdf::TYPE, rdf::PROPERTY);
            graph.insert(path.clone(), rdf::TYPE, owl::OBJECT_PROPERTY);
            graph.insert(path.clone(), rdfs::DOMAIN, target.clone());
            graph.insert(path.clone(), schema::DOMAIN_INCLUDES, target.clone());

            let label = match self.source.object(property.as_ref(), sh::NAME)? {
                Some(name) => Some(name),
                None => self.source.object(path.as_ref(), rdfs::LABEL)?,
            };
            if let Some(label) = label {
                graph.insert(path.clone(), rdfs::LABEL, label);
            }

            let comment = match self.source.object(property.as_ref(), sh::DESCRIPTION)? {
                Some(description) => Some(description),
                None => self.source.object(path.as_ref(), rdfs::COMMENT)?,
            };
            if let Some(comment) = comment {
                graph.insert(path.clone(), rdfs::COMMENT, comment);
            }

            let range = match self.source.object(property.as_ref(), sh::DATATYPE)? {
                Some(datatype) => Some(datatype),
                None => self.source.object(property.as_ref(), sh::CLASS)?,
            };
            if let Some(range) = range {
                graph.insert(path.clone(), rdfs::RANGE, range.clone());
                graph.insert(path, schema::RANGE_INCLUDES, range);
            }
        }

        Ok(Some(graph))
    }

    /// Derive the graphs of every shape that has a target class and yields triples
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn convert_all(&self) -> Result<Vec<ShapeGraph>> {
        let mut graphs = Vec::new();
        info!("Graph contains SHACL shapes for:");
        for shape in self.shapes()? {
            let Some(graph) = self.shape_to_desm(shape.as_ref())? else {
                continue;
            };
            if graph.is_empty() {
                continue;
            }
            graphs.push(ShapeGraph {
                name: compact_name(shape.as_ref()),
                shape,
                graph,
            });
        }
        Ok(graphs)
    }

    /// Write one Turtle file per shape into `output_dir`, or a single
    /// `merged_file_name` holding every shape's triples when given
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or a file cannot
    /// be written.
    pub fn write_all(&self, output_dir: &Path, merged_file_name: Option<&str>) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir)?;
        let graphs = self.convert_all()?;

        if let Some(file_name) = merged_file_name {
            let mut merged = Self::new_graph();
            for shape_graph in graphs {
                merged.merge(shape_graph.graph);
            }
            let path = output_dir.join(file_name);
            merged.write_to_file(&path)?;
            info!(" - written to {}", path.display());
            return Ok(vec![path]);
        }

        let mut written = Vec::with_capacity(graphs.len());
        for shape_graph in graphs {
            let path = output_dir.join(shape_graph.file_name());
            shape_graph.graph.write_to_file(&path)?;
            info!(" - written to {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

/// Compact form of a node using the well-known prefixes: `prefix:local`,
/// `<iri>` when no prefix applies, `_:id` for blank nodes
#[must_use]
pub fn compact_name(node: NamedOrBlankNodeRef<'_>) -> String {
    match node {
        NamedOrBlankNodeRef::NamedNode(named) => {
            let iri = named.as_str();
            WELL_KNOWN_PREFIXES
                .iter()
                .filter_map(|(prefix, namespace)| {
                    iri.strip_prefix(*namespace)
                        .filter(|local| is_local_name(local))
                        .map(|local| (namespace.len(), format!("{prefix}:{local}")))
                })
                .max_by_key(|(len, _)| *len)
                .map_or_else(|| format!("<{iri}>"), |(_, compact)| compact)
        }
        NamedOrBlankNodeRef::BlankNode(blank) => format!("_:{}", blank.as_str()),
    }
}

fn is_local_name(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with(['-', '.'])
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn as_resource(term: Term) -> Option<NamedOrBlankNode> {
    match term {
        Term::NamedNode(node) => Some(node.into()),
        Term::BlankNode(node) => Some(node.into()),
        _ => None,
    }
}
