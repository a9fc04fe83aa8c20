//! Input graphs loaded into an in-memory store

use super::format_for_path;
use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::{
    NamedNode, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, Quad, Term, TermRef,
};
use oxigraph::store::Store;
use schemaviz_core::error::{Result, SchemaVizError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Queryable RDF input
///
/// Lookups return their results sorted by lexical form so the tools produce
/// the same output on every run.
pub struct RdfSource {
    store: Store,
}

impl RdfSource {
    /// Create an empty source
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be created.
    pub fn new() -> Result<Self> {
        let store = Store::new()
            .map_err(|e| SchemaVizError::rdf(format!("Failed to create store: {e}")))?;
        Ok(Self { store })
    }

    /// Load every file, keeping only literals tagged with `language` if given
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed.
    pub fn from_files<P: AsRef<Path>>(paths: &[P], language: Option<&str>) -> Result<Self> {
        let source = Self::new()?;
        for path in paths {
            source.load_file(path.as_ref(), language)?;
        }
        Ok(source)
    }

    /// Load one file, format chosen from its extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(&self, path: &Path, language: Option<&str>) -> Result<usize> {
        let file = File::open(path)?;
        let inserted = self
            .load_reader(BufReader::new(file), format_for_path(path), language)
            .map_err(|e| match e {
                SchemaVizError::ParseError { message, .. } => {
                    SchemaVizError::parse_at(message, path.display().to_string())
                }
                other => other,
            })?;
        debug!("Loaded {inserted} triples from {}", path.display());
        Ok(inserted)
    }

    /// Load RDF from any reader, returning the number of new triples
    ///
    /// Non-literal objects are always kept; literals only when `language`
    /// is `None` or equals their language tag.
    ///
    /// # Errors
    ///
    /// Returns a parse error for invalid input and an RDF error if the store
    /// rejects a quad.
    pub fn load_reader(
        &self,
        reader: impl Read,
        format: RdfFormat,
        language: Option<&str>,
    ) -> Result<usize> {
        let mut inserted = 0;
        for quad in RdfParser::from_format(format).for_reader(reader) {
            let quad = quad.map_err(|e| SchemaVizError::parse(format!("RDF parsing error: {e}")))?;
            if !keeps(&quad, language) {
                continue;
            }
            let known = self
                .store
                .contains(&quad)
                .map_err(|e| SchemaVizError::rdf(format!("Failed to query store: {e}")))?;
            if known {
                continue;
            }
            self.store
                .insert(&quad)
                .map_err(|e| SchemaVizError::rdf(format!("Failed to insert quad: {e}")))?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Number of stored triples
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn len(&self) -> Result<usize> {
        self.store
            .len()
            .map_err(|e| SchemaVizError::rdf(format!("Failed to count triples: {e}")))
    }

    /// Whether the store is empty
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Subjects of triples with the given predicate and object
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn subjects(&self, predicate: NamedNodeRef<'_>, object: TermRef<'_>) -> Result<Vec<NamedOrBlankNode>> {
        let mut subjects = self
            .matching(None, Some(predicate), Some(object))?
            .into_iter()
            .map(|quad| quad.subject)
            .collect::<Vec<_>>();
        sort_and_dedup(&mut subjects);
        Ok(subjects)
    }

    /// Objects of triples with the given subject and predicate
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn objects(&self, subject: NamedOrBlankNodeRef<'_>, predicate: NamedNodeRef<'_>) -> Result<Vec<Term>> {
        let mut objects = self
            .matching(Some(subject), Some(predicate), None)?
            .into_iter()
            .map(|quad| quad.object)
            .collect::<Vec<_>>();
        sort_and_dedup(&mut objects);
        Ok(objects)
    }

    /// First object of triples with the given subject and predicate
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn object(&self, subject: NamedOrBlankNodeRef<'_>, predicate: NamedNodeRef<'_>) -> Result<Option<Term>> {
        Ok(self.objects(subject, predicate)?.into_iter().next())
    }

    /// Every predicate and object of triples about `subject`
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn predicate_objects(&self, subject: NamedOrBlankNodeRef<'_>) -> Result<Vec<(NamedNode, Term)>> {
        let mut pairs = self
            .matching(Some(subject), None, None)?
            .into_iter()
            .map(|quad| (quad.predicate, quad.object))
            .collect::<Vec<_>>();
        pairs.sort_by_cached_key(|(p, o)| (p.to_string(), o.to_string()));
        pairs.dedup();
        Ok(pairs)
    }

    /// Whether the triple is stored
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn contains(
        &self,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
        object: TermRef<'_>,
    ) -> Result<bool> {
        Ok(!self
            .matching(Some(subject), Some(predicate), Some(object))?
            .is_empty())
    }

    /// Lexical form of the first literal object tagged with `language`
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn literal_in_language(
        &self,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
        language: &str,
    ) -> Result<Option<String>> {
        Ok(self
            .objects(subject, predicate)?
            .into_iter()
            .find_map(|term| match term {
                Term::Literal(literal) if literal.language() == Some(language) => {
                    Some(literal.value().to_string())
                }
                _ => None,
            }))
    }

    fn matching(
        &self,
        subject: Option<NamedOrBlankNodeRef<'_>>,
        predicate: Option<NamedNodeRef<'_>>,
        object: Option<TermRef<'_>>,
    ) -> Result<Vec<Quad>> {
        self.store
            .quads_for_pattern(subject, predicate, object, None)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchemaVizError::rdf(format!("Failed to query store: {e}")))
    }
}

fn keeps(quad: &Quad, language: Option<&str>) -> bool {
    match (&quad.object, language) {
        (Term::Literal(literal), Some(language)) => literal.language() == Some(language),
        _ => true,
    }
}

fn sort_and_dedup<T: ToString + PartialEq>(items: &mut Vec<T>) {
    items.sort_by_cached_key(ToString::to_string);
    items.dedup();
}
