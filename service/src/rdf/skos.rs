//! SKOS concept scheme listings

use super::namespace::{rdf, skos};
use super::source::RdfSource;
use crate::output::table::{TableStyle, TextTable};
use oxigraph::model::{NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef};
use schemaviz_core::error::Result;
use std::path::Path;
use tracing::warn;

/// One concept of a scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptRow {
    /// Concept IRI
    pub uri: String,
    /// `skos:prefLabel` in the requested language
    pub label: String,
    /// `skos:definition` in the requested language
    pub definition: String,
}

/// A concept scheme with its concepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptScheme {
    /// Scheme IRI
    pub iri: String,
    /// `skos:prefLabel` in the requested language
    pub label: String,
    /// Concepts `skos:inScheme` this scheme
    pub concepts: Vec<ConceptRow>,
}

impl ConceptScheme {
    /// `<label> (<iri>)`
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} ({})", self.label, self.iri)
    }

    /// Table with URI, Label and Definition columns
    #[must_use]
    pub fn to_table(&self) -> TextTable {
        let mut table = TextTable::new(["URI", "Label", "Definition"])
            .with_title(self.title())
            .with_style(TableStyle::Boxed);
        for concept in &self.concepts {
            table.push_row([
                concept.uri.as_str(),
                concept.label.as_str(),
                concept.definition.as_str(),
            ]);
        }
        table
    }
}

/// Lists the concept schemes of a vocabulary in one language
pub struct VocabularyLister {
    source: RdfSource,
    language: String,
}

impl VocabularyLister {
    /// List schemes from an already loaded vocabulary
    #[must_use]
    pub fn new(source: RdfSource, language: impl Into<String>) -> Self {
        Self {
            source,
            language: language.into(),
        }
    }

    /// Load a vocabulary file, format chosen from its extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path, language: impl Into<String>) -> Result<Self> {
        Ok(Self::new(RdfSource::from_files(&[path], None)?, language))
    }

    /// Every `skos:ConceptScheme` with its concepts
    ///
    /// # Errors
    ///
    /// Returns an RDF error if the store cannot be read.
    pub fn schemes(&self) -> Result<Vec<ConceptScheme>> {
        let mut schemes = Vec::new();
        for scheme in self
            .source
            .subjects(rdf::TYPE, skos::CONCEPT_SCHEME.into())?
        {
            let mut concepts = Vec::new();
            for concept in self
                .source
                .subjects(skos::IN_SCHEME, scheme.as_ref().into())?
            {
                if !self
                    .source
                    .contains(concept.as_ref(), rdf::TYPE, skos::CONCEPT.into())?
                {
                    warn!("! {} is not of type skos:Concept", plain(&concept));
                }
                concepts.push(ConceptRow {
                    uri: plain(&concept),
                    label: self.text(concept.as_ref(), skos::PREF_LABEL)?,
                    definition: self.text(concept.as_ref(), skos::DEFINITION)?,
                });
            }
            schemes.push(ConceptScheme {
                iri: plain(&scheme),
                label: self.text(scheme.as_ref(), skos::PREF_LABEL)?,
                concepts,
            });
        }
        Ok(schemes)
    }

    fn text(&self, subject: NamedOrBlankNodeRef<'_>, predicate: NamedNodeRef<'_>) -> Result<String> {
        Ok(self
            .source
            .literal_in_language(subject, predicate, &self.language)?
            .unwrap_or_else(|| format!("[no label: {}]", plain_ref(subject))))
    }
}

fn plain(node: &NamedOrBlankNode) -> String {
    plain_ref(node.as_ref())
}

fn plain_ref(node: NamedOrBlankNodeRef<'_>) -> String {
    match node {
        NamedOrBlankNodeRef::NamedNode(named) => named.as_str().to_string(),
        NamedOrBlankNodeRef::BlankNode(blank) => blank.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::io::RdfFormat;
    use pretty_assertions::assert_eq;

    const VOCABULARY: &str = r#"
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix ex: <http://example.org/level/> .

ex:scheme a skos:ConceptScheme ; skos:prefLabel "Levels"@en, "Niveaux"@fr .
ex:1 a skos:Concept ; skos:inScheme ex:scheme ;
    skos:prefLabel "Level 1"@en ; skos:definition "Basic"@en .
ex:2 skos:inScheme ex:scheme ; skos:prefLabel "Niveau 2"@fr .
"#;

    fn lister(language: &str) -> VocabularyLister {
        let source = RdfSource::new().expect("store");
        source
            .load_reader(VOCABULARY.as_bytes(), RdfFormat::Turtle, None)
            .expect("valid turtle");
        VocabularyLister::new(source, language)
    }

    #[test]
    fn test_scheme_listing() -> schemaviz_core::Result<()> {
        let schemes = lister("en").schemes()?;
        assert_eq!(schemes.len(), 1);

        let scheme = &schemes[0];
        assert_eq!(scheme.title(), "Levels (http://example.org/level/scheme)");
        assert_eq!(
            scheme.concepts,
            vec![
                ConceptRow {
                    uri: "http://example.org/level/1".to_string(),
                    label: "Level 1".to_string(),
                    definition: "Basic".to_string(),
                },
                ConceptRow {
                    uri: "http://example.org/level/2".to_string(),
                    label: "[no label: http://example.org/level/2]".to_string(),
                    definition: "[no label: http://example.org/level/2]".to_string(),
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_other_language() -> schemaviz_core::Result<()> {
        let schemes = lister("fr").schemes()?;
        assert_eq!(schemes[0].label, "Niveaux");
        assert_eq!(schemes[0].concepts[1].label, "Niveau 2");
        Ok(())
    }

    #[test]
    fn test_table_rendering() -> schemaviz_core::Result<()> {
        let schemes = lister("en").schemes()?;
        let text = schemes[0].to_table().render(false);
        assert!(text.starts_with("Levels (http://example.org/level/scheme)\n+"));
        assert!(text.contains("| http://example.org/level/1 | Level 1"));
        Ok(())
    }
}
