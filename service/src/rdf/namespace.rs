//! Vocabulary terms used by the converters
//!
//! Only the terms the converters actually emit or query are listed.

use oxigraph::model::NamedNodeRef;

/// `rdf:`
pub mod rdf {
    use super::NamedNodeRef;

    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// `rdf:type`
    pub const TYPE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    /// `rdf:Property`
    pub const PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#Property");
}

/// `rdfs:`
pub mod rdfs {
    use super::NamedNodeRef;

    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// `rdfs:Class`
    pub const CLASS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#Class");
    /// `rdfs:Literal`
    pub const LITERAL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#Literal");
    /// `rdfs:label`
    pub const LABEL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label");
    /// `rdfs:comment`
    pub const COMMENT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#comment");
    /// `rdfs:domain`
    pub const DOMAIN: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#domain");
    /// `rdfs:range`
    pub const RANGE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#range");
}

/// `xsd:`
pub mod xsd {
    use super::NamedNodeRef;

    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    /// `xsd:string`
    pub const STRING: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#string");
    /// `xsd:integer`
    pub const INTEGER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#integer");
}

/// `owl:`
pub mod owl {
    use super::NamedNodeRef;

    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";
    /// `owl:Ontology`
    pub const ONTOLOGY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
    /// `owl:DatatypeProperty`
    pub const DATATYPE_PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    /// `owl:ObjectProperty`
    pub const OBJECT_PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
}

/// `skos:`
pub mod skos {
    use super::NamedNodeRef;

    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";
    /// `skos:Concept`
    pub const CONCEPT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#Concept");
    /// `skos:ConceptScheme`
    pub const CONCEPT_SCHEME: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#ConceptScheme");
    /// `skos:inScheme`
    pub const IN_SCHEME: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#inScheme");
    /// `skos:prefLabel`
    pub const PREF_LABEL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#prefLabel");
    /// `skos:definition`
    pub const DEFINITION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#definition");
}

/// `sh:` (SHACL)
pub mod sh {
    use super::NamedNodeRef;

    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/ns/shacl#";
    /// `sh:NodeShape`
    pub const NODE_SHAPE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#NodeShape");
    /// `sh:targetClass`
    pub const TARGET_CLASS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#targetClass");
    /// `sh:property`
    pub const PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#property");
    /// `sh:path`
    pub const PATH: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#path");
    /// `sh:name`
    pub const NAME: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#name");
    /// `sh:description`
    pub const DESCRIPTION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#description");
    /// `sh:datatype`
    pub const DATATYPE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#datatype");
    /// `sh:class`
    pub const CLASS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#class");
}

/// `schema:` (schema.org)
pub mod schema {
    use super::NamedNodeRef;

    /// Namespace IRI
    pub const NS: &str = "https://schema.org/";
    /// `schema:domainIncludes`
    pub const DOMAIN_INCLUDES: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("https://schema.org/domainIncludes");
    /// `schema:rangeIncludes`
    pub const RANGE_INCLUDES: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("https://schema.org/rangeIncludes");
}

/// `oas:` (OpenAPI)
pub mod oas {
    use super::NamedNodeRef;

    /// Namespace IRI
    pub const NS: &str = "https://spec.openapis.org/oas#";
    /// `oas:API`
    pub const API: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("https://spec.openapis.org/oas#API");
}

/// `elm:` (European Learning Model)
pub const ELM: &str = "http://data.europa.eu/snb/model/elm/";

/// `loq:` (ELM learning opportunity constraints)
pub const LOQ: &str = "http://data.europa.eu/snb/model/ap/loq-constraints/";

/// Prefixes bound on graphs that read third-party vocabularies
pub const WELL_KNOWN_PREFIXES: [(&str, &str); 10] = [
    ("rdf", rdf::NS),
    ("rdfs", rdfs::NS),
    ("xsd", xsd::NS),
    ("owl", owl::NS),
    ("skos", skos::NS),
    ("sh", sh::NS),
    ("schema", schema::NS),
    ("oas", oas::NS),
    ("elm", ELM),
    ("loq", LOQ),
];

/// IRI of a well-known prefix
#[must_use]
pub fn namespace_of(prefix: &str) -> Option<&'static str> {
    WELL_KNOWN_PREFIXES
        .iter()
        .find(|(name, _)| *name == prefix)
        .map(|(_, iri)| *iri)
}
