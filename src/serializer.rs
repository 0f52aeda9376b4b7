//! RDF serialization of the statement index.
//!
//! RDF export is a collaborator seam: the mapping layer produces a
//! [`GraphIndex`] and hands it, together with the namespace table, to a
//! [`GraphSerializer`]. The bundled [`OxGraphSerializer`] drives the
//! oxrdfio writer for the standard formats and emits the legacy
//! subject-keyed RDF/JSON shape directly; alternative serializers can be
//! swapped in without touching the mapping layer.

use std::fmt;

use indexmap::IndexMap;
use oxrdf::{Literal, NamedNode, NamedOrBlankNode, Term, Triple};
use oxrdfio::{RdfFormat as OxRdfFormat, RdfSerializer};

use crate::error::{Error, Result};
use crate::graph::{GraphIndex, Statement, TermKind};
use crate::mapping::namespaces::{expand_term, NamespaceMap};

/// Output format for RDF serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RdfFormat {
    /// RDF/XML format (application/rdf+xml) - Most compatible with legacy systems
    #[default]
    RdfXml,
    /// RDF/JSON format (application/json) - Subject-keyed resource index
    RdfJson,
    /// Turtle format (text/turtle) - Compact, human-friendly
    Turtle,
    /// N-Triples format (application/n-triples) - Simple, line-based
    NTriples,
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RdfXml => write!(f, "RDF/XML"),
            Self::RdfJson => write!(f, "RDF/JSON"),
            Self::Turtle => write!(f, "Turtle"),
            Self::NTriples => write!(f, "N-Triples"),
        }
    }
}

impl RdfFormat {
    /// Returns the MIME type for this RDF format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::RdfXml => "application/rdf+xml",
            Self::RdfJson => "application/json",
            Self::Turtle => "text/turtle",
            Self::NTriples => "application/n-triples",
        }
    }

    /// Returns the typical file extension for this RDF format.
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::RdfXml => "rdf",
            Self::RdfJson => "json",
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
        }
    }
}

/// Serializes a statement index to an RDF document.
///
/// Implementations receive the index with terms still in prefixed form
/// and are responsible for expanding them against the namespace table.
pub trait GraphSerializer {
    /// Serializes the full index in the requested format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if a term does not expand to a
    /// valid IRI or the underlying writer fails.
    fn serialize(
        &self,
        index: &GraphIndex,
        namespaces: &NamespaceMap,
        format: RdfFormat,
    ) -> Result<String>;
}

/// The bundled [`GraphSerializer`] backed by oxrdf/oxrdfio.
#[derive(Debug, Clone, Copy, Default)]
pub struct OxGraphSerializer;

impl OxGraphSerializer {
    /// Creates a serializer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn serialize_with_oxrdfio(
        index: &GraphIndex,
        namespaces: &NamespaceMap,
        format: OxRdfFormat,
    ) -> Result<String> {
        let mut output = Vec::new();
        let mut serializer = RdfSerializer::from_format(format).for_writer(&mut output);

        for (subject, predicates) in index.subjects() {
            let subject_node = named_node(subject, namespaces)?;
            for (predicate, statements) in predicates {
                let predicate_node = named_node(predicate, namespaces)?;
                for statement in statements {
                    let object = match statement.kind {
                        TermKind::Uri => {
                            Term::NamedNode(named_node(&statement.value, namespaces)?)
                        },
                        TermKind::Literal => {
                            Term::Literal(Literal::new_simple_literal(&statement.value))
                        },
                    };
                    let triple = Triple::new(
                        NamedOrBlankNode::NamedNode(subject_node.clone()),
                        predicate_node.clone(),
                        object,
                    );
                    serializer
                        .serialize_triple(&triple)
                        .map_err(|e| Error::Serialization(e.to_string()))?;
                }
            }
        }

        serializer
            .finish()
            .map_err(|e| Error::Serialization(e.to_string()))?;
        String::from_utf8(output).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Emits the subject-keyed RDF/JSON resource index:
    /// `{subject: {predicate: [{"value": ..., "type": ...}]}}` with all
    /// terms expanded to absolute URIs.
    fn serialize_rdf_json(index: &GraphIndex, namespaces: &NamespaceMap) -> Result<String> {
        let mut expanded: IndexMap<String, IndexMap<String, Vec<Statement>>> = IndexMap::new();
        for (subject, predicates) in index.subjects() {
            let preds = expanded.entry(expand_term(subject, namespaces)).or_default();
            for (predicate, statements) in predicates {
                let list = preds.entry(expand_term(predicate, namespaces)).or_default();
                for statement in statements {
                    list.push(match statement.kind {
                        TermKind::Uri => Statement::uri(expand_term(&statement.value, namespaces)),
                        TermKind::Literal => statement.clone(),
                    });
                }
            }
        }
        serde_json::to_string_pretty(&expanded).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl GraphSerializer for OxGraphSerializer {
    fn serialize(
        &self,
        index: &GraphIndex,
        namespaces: &NamespaceMap,
        format: RdfFormat,
    ) -> Result<String> {
        match format {
            RdfFormat::RdfJson => Self::serialize_rdf_json(index, namespaces),
            RdfFormat::RdfXml => {
                Self::serialize_with_oxrdfio(index, namespaces, OxRdfFormat::RdfXml)
            },
            RdfFormat::Turtle => {
                Self::serialize_with_oxrdfio(index, namespaces, OxRdfFormat::Turtle)
            },
            RdfFormat::NTriples => {
                Self::serialize_with_oxrdfio(index, namespaces, OxRdfFormat::NTriples)
            },
        }
    }
}

fn named_node(term: &str, namespaces: &NamespaceMap) -> Result<NamedNode> {
    let expanded = expand_term(term, namespaces);
    NamedNode::new(expanded).map_err(|e| Error::Serialization(format!("Invalid URI: {e}")))
}
