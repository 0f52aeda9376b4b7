#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # zotero-bibo
//!
//! A Rust library for re-expressing Zotero bibliographic items as
//! subject-predicate-object statement graphs conforming to the
//! Bibliographic Ontology (BIBO).
//!
//! ## Quick Start
//!
//! ### Mapping one Atom entry
//!
//! ```ignore
//! use zotero_bibo::{EntryMappingEngine, ItemRecord};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let item = ItemRecord::from_entry_xml(&entry_xml)?;
//! let engine = EntryMappingEngine::default();
//! let index = engine.graph_for(&item);
//!
//! for (subject, predicates) in index.subjects() {
//!     println!("{subject}: {} predicates", predicates.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Ingesting a feed and exporting RDF
//!
//! ```ignore
//! use zotero_bibo::{Collection, OxGraphSerializer, RdfFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut collection = Collection::new().with_serializer(OxGraphSerializer::new());
//! let report = collection.add_from_feed(&feed_xml)?;
//! println!("added {} items, skipped {}", report.added, report.skipped.len());
//!
//! let turtle = collection.to_rdf(RdfFormat::Turtle)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`item`] — Item records and Atom/transfer XML parsing
//! - [`graph`] — The subject-keyed statement index
//! - [`mapping`] — Type/field mapping tables, subject minter, engine
//! - [`collection`] — Item collections, queries, and exports
//! - [`serializer`] — RDF serialization collaborator
//! - [`error`] — Error types and result type

pub mod collection;
pub mod error;
pub mod graph;
pub mod item;
/// Item → BIBO statement mapping: tables, minter, and engine.
pub mod mapping;
pub mod serializer;

pub use collection::{Collection, FeedReport};
pub use error::{Error, Result};
pub use graph::{GraphIndex, Statement, StatementMap, TermKind};
pub use item::{EntryAuthor, ItemRecord};
pub use mapping::engine::{EntryMappingEngine, MappingConfig};
pub use mapping::namespaces::{expand_term, namespace_map, NamespaceMap};
pub use serializer::{GraphSerializer, OxGraphSerializer, RdfFormat};
