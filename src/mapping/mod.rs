//! Item → BIBO statement mapping engine.
//!
//! This module holds the declarative mapping data and the engine that
//! applies it:
//!
//! - [`types`]: item type tag → `rdf:type` class statements
//! - [`fields`]: field name → literal/URI statement or triple chain
//! - [`minter`]: deterministic auxiliary-subject URI minting
//! - [`engine`]: orchestration and per-item caching
//! - [`namespaces`]: the prefix table every serialization needs
//!
//! The tables are data, not code: adding or adjusting a mapping is a
//! table change and leaves the engine untouched.

pub mod engine;
pub mod fields;
pub mod minter;
pub mod namespaces;
pub mod types;

pub use engine::{EntryMappingEngine, MappingConfig};
pub use fields::{field_rule, map_field, ChainRule, FieldContribution, FieldRule};
pub use minter::mint_subject_uri;
pub use namespaces::{expand_term, namespace_map, namespace_map_json, NamespaceMap};
pub use types::{known_types, map_type, type_mapping, TypeMapping};
