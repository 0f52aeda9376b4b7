//! Per-item mapping orchestration.
//!
//! The [`EntryMappingEngine`] runs the type table, the field table, and
//! the subject minter against one [`ItemRecord`] to produce its slice of
//! the statement graph: the item's own statements plus any auxiliary
//! subjects its fields synthesized. Field order affects only statement
//! ordering within a predicate, never which statements are produced.

use crate::graph::{GraphIndex, Statement};
use crate::item::ItemRecord;

use super::fields::{map_field, ChainRule, FieldContribution};
use super::minter::mint_subject_uri;
use super::types::type_mapping;

/// Configuration for the mapping engine.
#[derive(Debug, Clone)]
pub struct MappingConfig {
    /// Base URI under which auxiliary subject URIs are minted.
    pub base_uri: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            base_uri: "http://example.org/zotero".to_string(),
        }
    }
}

impl MappingConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URI for minted auxiliary subjects.
    #[must_use]
    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = uri.into();
        self
    }
}

/// Maps one item at a time into its statement graph slice.
#[derive(Debug, Clone, Default)]
pub struct EntryMappingEngine {
    config: MappingConfig,
}

impl EntryMappingEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: MappingConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Returns the cached graph slice for an item, computing it on first
    /// access.
    ///
    /// The slice is computed at most once per [`ItemRecord`] instance and
    /// never invalidated: records are immutable after construction. The
    /// cache does not key on the engine configuration, so a record binds
    /// to the first engine that maps it; for a one-off slice under a
    /// different configuration use [`EntryMappingEngine::compute_graph`],
    /// which bypasses the cache.
    pub fn graph_for<'a>(&self, item: &'a ItemRecord) -> &'a GraphIndex {
        item.graph_cache().get_or_init(|| self.compute_graph(item))
    }

    /// Computes an item's graph slice: `rdf:type` seed from the type
    /// table, then every field folded through the field table in
    /// insertion order.
    #[must_use]
    pub fn compute_graph(&self, item: &ItemRecord) -> GraphIndex {
        let mut index = GraphIndex::new();
        let subject = item.uri();

        if let Some(mapping) = type_mapping(item.item_type()) {
            for class in mapping.classes {
                index.insert_unique(subject, "rdf:type", Statement::uri(*class));
            }
            if let Some(medium) = mapping.medium {
                index.insert_unique(subject, "dcterms:medium", Statement::uri(medium));
            }
        }

        for (field, value) in item.fields() {
            match map_field(item.item_type(), field, value) {
                FieldContribution::None => {},
                FieldContribution::Direct { predicate, statement } => {
                    index.insert(subject, predicate, statement);
                },
                FieldContribution::Chain { value, rule } => {
                    self.apply_chain(&mut index, subject, &value, rule);
                },
            }
        }

        index
    }

    /// Routes a field value through its auxiliary subject.
    ///
    /// Mints (or reuses) the subject for (item URI, own predicate),
    /// attaches the value under the auxiliary predicate, types the
    /// subject, and links the item to it. Re-applying a chain onto an
    /// existing auxiliary subject must not duplicate its types or the
    /// item-side link.
    fn apply_chain(&self, index: &mut GraphIndex, subject: &str, value: &str, rule: ChainRule) {
        let aux_uri = mint_subject_uri(
            &self.config.base_uri,
            subject,
            rule.own_predicate,
            rule.aux_classes[0],
        );

        index.insert(aux_uri.clone(), rule.aux_predicate, Statement::literal(value));
        for class in rule.aux_classes {
            index.insert_unique(aux_uri.clone(), "rdf:type", Statement::uri(*class));
        }
        index.insert_unique(subject, rule.own_predicate, Statement::uri(aux_uri));
    }
}
