//! Ordered collections of items and whole-collection exports.
//!
//! A [`Collection`] owns its [`ItemRecord`]s keyed by item URI in
//! insertion order, runs one [`EntryMappingEngine`] over them, and
//! provides the query and export surface: filtering, grouping, JSON
//! export, and RDF export through an injected [`GraphSerializer`].

use std::fmt;

use indexmap::IndexMap;
use rayon::prelude::*;
use serde_json::json;

use crate::error::{Error, Result};
use crate::graph::GraphIndex;
use crate::item::{parse_feed, ItemRecord};
use crate::mapping::engine::{EntryMappingEngine, MappingConfig};
use crate::mapping::namespaces::namespace_map;
use crate::serializer::{GraphSerializer, RdfFormat};

/// Outcome of a bulk feed ingest.
///
/// Entries that fail to parse are skipped with their errors retained;
/// they never abort the batch.
#[derive(Debug, Default)]
pub struct FeedReport {
    /// Number of entries added to the collection.
    pub added: usize,
    /// Per-entry errors for the entries that were skipped.
    pub skipped: Vec<Error>,
}

/// An ordered set of items sharing one mapping configuration.
pub struct Collection {
    items: IndexMap<String, ItemRecord>,
    engine: EntryMappingEngine,
    serializer: Option<Box<dyn GraphSerializer>>,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("items", &self.items.len())
            .field("engine", &self.engine)
            .field("serializer", &self.serializer.is_some())
            .finish()
    }
}

impl Collection {
    /// Creates an empty collection with the default mapping
    /// configuration and no RDF serializer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MappingConfig::default())
    }

    /// Creates an empty collection with the given mapping configuration.
    #[must_use]
    pub fn with_config(config: MappingConfig) -> Self {
        Self {
            items: IndexMap::new(),
            engine: EntryMappingEngine::new(config),
            serializer: None,
        }
    }

    /// Attaches the RDF serialization collaborator.
    #[must_use]
    pub fn with_serializer(mut self, serializer: impl GraphSerializer + 'static) -> Self {
        self.serializer = Some(Box::new(serializer));
        self
    }

    /// Adds one item, keyed by its URI. A later item with the same URI
    /// replaces the earlier one.
    pub fn add_item(&mut self, item: ItemRecord) {
        self.items.insert(item.uri().to_string(), item);
    }

    /// Parses one Atom entry and adds the item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSource`] if the entry does not parse.
    pub fn add_entry_xml(&mut self, xml: &str) -> Result<()> {
        self.add_item(ItemRecord::from_entry_xml(xml)?);
        Ok(())
    }

    /// Parses every entry of an Atom feed and adds the items.
    ///
    /// Entries that fail to parse are skipped and reported; the rest of
    /// the feed is unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSource`] only if the feed itself is
    /// structurally unparseable.
    pub fn add_from_feed(&mut self, xml: &str) -> Result<FeedReport> {
        let mut report = FeedReport::default();
        for entry in parse_feed(xml)? {
            match entry {
                Ok(item) => {
                    self.add_item(item);
                    report.added += 1;
                },
                Err(err) => report.skipped.push(err),
            }
        }
        Ok(report)
    }

    /// Returns the item with the given URI, if present.
    #[must_use]
    pub fn get(&self, uri: &str) -> Option<&ItemRecord> {
        self.items.get(uri)
    }

    /// Iterates over items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &ItemRecord> {
        self.items.values()
    }

    /// Iterates over item URIs in insertion order.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items of one type, in insertion order.
    #[must_use]
    pub fn items_by_type(&self, item_type: &str) -> Vec<&ItemRecord> {
        self.items
            .values()
            .filter(|item| item.item_type() == item_type)
            .collect()
    }

    /// Returns the items whose named field equals `value`. Items without
    /// the field are excluded.
    #[must_use]
    pub fn items_by_field_value(&self, field: &str, value: &str) -> Vec<&ItemRecord> {
        self.items
            .values()
            .filter(|item| item.field(field) == Some(value))
            .collect()
    }

    /// Returns the distinct item types, in first-seen order.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        let mut types = Vec::new();
        for item in self.items.values() {
            if !types.contains(&item.item_type()) {
                types.push(item.item_type());
            }
        }
        types
    }

    /// Groups items by type, types in first-seen order.
    #[must_use]
    pub fn group_by_type(&self) -> IndexMap<&str, Vec<&ItemRecord>> {
        let mut groups: IndexMap<&str, Vec<&ItemRecord>> = IndexMap::new();
        for item in self.items.values() {
            groups.entry(item.item_type()).or_default().push(item);
        }
        groups
    }

    /// Collection JSON keyed by item URI: `{uri: {uri, itemType, …}}`.
    #[must_use]
    pub fn items_json(&self) -> serde_json::Value {
        let map: IndexMap<&str, serde_json::Value> = self
            .items
            .iter()
            .map(|(uri, item)| (uri.as_str(), item.item_json()))
            .collect();
        json!(map)
    }

    /// Flattened collection JSON: a list of `{itemUri, item, author}`
    /// entries in insertion order.
    #[must_use]
    pub fn entries_json(&self) -> serde_json::Value {
        let entries: Vec<serde_json::Value> =
            self.items.values().map(ItemRecord::entry_json).collect();
        json!(entries)
    }

    /// The merged statement index across all items, in insertion order.
    ///
    /// The merged graph exists to feed downstream serialization, so the
    /// export is rejected when no serializer collaborator is attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializerUnavailable`] if no serializer is
    /// attached.
    pub fn graph_index(&self) -> Result<GraphIndex> {
        self.require_serializer()?;
        let mut index = GraphIndex::new();
        for item in self.items.values() {
            index.merge(self.engine.graph_for(item).clone());
        }
        Ok(index)
    }

    /// The merged statement index, with per-item slices computed on the
    /// rayon pool. The serial merge preserves item order, so the result
    /// is identical to [`Collection::graph_index`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializerUnavailable`] if no serializer is
    /// attached.
    pub fn graph_index_parallel(&self) -> Result<GraphIndex> {
        self.require_serializer()?;
        let engine = &self.engine;
        let slices: Vec<GraphIndex> = self
            .items
            .values()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|item| engine.graph_for(item).clone())
            .collect();
        let mut index = GraphIndex::new();
        for slice in slices {
            index.merge(slice);
        }
        Ok(index)
    }

    /// Serializes the merged statement index as RDF.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializerUnavailable`] if no serializer is
    /// attached, or [`Error::Serialization`] if it fails.
    pub fn to_rdf(&self, format: RdfFormat) -> Result<String> {
        self.serialize(&self.graph_index()?, format)
    }

    /// Serializes one item's full slice (the item plus its auxiliary
    /// subjects) as RDF.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSource`] if the URI is unknown,
    /// [`Error::SerializerUnavailable`] if no serializer is attached, or
    /// [`Error::Serialization`] if it fails.
    pub fn entry_rdf(&self, uri: &str, format: RdfFormat) -> Result<String> {
        let item = self.require(uri)?;
        self.serialize(self.engine.graph_for(item), format)
    }

    /// Serializes one item's own statements as RDF, without its
    /// auxiliary subjects.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Collection::entry_rdf`].
    pub fn item_rdf(&self, uri: &str, format: RdfFormat) -> Result<String> {
        let item = self.require(uri)?;
        let slice = self.engine.graph_for(item).subject_slice(item.uri());
        self.serialize(&slice, format)
    }

    fn require(&self, uri: &str) -> Result<&ItemRecord> {
        self.items
            .get(uri)
            .ok_or_else(|| Error::MalformedSource(format!("no item with URI {uri}")))
    }

    fn require_serializer(&self) -> Result<&dyn GraphSerializer> {
        self.serializer
            .as_deref()
            .ok_or(Error::SerializerUnavailable)
    }

    fn serialize(&self, index: &GraphIndex, format: RdfFormat) -> Result<String> {
        self.require_serializer()?
            .serialize(index, &namespace_map(), format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::OxGraphSerializer;

    fn make_item(uri: &str, item_type: &str, fields: &[(&str, &str)]) -> ItemRecord {
        let fields: IndexMap<String, String> = fields
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ItemRecord::from_parts(
            uri.to_string(),
            item_type.to_string(),
            String::new(),
            String::new(),
            fields,
            None,
        )
    }

    fn sample_collection() -> Collection {
        let mut coll = Collection::new();
        coll.add_item(make_item("http://z.org/items/1", "book", &[("title", "A")]));
        coll.add_item(make_item("http://z.org/items/2", "webpage", &[("title", "B")]));
        coll.add_item(make_item("http://z.org/items/3", "book", &[("title", "A")]));
        coll
    }

    #[test]
    fn test_add_and_get() {
        let coll = sample_collection();
        assert_eq!(coll.len(), 3);
        assert_eq!(coll.get("http://z.org/items/2").unwrap().item_type(), "webpage");
        assert!(coll.get("http://z.org/items/9").is_none());
    }

    #[test]
    fn test_uri_collision_last_write_wins() {
        let mut coll = sample_collection();
        coll.add_item(make_item("http://z.org/items/1", "film", &[]));
        assert_eq!(coll.len(), 3);
        assert_eq!(coll.get("http://z.org/items/1").unwrap().item_type(), "film");
        // The original insertion position is kept.
        assert_eq!(coll.uris().next(), Some("http://z.org/items/1"));
    }

    #[test]
    fn test_filters_and_grouping() {
        let coll = sample_collection();
        assert_eq!(coll.items_by_type("book").len(), 2);
        assert_eq!(coll.items_by_type("patent").len(), 0);
        assert_eq!(coll.items_by_field_value("title", "A").len(), 2);
        assert_eq!(coll.items_by_field_value("publisher", "A").len(), 0);
        assert_eq!(coll.types(), ["book", "webpage"]);

        let groups = coll.group_by_type();
        assert_eq!(groups["book"].len(), 2);
        assert_eq!(groups["webpage"].len(), 1);
    }

    #[test]
    fn test_items_json_keyed_by_uri() {
        let coll = sample_collection();
        let json = coll.items_json();
        assert_eq!(json["http://z.org/items/1"]["itemType"], "book");
        assert_eq!(json["http://z.org/items/2"]["fields"]["title"], "B");
    }

    #[test]
    fn test_entries_json_is_flat_list() {
        let coll = sample_collection();
        let json = coll.entries_json();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["itemUri"], "http://z.org/items/1");
        assert_eq!(entries[1]["item"]["itemType"], "webpage");
    }

    #[test]
    fn test_merged_graph_index() {
        let coll = sample_collection().with_serializer(OxGraphSerializer::new());
        let index = coll.graph_index().unwrap();
        assert!(index.contains_subject("http://z.org/items/1"));
        assert!(index.contains_subject("http://z.org/items/2"));
        assert_eq!(
            index.statements("http://z.org/items/2", "rdf:type").unwrap()[0].value,
            "bibo:Webpage"
        );
    }

    #[test]
    fn test_parallel_merge_matches_serial() {
        let mut coll = Collection::new().with_serializer(OxGraphSerializer::new());
        for i in 0..40 {
            coll.add_item(make_item(
                &format!("http://z.org/items/{i}"),
                "book",
                &[("title", "T"), ("publisher", "P")],
            ));
        }
        let serial = serde_json::to_string(&coll.graph_index().unwrap()).unwrap();
        let parallel = serde_json::to_string(&coll.graph_index_parallel().unwrap()).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_rdf_without_serializer_fails() {
        let coll = sample_collection();
        let err = coll.to_rdf(RdfFormat::RdfXml).unwrap_err();
        assert!(matches!(err, Error::SerializerUnavailable));
    }

    #[test]
    fn test_graph_export_without_serializer_fails() {
        let coll = sample_collection();
        assert!(matches!(coll.graph_index(), Err(Error::SerializerUnavailable)));
        assert!(matches!(
            coll.graph_index_parallel(),
            Err(Error::SerializerUnavailable)
        ));
    }

    #[test]
    fn test_feed_ingest_skips_bad_entries() {
        let feed = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:zapi="http://zotero.org/ns/api">
  <title>Test feed</title>
  <entry>
    <id>http://zotero.org/users/1/items/AAA?format=atom</id>
    <zapi:itemType>book</zapi:itemType>
  </entry>
  <entry>
    <id>http://zotero.org/users/1/items/BBB</id>
  </entry>
  <entry>
    <id>http://zotero.org/users/1/items/CCC</id>
    <zapi:itemType>webpage</zapi:itemType>
  </entry>
</feed>"#;
        let mut coll = Collection::new();
        let report = coll.add_from_feed(feed).unwrap();
        assert_eq!(report.added, 2);
        assert_eq!(report.skipped.len(), 1);
        assert!(coll.get("http://zotero.org/users/1/items/AAA").is_some());
        assert!(coll.get("http://zotero.org/users/1/items/BBB").is_none());
        assert!(coll.get("http://zotero.org/users/1/items/CCC").is_some());
    }
}
