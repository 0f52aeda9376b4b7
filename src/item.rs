//! Parsed bibliographic items and their XML construction.
//!
//! An [`ItemRecord`] is the in-memory representation of one Zotero item:
//! its type tag, timestamps, and an ordered field map. Records are built
//! from one of two XML shapes and are immutable afterwards:
//!
//! - an Atom `entry` from the Zotero API feed, carrying item metadata
//!   either as XHTML table rows or as typed transfer-format field
//!   elements (selected by the `atom:content` type marker), plus the
//!   entry author and publication timestamps;
//! - a standalone transfer-format `item` document, where the caller
//!   supplies the item URI.
//!
//! Only the identity and type markers are structurally required; a
//! missing or unknown content payload degrades to an empty field set
//! rather than failing construction.

use std::sync::OnceLock;

use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, Result};
use crate::graph::GraphIndex;

const NS_ATOM: &[u8] = b"http://www.w3.org/2005/Atom";
const NS_ZAPI: &[u8] = b"http://zotero.org/ns/api";
const NS_ZXFER: &[u8] = b"http://zotero.org/ns/transfer";
const NS_XHTML: &[u8] = b"http://www.w3.org/1999/xhtml";

/// Entry-level author of a feed entry: pass-through data, not part of
/// the mapping engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAuthor {
    /// Author display name.
    pub name: String,
    /// Author URI.
    pub uri: String,
}

/// One parsed bibliographic item.
///
/// Constructed once from source XML (or [`ItemRecord::from_parts`]) and
/// immutable thereafter. The item's statement-graph slice is computed
/// lazily on first access and cached for the record's lifetime.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    uri: String,
    item_type: String,
    date_added: String,
    date_modified: String,
    fields: IndexMap<String, String>,
    #[serde(skip)]
    author: Option<EntryAuthor>,
    #[serde(skip)]
    graph: OnceLock<GraphIndex>,
}

impl ItemRecord {
    /// Builds a record from already-parsed parts.
    #[must_use]
    pub fn from_parts(
        uri: String,
        item_type: String,
        date_added: String,
        date_modified: String,
        fields: IndexMap<String, String>,
        author: Option<EntryAuthor>,
    ) -> Self {
        Self {
            uri,
            item_type,
            date_added,
            date_modified,
            fields,
            author,
            graph: OnceLock::new(),
        }
    }

    /// Parses one Atom `entry` element.
    ///
    /// The item URI comes from `atom:id` with any query suffix stripped;
    /// the type tag from `zapi:itemType`; `atom:published` and
    /// `atom:updated` become the added/modified timestamps. Field
    /// extraction follows the `atom:content` type marker (`xhtml` table
    /// rows or `application/xml` transfer fields).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSource`] if the XML is unparseable, the
    /// root is not an Atom `entry`, or the id/type markers are missing.
    pub fn from_entry_xml(xml: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);
        loop {
            match reader.read_event().map_err(malformed)? {
                Event::Start(e) => {
                    let (res, local) = reader.resolve_element(e.name());
                    if ns_bytes(&res) == Some(NS_ATOM) && local.as_ref() == b"entry" {
                        return parse_entry_stream(&mut reader);
                    }
                    return Err(Error::MalformedSource(
                        "expected an Atom entry element".to_string(),
                    ));
                },
                Event::Eof => {
                    return Err(Error::MalformedSource("no entry element found".to_string()));
                },
                _ => {},
            }
        }
    }

    /// Parses a standalone transfer-format `item` document.
    ///
    /// The document root carries `itemType`, `dateAdded`, and
    /// `dateModified` attributes and `field` children; the caller
    /// supplies the item URI since the document has none of its own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSource`] if the XML is unparseable, the
    /// root is not a transfer-format `item`, or the type attribute is
    /// missing.
    pub fn from_item_xml(xml: &str, uri: impl Into<String>) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);
        loop {
            match reader.read_event().map_err(malformed)? {
                Event::Start(e) => {
                    let (res, local) = reader.resolve_element(e.name());
                    if ns_bytes(&res) == Some(NS_ZXFER) && local.as_ref() == b"item" {
                        let (item_type, date_added, date_modified) = item_attributes(&e)?;
                        let fields = parse_item_fields(&mut reader)?;
                        let item_type = item_type.ok_or_else(|| {
                            Error::MalformedSource("item element missing itemType".to_string())
                        })?;
                        return Ok(Self::from_parts(
                            uri.into(),
                            item_type,
                            date_added.unwrap_or_default(),
                            date_modified.unwrap_or_default(),
                            fields,
                            None,
                        ));
                    }
                    return Err(Error::MalformedSource(
                        "expected a transfer-format item element".to_string(),
                    ));
                },
                Event::Empty(e) => {
                    let (res, local) = reader.resolve_element(e.name());
                    if ns_bytes(&res) == Some(NS_ZXFER) && local.as_ref() == b"item" {
                        let (item_type, date_added, date_modified) = item_attributes(&e)?;
                        let item_type = item_type.ok_or_else(|| {
                            Error::MalformedSource("item element missing itemType".to_string())
                        })?;
                        return Ok(Self::from_parts(
                            uri.into(),
                            item_type,
                            date_added.unwrap_or_default(),
                            date_modified.unwrap_or_default(),
                            IndexMap::new(),
                            None,
                        ));
                    }
                    return Err(Error::MalformedSource(
                        "expected a transfer-format item element".to_string(),
                    ));
                },
                Event::Eof => {
                    return Err(Error::MalformedSource("no item element found".to_string()));
                },
                _ => {},
            }
        }
    }

    /// The item's stable URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The item type tag (e.g. `book`, `webpage`).
    #[must_use]
    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// Timestamp the item was added, passed through unmodified.
    #[must_use]
    pub fn date_added(&self) -> &str {
        &self.date_added
    }

    /// Timestamp the item was last modified, passed through unmodified.
    #[must_use]
    pub fn date_modified(&self) -> &str {
        &self.date_modified
    }

    /// The ordered field map.
    #[must_use]
    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns true if the item carries the named field.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The entry-level author, when the record came from a feed entry.
    #[must_use]
    pub fn author(&self) -> Option<&EntryAuthor> {
        self.author.as_ref()
    }

    /// Item-level JSON: `{uri, itemType, dateAdded, dateModified, fields}`.
    #[must_use]
    pub fn item_json(&self) -> serde_json::Value {
        json!(self)
    }

    /// Entry-level JSON: `{itemUri, item, author}`.
    #[must_use]
    pub fn entry_json(&self) -> serde_json::Value {
        json!({
            "itemUri": self.uri,
            "item": self,
            "author": self.author,
        })
    }

    pub(crate) fn graph_cache(&self) -> &OnceLock<GraphIndex> {
        &self.graph
    }
}

fn malformed(err: quick_xml::Error) -> Error {
    Error::MalformedSource(err.to_string())
}

fn ns_bytes<'a>(res: &'a ResolveResult<'a>) -> Option<&'a [u8]> {
    match res {
        ResolveResult::Bound(Namespace(ns)) => Some(ns),
        _ => None,
    }
}

fn attribute_value(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::MalformedSource(err.to_string()))?;
        if attr.key.local_name().as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::MalformedSource(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn item_attributes(e: &BytesStart) -> Result<(Option<String>, Option<String>, Option<String>)> {
    Ok((
        attribute_value(e, b"itemType")?,
        attribute_value(e, b"dateAdded")?,
        attribute_value(e, b"dateModified")?,
    ))
}

/// What the entry parser is currently collecting text for.
#[derive(Debug, Clone)]
enum Capture {
    Id,
    ItemType,
    Published,
    Updated,
    AuthorName,
    AuthorUri,
    /// Transfer-format field element with the given name.
    Field(String),
    /// First value cell of an XHTML table row for the given field.
    Cell(String),
}

/// Parses one entry after its `atom:entry` start tag has been consumed.
///
/// Always consumes events through the entry's matching end tag, so a
/// semantic failure (missing markers) leaves the reader positioned for
/// the next sibling entry.
#[allow(clippy::too_many_lines)]
fn parse_entry_stream(reader: &mut NsReader<&[u8]>) -> Result<ItemRecord> {
    let mut depth = 1usize;
    let mut capture: Option<(Capture, usize)> = None;
    let mut buf = String::new();

    let mut id: Option<String> = None;
    let mut item_type: Option<String> = None;
    let mut published: Option<String> = None;
    let mut updated: Option<String> = None;
    let mut author_name: Option<String> = None;
    let mut author_uri: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut fields: IndexMap<String, String> = IndexMap::new();

    let mut author_depth: Option<usize> = None;
    let mut content_depth: Option<usize> = None;
    // (field name, value cell consumed, row depth)
    let mut current_row: Option<(String, bool, usize)> = None;

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(e) => {
                depth += 1;
                if capture.is_some() {
                    // Markup nested inside a captured element; only its
                    // text content matters.
                    continue;
                }
                let (res, local) = reader.resolve_element(e.name());
                let ns = ns_bytes(&res);
                let local = local.as_ref();

                if ns == Some(NS_ATOM) {
                    match local {
                        b"id" => capture = Some((Capture::Id, depth)),
                        b"published" => capture = Some((Capture::Published, depth)),
                        b"updated" => capture = Some((Capture::Updated, depth)),
                        b"author" => author_depth = Some(depth),
                        b"name" if author_depth.is_some() => {
                            capture = Some((Capture::AuthorName, depth));
                        },
                        b"uri" if author_depth.is_some() => {
                            capture = Some((Capture::AuthorUri, depth));
                        },
                        b"content" => {
                            content_depth = Some(depth);
                            content_type = attribute_value(&e, b"type")?;
                        },
                        _ => {},
                    }
                } else if ns == Some(NS_ZAPI) && local == b"itemType" {
                    capture = Some((Capture::ItemType, depth));
                } else if ns == Some(NS_ZXFER)
                    && local == b"field"
                    && content_depth.is_some()
                    && content_type.as_deref() == Some("application/xml")
                {
                    if let Some(name) = attribute_value(&e, b"name")? {
                        capture = Some((Capture::Field(name), depth));
                    }
                } else if ns == Some(NS_XHTML)
                    && content_depth.is_some()
                    && content_type.as_deref() == Some("xhtml")
                {
                    match local {
                        b"tr" => {
                            current_row = attribute_value(&e, b"class")?
                                .filter(|class| !class.is_empty())
                                .map(|class| (class, false, depth));
                        },
                        b"td" => {
                            if let Some((name, consumed @ false, _)) = current_row.as_mut() {
                                capture = Some((Capture::Cell(name.clone()), depth));
                                *consumed = true;
                            }
                        },
                        _ => {},
                    }
                }
            },
            Event::Empty(e) => {
                let (res, local) = reader.resolve_element(e.name());
                let ns = ns_bytes(&res);
                match (ns, local.as_ref()) {
                    (Some(NS_ZXFER), b"field")
                        if content_depth.is_some()
                            && content_type.as_deref() == Some("application/xml") =>
                    {
                        if let Some(name) = attribute_value(&e, b"name")? {
                            fields.insert(name, String::new());
                        }
                    },
                    (Some(NS_ATOM), b"content") => {
                        content_type = attribute_value(&e, b"type")?;
                    },
                    _ => {},
                }
            },
            Event::Text(t) => {
                if capture.is_some() {
                    buf.push_str(&t.unescape().map_err(malformed)?);
                }
            },
            Event::CData(t) => {
                if capture.is_some() {
                    buf.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            },
            Event::End(_) => {
                if let Some((cap, at)) = &capture {
                    if *at == depth {
                        let text = std::mem::take(&mut buf);
                        match cap.clone() {
                            Capture::Id => id = Some(text),
                            Capture::ItemType => item_type = Some(text),
                            Capture::Published => published = Some(text),
                            Capture::Updated => updated = Some(text),
                            Capture::AuthorName => author_name = Some(text),
                            Capture::AuthorUri => author_uri = Some(text),
                            Capture::Field(name) | Capture::Cell(name) => {
                                fields.insert(name, text);
                            },
                        }
                        capture = None;
                    }
                }
                if author_depth == Some(depth) {
                    author_depth = None;
                }
                if content_depth == Some(depth) {
                    content_depth = None;
                }
                if current_row.as_ref().is_some_and(|(_, _, at)| *at == depth) {
                    current_row = None;
                }
                depth -= 1;
                if depth == 0 {
                    break;
                }
            },
            Event::Eof => {
                return Err(Error::MalformedSource(
                    "unexpected end of input inside entry".to_string(),
                ));
            },
            _ => {},
        }
    }

    let id = id
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::MalformedSource("entry missing atom:id".to_string()))?;
    let item_type = item_type
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::MalformedSource("entry missing zapi:itemType".to_string()))?;

    // The feed id carries GET parameters; the stable item URI is the part
    // before the query string.
    let uri = id.split('?').next().unwrap_or(&id).to_string();

    let author = match (author_name, author_uri) {
        (None, None) => None,
        (name, author_uri) => Some(EntryAuthor {
            name: name.unwrap_or_default(),
            uri: author_uri.unwrap_or_default(),
        }),
    };

    Ok(ItemRecord::from_parts(
        uri,
        item_type,
        published.unwrap_or_default(),
        updated.unwrap_or_default(),
        fields,
        author,
    ))
}

/// Collects `field` children of a standalone `item` element.
fn parse_item_fields(reader: &mut NsReader<&[u8]>) -> Result<IndexMap<String, String>> {
    let mut depth = 1usize;
    let mut capture: Option<(String, usize)> = None;
    let mut buf = String::new();
    let mut fields = IndexMap::new();

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(e) => {
                depth += 1;
                if capture.is_some() {
                    continue;
                }
                let (res, local) = reader.resolve_element(e.name());
                if ns_bytes(&res) == Some(NS_ZXFER) && local.as_ref() == b"field" {
                    if let Some(name) = attribute_value(&e, b"name")? {
                        capture = Some((name, depth));
                    }
                }
            },
            Event::Empty(e) => {
                let (res, local) = reader.resolve_element(e.name());
                if ns_bytes(&res) == Some(NS_ZXFER) && local.as_ref() == b"field" {
                    if let Some(name) = attribute_value(&e, b"name")? {
                        fields.insert(name, String::new());
                    }
                }
            },
            Event::Text(t) => {
                if capture.is_some() {
                    buf.push_str(&t.unescape().map_err(malformed)?);
                }
            },
            Event::CData(t) => {
                if capture.is_some() {
                    buf.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            },
            Event::End(_) => {
                if let Some((name, at)) = &capture {
                    if *at == depth {
                        fields.insert(name.clone(), std::mem::take(&mut buf));
                        capture = None;
                    }
                }
                depth -= 1;
                if depth == 0 {
                    break;
                }
            },
            Event::Eof => {
                return Err(Error::MalformedSource(
                    "unexpected end of input inside item".to_string(),
                ));
            },
            _ => {},
        }
    }

    Ok(fields)
}

/// Parses every entry of an Atom feed.
///
/// Entries that fail semantically (missing markers) yield per-entry
/// errors without disturbing their siblings; a structurally broken feed
/// fails as a whole.
pub(crate) fn parse_feed(xml: &str) -> Result<Vec<Result<ItemRecord>>> {
    let mut reader = NsReader::from_str(xml);
    let mut entries = Vec::new();
    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(e) => {
                let (res, local) = reader.resolve_element(e.name());
                if ns_bytes(&res) == Some(NS_ATOM) && local.as_ref() == b"entry" {
                    entries.push(parse_entry_stream(&mut reader));
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const XHTML_ENTRY: &str = r#"<entry xmlns="http://www.w3.org/2005/Atom" xmlns:zapi="http://zotero.org/ns/api">
  <title>Example Book</title>
  <author><name>jdoe</name><uri>http://zotero.org/jdoe</uri></author>
  <id>http://zotero.org/users/1/items/ABCD1234?format=atom&amp;content=full</id>
  <published>2011-03-01T18:00:00Z</published>
  <updated>2011-03-02T09:30:00Z</updated>
  <zapi:itemType>book</zapi:itemType>
  <content type="xhtml">
    <div xmlns="http://www.w3.org/1999/xhtml">
      <table>
        <tr class="title"><th>Title</th><td>Example Book</td></tr>
        <tr class="publisher"><th>Publisher</th><td>Acme Press</td></tr>
        <tr class="ISBN"><th>ISBN</th><td>0123456789</td></tr>
      </table>
    </div>
  </content>
</entry>"#;

    const XFER_ENTRY: &str = r#"<entry xmlns="http://www.w3.org/2005/Atom" xmlns:zapi="http://zotero.org/ns/api" xmlns:zxfer="http://zotero.org/ns/transfer">
  <author><name>jdoe</name><uri>http://zotero.org/jdoe</uri></author>
  <id>http://zotero.org/users/1/items/EFGH5678</id>
  <published>2011-03-01T18:00:00Z</published>
  <updated>2011-03-02T09:30:00Z</updated>
  <zapi:itemType>webpage</zapi:itemType>
  <content type="application/xml">
    <zxfer:item itemType="webpage">
      <zxfer:field name="title">Example Page</zxfer:field>
      <zxfer:field name="url">http://example.org/page</zxfer:field>
    </zxfer:item>
  </content>
</entry>"#;

    #[test]
    fn test_parse_xhtml_entry() {
        let item = ItemRecord::from_entry_xml(XHTML_ENTRY).unwrap();
        assert_eq!(item.uri(), "http://zotero.org/users/1/items/ABCD1234");
        assert_eq!(item.item_type(), "book");
        assert_eq!(item.date_added(), "2011-03-01T18:00:00Z");
        assert_eq!(item.date_modified(), "2011-03-02T09:30:00Z");
        assert_eq!(item.field("title"), Some("Example Book"));
        assert_eq!(item.field("publisher"), Some("Acme Press"));
        assert_eq!(item.field("ISBN"), Some("0123456789"));
        assert_eq!(
            item.author(),
            Some(&EntryAuthor {
                name: "jdoe".to_string(),
                uri: "http://zotero.org/jdoe".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_transfer_entry() {
        let item = ItemRecord::from_entry_xml(XFER_ENTRY).unwrap();
        assert_eq!(item.uri(), "http://zotero.org/users/1/items/EFGH5678");
        assert_eq!(item.item_type(), "webpage");
        assert_eq!(item.field("title"), Some("Example Page"));
        assert_eq!(item.field("url"), Some("http://example.org/page"));
    }

    #[test]
    fn test_both_encodings_yield_same_field_shape() {
        let a = ItemRecord::from_entry_xml(XHTML_ENTRY).unwrap();
        let b = ItemRecord::from_entry_xml(XFER_ENTRY).unwrap();
        // Same container shape: ordered name → value strings.
        assert_eq!(a.fields().get_index(0).unwrap().0, "title");
        assert_eq!(b.fields().get_index(0).unwrap().0, "title");
    }

    #[test]
    fn test_field_order_is_preserved() {
        let item = ItemRecord::from_entry_xml(XHTML_ENTRY).unwrap();
        let keys: Vec<_> = item.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "publisher", "ISBN"]);
    }

    #[test]
    fn test_missing_item_type_fails() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom">
  <id>http://zotero.org/users/1/items/X</id>
</entry>"#;
        let err = ItemRecord::from_entry_xml(xml).unwrap_err();
        assert!(matches!(err, Error::MalformedSource(_)));
    }

    #[test]
    fn test_missing_id_fails() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom" xmlns:zapi="http://zotero.org/ns/api">
  <zapi:itemType>book</zapi:itemType>
</entry>"#;
        let err = ItemRecord::from_entry_xml(xml).unwrap_err();
        assert!(matches!(err, Error::MalformedSource(_)));
    }

    #[test]
    fn test_unparseable_xml_fails() {
        assert!(ItemRecord::from_entry_xml("<entry><id>oops").is_err());
        assert!(ItemRecord::from_entry_xml("not xml at all").is_err());
    }

    #[test]
    fn test_transfer_fields_ignored_outside_declared_transfer_content() {
        // The content-type marker selects the extraction path: transfer
        // fields under an xhtml content block (or outside content
        // entirely) must not land in the field map.
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom" xmlns:zapi="http://zotero.org/ns/api" xmlns:zxfer="http://zotero.org/ns/transfer">
  <id>http://zotero.org/users/1/items/X</id>
  <zapi:itemType>book</zapi:itemType>
  <zxfer:field name="stray">outside content</zxfer:field>
  <content type="xhtml">
    <div xmlns="http://www.w3.org/1999/xhtml">
      <table><tr class="title"><th>Title</th><td>Real Title</td></tr></table>
    </div>
    <zxfer:field name="smuggled">inside xhtml content</zxfer:field>
  </content>
</entry>"#;
        let item = ItemRecord::from_entry_xml(xml).unwrap();
        assert_eq!(item.field("title"), Some("Real Title"));
        assert!(!item.has_field("stray"));
        assert!(!item.has_field("smuggled"));
    }

    #[test]
    fn test_unknown_content_type_degrades_to_empty_fields() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom" xmlns:zapi="http://zotero.org/ns/api">
  <id>http://zotero.org/users/1/items/X</id>
  <zapi:itemType>note</zapi:itemType>
  <content type="text">just a note</content>
</entry>"#;
        let item = ItemRecord::from_entry_xml(xml).unwrap();
        assert!(item.fields().is_empty());
    }

    #[test]
    fn test_standalone_item_document() {
        let xml = r#"<zxfer:item xmlns:zxfer="http://zotero.org/ns/transfer" itemType="journalArticle" dateAdded="2011-01-01" dateModified="2011-01-02">
  <zxfer:field name="title">An Article</zxfer:field>
  <zxfer:field name="DOI">10.1000/xyz</zxfer:field>
  <zxfer:field name="abstractNote"/>
</zxfer:item>"#;
        let item = ItemRecord::from_item_xml(xml, "http://example.org/items/1").unwrap();
        assert_eq!(item.uri(), "http://example.org/items/1");
        assert_eq!(item.item_type(), "journalArticle");
        assert_eq!(item.date_added(), "2011-01-01");
        assert_eq!(item.field("title"), Some("An Article"));
        assert_eq!(item.field("abstractNote"), Some(""));
    }

    #[test]
    fn test_item_json_shape() {
        let item = ItemRecord::from_entry_xml(XHTML_ENTRY).unwrap();
        let value = item.item_json();
        assert_eq!(value["uri"], "http://zotero.org/users/1/items/ABCD1234");
        assert_eq!(value["itemType"], "book");
        assert_eq!(value["fields"]["publisher"], "Acme Press");
        assert!(value.get("author").is_none());
    }

    #[test]
    fn test_entry_json_shape() {
        let item = ItemRecord::from_entry_xml(XHTML_ENTRY).unwrap();
        let value = item.entry_json();
        assert_eq!(value["itemUri"], "http://zotero.org/users/1/items/ABCD1234");
        assert_eq!(value["item"]["itemType"], "book");
        assert_eq!(value["author"]["name"], "jdoe");
    }
}
