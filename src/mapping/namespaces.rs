//! Namespace prefixes used by the BIBO mapping.
//!
//! Every serialization of the statement index needs this prefix → URI
//! table to expand the prefixed predicate and class names the mapping
//! tables emit.

use indexmap::IndexMap;

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// Bibliographic Ontology namespace.
pub const BIBO: &str = "http://purl.org/ontology/bibo/";

/// Dublin Core terms namespace.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

/// BBC Programmes Ontology namespace (broadcasts, durations).
pub const PO: &str = "http://purl.org/ontology/po/";

/// Description of a Project namespace (software items).
pub const DOAP: &str = "http://usefulinc.com/ns/doap#";

/// SIOC types namespace (blog/forum posts, comments).
pub const SIOCT: &str = "http://rdfs.org/sioc/types#";

/// UMBEL subject concepts namespace.
pub const SC: &str = "http://umbel.org/umbel/sc/";

/// Talis address schema namespace (locality and country names).
pub const ADDRESS: &str = "http://schemas.talis.com/2005/address/schema#";

/// LOC relators vocabulary namespace (creator roles).
pub const MARCREL: &str = "http://id.loc.gov/vocabulary/relators/";

/// FOAF namespace (organizations, names, documents).
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";

/// Zotero export namespace (fields with no public ontology target).
pub const Z: &str = "http://www.zotero.org/namespaces/export#";

/// Ordered prefix → namespace URI table.
pub type NamespaceMap = IndexMap<&'static str, &'static str>;

/// Returns the full prefix table required by any serialization of the
/// statement index.
#[must_use]
pub fn namespace_map() -> NamespaceMap {
    IndexMap::from([
        ("rdf", RDF),
        ("rdfs", RDFS),
        ("bibo", BIBO),
        ("dcterms", DCTERMS),
        ("po", PO),
        ("doap", DOAP),
        ("sioct", SIOCT),
        ("sc", SC),
        ("address", ADDRESS),
        ("marcrel", MARCREL),
        ("foaf", FOAF),
        ("z", Z),
    ])
}

/// Returns the prefix table as a JSON object string.
///
/// # Errors
///
/// Returns an error if JSON encoding fails, which cannot happen for a
/// static string map.
pub fn namespace_map_json() -> crate::error::Result<String> {
    serde_json::to_string(&namespace_map())
        .map_err(|e| crate::error::Error::Serialization(e.to_string()))
}

/// Expands a `prefix:local` term against the prefix table.
///
/// Absolute URIs and terms with unknown prefixes pass through unchanged,
/// so already-expanded values (item URIs, minted auxiliary URIs) are safe
/// to feed through.
#[must_use]
pub fn expand_term(term: &str, namespaces: &NamespaceMap) -> String {
    if let Some((prefix, local)) = term.split_once(':') {
        // "http://..." splits at the scheme; "//" marks an absolute URI.
        if !local.starts_with("//") {
            if let Some(ns) = namespaces.get(prefix) {
                return format!("{ns}{local}");
            }
        }
    }
    term.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_trailing_delimiter() {
        // Slash-terminated namespaces
        assert!(BIBO.ends_with('/'));
        assert!(DCTERMS.ends_with('/'));
        assert!(MARCREL.ends_with('/'));
        // Hash-terminated namespaces
        assert!(RDF.ends_with('#'));
        assert!(DOAP.ends_with('#'));
        assert!(Z.ends_with('#'));
    }

    #[test]
    fn test_namespace_map_contains_all_prefixes() {
        let map = namespace_map();
        for prefix in [
            "rdf", "rdfs", "bibo", "dcterms", "po", "doap", "sioct", "sc", "address", "marcrel",
            "foaf", "z",
        ] {
            assert!(map.contains_key(prefix), "missing prefix {prefix}");
        }
    }

    #[test]
    fn test_expand_prefixed_term() {
        let map = namespace_map();
        assert_eq!(
            expand_term("bibo:Book", &map),
            "http://purl.org/ontology/bibo/Book"
        );
        assert_eq!(
            expand_term("rdf:type", &map),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
        );
    }

    #[test]
    fn test_expand_passes_through_absolute_uris() {
        let map = namespace_map();
        assert_eq!(
            expand_term("http://example.org/item/1", &map),
            "http://example.org/item/1"
        );
    }

    #[test]
    fn test_expand_passes_through_unknown_prefix() {
        let map = namespace_map();
        assert_eq!(expand_term("unknown:thing", &map), "unknown:thing");
    }

    #[test]
    fn test_namespace_map_json() {
        let json = namespace_map_json().unwrap();
        assert!(json.contains("\"bibo\""));
        assert!(json.contains("http://purl.org/ontology/bibo/"));
    }
}
