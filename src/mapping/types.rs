//! Item-type → ontology class mapping table.
//!
//! Each Zotero item type maps to one or two `rdf:type` classes; the two
//! broadcast types additionally assert a `dcterms:medium` URI. Unrecognized
//! types map to nothing so that new upstream types degrade gracefully
//! instead of failing a whole batch.

use crate::graph::Statement;

/// Class statements (and optional medium) contributed by one item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// `rdf:type` classes in prefixed form.
    pub classes: &'static [&'static str],
    /// Extra `dcterms:medium` URI asserted alongside the classes.
    pub medium: Option<&'static str>,
}

const NO_MEDIUM: Option<&str> = None;

/// Type table, sorted by item type tag for binary search.
static TYPE_TABLE: &[(&str, TypeMapping)] = &[
    ("artwork", TypeMapping { classes: &["bibo:Image"], medium: NO_MEDIUM }),
    ("attachment", TypeMapping { classes: &["z:Attachment"], medium: NO_MEDIUM }),
    ("audioRecording", TypeMapping { classes: &["bibo:AudioDocument"], medium: NO_MEDIUM }),
    ("bill", TypeMapping { classes: &["bibo:Bill"], medium: NO_MEDIUM }),
    ("blogPost", TypeMapping { classes: &["bibo:Article", "sioct:BlogPost"], medium: NO_MEDIUM }),
    ("book", TypeMapping { classes: &["bibo:Book"], medium: NO_MEDIUM }),
    ("bookSection", TypeMapping { classes: &["bibo:BookSection"], medium: NO_MEDIUM }),
    ("case", TypeMapping { classes: &["bibo:LegalDecision"], medium: NO_MEDIUM }),
    ("computerProgram", TypeMapping { classes: &["bibo:Document", "sc:ComputerProgram_CW"], medium: NO_MEDIUM }),
    ("conferencePaper", TypeMapping { classes: &["bibo:Article"], medium: NO_MEDIUM }),
    ("dictionaryEntry", TypeMapping { classes: &["bibo:Article"], medium: NO_MEDIUM }),
    ("document", TypeMapping { classes: &["bibo:Document"], medium: NO_MEDIUM }),
    ("email", TypeMapping { classes: &["bibo:Email"], medium: NO_MEDIUM }),
    ("encyclopediaArticle", TypeMapping { classes: &["bibo:Article"], medium: NO_MEDIUM }),
    ("film", TypeMapping { classes: &["bibo:Film"], medium: NO_MEDIUM }),
    ("forumPost", TypeMapping { classes: &["bibo:Article", "sioct:BoardPost"], medium: NO_MEDIUM }),
    ("hearing", TypeMapping { classes: &["bibo:Hearing"], medium: NO_MEDIUM }),
    ("instantMessage", TypeMapping { classes: &["bibo:PersonalCommunication", "sioct:InstantMessage"], medium: NO_MEDIUM }),
    ("interview", TypeMapping { classes: &["bibo:Interview"], medium: NO_MEDIUM }),
    ("journalArticle", TypeMapping { classes: &["bibo:AcademicArticle"], medium: NO_MEDIUM }),
    ("letter", TypeMapping { classes: &["bibo:Letter"], medium: NO_MEDIUM }),
    ("magazineArticle", TypeMapping { classes: &["bibo:Article"], medium: NO_MEDIUM }),
    ("manuscript", TypeMapping { classes: &["bibo:Manuscript"], medium: NO_MEDIUM }),
    ("map", TypeMapping { classes: &["bibo:Map"], medium: NO_MEDIUM }),
    ("newspaperArticle", TypeMapping { classes: &["bibo:Article"], medium: NO_MEDIUM }),
    ("note", TypeMapping { classes: &["bibo:Note"], medium: NO_MEDIUM }),
    ("patent", TypeMapping { classes: &["bibo:Patent"], medium: NO_MEDIUM }),
    ("podcast", TypeMapping { classes: &["bibo:AudioDocument", "z:Podcast"], medium: NO_MEDIUM }),
    ("presentation", TypeMapping { classes: &["bibo:Slideshow"], medium: NO_MEDIUM }),
    ("radioBroadcast", TypeMapping { classes: &["po:Broadcast"], medium: Some("po:Radio") }),
    ("report", TypeMapping { classes: &["bibo:Report"], medium: NO_MEDIUM }),
    ("statute", TypeMapping { classes: &["bibo:Statute"], medium: NO_MEDIUM }),
    ("thesis", TypeMapping { classes: &["bibo:Thesis"], medium: NO_MEDIUM }),
    ("tvBroadcast", TypeMapping { classes: &["po:Broadcast"], medium: Some("po:TV") }),
    ("videoRecording", TypeMapping { classes: &["bibo:AudioVisualDocument"], medium: NO_MEDIUM }),
    ("webpage", TypeMapping { classes: &["bibo:Webpage"], medium: NO_MEDIUM }),
];

/// Looks up the full mapping for an item type.
///
/// Returns `None` for unrecognized types.
#[must_use]
pub fn type_mapping(item_type: &str) -> Option<&'static TypeMapping> {
    TYPE_TABLE
        .binary_search_by(|(tag, _)| (*tag).cmp(item_type))
        .ok()
        .map(|idx| &TYPE_TABLE[idx].1)
}

/// Returns the `rdf:type` statements for an item type.
///
/// The list holds zero, one, or two URI statements; unrecognized types
/// yield an empty list rather than an error.
#[must_use]
pub fn map_type(item_type: &str) -> Vec<Statement> {
    type_mapping(item_type)
        .map(|mapping| mapping.classes.iter().map(|class| Statement::uri(*class)).collect())
        .unwrap_or_default()
}

/// All item type tags the table recognizes, in table order.
#[must_use]
pub fn known_types() -> impl Iterator<Item = &'static str> {
    TYPE_TABLE.iter().map(|(tag, _)| *tag)
}
