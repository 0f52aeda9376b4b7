//! Field-name → ontology statement mapping table.
//!
//! Each Zotero field name maps to a [`FieldRule`] describing what the
//! field contributes to the statement graph: a literal or URI statement on
//! the item's own subject, an ISBN length dispatch, a triple chain through
//! a synthesized auxiliary subject, or nothing at all. Several distinct
//! field names alias to the same predicate (volume variants, the shared
//! `bibo:number` fan-in, the many title-like fields), so the table is
//! keyed by field name with many-to-one fan-in.
//!
//! Unknown field names contribute nothing and never fail: the upstream
//! field vocabulary evolves independently of this table.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::graph::Statement;

/// Routing description for a field that becomes a nested resource.
///
/// The field value attaches as a literal under `aux_predicate` on an
/// auxiliary subject minted from (item URI, `own_predicate`); the item
/// links to that subject via `own_predicate`, and the subject is typed
/// with every class in `aux_classes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainRule {
    /// Predicate linking the item to the auxiliary subject.
    pub own_predicate: &'static str,
    /// Predicate carrying the field value on the auxiliary subject.
    pub aux_predicate: &'static str,
    /// `rdf:type` classes of the auxiliary subject (first one also feeds
    /// the minted URI).
    pub aux_classes: &'static [&'static str],
}

/// What a single field name contributes to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Literal statement on the item subject.
    Literal(&'static str),
    /// URI statement on the item subject.
    Uri(&'static str),
    /// Literal statement only when the enclosing item has the given type.
    LiteralWhen {
        /// Item type the rule is conditional on.
        item_type: &'static str,
        /// Predicate used when the condition holds.
        predicate: &'static str,
    },
    /// ISBN length dispatch: 10 characters → `bibo:isbn10`, 13 →
    /// `bibo:isbn13`, anything else → no statement.
    Isbn,
    /// Triple chain through an auxiliary subject.
    Chain(ChainRule),
    /// Triple chain only when the enclosing item has the given type.
    ChainWhen {
        /// Item type the rule is conditional on.
        item_type: &'static str,
        /// Chain applied when the condition holds.
        chain: ChainRule,
    },
    /// Field is known but intentionally dropped (no ontology target).
    Unmapped,
}

const PUBLISHER_CHAIN_CLASSES: &[&str] = &["foaf:Organization"];

/// Field table in the grouping of the upstream BIBO mapping notes:
/// bibliographic descriptors first, then identifiers, legal fields, and
/// creator roles.
static FIELD_TABLE: &[(&str, FieldRule)] = &[
    ("url", FieldRule::Uri("bibo:uri")),
    ("rights", FieldRule::Literal("dcterms:rights")),
    ("volume", FieldRule::Literal("bibo:volume")),
    ("codeVolume", FieldRule::Literal("bibo:volume")),
    ("reporterVolume", FieldRule::Literal("bibo:volume")),
    ("issue", FieldRule::Literal("bibo:issue")),
    ("edition", FieldRule::Unmapped),
    (
        "place",
        FieldRule::Chain(ChainRule {
            own_predicate: "dcterms:publisher",
            aux_predicate: "address:localityName",
            aux_classes: PUBLISHER_CHAIN_CLASSES,
        }),
    ),
    (
        "country",
        FieldRule::Chain(ChainRule {
            own_predicate: "dcterms:publisher",
            aux_predicate: "address:countryName",
            aux_classes: PUBLISHER_CHAIN_CLASSES,
        }),
    ),
    (
        "publisher",
        FieldRule::Chain(ChainRule {
            own_predicate: "dcterms:publisher",
            aux_predicate: "foaf:name",
            aux_classes: PUBLISHER_CHAIN_CLASSES,
        }),
    ),
    (
        "institution",
        FieldRule::Chain(ChainRule {
            own_predicate: "dcterms:publisher",
            aux_predicate: "foaf:name",
            aux_classes: PUBLISHER_CHAIN_CLASSES,
        }),
    ),
    (
        "label",
        FieldRule::Chain(ChainRule {
            own_predicate: "dcterms:publisher",
            aux_predicate: "foaf:name",
            aux_classes: PUBLISHER_CHAIN_CLASSES,
        }),
    ),
    (
        "studio",
        FieldRule::Chain(ChainRule {
            own_predicate: "dcterms:publisher",
            aux_predicate: "foaf:name",
            aux_classes: PUBLISHER_CHAIN_CLASSES,
        }),
    ),
    (
        "network",
        FieldRule::Chain(ChainRule {
            own_predicate: "dcterms:publisher",
            aux_predicate: "foaf:name",
            aux_classes: PUBLISHER_CHAIN_CLASSES,
        }),
    ),
    (
        "company",
        FieldRule::Chain(ChainRule {
            own_predicate: "dcterms:publisher",
            aux_predicate: "foaf:name",
            aux_classes: PUBLISHER_CHAIN_CLASSES,
        }),
    ),
    (
        "university",
        FieldRule::Chain(ChainRule {
            own_predicate: "dcterms:publisher",
            aux_predicate: "foaf:name",
            aux_classes: PUBLISHER_CHAIN_CLASSES,
        }),
    ),
    ("pages", FieldRule::Literal("bibo:pages")),
    ("codePages", FieldRule::Literal("bibo:pages")),
    ("firstPage", FieldRule::Literal("bibo:pageStart")),
    ("ISBN", FieldRule::Isbn),
    ("publicationTitle", FieldRule::Literal("dcterms:title")),
    ("encyclopediaTitle", FieldRule::Literal("dcterms:title")),
    ("dictionaryTitle", FieldRule::Literal("dcterms:title")),
    ("websiteTitle", FieldRule::Literal("dcterms:title")),
    ("forumTitle", FieldRule::Literal("dcterms:title")),
    ("blogTitle", FieldRule::Literal("dcterms:title")),
    ("proceedingsTitle", FieldRule::Literal("dcterms:title")),
    ("bookTitle", FieldRule::Literal("dcterms:title")),
    ("ISSN", FieldRule::Literal("bibo:issn")),
    ("date", FieldRule::Literal("dcterms:date")),
    ("issueDate", FieldRule::Literal("dcterms:date")),
    ("dateDecided", FieldRule::Literal("dcterms:date")),
    ("dateEnacted", FieldRule::Literal("dcterms:date")),
    ("section", FieldRule::Literal("bibo:section")),
    ("callNumber", FieldRule::Literal("bibo:lccn")),
    ("archiveLocation", FieldRule::Literal("dcterms:source")),
    ("distributor", FieldRule::Literal("bibo:distributor")),
    ("extra", FieldRule::Literal("z:extra")),
    ("journalAbbreviation", FieldRule::Literal("bibo:shortTitle")),
    ("DOI", FieldRule::Literal("bibo:DOI")),
    ("accessDate", FieldRule::Literal("z:accessDate")),
    ("seriesTitle", FieldRule::Literal("dcterms:title")),
    ("seriesText", FieldRule::Literal("dcterms:description")),
    ("seriesNumber", FieldRule::Literal("bibo:number")),
    ("code", FieldRule::Literal("dcterms:title")),
    ("session", FieldRule::Literal("dcterms:title")),
    (
        "legislativeBody",
        FieldRule::Chain(ChainRule {
            own_predicate: "foaf:name",
            aux_predicate: "bibo:organizer",
            aux_classes: &["sc:LegalGovernmentOrganization", "foaf:Organization"],
        }),
    ),
    ("history", FieldRule::Literal("z:history")),
    ("reporter", FieldRule::Literal("dcterms:title")),
    ("court", FieldRule::Literal("bibo:court")),
    // bibo property only proposed upstream, so not asserted
    ("numberOfVolumes", FieldRule::Unmapped),
    (
        "committee",
        FieldRule::Chain(ChainRule {
            own_predicate: "foaf:name",
            aux_predicate: "bibo:organizer",
            aux_classes: &["sc:Committee_Organization", "foaf:Organization"],
        }),
    ),
    ("assignee", FieldRule::Unmapped),
    ("priorityNumbers", FieldRule::Unmapped),
    ("references", FieldRule::Literal("z:references")),
    ("legalStatus", FieldRule::Literal("bibo:status")),
    ("patentNumber", FieldRule::Literal("bibo:number")),
    ("reportNumber", FieldRule::Literal("bibo:number")),
    ("billNumber", FieldRule::Literal("bibo:number")),
    ("documentNumber", FieldRule::Literal("bibo:number")),
    ("publicLawNumber", FieldRule::Literal("bibo:number")),
    ("episodeNumber", FieldRule::Literal("bibo:number")),
    ("docketNumber", FieldRule::Literal("bibo:number")),
    ("applicationNumber", FieldRule::Literal("bibo:number")),
    ("artworkSize", FieldRule::Literal("dcterms:extent")),
    ("repository", FieldRule::Literal("z:repository")),
    ("scale", FieldRule::Unmapped),
    ("meetingName", FieldRule::Literal("dcterms:title")),
    ("runningTime", FieldRule::Literal("po:duration")),
    (
        "version",
        FieldRule::LiteralWhen {
            item_type: "computerProgram",
            predicate: "doap:revision",
        },
    ),
    ("system", FieldRule::Literal("doap:os")),
    ("conferenceName", FieldRule::Literal("dcterms:title")),
    ("language", FieldRule::Literal("dcterms:language")),
    ("programmingLanguage", FieldRule::Literal("doap:programming-language")),
    ("abstractNote", FieldRule::Literal("dcterms:abstract")),
    ("type", FieldRule::Literal("dcterms:type")),
    ("reportType", FieldRule::Literal("dcterms:type")),
    ("videoRecordingType", FieldRule::Literal("dcterms:type")),
    ("letterType", FieldRule::Literal("dcterms:type")),
    ("manuscriptType", FieldRule::Literal("dcterms:type")),
    ("mapType", FieldRule::Literal("dcterms:type")),
    ("thesisType", FieldRule::Literal("dcterms:type")),
    ("websiteType", FieldRule::Literal("dcterms:type")),
    ("audioRecordingType", FieldRule::Literal("dcterms:type")),
    ("presentationType", FieldRule::Literal("dcterms:type")),
    ("postType", FieldRule::Literal("dcterms:type")),
    ("audioFileType", FieldRule::Literal("dcterms:type")),
    ("medium", FieldRule::Literal("dcterms:medium")),
    ("artworkMedium", FieldRule::Literal("dcterms:medium")),
    ("interviewMedium", FieldRule::Literal("dcterms:medium")),
    ("title", FieldRule::Literal("dcterms:title")),
    ("caseName", FieldRule::Literal("dcterms:title")),
    ("nameOfAct", FieldRule::Literal("dcterms:title")),
    ("subject", FieldRule::Literal("dcterms:title")),
    ("shortTitle", FieldRule::Literal("bibo:shortTitle")),
    ("numPages", FieldRule::Unmapped),
    // Creator roles
    ("artist", FieldRule::Literal("marcrel:ART")),
    ("attorneyAgent", FieldRule::Unmapped),
    ("author", FieldRule::Literal("dcterms:creator")),
    ("cartographer", FieldRule::Literal("marcrel:CTG")),
    ("castMember", FieldRule::Literal("bibo:performer")),
    (
        "commenter",
        FieldRule::ChainWhen {
            item_type: "blogPost",
            chain: ChainRule {
                own_predicate: "dcterms:creator",
                aux_predicate: "sioct:has_reply",
                aux_classes: &["sioct:Comment"],
            },
        },
    ),
    ("composer", FieldRule::Literal("marcrel:CMP")),
    ("contributor", FieldRule::Literal("dcterms:contributor")),
    ("counsel", FieldRule::Unmapped),
    ("director", FieldRule::Literal("bibo:director")),
    ("editor", FieldRule::Literal("bibo:editor")),
    ("guest", FieldRule::Literal("marcrel:CMM")),
    ("interviewer", FieldRule::Literal("bibo:interviewer")),
    ("interviewee", FieldRule::Literal("bibo:interviewee")),
    ("inventor", FieldRule::Literal("marcrel:INV")),
    ("performer", FieldRule::Literal("bibo:performer")),
    ("podcaster", FieldRule::Literal("marcrel:SPK")),
    ("presenter", FieldRule::Literal("marcrel:SPK")),
    ("producer", FieldRule::Literal("bibo:producer")),
    ("programmer", FieldRule::Literal("marcrel:PRG")),
    ("recipient", FieldRule::Literal("bibo:recipient")),
    (
        "reviewedAuthor",
        FieldRule::Chain(ChainRule {
            own_predicate: "dcterms:creator",
            aux_predicate: "bibo:reviewOf",
            aux_classes: &["foaf:Document"],
        }),
    ),
    ("scriptwriter", FieldRule::Literal("marcrel:AUS")),
    ("seriesEditor", FieldRule::Literal("bibo:editor")),
    ("sponsor", FieldRule::Literal("marcrel:FND")),
    ("translator", FieldRule::Literal("bibo:translator")),
    ("wordsBy", FieldRule::Literal("marcrel:LYR")),
];

fn field_index() -> &'static HashMap<&'static str, &'static FieldRule> {
    static INDEX: OnceLock<HashMap<&'static str, &'static FieldRule>> = OnceLock::new();
    INDEX.get_or_init(|| FIELD_TABLE.iter().map(|(name, rule)| (*name, rule)).collect())
}

/// Looks up the rule for a field name.
///
/// Returns `None` for unknown field names, which the engine treats the
/// same as [`FieldRule::Unmapped`].
#[must_use]
pub fn field_rule(field: &str) -> Option<&'static FieldRule> {
    field_index().get(field).copied()
}

/// What one (itemType, field, value) triple contributes to the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldContribution {
    /// Field dropped: unmapped, unknown, or its condition did not hold.
    None,
    /// One statement directly on the item's own subject.
    Direct {
        /// Target predicate in prefixed form.
        predicate: &'static str,
        /// The statement to attach.
        statement: Statement,
    },
    /// Route the value through an auxiliary subject.
    Chain {
        /// The field value, attached as a literal on the auxiliary subject.
        value: String,
        /// The chain routing description.
        rule: ChainRule,
    },
}

/// Maps a single field to its graph contribution.
///
/// A pure function of (item type, field name, value): no dependence on
/// any other field of the item.
#[must_use]
pub fn map_field(item_type: &str, field: &str, value: &str) -> FieldContribution {
    let Some(rule) = field_rule(field) else {
        return FieldContribution::None;
    };

    match *rule {
        FieldRule::Literal(predicate) => FieldContribution::Direct {
            predicate,
            statement: Statement::literal(value),
        },
        FieldRule::Uri(predicate) => FieldContribution::Direct {
            predicate,
            statement: Statement::uri(value),
        },
        FieldRule::LiteralWhen { item_type: required, predicate } => {
            if item_type == required {
                FieldContribution::Direct {
                    predicate,
                    statement: Statement::literal(value),
                }
            } else {
                FieldContribution::None
            }
        },
        FieldRule::Isbn => match value.len() {
            10 => FieldContribution::Direct {
                predicate: "bibo:isbn10",
                statement: Statement::literal(value),
            },
            13 => FieldContribution::Direct {
                predicate: "bibo:isbn13",
                statement: Statement::literal(value),
            },
            _ => FieldContribution::None,
        },
        FieldRule::Chain(chain) => FieldContribution::Chain {
            value: value.to_string(),
            rule: chain,
        },
        FieldRule::ChainWhen { item_type: required, chain } => {
            if item_type == required {
                FieldContribution::Chain {
                    value: value.to_string(),
                    rule: chain,
                }
            } else {
                FieldContribution::None
            }
        },
        FieldRule::Unmapped => FieldContribution::None,
    }
}
