//! Statement graph index keyed by subject URI.
//!
//! The [`GraphIndex`] is the unit handed to serialization: a mapping from
//! subject URI to predicate to an ordered list of [`Statement`]s. Predicates
//! and URI-kind values may be stored in prefixed form (e.g. `bibo:Book`);
//! expansion against the namespace table happens at serialization time.
//!
//! Insertion order is preserved end to end (`IndexMap` for subjects and
//! predicates, `Vec` for statement lists) so that repeated runs over the
//! same input produce identical output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether a statement value is literal text or a URI reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    /// Plain literal text.
    Literal,
    /// A URI reference, possibly in `prefix:local` form.
    Uri,
}

/// A single predicate-value assertion about a subject.
///
/// Serializes as `{"value": "...", "type": "literal"|"uri"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// The statement value (literal text or URI).
    pub value: String,
    /// Whether the value is a literal or a URI reference.
    #[serde(rename = "type")]
    pub kind: TermKind,
}

impl Statement {
    /// Creates a literal statement.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: TermKind::Literal,
        }
    }

    /// Creates a URI-kind statement.
    #[must_use]
    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: TermKind::Uri,
        }
    }
}

/// Ordered predicate → statements mapping for one subject.
pub type StatementMap = IndexMap<String, Vec<Statement>>;

/// Mapping from subject URI to its statements.
///
/// Built incrementally by the mapping engine for one item (including any
/// synthesized auxiliary subjects), and merged across items at the
/// collection level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GraphIndex {
    subjects: IndexMap<String, StatementMap>,
}

impl GraphIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a statement under (subject, predicate).
    ///
    /// A predicate may hold multiple statements; duplicates are not
    /// collapsed here.
    pub fn insert(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        statement: Statement,
    ) {
        self.subjects
            .entry(subject.into())
            .or_default()
            .entry(predicate.into())
            .or_default()
            .push(statement);
    }

    /// Appends a statement under (subject, predicate) unless an identical
    /// statement is already present.
    ///
    /// Used for `rdf:type` statements and auxiliary-subject links, which
    /// must stay idempotent when several fields route through the same
    /// auxiliary subject.
    pub fn insert_unique(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        statement: Statement,
    ) {
        let list = self
            .subjects
            .entry(subject.into())
            .or_default()
            .entry(predicate.into())
            .or_default();
        if !list.contains(&statement) {
            list.push(statement);
        }
    }

    /// Returns the statement map for a subject, if present.
    #[must_use]
    pub fn get(&self, subject: &str) -> Option<&StatementMap> {
        self.subjects.get(subject)
    }

    /// Returns the ordered statements under (subject, predicate).
    #[must_use]
    pub fn statements(&self, subject: &str, predicate: &str) -> Option<&[Statement]> {
        self.subjects
            .get(subject)
            .and_then(|preds| preds.get(predicate))
            .map(Vec::as_slice)
    }

    /// Returns true if the index carries any statements for `subject`.
    #[must_use]
    pub fn contains_subject(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    /// Iterates over (subject URI, statement map) in insertion order.
    pub fn subjects(&self) -> impl Iterator<Item = (&String, &StatementMap)> {
        self.subjects.iter()
    }

    /// Extracts the single-subject view for `subject`.
    ///
    /// Used to serialize an item's own statements without its auxiliary
    /// subjects.
    #[must_use]
    pub fn subject_slice(&self, subject: &str) -> Self {
        let mut slice = Self::new();
        if let Some(preds) = self.subjects.get(subject) {
            slice.subjects.insert(subject.to_string(), preds.clone());
        }
        slice
    }

    /// Merges another index into this one.
    ///
    /// Subjects are unioned; statement lists under a shared (subject,
    /// predicate) pair are concatenated in merge order. Item and auxiliary
    /// subject URIs are unique per item, so cross-item merges do not
    /// normally share subjects.
    pub fn merge(&mut self, other: Self) {
        for (subject, preds) in other.subjects {
            let target = self.subjects.entry(subject).or_default();
            for (predicate, statements) in preds {
                target.entry(predicate).or_default().extend(statements);
            }
        }
    }

    /// Number of subjects in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Returns true if the index holds no subjects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Total number of statements across all subjects.
    #[must_use]
    pub fn statement_count(&self) -> usize {
        self.subjects
            .values()
            .flat_map(IndexMap::values)
            .map(Vec::len)
            .sum()
    }
}
