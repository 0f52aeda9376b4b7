//! Error types for item mapping operations.
//!
//! This module provides the [`Error`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all item parsing, mapping, and export operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The source XML is unparseable or missing the required identity
    /// or item-type markers. Construction of the affected item fails;
    /// sibling entries in a feed are unaffected.
    #[error("Malformed source: {0}")]
    MalformedSource(String),

    /// RDF export was requested on a collection without a configured
    /// serialization collaborator.
    #[error("No graph serializer configured for RDF export")]
    SerializerUnavailable,

    /// The downstream graph serializer failed (invalid IRI, writer error).
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for [`std::result::Result`] with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
