//! Deterministic auxiliary-subject URI minting.
//!
//! When a field routes through a triple chain, its value attaches to a
//! synthesized subject rather than to the item itself. That subject's URI
//! must be a pure function of (item URI, linking predicate) so that
//! re-running the mapping is idempotent and diff-stable, and so that
//! independent fields routing through the same predicate merge onto one
//! subject instead of minting duplicates.

use sha2::{Digest, Sha256};

/// Mints the auxiliary subject URI for (item URI, linking predicate).
///
/// The URI has the shape `{base}/{predicate-local}/{class-local}-{slug}`
/// where the local names are the lowercased parts after the prefix colon
/// and the slug is a truncated SHA-256 hex digest of the item URI. Equal
/// inputs always mint equal URIs; distinct predicates for the same item
/// mint distinct URIs.
#[must_use]
pub fn mint_subject_uri(
    base_uri: &str,
    item_uri: &str,
    own_predicate: &str,
    aux_class: &str,
) -> String {
    let digest = Sha256::digest(item_uri.as_bytes());
    let slug = hex::encode(&digest[..16]);
    let prop = local_name(own_predicate).to_lowercase();
    let class = local_name(aux_class).to_lowercase();
    format!("{}/{prop}/{class}-{slug}", base_uri.trim_end_matches('/'))
}

fn local_name(term: &str) -> &str {
    term.rsplit(':').next().unwrap_or(term)
}
