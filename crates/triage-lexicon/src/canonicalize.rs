//! Deterministic symptom canonicalization.
//!
//! `normalize` collapses a raw symptom string onto a canonical name from
//! the semantic group table; `canonical_id` derives the stable id for a
//! canonical name. Both are pure and total: no input is an error, and
//! repeated application never changes the result.

use sha2::{Digest, Sha256};
use triage_model::{CanonicalSymptom, SymptomCategory, SymptomId};

use crate::table::{SEMANTIC_GROUPS, SemanticGroup};

/// Strip every character that is neither a CJK ideograph nor alphanumeric.
///
/// `char::is_alphanumeric` follows the Unicode Alphabetic property, which
/// covers CJK ideographs, so punctuation and whitespace drop out in one
/// pass.
pub fn clean(raw: &str) -> String {
    raw.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Collapse a raw symptom string onto its canonical name.
///
/// Matching rule: over all (group, variant) pairs where one of the
/// cleaned input and the variant contains the other, the pair with the
/// longest contained substring wins (char count); ties are resolved by
/// table declaration order, then variant order. A cleaned string that
/// matches no group becomes its own canonical name.
pub fn normalize(raw: &str) -> String {
    let cleaned = clean(raw);
    match best_match(&cleaned) {
        Some(group) => group.canonical.to_string(),
        None => cleaned,
    }
}

/// Canonicalize a raw symptom string into name, id, and category.
pub fn canonicalize(raw: &str) -> CanonicalSymptom {
    let cleaned = clean(raw);
    match best_match(&cleaned) {
        Some(group) => CanonicalSymptom {
            id: canonical_id(group.canonical),
            name: group.canonical.to_string(),
            category: group.category,
        },
        None => CanonicalSymptom {
            id: canonical_id(&cleaned),
            name: cleaned,
            category: SymptomCategory::Uncatalogued,
        },
    }
}

/// Stable id for a canonical name: `SYM_` plus the first 4 bytes of the
/// SHA-256 digest of the UTF-8 encoding, in uppercase hex.
///
/// The 32-bit truncation carries a small collision probability; the
/// shipped table is collision-checked by test, and larger vocabularies
/// can widen the digest without changing the scheme.
pub fn canonical_id(canonical_name: &str) -> SymptomId {
    let digest = Sha256::digest(canonical_name.as_bytes());
    SymptomId::from_digest_prefix(&digest.into())
}

/// Canonical names of every symptom mentioned in free text.
///
/// A mention is a table variant appearing as a substring of the cleaned
/// text. Results are deduplicated and returned in table order.
pub fn extract_mentions(text: &str) -> Vec<&'static str> {
    let cleaned = clean(text);
    if cleaned.is_empty() {
        return Vec::new();
    }
    let mut mentions = Vec::new();
    for group in SEMANTIC_GROUPS {
        if group.variants.iter().any(|v| cleaned.contains(v)) && !mentions.contains(&group.canonical)
        {
            mentions.push(group.canonical);
        }
    }
    mentions
}

fn best_match(cleaned: &str) -> Option<&'static SemanticGroup> {
    if cleaned.is_empty() {
        return None;
    }
    let cleaned_len = cleaned.chars().count();
    let mut best: Option<(&SemanticGroup, usize)> = None;
    for group in SEMANTIC_GROUPS {
        for variant in group.variants {
            if !cleaned.contains(variant) && !variant.contains(cleaned) {
                continue;
            }
            let overlap = cleaned_len.min(variant.chars().count());
            // Strict inequality keeps the earliest group on ties.
            if best.is_none_or(|(_, prev)| overlap > prev) {
                best = Some((group, overlap));
            }
        }
    }
    best.map(|(group, _)| group)
}
