#![deny(unsafe_code)]

//! Static symptom lexicon and deterministic canonicalization.
//!
//! The semantic group table maps each canonical symptom name to its
//! textual variants and clinical category; the canonicalizer collapses
//! raw symptom strings onto canonical names and derives stable ids.

mod canonicalize;
mod table;

pub use canonicalize::{canonical_id, canonicalize, clean, extract_mentions, normalize};
pub use table::{SEMANTIC_GROUPS, SemanticGroup};
