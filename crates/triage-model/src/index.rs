//! Reverse symptom index: canonical symptom id to the deduplicated set of
//! diseases exhibiting it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{DiseaseId, SymptomId};

/// Reverse index keyed by canonical symptom id.
///
/// `BTreeMap` keeps serialization order deterministic across builds.
pub type ReverseIndex = BTreeMap<SymptomId, ReverseIndexEntry>;

/// One disease under a reverse-index bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedDisease {
    pub disease_id: DiseaseId,
    pub disease_name: String,
    /// Whether this symptom strongly implicates this disease.
    pub specificity: bool,
}

/// All diseases exhibiting one canonical symptom.
///
/// Invariant: `diseases` contains each disease at most once and
/// `disease_count == diseases.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseIndexEntry {
    pub symptom_name: String,
    pub disease_count: usize,
    pub diseases: Vec<IndexedDisease>,
}
