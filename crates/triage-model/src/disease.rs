//! Raw and canonicalized disease records.
//!
//! `RawKnowledgeBase` is the input interface: disease records as produced
//! by the upstream enrichment pipeline, with free-text symptom names.
//! `Disease` is the canonicalized form emitted by the knowledge-base
//! build, with symptom ids replaced by canonical ids.

use serde::{Deserialize, Serialize};

use crate::{DiseaseId, SymptomId};

/// Input knowledge base: a list of raw disease records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawKnowledgeBase {
    pub diseases: Vec<RawDiseaseRecord>,
}

/// A disease record as supplied by the raw knowledge base.
///
/// `id` and `name` are required for the record to be usable; records
/// missing either are skipped during the build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDiseaseRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symptoms: Vec<RawSymptomRecord>,
    #[serde(default)]
    pub explanation: String,
}

/// A symptom as listed on a raw disease record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSymptomRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specificity: bool,
}

/// A canonicalized symptom entry on a disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseSymptom {
    pub id: SymptomId,
    pub name: String,
    pub specificity: bool,
}

/// A disease with canonicalized symptoms. Read-only after build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    pub id: DiseaseId,
    pub name: String,
    pub symptoms: Vec<DiseaseSymptom>,
    pub explanation: String,
}

impl Disease {
    /// Canonical symptom ids in disease-declared order.
    pub fn symptom_ids(&self) -> impl Iterator<Item = &SymptomId> {
        self.symptoms.iter().map(|s| &s.id)
    }

    /// Whether the disease lists at least one symptom.
    ///
    /// Degenerate diseases with an empty symptom set are excluded from
    /// candidate ranking entirely.
    pub fn has_symptoms(&self) -> bool {
        !self.symptoms.is_empty()
    }
}
