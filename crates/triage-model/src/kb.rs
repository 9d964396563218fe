//! Canonicalized knowledge base: the read-only output of the build.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Disease, DiseaseId, SymptomId};

/// Summary counts over a canonicalized knowledge base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KbStats {
    pub disease_count: usize,
    pub symptom_count: usize,
}

/// The canonicalized knowledge base produced by the build.
///
/// Shared read-only by every scoring engine and session; it is never
/// mutated after the build completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub diseases: Vec<Disease>,
    /// Canonical symptom name to canonical id.
    pub symptom_id_map: BTreeMap<String, SymptomId>,
    pub stats: KbStats,
}

impl KnowledgeBase {
    /// Look up a disease by id.
    pub fn disease(&self, id: &DiseaseId) -> Option<&Disease> {
        self.diseases.iter().find(|d| &d.id == id)
    }

    /// Canonical name for a symptom id, if the id is known.
    pub fn symptom_name(&self, id: &SymptomId) -> Option<&str> {
        self.symptom_id_map
            .iter()
            .find(|(_, sid)| *sid == id)
            .map(|(name, _)| name.as_str())
    }

    /// Canonical id for a canonical symptom name, if the name is known.
    pub fn symptom_id(&self, name: &str) -> Option<&SymptomId> {
        self.symptom_id_map.get(name)
    }
}
