#![deny(unsafe_code)]

//! Disease risk scoring: set-based matching of a disease's canonical
//! symptom set against a patient's confirmed symptoms.
//!
//! Scores are recomputed from scratch every turn; nothing here is
//! persisted or mutated between calls.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use triage_model::{Disease, DiseaseId, KnowledgeBase, SymptomId};

/// Match progress of one disease against the confirmed symptom set.
///
/// Ephemeral: recomputed every turn, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseMatchProgress {
    pub disease_id: DiseaseId,
    pub disease_name: String,
    pub total_symptoms: usize,
    pub confirmed_symptoms: usize,
    pub match_percentage: f64,
    /// Unconfirmed disease symptoms, in disease-declared order.
    pub missing_symptoms: Vec<String>,
    /// Confirmed symptoms irrelevant to this disease. Tracked for
    /// transparency, not penalized in the score.
    pub extra_symptoms: Vec<String>,
}

impl DiseaseMatchProgress {
    pub fn is_complete(&self) -> bool {
        self.match_percentage >= 100.0
    }
}

/// Scoring engine over a read-only canonicalized knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct RiskScorer<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> RiskScorer<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Score one disease against the confirmed symptom set.
    ///
    /// A disease with zero listed symptoms scores 0; such diseases never
    /// enter candidate ranking.
    pub fn score(&self, disease: &Disease, confirmed: &BTreeSet<SymptomId>) -> DiseaseMatchProgress {
        let total = disease.symptoms.len();
        let confirmed_count = disease
            .symptom_ids()
            .filter(|id| confirmed.contains(id))
            .count();
        let match_percentage = if total > 0 {
            100.0 * confirmed_count as f64 / total as f64
        } else {
            0.0
        };
        let missing_symptoms = disease
            .symptoms
            .iter()
            .filter(|s| !confirmed.contains(&s.id))
            .map(|s| s.name.clone())
            .collect();
        let disease_ids: BTreeSet<_> = disease.symptom_ids().collect();
        let extra_symptoms = confirmed
            .iter()
            .filter(|id| !disease_ids.contains(id))
            .map(|id| {
                self.kb
                    .symptom_name(id)
                    .map_or_else(|| id.to_string(), str::to_string)
            })
            .collect();

        DiseaseMatchProgress {
            disease_id: disease.id.clone(),
            disease_name: disease.name.clone(),
            total_symptoms: total,
            confirmed_symptoms: confirmed_count,
            match_percentage,
            missing_symptoms,
            extra_symptoms,
        }
    }

    /// Candidate diseases for the confirmed set, ranked.
    ///
    /// A candidate must list at least one symptom and share at least one
    /// confirmed symptom; everything else is never surfaced. Ranking is
    /// deterministic: match percentage descending, confirmed count
    /// descending, disease id ascending.
    pub fn candidates(&self, confirmed: &BTreeSet<SymptomId>) -> Vec<DiseaseMatchProgress> {
        let mut ranked: Vec<_> = self
            .kb
            .diseases
            .iter()
            .filter(|d| d.has_symptoms())
            .filter(|d| d.symptom_ids().any(|id| confirmed.contains(id)))
            .map(|d| self.score(d, confirmed))
            .collect();
        ranked.sort_by(|a, b| {
            b.match_percentage
                .partial_cmp(&a.match_percentage)
                .unwrap_or(Ordering::Equal)
                .then(b.confirmed_symptoms.cmp(&a.confirmed_symptoms))
                .then(a.disease_id.cmp(&b.disease_id))
        });
        ranked
    }
}
