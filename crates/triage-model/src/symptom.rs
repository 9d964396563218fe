//! Canonical symptom types and patient-reported symptom matches.

use serde::{Deserialize, Serialize};

use crate::SymptomId;

/// Coarse clinical category of a canonical symptom.
///
/// Used to group the semantic table and to pick lifestyle probes during
/// clarification. `Uncatalogued` covers raw symptom strings that matched
/// no semantic group and became singleton canonical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    PainBySite,
    PainByQuality,
    Fever,
    Respiratory,
    Digestive,
    Neurological,
    Dermatological,
    Urinary,
    Cardiovascular,
    Ocular,
    Ent,
    Constitutional,
    Uncatalogued,
}

/// A canonical symptom: one standardized name for a family of raw variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalSymptom {
    pub id: SymptomId,
    pub name: String,
    pub category: SymptomCategory,
}

/// Where a confirmed symptom came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomSource {
    /// Mentioned spontaneously in a patient utterance.
    UserInput,
    /// Affirmed in response to a clarification question.
    UserConfirmation,
}

/// A single confirmed (or tentatively matched) symptom on a patient profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomMatch {
    pub symptom_name: String,
    pub is_confirmed: bool,
    pub source: SymptomSource,
    pub confidence: f32,
}

impl SymptomMatch {
    pub fn confirmed(symptom_name: impl Into<String>, source: SymptomSource) -> Self {
        Self {
            symptom_name: symptom_name.into(),
            is_confirmed: true,
            source,
            confidence: 1.0,
        }
    }
}
