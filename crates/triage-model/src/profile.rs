//! Patient profile: the per-conversation record of confirmed symptoms and
//! lifestyle factors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{SymptomMatch, SymptomSource};

/// Per-conversation patient state.
///
/// Owned exclusively by the session that created it. Confirmed symptoms
/// are append-only: once confirmed, a symptom is never retracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub patient_id: String,
    pub confirmed_symptoms: Vec<SymptomMatch>,
    pub lifestyle_factors: BTreeMap<String, String>,
}

impl PatientProfile {
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            confirmed_symptoms: Vec::new(),
            lifestyle_factors: BTreeMap::new(),
        }
    }

    /// Whether a canonical symptom name is already confirmed.
    pub fn is_confirmed(&self, symptom_name: &str) -> bool {
        self.confirmed_symptoms
            .iter()
            .any(|m| m.is_confirmed && m.symptom_name == symptom_name)
    }

    /// Append a confirmed symptom unless it is already present.
    ///
    /// Returns true if the profile changed.
    pub fn confirm(&mut self, symptom_name: &str, source: SymptomSource) -> bool {
        if self.is_confirmed(symptom_name) {
            return false;
        }
        self.confirmed_symptoms
            .push(SymptomMatch::confirmed(symptom_name, source));
        true
    }

    /// Names of all confirmed symptoms, in confirmation order.
    pub fn confirmed_names(&self) -> Vec<String> {
        self.confirmed_symptoms
            .iter()
            .filter(|m| m.is_confirmed)
            .map(|m| m.symptom_name.clone())
            .collect()
    }

    /// Record a lifestyle factor mentioned by the patient.
    pub fn record_lifestyle_factor(
        &mut self,
        factor: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.lifestyle_factors.insert(factor.into(), detail.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_is_idempotent() {
        let mut profile = PatientProfile::new("patient_0001");
        assert!(profile.confirm("头痛", SymptomSource::UserInput));
        assert!(!profile.confirm("头痛", SymptomSource::UserConfirmation));
        assert_eq!(profile.confirmed_symptoms.len(), 1);
        assert_eq!(
            profile.confirmed_symptoms[0].source,
            SymptomSource::UserInput
        );
    }

    #[test]
    fn confirmed_names_preserve_order() {
        let mut profile = PatientProfile::new("patient_0001");
        profile.confirm("头痛", SymptomSource::UserInput);
        profile.confirm("胸闷", SymptomSource::UserInput);
        profile.confirm("失眠", SymptomSource::UserConfirmation);
        assert_eq!(profile.confirmed_names(), vec!["头痛", "胸闷", "失眠"]);
    }
}
