#![deny(unsafe_code)]

//! Shared data model for the triage engine.
//!
//! Types here are the contract between the knowledge-base build, the
//! scoring engine, and the clarification session. Everything with an
//! external JSON shape carries serde derives; nothing here performs IO.

mod disease;
mod error;
mod ids;
mod index;
mod kb;
mod profile;
mod symptom;

pub use disease::{Disease, DiseaseSymptom, RawDiseaseRecord, RawKnowledgeBase, RawSymptomRecord};
pub use error::{ModelError, Result};
pub use ids::{DiseaseId, SymptomId};
pub use index::{IndexedDisease, ReverseIndex, ReverseIndexEntry};
pub use kb::{KbStats, KnowledgeBase};
pub use profile::PatientProfile;
pub use symptom::{CanonicalSymptom, SymptomCategory, SymptomMatch, SymptomSource};
