//! Clarification session state machine.
//!
//! One session per patient conversation, single-threaded, sole writer of
//! its `PatientProfile`. Each turn takes an utterance and returns a
//! response; the engine owns no timers, threads, or external resources,
//! so a session can be dropped at any point with no cleanup.

use std::collections::BTreeSet;

use tracing::{debug, info};

use triage_lexicon::{canonical_id, clean, extract_mentions};
use triage_model::{KnowledgeBase, PatientProfile, SymptomId, SymptomSource};
use triage_score::{DiseaseMatchProgress, RiskScorer};

use crate::error::{Result, SessionError};
use crate::questions::{LIFESTYLE_KEYWORDS, QuestionCatalog};
use crate::response::{FocusDisease, TurnResponse};

/// Tokens that count as an explicit affirmation of a previously asked
/// symptom. Checked after negation phrases are removed.
static AFFIRMATION_MARKERS: &[&str] = &["是", "有", "确实", "对"];
static NEGATION_PHRASES: &[&str] = &["没有", "不是"];

/// At most this many missing symptoms are surfaced per turn.
const MISSING_SYMPTOM_DISPLAY_LIMIT: usize = 3;

/// Session tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Turns before the session gives up and reports inconclusive.
    pub max_verification_rounds: usize,
    /// Targeted questions emitted per clarification turn.
    pub max_questions_per_turn: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_verification_rounds: 5,
            max_questions_per_turn: 2,
        }
    }
}

/// States of the clarification loop.
///
/// `Diagnosed` and `Inconclusive` are terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Collecting,
    AwaitingConfirmation,
    Diagnosed,
    Inconclusive,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Diagnosed | Self::Inconclusive)
    }
}

/// Multi-round clarification dialogue over a read-only knowledge base.
pub struct ClarificationSession<'a> {
    kb: &'a KnowledgeBase,
    config: SessionConfig,
    catalog: QuestionCatalog,
    profile: PatientProfile,
    state: SessionState,
    verification_round: usize,
    /// Canonical symptom names asked about in the previous turn.
    asked_symptoms: Vec<String>,
}

impl<'a> ClarificationSession<'a> {
    pub fn new(kb: &'a KnowledgeBase, patient_id: impl Into<String>, config: SessionConfig) -> Self {
        Self {
            kb,
            config,
            catalog: QuestionCatalog,
            profile: PatientProfile::new(patient_id),
            state: SessionState::Collecting,
            verification_round: 0,
            asked_symptoms: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn verification_round(&self) -> usize {
        self.verification_round
    }

    pub fn profile(&self) -> &PatientProfile {
        &self.profile
    }

    /// Process one patient utterance.
    ///
    /// Returns an error once the session has reached a terminal state.
    pub fn turn(&mut self, utterance: &str) -> Result<TurnResponse> {
        if self.state.is_terminal() {
            return Err(SessionError::SessionFinished(self.state));
        }
        self.verification_round += 1;
        debug!(round = self.verification_round, "processing utterance");

        let newly_confirmed = self.extract_symptoms(utterance);
        for (name, source) in &newly_confirmed {
            self.profile.confirm(name, *source);
        }
        self.capture_lifestyle_factors(utterance);
        self.asked_symptoms.clear();

        let confirmed_ids = self.confirmed_ids();
        let scorer = RiskScorer::new(self.kb);
        let candidates = scorer.candidates(&confirmed_ids);
        debug!(
            confirmed = confirmed_ids.len(),
            candidates = candidates.len(),
            "rescored candidates"
        );

        if let Some(complete) = candidates.first().filter(|c| c.is_complete()) {
            return Ok(self.diagnose(complete.clone()));
        }
        let Some(focus) = candidates.into_iter().next() else {
            self.state = SessionState::Inconclusive;
            info!(round = self.verification_round, "no candidate diseases");
            return Ok(TurnResponse::Inconclusive {
                reason: "未能匹配到已知疾病模式".to_string(),
                questions: self.catalog.broadening_questions(),
            });
        };
        if self.verification_round >= self.config.max_verification_rounds {
            self.state = SessionState::Inconclusive;
            info!(
                round = self.verification_round,
                "round limit reached without diagnosis"
            );
            return Ok(TurnResponse::Inconclusive {
                reason: "多轮确认后仍无法完成诊断，建议尽快就医，寻求专业评估".to_string(),
                questions: Vec::new(),
            });
        }

        Ok(self.ask_about(focus))
    }

    /// Extract canonical symptoms asserted in the utterance.
    ///
    /// Spontaneous mentions are confirmed directly. A symptom that was
    /// asked about in the previous turn additionally needs an affirmation
    /// marker; a bare mention in an answer is not a confirmation.
    fn extract_symptoms(&self, utterance: &str) -> Vec<(String, SymptomSource)> {
        let cleaned = clean(utterance);
        let mut mentions: Vec<String> = extract_mentions(utterance)
            .into_iter()
            .map(str::to_string)
            .collect();
        // Knowledge-base symptoms outside the lexicon (singleton
        // canonicals) still count as known names.
        for name in self.kb.symptom_id_map.keys() {
            if cleaned.contains(name.as_str()) && !mentions.contains(name) {
                mentions.push(name.clone());
            }
        }

        let affirmed = has_affirmation_marker(utterance);
        mentions
            .into_iter()
            .filter_map(|name| {
                if !self.asked_symptoms.contains(&name) {
                    Some((name, SymptomSource::UserInput))
                } else if affirmed {
                    Some((name, SymptomSource::UserConfirmation))
                } else {
                    debug!(symptom = %name, "mention without affirmation ignored");
                    None
                }
            })
            .collect()
    }

    fn capture_lifestyle_factors(&mut self, utterance: &str) {
        for (factor, keywords) in LIFESTYLE_KEYWORDS {
            if keywords.iter().any(|k| utterance.contains(k)) {
                self.profile.record_lifestyle_factor(*factor, utterance);
            }
        }
    }

    fn confirmed_ids(&self) -> BTreeSet<SymptomId> {
        self.profile
            .confirmed_names()
            .iter()
            .map(|name| {
                self.kb
                    .symptom_id(name)
                    .cloned()
                    .unwrap_or_else(|| canonical_id(name))
            })
            .collect()
    }

    fn diagnose(&mut self, progress: DiseaseMatchProgress) -> TurnResponse {
        self.state = SessionState::Diagnosed;
        info!(disease = %progress.disease_name, "diagnosis complete");
        TurnResponse::Diagnosed {
            disease_name: progress.disease_name,
            confidence: "high".to_string(),
            match_percentage: progress.match_percentage,
            confirmed_symptoms: self.profile.confirmed_names(),
            recommendations: self.catalog.recommendations(),
            lifestyle_advice: self.catalog.lifestyle_advice(&self.profile.lifestyle_factors),
        }
    }

    fn ask_about(&mut self, focus: DiseaseMatchProgress) -> TurnResponse {
        let mut questions = Vec::new();
        if let Some(missing) = focus.missing_symptoms.first() {
            questions.push(self.catalog.missing_symptom_question(missing));
            self.asked_symptoms.push(missing.clone());
        }
        questions.push(self.catalog.lifestyle_probe(&focus.disease_name).to_string());
        questions.truncate(self.config.max_questions_per_turn);

        self.state = SessionState::AwaitingConfirmation;
        TurnResponse::AwaitingConfirmation {
            focus_disease: FocusDisease {
                disease_name: focus.disease_name,
                match_percentage: focus.match_percentage,
                confirmed_symptoms: self.profile.confirmed_names(),
                missing_symptoms: focus
                    .missing_symptoms
                    .into_iter()
                    .take(MISSING_SYMPTOM_DISPLAY_LIMIT)
                    .collect(),
            },
            questions,
        }
    }
}

fn has_affirmation_marker(utterance: &str) -> bool {
    let mut text = utterance.to_string();
    for phrase in NEGATION_PHRASES {
        text = text.replace(phrase, "");
    }
    AFFIRMATION_MARKERS.iter().any(|m| text.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmation_markers_ignore_negation_phrases() {
        assert!(has_affirmation_marker("是的，确实有"));
        assert!(!has_affirmation_marker("没有吧"));
        assert!(!has_affirmation_marker("不是这样"));
        assert!(has_affirmation_marker("没有别的，但确实怕光"));
    }

    #[test]
    fn default_config_limits() {
        let config = SessionConfig::default();
        assert_eq!(config.max_verification_rounds, 5);
        assert_eq!(config.max_questions_per_turn, 2);
    }
}
