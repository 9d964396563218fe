//! Per-turn response contract.

use serde::{Deserialize, Serialize};

/// Summary of the top-ranked candidate driving the current round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusDisease {
    pub disease_name: String,
    pub match_percentage: f64,
    pub confirmed_symptoms: Vec<String>,
    pub missing_symptoms: Vec<String>,
}

/// Outcome of one clarification turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TurnResponse {
    /// A disease reached full symptom coverage. Terminal.
    Diagnosed {
        disease_name: String,
        confidence: String,
        match_percentage: f64,
        confirmed_symptoms: Vec<String>,
        recommendations: Vec<String>,
        lifestyle_advice: Vec<String>,
    },
    /// Clarification continues: targeted questions about the focus
    /// disease.
    AwaitingConfirmation {
        focus_disease: FocusDisease,
        questions: Vec<String>,
    },
    /// Insufficient evidence. Terminal.
    Inconclusive {
        reason: String,
        questions: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tag_is_snake_case() {
        let response = TurnResponse::Inconclusive {
            reason: "未能匹配到已知疾病模式".to_string(),
            questions: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "inconclusive");

        let response = TurnResponse::AwaitingConfirmation {
            focus_disease: FocusDisease {
                disease_name: "偏头痛".to_string(),
                match_percentage: 50.0,
                confirmed_symptoms: vec!["头痛".to_string()],
                missing_symptoms: vec!["恶心".to_string()],
            },
            questions: vec!["您是否还出现了恶心的症状？".to_string()],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "awaiting_confirmation");
        assert_eq!(json["focus_disease"]["disease_name"], "偏头痛");

        let response = TurnResponse::Diagnosed {
            disease_name: "偏头痛".to_string(),
            confidence: "high".to_string(),
            match_percentage: 100.0,
            confirmed_symptoms: vec!["头痛".to_string(), "恶心".to_string()],
            recommendations: vec!["建议尽快就医确诊并接受治疗".to_string()],
            lifestyle_advice: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "diagnosed");
        assert_eq!(json["disease_name"], "偏头痛");
        assert_eq!(json["match_percentage"], 100.0);
        assert_eq!(json["confirmed_symptoms"][0], "头痛");
    }
}
