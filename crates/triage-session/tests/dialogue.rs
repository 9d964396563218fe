//! End-to-end dialogue scenarios over a small built knowledge base.

use triage_kb::{BuildContext, build};
use triage_model::{KnowledgeBase, RawDiseaseRecord, RawKnowledgeBase, RawSymptomRecord};
use triage_session::{ClarificationSession, SessionConfig, SessionError, SessionState, TurnResponse};

fn raw_disease(id: &str, name: &str, symptoms: &[&str]) -> RawDiseaseRecord {
    RawDiseaseRecord {
        id: id.to_string(),
        name: name.to_string(),
        symptoms: symptoms
            .iter()
            .map(|s| RawSymptomRecord {
                id: String::new(),
                name: (*s).to_string(),
                specificity: false,
            })
            .collect(),
        explanation: String::new(),
    }
}

fn build_kb(records: Vec<RawDiseaseRecord>) -> KnowledgeBase {
    let raw = RawKnowledgeBase { diseases: records };
    build(&raw, BuildContext::new()).kb
}

fn rounded(percentage: f64) -> f64 {
    (percentage * 10.0).round() / 10.0
}

#[test]
fn two_turn_dialogue_converges_to_diagnosis() {
    let kb = build_kb(vec![
        raw_disease("D001", "偏头痛", &["头痛", "恶心", "畏光"]),
        raw_disease("D002", "流行性感冒", &["发热", "咳嗽", "咽痛", "疲劳"]),
    ]);
    let mut session = ClarificationSession::new(&kb, "patient_0001", SessionConfig::default());

    let first = session.turn("我头疼，还有点恶心").unwrap();
    let TurnResponse::AwaitingConfirmation {
        focus_disease,
        questions,
    } = first
    else {
        panic!("expected awaiting_confirmation, got {first:?}");
    };
    assert_eq!(focus_disease.disease_name, "偏头痛");
    assert_eq!(rounded(focus_disease.match_percentage), 66.7);
    assert_eq!(focus_disease.confirmed_symptoms, vec!["头痛", "恶心"]);
    assert_eq!(focus_disease.missing_symptoms, vec!["畏光"]);
    assert_eq!(questions[0], "您是否还出现了畏光的症状？");
    assert_eq!(questions[1], "您最近的工作压力大吗？");
    assert_eq!(session.state(), SessionState::AwaitingConfirmation);

    let second = session.turn("是的，我确实怕光").unwrap();
    let TurnResponse::Diagnosed {
        disease_name,
        confidence,
        match_percentage,
        confirmed_symptoms,
        recommendations,
        ..
    } = second
    else {
        panic!("expected diagnosed, got {second:?}");
    };
    assert_eq!(disease_name, "偏头痛");
    assert_eq!(confidence, "high");
    assert_eq!(match_percentage, 100.0);
    assert_eq!(confirmed_symptoms, vec!["头痛", "恶心", "畏光"]);
    assert!(!recommendations.is_empty());
    assert_eq!(session.state(), SessionState::Diagnosed);

    // Terminal: further turns are rejected.
    assert_eq!(
        session.turn("还有别的吗"),
        Err(SessionError::SessionFinished(SessionState::Diagnosed))
    );
}

#[test]
fn unrecognized_utterance_is_inconclusive_without_profile_mutation() {
    let kb = build_kb(vec![raw_disease("D001", "偏头痛", &["头痛", "恶心"])]);
    let mut session = ClarificationSession::new(&kb, "patient_0002", SessionConfig::default());

    let response = session.turn("今天天气真好").unwrap();
    let TurnResponse::Inconclusive { questions, .. } = response else {
        panic!("expected inconclusive, got {response:?}");
    };
    assert_eq!(questions.len(), 3);
    assert!(session.profile().confirmed_symptoms.is_empty());
    assert!(session.profile().lifestyle_factors.is_empty());
    assert_eq!(session.state(), SessionState::Inconclusive);
}

#[test]
fn bare_mention_of_an_asked_symptom_is_not_a_confirmation() {
    let kb = build_kb(vec![raw_disease("D001", "偏头痛", &["头痛", "恶心", "畏光"])]);
    let mut session = ClarificationSession::new(&kb, "patient_0003", SessionConfig::default());

    session.turn("我头疼，还有点恶心").unwrap();
    let response = session.turn("畏光？说不清").unwrap();

    let TurnResponse::AwaitingConfirmation { focus_disease, .. } = response else {
        panic!("expected awaiting_confirmation, got {response:?}");
    };
    assert_eq!(rounded(focus_disease.match_percentage), 66.7);
    assert!(!session.profile().is_confirmed("畏光"));
}

#[test]
fn round_limit_forces_inconclusive() {
    let kb = build_kb(vec![raw_disease(
        "D002",
        "流行性感冒",
        &["发热", "咳嗽", "咽痛", "疲劳"],
    )]);
    let mut session = ClarificationSession::new(&kb, "patient_0004", SessionConfig::default());

    let first = session.turn("我发烧了").unwrap();
    assert!(matches!(first, TurnResponse::AwaitingConfirmation { .. }));

    for _ in 0..3 {
        let response = session.turn("说不清").unwrap();
        assert!(matches!(response, TurnResponse::AwaitingConfirmation { .. }));
    }

    let fifth = session.turn("说不清").unwrap();
    let TurnResponse::Inconclusive { reason, .. } = fifth else {
        panic!("expected inconclusive, got {fifth:?}");
    };
    assert!(reason.contains("专业评估"));
    assert_eq!(session.verification_round(), 5);
    assert!(session.state().is_terminal());
}

#[test]
fn lifestyle_factors_surface_as_advice_on_diagnosis() {
    let kb = build_kb(vec![raw_disease("D001", "偏头痛", &["头痛", "畏光"])]);
    let mut session = ClarificationSession::new(&kb, "patient_0005", SessionConfig::default());

    session.turn("我头疼").unwrap();
    let response = session.turn("是的怕光，最近工作压力也很大").unwrap();

    let TurnResponse::Diagnosed {
        lifestyle_advice, ..
    } = response
    else {
        panic!("expected diagnosed, got {response:?}");
    };
    assert!(lifestyle_advice.contains(&"建议适当减压，保持心情愉快".to_string()));
    assert_eq!(
        session.profile().lifestyle_factors.get("压力").unwrap(),
        "是的怕光，最近工作压力也很大"
    );
}

#[test]
fn singleton_knowledge_base_symptoms_are_recognized() {
    // 夜间磨牙 is not in the lexicon; it became its own canonical name
    // during the build and must still be extractable from utterances.
    let kb = build_kb(vec![raw_disease("D003", "磨牙症", &["夜间磨牙", "失眠"])]);
    let mut session = ClarificationSession::new(&kb, "patient_0006", SessionConfig::default());

    let response = session.turn("家人说我夜间磨牙").unwrap();
    let TurnResponse::AwaitingConfirmation { focus_disease, .. } = response else {
        panic!("expected awaiting_confirmation, got {response:?}");
    };
    assert_eq!(focus_disease.disease_name, "磨牙症");
    assert_eq!(focus_disease.match_percentage, 50.0);
}
