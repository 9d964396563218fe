//! Integration tests for knowledge-base file IO.

use triage_kb::{
    BuildContext, build, load_knowledge_base, load_raw_knowledge_base, write_knowledge_base,
    write_reverse_index,
};
use triage_model::{DiseaseId, RawKnowledgeBase};

const RAW_KB: &str = r#"{
  "diseases": [
    {
      "id": "D001",
      "name": "偏头痛",
      "symptoms": [
        { "id": "S1", "name": "头疼", "specificity": true },
        { "id": "S2", "name": "恶心", "specificity": false }
      ],
      "explanation": "反复发作的原发性头痛。"
    },
    {
      "id": "D002",
      "name": "流行性感冒",
      "symptoms": [
        { "id": "S3", "name": "发烧", "specificity": false },
        { "id": "S4", "name": "咳嗽", "specificity": false },
        { "id": "S5", "name": "头痛", "specificity": false }
      ],
      "explanation": ""
    }
  ]
}"#;

#[test]
fn build_and_reload_canonicalized_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("raw.json");
    std::fs::write(&raw_path, RAW_KB).unwrap();

    let raw = load_raw_knowledge_base(&raw_path).unwrap();
    let output = build(&raw, BuildContext::new());

    let kb_path = dir.path().join("kb.json");
    let index_path = dir.path().join("reverse_index.json");
    write_knowledge_base(&kb_path, &output.kb).unwrap();
    write_reverse_index(&index_path, &output.reverse_index).unwrap();

    let reloaded = load_knowledge_base(&kb_path).unwrap();
    assert_eq!(reloaded.stats, output.kb.stats);
    assert_eq!(reloaded.symptom_id_map, output.kb.symptom_id_map);
    assert_eq!(reloaded.diseases, output.kb.diseases);

    let migraine = reloaded.disease(&DiseaseId::new("D001").unwrap()).unwrap();
    assert_eq!(migraine.name, "偏头痛");
    assert_eq!(migraine.explanation, "反复发作的原发性头痛。");
    assert!(
        reloaded
            .disease(&DiseaseId::new("D999").unwrap())
            .is_none()
    );

    // 头疼 and 头痛 canonicalize to the same id across the two records.
    let headache_id = reloaded.symptom_id("头痛").unwrap();
    let rendered = std::fs::read_to_string(&index_path).unwrap();
    let index: triage_model::ReverseIndex = serde_json::from_str(&rendered).unwrap();
    assert_eq!(index.get(headache_id).unwrap().disease_count, 2);
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_raw_knowledge_base(&dir.path().join("absent.json"));
    assert!(error.is_err());
}

#[test]
fn unparseable_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("raw.json");
    std::fs::write(&raw_path, "{ not json").unwrap();
    assert!(load_raw_knowledge_base(&raw_path).is_err());
}

#[test]
fn empty_knowledge_base_builds_empty_outputs() {
    let output = build(&RawKnowledgeBase::default(), BuildContext::new());
    assert!(output.kb.diseases.is_empty());
    assert!(output.reverse_index.is_empty());
    assert_eq!(output.kb.stats.symptom_count, 0);
}
