//! Question and advice templates.
//!
//! Lifestyle probes are a data-driven table keyed by disease-name
//! keywords rather than scattered conditionals, so the rule set can be
//! tested and extended on its own.

use std::collections::BTreeMap;

/// One lifestyle probe rule: fires when any keyword appears in the focus
/// disease's name.
#[derive(Debug, Clone, Copy)]
struct Probe {
    keywords: &'static [&'static str],
    question: &'static str,
}

static PROBES: &[Probe] = &[
    Probe {
        keywords: &["肠胃", "消化", "胃"],
        question: "您最近的饮食习惯有什么变化吗？",
    },
    Probe {
        keywords: &["头痛", "偏头痛"],
        question: "您最近的工作压力大吗？",
    },
    Probe {
        keywords: &["失眠", "睡眠"],
        question: "您的睡眠质量如何？",
    },
];

const DEFAULT_PROBE: &str = "您最近的生活习惯有什么变化吗？";

/// Lifestyle keyword families detected in patient utterances.
pub static LIFESTYLE_KEYWORDS: &[(&str, &[&str])] = &[
    ("压力", &["压力", "紧张", "焦虑", "加班"]),
    ("饮食", &["饮食", "吃", "食物", "油腻"]),
    ("睡眠", &["睡眠", "睡觉", "失眠", "休息"]),
    ("运动", &["运动", "锻炼", "活动", "走路"]),
];

static ADVICE: &[(&str, &str)] = &[
    ("压力", "建议适当减压，保持心情愉快"),
    ("饮食", "注意饮食规律，避免刺激性食物"),
    ("睡眠", "保持规律作息，确保充足睡眠"),
    ("运动", "适当运动，增强体质"),
];

/// Question and advice catalog for clarification turns.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionCatalog;

impl QuestionCatalog {
    /// Targeted question about one missing symptom.
    pub fn missing_symptom_question(&self, symptom: &str) -> String {
        format!("您是否还出现了{symptom}的症状？")
    }

    /// Lifestyle probe for the focus disease, chosen by the first probe
    /// rule whose keyword appears in the disease name.
    pub fn lifestyle_probe(&self, disease_name: &str) -> &'static str {
        PROBES
            .iter()
            .find(|p| p.keywords.iter().any(|k| disease_name.contains(k)))
            .map_or(DEFAULT_PROBE, |p| p.question)
    }

    /// Generic broadening questions for turns where nothing matched.
    pub fn broadening_questions(&self) -> Vec<String> {
        vec![
            "您能更详细地描述一下症状吗？".to_string(),
            "这些症状是什么时候开始的？".to_string(),
            "症状的严重程度如何？".to_string(),
        ]
    }

    /// Static recommendation text attached to every diagnosis.
    pub fn recommendations(&self) -> Vec<String> {
        vec![
            "建议尽快就医确诊并接受治疗".to_string(),
            "密切观察症状变化".to_string(),
            "如有症状加重，及时就医".to_string(),
        ]
    }

    /// Lifestyle advice derived from the factors recorded on the profile.
    pub fn lifestyle_advice(&self, factors: &BTreeMap<String, String>) -> Vec<String> {
        ADVICE
            .iter()
            .filter(|(factor, _)| factors.contains_key(*factor))
            .map(|(_, advice)| (*advice).to_string())
            .collect()
    }
}
