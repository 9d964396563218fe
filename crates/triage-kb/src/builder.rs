//! Knowledge-base build: canonicalize raw disease records and accumulate
//! the reverse symptom index.
//!
//! The build is a pure transform over an immutable input snapshot. All
//! mutable accumulation lives in a caller-owned [`BuildContext`], so two
//! builds over the same input produce identical output and shards can be
//! accumulated under a single-writer discipline.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use triage_lexicon::canonicalize;
use triage_model::{
    Disease, DiseaseId, DiseaseSymptom, IndexedDisease, KbStats, KnowledgeBase, RawDiseaseRecord,
    RawKnowledgeBase, ReverseIndex, ReverseIndexEntry, SymptomId,
};

/// Mutable accumulation state for one knowledge-base build.
///
/// Holds the canonical-name-to-id cache and the reverse-index buckets.
/// Create one per build; never share across builds.
#[derive(Debug, Default)]
pub struct BuildContext {
    symptom_ids: BTreeMap<String, SymptomId>,
    reverse: BTreeMap<SymptomId, Bucket>,
}

#[derive(Debug)]
struct Bucket {
    symptom_name: String,
    diseases: Vec<IndexedDisease>,
    seen: BTreeSet<DiseaseId>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign or reuse the canonical id for a canonical name.
    fn intern(&mut self, canonical_name: &str) -> SymptomId {
        self.symptom_ids
            .entry(canonical_name.to_string())
            .or_insert_with(|| canonicalize(canonical_name).id)
            .clone()
    }

    /// Accumulate a disease into a symptom's reverse-index bucket,
    /// deduplicating by disease id. The first occurrence wins; later
    /// duplicates are dropped, not merged.
    fn index(&mut self, symptom_id: &SymptomId, symptom_name: &str, disease: IndexedDisease) {
        let bucket = self
            .reverse
            .entry(symptom_id.clone())
            .or_insert_with(|| Bucket {
                symptom_name: symptom_name.to_string(),
                diseases: Vec::new(),
                seen: BTreeSet::new(),
            });
        if bucket.seen.insert(disease.disease_id.clone()) {
            bucket.diseases.push(disease);
        }
    }

    fn into_reverse_index(self) -> ReverseIndex {
        self.reverse
            .into_iter()
            .map(|(id, bucket)| {
                (
                    id,
                    ReverseIndexEntry {
                        symptom_name: bucket.symptom_name,
                        disease_count: bucket.diseases.len(),
                        diseases: bucket.diseases,
                    },
                )
            })
            .collect()
    }
}

/// Everything one build produces.
#[derive(Debug)]
pub struct BuildOutput {
    pub kb: KnowledgeBase,
    pub reverse_index: ReverseIndex,
    pub report: BuildReport,
}

/// Build statistics beyond the wire-level [`KbStats`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub total_records: usize,
    pub skipped_records: usize,
    /// Mentions per canonical symptom name across all records.
    pub occurrences: BTreeMap<String, usize>,
}

impl BuildReport {
    /// Most frequently mentioned canonical symptoms, count descending,
    /// name ascending on ties.
    pub fn most_common(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self
            .occurrences
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        ranked.truncate(limit);
        ranked
    }

    /// Canonical pain symptoms seen during the build.
    pub fn pain_symptoms(&self) -> Vec<&str> {
        self.occurrences
            .keys()
            .filter(|name| name.contains('痛') || name.contains('疼'))
            .map(String::as_str)
            .collect()
    }
}

/// Canonicalize every record of a raw knowledge base and build the
/// reverse symptom index.
///
/// Records missing a disease id or name are skipped with a warning and do
/// not abort the build.
pub fn build(raw: &RawKnowledgeBase, mut ctx: BuildContext) -> BuildOutput {
    info!(records = raw.diseases.len(), "building knowledge base");

    let mut diseases = Vec::new();
    let mut report = BuildReport {
        total_records: raw.diseases.len(),
        ..BuildReport::default()
    };

    for record in &raw.diseases {
        match build_disease(record, &mut ctx, &mut report) {
            Some(disease) => diseases.push(disease),
            None => report.skipped_records += 1,
        }
    }

    let symptom_id_map = ctx.symptom_ids.clone();
    let stats = KbStats {
        disease_count: diseases.len(),
        symptom_count: symptom_id_map.len(),
    };
    info!(
        diseases = stats.disease_count,
        symptoms = stats.symptom_count,
        skipped = report.skipped_records,
        "knowledge base build complete"
    );

    let reverse_index = ctx.into_reverse_index();
    BuildOutput {
        kb: KnowledgeBase {
            diseases,
            symptom_id_map,
            stats,
        },
        reverse_index,
        report,
    }
}

fn build_disease(
    record: &RawDiseaseRecord,
    ctx: &mut BuildContext,
    report: &mut BuildReport,
) -> Option<Disease> {
    let disease_id = match DiseaseId::new(record.id.as_str()) {
        Ok(id) => id,
        Err(_) => {
            warn!(name = %record.name, "skipping disease record without id");
            return None;
        }
    };
    if record.name.trim().is_empty() {
        warn!(id = %disease_id, "skipping disease record without name");
        return None;
    }

    let mut symptoms: Vec<DiseaseSymptom> = Vec::new();
    let mut seen = BTreeSet::new();
    for raw_symptom in &record.symptoms {
        if raw_symptom.name.trim().is_empty() {
            debug!(disease = %disease_id, "dropping symptom entry without name");
            continue;
        }
        let canonical_name = triage_lexicon::normalize(&raw_symptom.name);
        let id = ctx.intern(&canonical_name);
        *report.occurrences.entry(canonical_name.clone()).or_default() += 1;
        ctx.index(
            &id,
            &canonical_name,
            IndexedDisease {
                disease_id: disease_id.clone(),
                disease_name: record.name.clone(),
                specificity: raw_symptom.specificity,
            },
        );
        // Canonical symptom set: first occurrence wins within a disease.
        if seen.insert(id.clone()) {
            symptoms.push(DiseaseSymptom {
                id,
                name: canonical_name,
                specificity: raw_symptom.specificity,
            });
        }
    }

    Some(Disease {
        id: disease_id,
        name: record.name.clone(),
        symptoms,
        explanation: record.explanation.clone(),
    })
}

#[cfg(test)]
mod tests {
    use triage_model::RawSymptomRecord;

    use super::*;

    fn raw_symptom(name: &str) -> RawSymptomRecord {
        RawSymptomRecord {
            id: String::new(),
            name: name.to_string(),
            specificity: false,
        }
    }

    fn raw_disease(id: &str, name: &str, symptoms: &[&str]) -> RawDiseaseRecord {
        RawDiseaseRecord {
            id: id.to_string(),
            name: name.to_string(),
            symptoms: symptoms.iter().map(|s| raw_symptom(s)).collect(),
            explanation: String::new(),
        }
    }

    fn raw_kb(records: Vec<RawDiseaseRecord>) -> RawKnowledgeBase {
        RawKnowledgeBase { diseases: records }
    }

    #[test]
    fn reverse_index_round_trip() {
        let raw = raw_kb(vec![
            raw_disease("D001", "偏头痛", &["头痛", "恶心", "畏光"]),
            raw_disease("D002", "流感", &["发热", "头痛", "咳嗽"]),
        ]);
        let output = build(&raw, BuildContext::new());

        for disease in &output.kb.diseases {
            for symptom in &disease.symptoms {
                let entry = output.reverse_index.get(&symptom.id).unwrap();
                let hits = entry
                    .diseases
                    .iter()
                    .filter(|d| d.disease_id == disease.id)
                    .count();
                assert_eq!(hits, 1, "{} under {}", disease.id, symptom.name);
            }
        }
    }

    #[test]
    fn variant_spellings_share_a_reverse_index_bucket() {
        let raw = raw_kb(vec![
            raw_disease("D001", "偏头痛", &["头疼"]),
            raw_disease("D002", "紧张性头痛", &["头痛"]),
        ]);
        let output = build(&raw, BuildContext::new());

        let id = output.kb.symptom_id("头痛").unwrap();
        let entry = output.reverse_index.get(id).unwrap();
        assert_eq!(entry.disease_count, 2);
        assert_eq!(entry.symptom_name, "头痛");
    }

    #[test]
    fn duplicate_symptom_entries_are_deduplicated() {
        let raw = raw_kb(vec![raw_disease("D001", "流感", &["发热", "发烧", "发热"])]);
        let output = build(&raw, BuildContext::new());

        let disease = &output.kb.diseases[0];
        assert_eq!(disease.symptoms.len(), 1);
        assert_eq!(disease.symptoms[0].name, "发热");

        let id = output.kb.symptom_id("发热").unwrap();
        let entry = output.reverse_index.get(id).unwrap();
        assert_eq!(entry.disease_count, 1);
        assert_eq!(entry.diseases.len(), 1);
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let raw = raw_kb(vec![
            raw_disease("", "无编号疾病", &["头痛"]),
            raw_disease("D002", "", &["发热"]),
            raw_disease("D003", "流感", &["发热"]),
        ]);
        let output = build(&raw, BuildContext::new());

        assert_eq!(output.kb.diseases.len(), 1);
        assert_eq!(output.report.total_records, 3);
        assert_eq!(output.report.skipped_records, 2);
        assert_eq!(output.kb.stats.disease_count, 1);
    }

    #[test]
    fn build_is_reproducible() {
        let raw = raw_kb(vec![
            raw_disease("D001", "偏头痛", &["头疼", "恶心"]),
            raw_disease("D002", "流感", &["发烧", "咳嗽", "头痛"]),
        ]);
        let first = build(&raw, BuildContext::new());
        let second = build(&raw, BuildContext::new());

        assert_eq!(first.kb.symptom_id_map, second.kb.symptom_id_map);
        assert_eq!(first.reverse_index, second.reverse_index);
        assert_eq!(first.report, second.report);
    }

    #[test]
    fn report_ranks_symptoms_by_frequency() {
        let raw = raw_kb(vec![
            raw_disease("D001", "偏头痛", &["头痛", "恶心"]),
            raw_disease("D002", "紧张性头痛", &["头痛"]),
            raw_disease("D003", "流感", &["发热", "头疼"]),
        ]);
        let output = build(&raw, BuildContext::new());

        let ranked = output.report.most_common(2);
        assert_eq!(ranked[0], ("头痛", 3));
        assert_eq!(ranked[1].1, 1);
        assert_eq!(output.report.pain_symptoms(), vec!["头痛"]);
    }
}
