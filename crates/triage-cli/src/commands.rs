use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use triage_kb::{
    BuildContext, BuildReport, build, load_knowledge_base, load_raw_knowledge_base,
    write_knowledge_base, write_reverse_index,
};
use triage_lexicon::SEMANTIC_GROUPS;
use triage_model::{KbStats, SymptomCategory};
use triage_session::{ClarificationSession, SessionConfig, TurnResponse};

use crate::cli::{BuildArgs, ChatArgs};
use crate::summary::{apply_table_style, header_cell, print_turn};

/// What one `build` invocation produced.
pub struct BuildSummary {
    pub kb_path: PathBuf,
    pub index_path: PathBuf,
    pub stats: KbStats,
    pub report: BuildReport,
    pub dry_run: bool,
    pub top: usize,
}

pub fn run_build(args: &BuildArgs) -> Result<BuildSummary> {
    let raw = load_raw_knowledge_base(&args.input)?;
    let output = build(&raw, BuildContext::new());

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    });
    let kb_path = output_dir.join("knowledge_base.json");
    let index_path = output_dir.join("reverse_index.json");
    if !args.dry_run {
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output directory {}", output_dir.display()))?;
        write_knowledge_base(&kb_path, &output.kb)?;
        write_reverse_index(&index_path, &output.reverse_index)?;
        info!(
            kb = %kb_path.display(),
            index = %index_path.display(),
            "outputs written"
        );
    }

    Ok(BuildSummary {
        kb_path,
        index_path,
        stats: output.kb.stats,
        report: output.report,
        dry_run: args.dry_run,
        top: args.top,
    })
}

pub fn run_chat(args: &ChatArgs) -> Result<()> {
    let kb = load_knowledge_base(&args.kb)?;
    let config = SessionConfig {
        max_verification_rounds: args.max_rounds,
        ..SessionConfig::default()
    };
    let mut session = ClarificationSession::new(&kb, args.patient_id.clone(), config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = stdin.lock();
    if !args.json {
        println!("请描述您的症状（输入 quit 退出）：");
    }
    loop {
        if !args.json {
            write!(stdout, "> ").context("write prompt")?;
            stdout.flush().context("flush prompt")?;
        }
        let mut line = String::new();
        let bytes = input.read_line(&mut line).context("read utterance")?;
        if bytes == 0 {
            break;
        }
        let utterance = line.trim();
        if utterance.is_empty() {
            continue;
        }
        if matches!(utterance, "quit" | "exit" | "退出") {
            break;
        }

        let response = session.turn(utterance)?;
        if args.json {
            println!(
                "{}",
                serde_json::to_string(&response).context("serialize turn response")?
            );
        } else {
            print_turn(&response);
        }
        if session.state().is_terminal() {
            break;
        }
    }
    Ok(())
}

pub fn run_symptoms() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Canonical"),
        header_cell("Category"),
        header_cell("Variants"),
    ]);
    apply_table_style(&mut table);
    for group in SEMANTIC_GROUPS {
        table.add_row(vec![
            group.canonical.to_string(),
            category_label(group.category).to_string(),
            group.variants.join("、"),
        ]);
    }
    println!("{table}");
}

fn category_label(category: SymptomCategory) -> &'static str {
    match category {
        SymptomCategory::PainBySite => "pain (site)",
        SymptomCategory::PainByQuality => "pain (quality)",
        SymptomCategory::Fever => "fever",
        SymptomCategory::Respiratory => "respiratory",
        SymptomCategory::Digestive => "digestive",
        SymptomCategory::Neurological => "neurological",
        SymptomCategory::Dermatological => "dermatological",
        SymptomCategory::Urinary => "urinary",
        SymptomCategory::Cardiovascular => "cardiovascular",
        SymptomCategory::Ocular => "ocular",
        SymptomCategory::Ent => "ear, nose and throat",
        SymptomCategory::Constitutional => "constitutional",
        SymptomCategory::Uncatalogued => "uncatalogued",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_kb_json() -> &'static str {
        r#"{
            "diseases": [
                {
                    "id": "D001",
                    "name": "偏头痛",
                    "symptoms": [{"name": "头疼"}, {"name": "恶心"}, {"name": "畏光"}]
                },
                {
                    "id": "D002",
                    "name": "流行性感冒",
                    "symptoms": [{"name": "发烧"}, {"name": "咳嗽"}]
                }
            ]
        }"#
    }

    #[test]
    fn build_command_writes_both_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let raw_path = dir.path().join("raw.json");
        std::fs::write(&raw_path, raw_kb_json()).unwrap();

        let args = BuildArgs {
            input: raw_path,
            output_dir: Some(dir.path().join("out")),
            dry_run: false,
            top: 5,
        };
        let summary = run_build(&args).unwrap();

        assert!(summary.kb_path.exists());
        assert!(summary.index_path.exists());
        assert_eq!(summary.stats.disease_count, 2);

        let kb = load_knowledge_base(&summary.kb_path).unwrap();
        assert!(kb.symptom_id("头痛").is_some());
        assert!(kb.symptom_id("发热").is_some());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let raw_path = dir.path().join("raw.json");
        std::fs::write(&raw_path, raw_kb_json()).unwrap();

        let args = BuildArgs {
            input: raw_path,
            output_dir: Some(dir.path().join("out")),
            dry_run: true,
            top: 5,
        };
        let summary = run_build(&args).unwrap();

        assert!(!summary.kb_path.exists());
        assert!(!summary.index_path.exists());
        assert_eq!(summary.stats.symptom_count, 5);
    }
}
