//! Terminal rendering for build summaries and dialogue turns.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use triage_session::TurnResponse;

use crate::commands::BuildSummary;

pub fn print_build_summary(summary: &BuildSummary) {
    if summary.dry_run {
        println!("Dry run: no files written");
    } else {
        println!("Knowledge base: {}", summary.kb_path.display());
        println!("Reverse index: {}", summary.index_path.display());
    }
    println!(
        "Diseases: {}  Symptoms: {}  Skipped records: {}",
        summary.stats.disease_count, summary.stats.symptom_count, summary.report.skipped_records
    );

    let ranked = summary.report.most_common(summary.top);
    if !ranked.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Symptom"), header_cell("Mentions")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (name, count) in ranked {
            table.add_row(vec![Cell::new(name), Cell::new(count)]);
        }
        println!("{table}");
    }

    let pain = summary.report.pain_symptoms();
    if !pain.is_empty() {
        println!("Pain symptoms: {}", pain.join("、"));
    }
}

/// Render one dialogue turn for a human reader.
pub fn print_turn(response: &TurnResponse) {
    match response {
        TurnResponse::Diagnosed {
            disease_name,
            confidence,
            match_percentage,
            confirmed_symptoms,
            recommendations,
            lifestyle_advice,
        } => {
            println!("诊断结果：{disease_name}（匹配度 {match_percentage:.1}%，置信度 {confidence}）");
            println!("已确认症状：{}", confirmed_symptoms.join("、"));
            for item in recommendations {
                println!("建议：{item}");
            }
            for item in lifestyle_advice {
                println!("生活建议：{item}");
            }
        }
        TurnResponse::AwaitingConfirmation {
            focus_disease,
            questions,
        } => {
            println!(
                "疑似疾病：{}（匹配度 {:.1}%）",
                focus_disease.disease_name, focus_disease.match_percentage
            );
            if !focus_disease.missing_symptoms.is_empty() {
                println!("待确认症状：{}", focus_disease.missing_symptoms.join("、"));
            }
            for question in questions {
                println!("{question}");
            }
        }
        TurnResponse::Inconclusive { reason, questions } => {
            println!("{reason}");
            for question in questions {
                println!("{question}");
            }
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
