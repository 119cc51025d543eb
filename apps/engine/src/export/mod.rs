//! Plain-text exports of a stored analysis.
//!
//! Output is byte-stable for identical input: it feeds clipboard copies and
//! downloaded `.txt` files.

pub mod delivery;

use crate::models::analysis::AnalysisRecord;
use crate::models::sections::KeyedLists;
use crate::models::skills::SkillConfidence;

pub use delivery::{copy_to_clipboard, download_as_file, Clipboard, CommandClipboard, MemoryClipboard};

pub const RULE_WIDTH: usize = 50;
pub const CHECKBOX: &str = "☐";
pub const KNOW_LABEL: &str = "✓ I know this";
pub const PRACTICE_LABEL: &str = "○ Need practice";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn underline(heading: &str) -> String {
    "-".repeat(heading.chars().count())
}

fn title_block(title: &str) -> String {
    format!("{title}\n{}\n\n", rule())
}

pub fn export_7day_plan(plan: &KeyedLists) -> String {
    let mut text = title_block("7-DAY PREPARATION PLAN");
    for (day, tasks) in plan.iter() {
        text.push_str(&format!("{day}\n{}\n", underline(day)));
        for (idx, task) in tasks.iter().enumerate() {
            text.push_str(&format!("{}. {task}\n", idx + 1));
        }
        text.push('\n');
    }
    text
}

pub fn export_checklist(checklist: &KeyedLists) -> String {
    let mut text = title_block("ROUND-WISE PREPARATION CHECKLIST");
    for (round, items) in checklist.iter() {
        text.push_str(&format!("{round}\n{}\n", underline(round)));
        for item in items {
            text.push_str(&format!("{CHECKBOX} {item}\n"));
        }
        text.push('\n');
    }
    text
}

pub fn export_questions(questions: &[String]) -> String {
    let mut text = title_block("10 LIKELY INTERVIEW QUESTIONS");
    for (idx, question) in questions.iter().enumerate() {
        text.push_str(&format!("{}. {question}\n\n", idx + 1));
    }
    text
}

/// Full report: header, skills with confidence marks, checklist, plan, questions.
pub fn export_full_analysis(analysis: &AnalysisRecord) -> String {
    let mut text = title_block("PLACEMENT READINESS ANALYSIS");

    text.push_str(&format!(
        "Company: {}\n",
        display_or(&analysis.company, "Unknown Company")
    ));
    text.push_str(&format!(
        "Role: {}\n",
        display_or(&analysis.role, "Unknown Role")
    ));
    text.push_str(&format!(
        "Analyzed: {}\n",
        analysis.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    text.push_str(&format!(
        "Readiness Score: {}/100\n\n",
        analysis.final_score
    ));
    text.push_str(&format!("{}\n\n", rule()));

    text.push_str("KEY SKILLS EXTRACTED\n");
    text.push_str(&"-".repeat(RULE_WIDTH));
    text.push('\n');
    for (category, skills) in analysis.extracted_skills.iter() {
        text.push_str(&format!("\n{category}:\n"));
        for skill in skills {
            let status = match analysis.confidence_for(skill) {
                SkillConfidence::Know => KNOW_LABEL,
                SkillConfidence::Practice => PRACTICE_LABEL,
            };
            text.push_str(&format!("  • {skill} [{status}]\n"));
        }
    }
    text.push_str(&format!("\n{}\n\n", rule()));

    text.push_str(&export_checklist(&analysis.checklist));
    text.push_str(&format!("{}\n\n", rule()));

    text.push_str(&export_7day_plan(&analysis.plan));
    text.push_str(&format!("{}\n\n", rule()));

    text.push_str(&export_questions(&analysis.questions));
    text
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Which artifact is being exported; determines the download filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Plan,
    Checklist,
    Questions,
    FullReport,
}

impl ExportKind {
    pub fn render(&self, analysis: &AnalysisRecord) -> String {
        match self {
            ExportKind::Plan => export_7day_plan(&analysis.plan),
            ExportKind::Checklist => export_checklist(&analysis.checklist),
            ExportKind::Questions => export_questions(&analysis.questions),
            ExportKind::FullReport => export_full_analysis(analysis),
        }
    }

    pub fn filename(&self, analysis_id: &str) -> String {
        let stem = match self {
            ExportKind::Plan => "7-day-plan",
            ExportKind::Checklist => "checklist",
            ExportKind::Questions => "interview-questions",
            ExportKind::FullReport => "placement-analysis",
        };
        format!("{stem}-{analysis_id}.txt")
    }
}
