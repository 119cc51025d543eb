// JD Analysis Engine
// Implements: skill extraction, checklist / plan / question generation,
// company intel, round mapping and readiness scoring. All pure and deterministic.

pub mod checklist;
pub mod company_intel;
pub mod extractor;
pub mod plan;
pub mod questions;
pub mod readiness;
pub mod round_mapping;
pub mod taxonomy;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::analysis::AnalysisDraft;

pub use checklist::generate_checklist;
pub use company_intel::infer_company_intel;
pub use extractor::extract_skills;
pub use plan::generate_7day_plan;
pub use questions::generate_interview_questions;
pub use readiness::{calculate_readiness_score, recompute_final_score};
pub use round_mapping::generate_round_mapping;

pub const EMPTY_JD_MESSAGE: &str = "Please enter a job description to analyze.";
pub const SHORT_JD_MESSAGE: &str =
    "This JD is too short to analyze deeply. Paste full JD for better output.";

/// Raw user input for one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub company: String,
    pub role: String,
    pub jd_text: String,
}

impl AnalysisInput {
    pub fn new(
        company: impl Into<String>,
        role: impl Into<String>,
        jd_text: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
            jd_text: jd_text.into(),
        }
    }
}

/// Gate run before the pipeline. The extractor itself accepts any text.
pub fn validate_jd(jd_text: &str, min_chars: usize) -> Result<(), EngineError> {
    let trimmed = jd_text.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(EMPTY_JD_MESSAGE.to_string()));
    }
    if trimmed.chars().count() < min_chars {
        return Err(EngineError::Validation(SHORT_JD_MESSAGE.to_string()));
    }
    Ok(())
}

/// Runs the full pipeline: extract → generate → intel/rounds → score.
///
/// Company intel and round mapping are produced only when a company name was given.
pub fn analyze(input: &AnalysisInput) -> AnalysisDraft {
    let extracted_skills = extract_skills(&input.jd_text);
    let checklist = generate_checklist(&extracted_skills);
    let plan = generate_7day_plan(&extracted_skills);
    let questions = generate_interview_questions(&extracted_skills);
    let readiness_score = calculate_readiness_score(
        &extracted_skills,
        &input.company,
        &input.role,
        input.jd_text.chars().count(),
    );

    let company_intel = if input.company.trim().is_empty() {
        None
    } else {
        Some(infer_company_intel(input.company.trim()))
    };
    let round_mapping = company_intel
        .as_ref()
        .map(|intel| generate_round_mapping(intel.size, &extracted_skills));

    AnalysisDraft {
        company: input.company.trim().to_string(),
        role: input.role.trim().to_string(),
        jd_text: input.jd_text.clone(),
        extracted_skills,
        plan,
        checklist,
        questions,
        readiness_score,
        company_intel,
        round_mapping,
    }
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
