//! Readiness scoring: deterministic additive base score plus live adjustment
//! from the user's per-skill confidence marks.
//!
//! base = 35 + min(categories × 5, 30) + 10 (company) + 10 (role) + 10 (JD > 800 chars), capped at 100.
//! final = base + Σ(+2 know / −2 practice) over every extracted skill, clamped to [0, 100].

use serde::{Deserialize, Serialize};

use crate::models::skills::{ExtractedSkills, SkillConfidence, SkillConfidenceMap};

pub const BASE_SCORE: u32 = 35;
pub const POINTS_PER_CATEGORY: u32 = 5;
pub const MAX_CATEGORY_POINTS: u32 = 30;
pub const COMPANY_BONUS: u32 = 10;
pub const ROLE_BONUS: u32 = 10;
pub const LONG_JD_BONUS: u32 = 10;
/// JD length (chars) that must be exceeded for the long-JD bonus.
pub const LONG_JD_THRESHOLD: usize = 800;
pub const CONFIDENCE_STEP: i32 = 2;
pub const MAX_SCORE: u32 = 100;

/// Per-term view of the base score, for display next to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: u32,
    pub categories: u32,
    pub company: u32,
    pub role: u32,
    pub jd_length: u32,
    pub total: u8,
}

pub fn score_breakdown(
    skills: &ExtractedSkills,
    company: &str,
    role: &str,
    jd_length: usize,
) -> ScoreBreakdown {
    let categories =
        (skills.category_count() as u32 * POINTS_PER_CATEGORY).min(MAX_CATEGORY_POINTS);
    let company_points = if company.trim().is_empty() { 0 } else { COMPANY_BONUS };
    let role_points = if role.trim().is_empty() { 0 } else { ROLE_BONUS };
    let length_points = if jd_length > LONG_JD_THRESHOLD { LONG_JD_BONUS } else { 0 };

    let total = (BASE_SCORE + categories + company_points + role_points + length_points)
        .min(MAX_SCORE) as u8;

    ScoreBreakdown {
        base: BASE_SCORE,
        categories,
        company: company_points,
        role: role_points,
        jd_length: length_points,
        total,
    }
}

/// Base readiness score in [35, 100]. Computed once at creation and frozen as `base_score`.
pub fn calculate_readiness_score(
    skills: &ExtractedSkills,
    company: &str,
    role: &str,
    jd_length: usize,
) -> u8 {
    score_breakdown(skills, company, role, jd_length).total
}

/// Recomputes the live score from `base_score`, never from a previous final score.
///
/// Every skill in every category contributes (a label listed under two categories
/// counts twice); unmarked skills count as `Practice`.
pub fn recompute_final_score(
    base_score: u8,
    skills: &ExtractedSkills,
    confidence: &SkillConfidenceMap,
) -> u8 {
    let adjustment: i32 = skills
        .all_skills()
        .map(|skill| match confidence.get(skill).copied().unwrap_or_default() {
            SkillConfidence::Know => CONFIDENCE_STEP,
            SkillConfidence::Practice => -CONFIDENCE_STEP,
        })
        .sum();

    (i32::from(base_score) + adjustment).clamp(0, MAX_SCORE as i32) as u8
}
