use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::company::{CompanyIntel, RoundInfo};
use crate::models::sections::KeyedLists;
use crate::models::skills::{ExtractedSkills, SkillConfidence, SkillConfidenceMap};

/// Pipeline output for one "Analyze" action, before it is assigned an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDraft {
    pub company: String,
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: ExtractedSkills,
    pub plan: KeyedLists,
    pub checklist: KeyedLists,
    pub questions: Vec<String>,
    pub readiness_score: u8,
    pub company_intel: Option<CompanyIntel>,
    pub round_mapping: Option<Vec<RoundInfo>>,
}

/// A persisted analysis.
///
/// Inputs and generated content are frozen at creation. Only `skill_confidence_map`,
/// the derived `final_score` and export tracking change afterwards; `base_score` never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company: String,
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: ExtractedSkills,
    pub plan: KeyedLists,
    pub checklist: KeyedLists,
    pub questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_intel: Option<CompanyIntel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_mapping: Option<Vec<RoundInfo>>,
    pub base_score: u8,
    pub final_score: u8,
    pub skill_confidence_map: SkillConfidenceMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_exported_at: Option<DateTime<Utc>>,
}

impl AnalysisRecord {
    /// Fresh record: both scores start at the draft's readiness score, no confidence marks.
    pub fn from_draft(id: String, now: DateTime<Utc>, draft: AnalysisDraft) -> Self {
        Self {
            id,
            created_at: now,
            updated_at: now,
            company: draft.company,
            role: draft.role,
            jd_text: draft.jd_text,
            extracted_skills: draft.extracted_skills,
            plan: draft.plan,
            checklist: draft.checklist,
            questions: draft.questions,
            company_intel: draft.company_intel,
            round_mapping: draft.round_mapping,
            base_score: draft.readiness_score,
            final_score: draft.readiness_score,
            skill_confidence_map: SkillConfidenceMap::new(),
            last_exported_at: None,
        }
    }

    pub fn confidence_for(&self, skill: &str) -> SkillConfidence {
        self.skill_confidence_map
            .get(skill)
            .copied()
            .unwrap_or_default()
    }
}

/// Partial update accepted by `HistoryStore::update`.
///
/// Carries no score field: `final_score` is re-derived from `base_score` whenever
/// the confidence map changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisPatch {
    pub skill_confidence_map: Option<SkillConfidenceMap>,
    pub last_exported_at: Option<DateTime<Utc>>,
}

impl AnalysisPatch {
    pub fn confidence(map: SkillConfidenceMap) -> Self {
        Self {
            skill_confidence_map: Some(map),
            ..Self::default()
        }
    }

    pub fn exported_at(at: DateTime<Utc>) -> Self {
        Self {
            last_exported_at: Some(at),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skill_confidence_map.is_none() && self.last_exported_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skills::WEB;

    fn draft() -> AnalysisDraft {
        AnalysisDraft {
            company: "Acme".into(),
            role: "SDE".into(),
            jd_text: "React developer".into(),
            extracted_skills: vec![(WEB, vec!["React".to_string()])].into_iter().collect(),
            plan: KeyedLists::new(),
            checklist: KeyedLists::new(),
            questions: vec!["Q1".into()],
            readiness_score: 62,
            company_intel: None,
            round_mapping: None,
        }
    }

    #[test]
    fn test_from_draft_freezes_scores_and_clears_confidence() {
        let now = Utc::now();
        let record = AnalysisRecord::from_draft("abc".into(), now, draft());
        assert_eq!(record.base_score, 62);
        assert_eq!(record.final_score, 62);
        assert!(record.skill_confidence_map.is_empty());
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.confidence_for("React"), SkillConfidence::Practice);
    }

    #[test]
    fn test_record_json_uses_camel_case_and_omits_absent_optionals() {
        let record = AnalysisRecord::from_draft("abc".into(), Utc::now(), draft());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["jdText"], "React developer");
        assert_eq!(value["baseScore"], 62);
        assert!(value["skillConfidenceMap"].is_object());
        assert!(value.get("companyIntel").is_none());
        assert!(value.get("lastExportedAt").is_none());
    }

    #[test]
    fn test_patch_constructors() {
        assert!(AnalysisPatch::default().is_empty());
        assert!(!AnalysisPatch::exported_at(Utc::now()).is_empty());
        assert!(!AnalysisPatch::confidence(SkillConfidenceMap::new()).is_empty());
    }
}
