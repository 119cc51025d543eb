//! History record migration.
//!
//! Stored history entries may come from older app versions (no `updatedAt`,
//! scores under `readinessScore`, no confidence map) or be damaged. Each raw
//! entry goes through `migrate_entry`: structurally invalid entries are rejected,
//! valid ones are filled with fixed defaults. Nothing is written back here.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::analysis::AnalysisRecord;
use crate::models::sections::KeyedLists;
use crate::models::skills::{ExtractedSkills, SkillConfidence, SkillConfidenceMap};

/// Score assigned when neither the new score fields nor `readinessScore` are present.
pub const DEFAULT_SCORE: u8 = 35;
pub const DEFAULT_COMPANY: &str = "";
pub const DEFAULT_ROLE: &str = "";
/// Score field written by the first storage format.
pub const LEGACY_SCORE_FIELD: &str = "readinessScore";

/// Why a raw history entry was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordRejection {
    #[error("entry is not an object")]
    NotAnObject,

    #[error("missing or empty id")]
    MissingId,

    #[error("missing createdAt")]
    MissingCreatedAt,

    #[error("unparseable createdAt '{0}'")]
    InvalidCreatedAt(String),

    #[error("missing or non-string jdText")]
    MissingJdText,

    #[error("extractedSkills is not an object")]
    InvalidExtractedSkills,
}

/// Validates one raw entry and upgrades it to the current record shape.
///
/// Valid iff: non-empty string `id`, RFC 3339 `createdAt`, string `jdText`,
/// object `extractedSkills`. Optional fields that are missing or malformed fall
/// back to their defaults instead of rejecting the entry.
pub fn migrate_entry(raw: &Value) -> Result<AnalysisRecord, RecordRejection> {
    let obj = raw.as_object().ok_or(RecordRejection::NotAnObject)?;

    let id = match obj.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => return Err(RecordRejection::MissingId),
    };

    let created_at = match obj.get("createdAt") {
        Some(Value::String(raw_ts)) => parse_timestamp(raw_ts)
            .ok_or_else(|| RecordRejection::InvalidCreatedAt(raw_ts.clone()))?,
        Some(Value::Null) | None => return Err(RecordRejection::MissingCreatedAt),
        Some(other) => return Err(RecordRejection::InvalidCreatedAt(other.to_string())),
    };

    let jd_text = match obj.get("jdText") {
        Some(Value::String(text)) => text.clone(),
        _ => return Err(RecordRejection::MissingJdText),
    };

    let extracted_skills = match obj.get("extractedSkills") {
        Some(Value::Object(map)) => lenient_lists(map).into_iter().collect::<ExtractedSkills>(),
        _ => return Err(RecordRejection::InvalidExtractedSkills),
    };

    let updated_at = obj
        .get("updatedAt")
        .and_then(Value::as_str)
        .and_then(parse_timestamp)
        .unwrap_or(created_at);

    let legacy_score = obj.get(LEGACY_SCORE_FIELD).and_then(score_value);
    let base_score = obj
        .get("baseScore")
        .and_then(score_value)
        .or(legacy_score)
        .unwrap_or(DEFAULT_SCORE);
    let final_score = obj
        .get("finalScore")
        .and_then(score_value)
        .or(legacy_score)
        .unwrap_or(DEFAULT_SCORE);

    Ok(AnalysisRecord {
        id,
        created_at,
        updated_at,
        company: string_or(obj, "company", DEFAULT_COMPANY),
        role: string_or(obj, "role", DEFAULT_ROLE),
        jd_text,
        extracted_skills,
        plan: object_lists(obj, "plan"),
        checklist: object_lists(obj, "checklist"),
        questions: obj
            .get("questions")
            .and_then(Value::as_array)
            .map(|items| strings(items))
            .unwrap_or_default(),
        company_intel: obj
            .get("companyIntel")
            .and_then(|v| serde_json::from_value(v.clone()).ok()),
        round_mapping: obj
            .get("roundMapping")
            .and_then(|v| serde_json::from_value(v.clone()).ok()),
        base_score,
        final_score,
        skill_confidence_map: confidence_map(obj.get("skillConfidenceMap")),
        last_exported_at: obj
            .get("lastExportedAt")
            .and_then(Value::as_str)
            .and_then(parse_timestamp),
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Numeric score clamped into [0, 100]; non-numbers are treated as absent.
fn score_value(value: &Value) -> Option<u8> {
    let n = value.as_f64()?;
    if !n.is_finite() {
        return None;
    }
    Some(n.round().clamp(0.0, 100.0) as u8)
}

fn string_or(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

/// Keeps keys whose value is an array; non-string items are skipped.
fn lenient_lists(map: &Map<String, Value>) -> Vec<(String, Vec<String>)> {
    map.iter()
        .filter_map(|(key, value)| value.as_array().map(|items| (key.clone(), strings(items))))
        .collect()
}

fn object_lists(obj: &Map<String, Value>, key: &str) -> KeyedLists {
    match obj.get(key) {
        Some(Value::Object(map)) => lenient_lists(map).into_iter().collect(),
        _ => KeyedLists::new(),
    }
}

fn confidence_map(value: Option<&Value>) -> SkillConfidenceMap {
    let Some(Value::Object(map)) = value else {
        return SkillConfidenceMap::new();
    };
    map.iter()
        .filter_map(|(skill, v)| {
            serde_json::from_value::<SkillConfidence>(v.clone())
                .ok()
                .map(|c| (skill.clone(), c))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn legacy_entry() -> Value {
        json!({
            "id": "1717000000000",
            "createdAt": "2024-05-29T16:26:40.000Z",
            "company": "Amazon",
            "role": "SDE",
            "jdText": "React and SQL",
            "extractedSkills": {"Web": ["React"], "Data": ["Sql"]},
            "plan": {"Day 1: Foundations": ["Solve 5 easy coding problems"]},
            "checklist": {"Round 1: Aptitude & Basics": ["Review logical reasoning patterns"]},
            "questions": ["Q1", "Q2"],
            "readinessScore": 72
        })
    }

    #[test]
    fn test_legacy_entry_gets_defaults() {
        let record = migrate_entry(&legacy_entry()).unwrap();
        assert_eq!(record.id, "1717000000000");
        assert_eq!(record.updated_at, record.created_at);
        assert_eq!(record.base_score, 72);
        assert_eq!(record.final_score, 72);
        assert!(record.skill_confidence_map.is_empty());
        assert_eq!(record.company, "Amazon");
        assert_eq!(record.questions, vec!["Q1", "Q2"]);
        assert_eq!(
            record.extracted_skills.iter().map(|(c, _)| c).collect::<Vec<_>>(),
            vec!["Web", "Data"]
        );
        assert!(record.company_intel.is_none());
    }

    #[test]
    fn test_missing_scores_default_to_35_and_missing_names_to_empty() {
        let mut entry = legacy_entry();
        let obj = entry.as_object_mut().unwrap();
        obj.remove("readinessScore");
        obj.remove("company");
        obj.remove("role");
        let record = migrate_entry(&entry).unwrap();
        assert_eq!(record.base_score, DEFAULT_SCORE);
        assert_eq!(record.final_score, DEFAULT_SCORE);
        assert_eq!(record.company, "");
        assert_eq!(record.role, "");
    }

    #[test]
    fn test_current_fields_win_over_legacy_score() {
        let mut entry = legacy_entry();
        let obj = entry.as_object_mut().unwrap();
        obj.insert("baseScore".into(), json!(60));
        obj.insert("finalScore".into(), json!(64));
        obj.insert("updatedAt".into(), json!("2024-06-01T00:00:00Z"));
        obj.insert(
            "skillConfidenceMap".into(),
            json!({"React": "know", "Sql": "practice", "Bogus": "maybe"}),
        );
        let record = migrate_entry(&entry).unwrap();
        assert_eq!(record.base_score, 60);
        assert_eq!(record.final_score, 64);
        assert_ne!(record.updated_at, record.created_at);
        assert_eq!(record.skill_confidence_map.len(), 2);
        assert_eq!(record.skill_confidence_map["React"], SkillConfidence::Know);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let mut entry = legacy_entry();
        entry["readinessScore"] = json!(140);
        assert_eq!(migrate_entry(&entry).unwrap().base_score, 100);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(migrate_entry(&json!(42)), Err(RecordRejection::NotAnObject));

        let mut no_id = legacy_entry();
        no_id["id"] = json!("");
        assert_eq!(migrate_entry(&no_id), Err(RecordRejection::MissingId));

        let mut no_created = legacy_entry();
        no_created.as_object_mut().unwrap().remove("createdAt");
        assert_eq!(
            migrate_entry(&no_created),
            Err(RecordRejection::MissingCreatedAt)
        );

        let mut bad_created = legacy_entry();
        bad_created["createdAt"] = json!("yesterday");
        assert!(matches!(
            migrate_entry(&bad_created),
            Err(RecordRejection::InvalidCreatedAt(_))
        ));

        let mut no_jd = legacy_entry();
        no_jd.as_object_mut().unwrap().remove("jdText");
        assert_eq!(migrate_entry(&no_jd), Err(RecordRejection::MissingJdText));

        let mut bad_skills = legacy_entry();
        bad_skills["extractedSkills"] = json!(["React"]);
        assert_eq!(
            migrate_entry(&bad_skills),
            Err(RecordRejection::InvalidExtractedSkills)
        );
    }

    #[test]
    fn test_malformed_optional_fields_fall_back() {
        let mut entry = legacy_entry();
        entry["plan"] = json!("not a plan");
        entry["questions"] = json!({"oops": true});
        entry["companyIntel"] = json!({"name": 1});
        let record = migrate_entry(&entry).unwrap();
        assert!(record.plan.is_empty());
        assert!(record.questions.is_empty());
        assert!(record.company_intel.is_none());
    }

    #[test]
    fn test_current_record_round_trips_unchanged() {
        let record = migrate_entry(&legacy_entry()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(migrate_entry(&value).unwrap(), record);
    }
}
