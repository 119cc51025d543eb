use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::sections::KeyedLists;

pub const CORE_CS: &str = "Core CS";
pub const LANGUAGES: &str = "Languages";
pub const WEB: &str = "Web";
pub const DATA: &str = "Data";
pub const CLOUD_DEVOPS: &str = "Cloud/DevOps";
pub const TESTING: &str = "Testing";
/// Fallback category produced when nothing in the taxonomy matched.
pub const GENERAL: &str = "General";

/// Skills found in a JD, grouped by taxonomy category in taxonomy order.
///
/// A category is present only when at least one of its keywords matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedSkills(KeyedLists);

impl ExtractedSkills {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, skills: Vec<String>) {
        self.0.insert(category, skills);
    }

    pub fn category(&self, name: &str) -> Option<&[String]> {
        self.0.get(name)
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn category_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter()
    }

    /// Every skill label across all categories, duplicates across categories included.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .flat_map(|(_, skills)| skills.iter().map(String::as_str))
    }

    /// First skill of a category, e.g. the primary language.
    pub fn first_in(&self, name: &str) -> Option<&str> {
        self.category(name)
            .and_then(|skills| skills.first())
            .map(String::as_str)
    }

    /// True when some skill in `category` contains any of `needles` (lowercased substring test).
    pub fn category_mentions(&self, category: &str, needles: &[&str]) -> bool {
        self.category(category).is_some_and(|skills| {
            skills.iter().any(|skill| {
                let lower = skill.to_lowercase();
                needles.iter().any(|needle| lower.contains(needle))
            })
        })
    }
}

impl<H: Into<String>> FromIterator<(H, Vec<String>)> for ExtractedSkills {
    fn from_iter<I: IntoIterator<Item = (H, Vec<String>)>>(iter: I) -> Self {
        ExtractedSkills(iter.into_iter().collect())
    }
}

/// User self-assessment for a single skill. Unset skills count as `Practice`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillConfidence {
    Know,
    #[default]
    Practice,
}

/// Skill label → confidence. Keys are skill labels as extracted.
pub type SkillConfidenceMap = BTreeMap<String, SkillConfidence>;
