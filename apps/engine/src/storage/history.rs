//! Analysis history: the versioned record store.
//!
//! The whole history is one JSON array in a single storage slot, most recent first.
//! Reads never fail: unparseable blobs and invalid entries are dropped and reported
//! through `HistoryLoad`. Every write persists the migrated, filtered list; a
//! write whose read of the slot fails is aborted with the storage error.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::readiness::recompute_final_score;
use crate::errors::EngineError;
use crate::models::analysis::{AnalysisDraft, AnalysisPatch, AnalysisRecord};
use crate::models::skills::SkillConfidence;
use crate::storage::migration::migrate_entry;
use crate::storage::KeyValueStore;

pub const HISTORY_SLOT: &str = "placement_analysis_history";

/// Result of reading the history slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLoad {
    pub records: Vec<AnalysisRecord>,
    /// Entries present in storage but rejected by migration.
    pub dropped: usize,
    /// The slot held something that was not a JSON array.
    pub unreadable: bool,
}

impl HistoryLoad {
    /// True when the caller should show a "some entries could not be loaded" warning.
    pub fn is_corrupted(&self) -> bool {
        self.dropped > 0 || self.unreadable
    }
}

/// Parses a raw history blob. `None` (empty slot) is an empty, healthy history.
pub fn parse_history(raw: Option<&str>) -> HistoryLoad {
    let Some(raw) = raw else {
        return HistoryLoad::default();
    };

    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!("History slot does not hold an array; ignoring it");
            return HistoryLoad {
                unreadable: true,
                ..HistoryLoad::default()
            };
        }
        Err(e) => {
            warn!("History slot is not valid JSON: {e}");
            return HistoryLoad {
                unreadable: true,
                ..HistoryLoad::default()
            };
        }
    };

    let total = entries.len();
    let mut records = Vec::with_capacity(total);
    for (index, entry) in entries.iter().enumerate() {
        match migrate_entry(entry) {
            Ok(record) => records.push(record),
            Err(reason) => warn!("Dropping history entry #{index}: {reason}"),
        }
    }

    HistoryLoad {
        dropped: total - records.len(),
        records,
        unreadable: false,
    }
}

/// CRUD over the analysis history slot of an injected `KeyValueStore`.
#[derive(Clone)]
pub struct HistoryStore {
    storage: Arc<dyn KeyValueStore>,
    slot: String,
}

impl HistoryStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_slot(storage, HISTORY_SLOT)
    }

    pub fn with_slot(storage: Arc<dyn KeyValueStore>, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    /// Reads and migrates the full history, reporting any filtering.
    /// A storage read failure is reported as an unreadable history.
    pub fn load(&self) -> HistoryLoad {
        match self.storage.get(&self.slot) {
            Ok(raw) => parse_history(raw.as_deref()),
            Err(e) => {
                warn!("Could not read history slot '{}': {e}", self.slot);
                HistoryLoad {
                    unreadable: true,
                    ..HistoryLoad::default()
                }
            }
        }
    }

    /// Records to modify and write back. A failed read is propagated so the
    /// write cannot overwrite history it never saw.
    fn load_for_write(&self) -> Result<Vec<AnalysisRecord>, EngineError> {
        let raw = self.storage.get(&self.slot)?;
        Ok(parse_history(raw.as_deref()).records)
    }

    /// All valid records, most recent first.
    pub fn list(&self) -> Vec<AnalysisRecord> {
        self.load().records
    }

    pub fn get_by_id(&self, id: &str) -> Option<AnalysisRecord> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// Stores a new analysis at the front of the history.
    pub fn save(&self, draft: AnalysisDraft) -> Result<AnalysisRecord, EngineError> {
        self.save_at(draft, Utc::now())
    }

    pub(crate) fn save_at(
        &self,
        draft: AnalysisDraft,
        now: DateTime<Utc>,
    ) -> Result<AnalysisRecord, EngineError> {
        let mut records = self.load_for_write()?;
        let id = unique_id(&records);
        let record = AnalysisRecord::from_draft(id, now, draft);

        records.insert(0, record.clone());
        self.write(&records)?;

        info!(
            "Saved analysis {} (score {}), {} in history",
            record.id,
            record.base_score,
            records.len()
        );
        Ok(record)
    }

    /// Merges `patch` into the record with `id` and bumps `updated_at`.
    /// A new confidence map re-derives `final_score` from `base_score`.
    /// Unknown ids are a no-op and return `Ok(None)`.
    pub fn update(
        &self,
        id: &str,
        patch: AnalysisPatch,
    ) -> Result<Option<AnalysisRecord>, EngineError> {
        let mut records = self.load_for_write()?;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        if let Some(map) = patch.skill_confidence_map {
            record.final_score =
                recompute_final_score(record.base_score, &record.extracted_skills, &map);
            record.skill_confidence_map = map;
        }
        if let Some(at) = patch.last_exported_at {
            record.last_exported_at = Some(at);
        }
        record.updated_at = Utc::now();

        let updated = record.clone();
        self.write(&records)?;
        info!(
            "Updated analysis {} (final score {})",
            updated.id, updated.final_score
        );
        Ok(Some(updated))
    }

    /// Marks one skill and re-scores the record.
    pub fn set_skill_confidence(
        &self,
        id: &str,
        skill: &str,
        confidence: SkillConfidence,
    ) -> Result<Option<AnalysisRecord>, EngineError> {
        let Some(record) = self.load_for_write()?.into_iter().find(|r| r.id == id) else {
            return Ok(None);
        };
        let mut map = record.skill_confidence_map;
        map.insert(skill.to_string(), confidence);
        self.update(id, AnalysisPatch::confidence(map))
    }

    /// Removes the record with `id`. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> Result<bool, EngineError> {
        let mut records = self.load_for_write()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.write(&records)?;
        info!("Deleted analysis {id}");
        Ok(true)
    }

    /// Drops the whole history slot.
    pub fn clear(&self) -> Result<(), EngineError> {
        self.storage.remove(&self.slot)?;
        info!("Cleared analysis history");
        Ok(())
    }

    fn write(&self, records: &[AnalysisRecord]) -> Result<(), EngineError> {
        let json = serde_json::to_string(records)?;
        self.storage.set(&self.slot, &json)
    }
}

/// Time-ordered (UUID v7) id that does not collide with an existing record.
fn unique_id(existing: &[AnalysisRecord]) -> String {
    loop {
        let id = Uuid::now_v7().to_string();
        if !existing.iter().any(|r| r.id == id) {
            return id;
        }
    }
}
