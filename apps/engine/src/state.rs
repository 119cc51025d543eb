use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::analysis::{analyze, validate_jd, AnalysisInput};
use crate::config::Config;
use crate::errors::EngineError;
use crate::export::{
    copy_to_clipboard, download_as_file, Clipboard, CommandClipboard, ExportKind, MemoryClipboard,
};
use crate::models::analysis::{AnalysisPatch, AnalysisRecord};
use crate::models::skills::SkillConfidence;
use crate::storage::{FileStore, HistoryStore, KeyValueStore, MemoryStore};

/// Shared engine state handed to whatever presentation layer drives the engine.
#[derive(Clone)]
pub struct EngineState {
    pub config: Config,
    pub storage: Arc<dyn KeyValueStore>,
    /// Clipboard backend. `CommandClipboard` when `PREP_CLIPBOARD_COMMAND` is set,
    /// otherwise an in-memory clipboard.
    pub clipboard: Arc<dyn Clipboard>,
    history: HistoryStore,
}

impl EngineState {
    /// File-backed state rooted at `config.storage_dir`.
    pub fn init(config: Config) -> Result<Self, EngineError> {
        info!("Opening history storage at {:?}", config.storage_dir);
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.storage_dir)?);
        let state = Self::with_storage(config, storage)?;
        info!("History storage ready");
        Ok(state)
    }

    pub fn with_storage(
        config: Config,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, EngineError> {
        let clipboard: Arc<dyn Clipboard> = match config.clipboard_command.as_deref() {
            Some(command) => Arc::new(CommandClipboard::new(command)?),
            None => Arc::new(MemoryClipboard::new()),
        };
        Ok(Self {
            history: HistoryStore::new(Arc::clone(&storage)),
            config,
            storage,
            clipboard,
        })
    }

    pub fn in_memory(config: Config) -> Result<Self, EngineError> {
        Self::with_storage(config, Arc::new(MemoryStore::new()))
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Validates the JD, runs the analysis and saves it as the newest history entry.
    pub fn run_analysis(&self, input: &AnalysisInput) -> Result<AnalysisRecord, EngineError> {
        validate_jd(&input.jd_text, self.config.min_jd_chars)?;
        let draft = analyze(input);
        self.history.save(draft)
    }

    pub fn toggle_skill(
        &self,
        id: &str,
        skill: &str,
        confidence: SkillConfidence,
    ) -> Result<Option<AnalysisRecord>, EngineError> {
        self.history.set_skill_confidence(id, skill, confidence)
    }

    pub fn mark_exported(&self, id: &str) -> Result<Option<AnalysisRecord>, EngineError> {
        self.history
            .update(id, AnalysisPatch::exported_at(Utc::now()))
    }

    /// Rendered export text for the record, or `None` for an unknown id.
    pub fn export(&self, id: &str, kind: ExportKind) -> Option<String> {
        self.history.get_by_id(id).map(|record| kind.render(&record))
    }

    /// Copies the export to the clipboard and stamps the record as exported.
    /// Returns `Ok(false)` for an unknown id.
    pub async fn copy_export(&self, id: &str, kind: ExportKind) -> Result<bool, EngineError> {
        let Some(text) = self.export(id, kind) else {
            return Ok(false);
        };
        copy_to_clipboard(self.clipboard.as_ref(), &text).await?;
        self.mark_exported(id)?;
        Ok(true)
    }

    /// Writes the export into `config.export_dir` and stamps the record as exported.
    pub async fn download_export(
        &self,
        id: &str,
        kind: ExportKind,
    ) -> Result<Option<PathBuf>, EngineError> {
        let Some(text) = self.export(id, kind) else {
            return Ok(None);
        };
        let path = download_as_file(&text, &kind.filename(id), &self.config.export_dir).await?;
        self.mark_exported(id)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::readiness::recompute_final_score;
    use tempfile::TempDir;

    const JD: &str = "We are hiring a backend engineer with strong DSA and OOP fundamentals. \
        You will build REST APIs in Java and Spring Boot, design SQL schemas on PostgreSQL, \
        deploy with Docker on AWS, and write unit tests with JUnit. Experience with React is a plus.";

    fn state(dir: &TempDir) -> EngineState {
        EngineState::in_memory(Config::rooted_at(dir.path())).unwrap()
    }

    #[test]
    fn test_run_analysis_rejects_short_jd_without_saving() {
        let dir = TempDir::new().unwrap();
        let state = state(&dir);
        let err = state
            .run_analysis(&AnalysisInput::new("Acme", "SDE", "too short"))
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(state.history().list().is_empty());
    }

    #[test]
    fn test_run_analysis_saves_record() {
        let dir = TempDir::new().unwrap();
        let state = state(&dir);
        let record = state
            .run_analysis(&AnalysisInput::new("Amazon", "SDE 1", JD))
            .unwrap();
        assert_eq!(record.base_score, record.final_score);
        assert!(record.company_intel.is_some());
        assert_eq!(state.history().list().len(), 1);
    }

    #[test]
    fn test_toggle_skill_rescores() {
        let dir = TempDir::new().unwrap();
        let state = state(&dir);
        let record = state
            .run_analysis(&AnalysisInput::new("", "", JD))
            .unwrap();
        let skill = record.extracted_skills.all_skills().next().unwrap().to_string();

        let know = state
            .toggle_skill(&record.id, &skill, SkillConfidence::Know)
            .unwrap()
            .unwrap();
        assert_eq!(
            know.final_score,
            recompute_final_score(
                record.base_score,
                &record.extracted_skills,
                &know.skill_confidence_map
            )
        );
        assert_eq!(know.confidence_for(&skill), SkillConfidence::Know);

        let unknown = state
            .toggle_skill("missing", &skill, SkillConfidence::Know)
            .unwrap();
        assert!(unknown.is_none());
    }

    #[test]
    fn test_export_unknown_id_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(state(&dir).export("missing", ExportKind::Plan).is_none());
    }

    #[tokio::test]
    async fn test_download_export_writes_file_and_marks_exported() {
        let dir = TempDir::new().unwrap();
        let state = state(&dir);
        let record = state
            .run_analysis(&AnalysisInput::new("Acme", "SDE", JD))
            .unwrap();
        assert!(record.last_exported_at.is_none());

        let path = state
            .download_export(&record.id, ExportKind::FullReport)
            .await
            .unwrap()
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("PLACEMENT READINESS ANALYSIS"));
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            format!("placement-analysis-{}.txt", record.id)
        );

        let stored = state.history().get_by_id(&record.id).unwrap();
        assert!(stored.last_exported_at.is_some());
    }

    #[tokio::test]
    async fn test_copy_export_uses_clipboard() {
        let dir = TempDir::new().unwrap();
        let state = state(&dir);
        let record = state
            .run_analysis(&AnalysisInput::new("Acme", "SDE", JD))
            .unwrap();

        assert!(state.copy_export(&record.id, ExportKind::Questions).await.unwrap());
        assert!(!state.copy_export("missing", ExportKind::Questions).await.unwrap());
        assert!(state
            .history()
            .get_by_id(&record.id)
            .unwrap()
            .last_exported_at
            .is_some());
    }

    #[test]
    fn test_init_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let config = Config::rooted_at(dir.path());
        let id = EngineState::init(config.clone())
            .unwrap()
            .run_analysis(&AnalysisInput::new("Acme", "SDE", JD))
            .unwrap()
            .id;
        let reopened = EngineState::init(config).unwrap();
        assert!(reopened.history().get_by_id(&id).is_some());
    }
}
