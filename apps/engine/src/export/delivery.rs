//! Delivery of exported text: clipboard and file download.
//!
//! Both are fire-and-forget from the caller's point of view: one attempt, the
//! outcome returned as a `Result`, no retry.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{error, info};

use crate::errors::EngineError;

/// Clipboard backend. Carried as `Arc<dyn Clipboard>` so the host can plug in its own.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), EngineError>;
}

/// Keeps the last copied text in memory. Used headless and in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), EngineError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| EngineError::Clipboard("clipboard lock poisoned".to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// Pipes text into an external command such as `pbcopy` or `xclip -selection clipboard`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Splits `command` on whitespace into program and arguments.
    pub fn new(command: &str) -> Result<Self, EngineError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| EngineError::Clipboard("empty clipboard command".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), EngineError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EngineError::Clipboard(format!("failed to start '{}': {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| EngineError::Clipboard(format!("failed to write to '{}': {e}", self.program)))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| EngineError::Clipboard(format!("'{}' did not finish: {e}", self.program)))?;

        if !output.status.success() {
            return Err(EngineError::Clipboard(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}

/// Copies `text` through `clipboard`, logging the outcome.
pub async fn copy_to_clipboard(clipboard: &dyn Clipboard, text: &str) -> Result<(), EngineError> {
    match clipboard.write_text(text).await {
        Ok(()) => {
            info!("Copied {} chars to clipboard", text.chars().count());
            Ok(())
        }
        Err(e) => {
            error!("Clipboard copy failed: {e}");
            Err(e)
        }
    }
}

/// Writes `content` to `dir/filename`, creating `dir` if needed.
/// `filename` must be a bare file name.
pub async fn download_as_file(
    content: &str,
    filename: &str,
    dir: &Path,
) -> Result<PathBuf, EngineError> {
    validate_filename(filename)?;

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(filename);
    if let Err(e) = tokio::fs::write(&path, content).await {
        error!("Download to {:?} failed: {e}", path);
        return Err(e.into());
    }

    info!("Exported {} bytes to {:?}", content.len(), path);
    Ok(path)
}

fn validate_filename(filename: &str) -> Result<(), EngineError> {
    let trimmed = filename.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.contains('\\')
    {
        return Err(EngineError::Export(format!(
            "Invalid export filename '{filename}'"
        )));
    }
    Ok(())
}
