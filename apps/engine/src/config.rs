use std::path::PathBuf;

use anyhow::{Context, Result};

/// Engine configuration loaded from environment variables.
/// Every variable has a default, so an empty environment yields a usable config.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_dir: PathBuf,
    pub export_dir: PathBuf,
    /// Minimum trimmed JD length accepted by `validate_jd`.
    pub min_jd_chars: usize,
    /// External command that receives clipboard text on stdin, e.g. `xclip -selection clipboard`.
    pub clipboard_command: Option<String>,
    pub rust_log: String,
}

pub const DEFAULT_MIN_JD_CHARS: usize = 200;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            storage_dir: env_or("PREP_STORAGE_DIR", ".prep-data").into(),
            export_dir: env_or("PREP_EXPORT_DIR", "exports").into(),
            min_jd_chars: match std::env::var("PREP_MIN_JD_CHARS") {
                Ok(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .context("PREP_MIN_JD_CHARS must be a non-negative integer")?,
                Err(_) => DEFAULT_MIN_JD_CHARS,
            },
            clipboard_command: std::env::var("PREP_CLIPBOARD_COMMAND")
                .ok()
                .filter(|cmd| !cmd.trim().is_empty()),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Config rooted at `dir`, used by tests and embedders that manage their own paths.
    pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Config {
            storage_dir: dir.join("storage"),
            export_dir: dir.join("exports"),
            min_jd_chars: DEFAULT_MIN_JD_CHARS,
            clipboard_command: None,
            rust_log: "info".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
