use thiserror::Error;

/// Engine-level error type.
/// Corrupted history data never surfaces here; see `storage::migration::RecordRejection`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    /// Stable machine-readable code for the presentation layer.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "VALIDATION_ERROR",
            EngineError::Storage(_) => "STORAGE_ERROR",
            EngineError::Io(_) => "IO_ERROR",
            EngineError::Serialization(_) => "SERIALIZATION_ERROR",
            EngineError::Clipboard(_) => "CLIPBOARD_ERROR",
            EngineError::Export(_) => "EXPORT_ERROR",
            EngineError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the user. Validation text is passed through verbatim;
    /// everything else is logged and replaced with a generic sentence.
    pub fn user_message(&self) -> String {
        match self {
            EngineError::Validation(msg) => msg.clone(),
            EngineError::Export(msg) => msg.clone(),
            EngineError::Clipboard(msg) => {
                tracing::error!("Clipboard error: {msg}");
                "Could not copy to clipboard. Please try again.".to_string()
            }
            EngineError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                "Could not save your analysis. Local storage may be full or unavailable."
                    .to_string()
            }
            EngineError::Io(e) => {
                tracing::error!("I/O error: {e}");
                "A file system error occurred".to_string()
            }
            EngineError::Serialization(e) => {
                tracing::error!("Serialization error: {e}");
                "Could not encode your analysis for storage".to_string()
            }
            EngineError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal error occurred".to_string()
            }
        }
    }
}
