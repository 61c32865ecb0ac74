use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for brief operations
pub type Result<T> = std::result::Result<T, BriefError>;

/// Errors raised outside the page runtime.
///
/// The controllers themselves never fail: missing markup leaves a section
/// inert and unknown keys are skipped. These errors cover configuration
/// loading and content export.
#[derive(Debug, Error)]
pub enum BriefError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Unknown content section '{name}'. Available sections: {available}")]
    UnknownSection { name: String, available: String },
}

impl BriefError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Message suitable for showing to the person running the CLI
    pub fn user_message(&self) -> String {
        match self {
            BriefError::ConfigNotFound { path } => format!(
                "Configuration file not found: {}. Run `brief init` to create one",
                path.display()
            ),
            BriefError::ConfigParse(e) => format!("Invalid brief.toml: {}", e),
            BriefError::InvalidConfig { message } => message.clone(),
            _ => format!("{}", self),
        }
    }
}
