//! Error types for Minicart
//!
//! All modules use `CartResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Minicart operations
pub type CartResult<T> = Result<T, CartError>;

/// All errors that can occur in Minicart
#[derive(Error, Debug)]
pub enum CartError {
    // Catalog errors
    #[error("No such product: {0}")]
    ProductNotFound(u32),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl CartError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ProductNotFound(_) => Some("Run: minicart products"),
            Self::ConfigInvalid { .. } => Some("Run: minicart config init --force"),
            _ => None,
        }
    }
}
