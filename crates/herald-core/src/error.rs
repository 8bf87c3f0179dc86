//! Error types for Herald

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using HeraldError
pub type Result<T> = std::result::Result<T, HeraldError>;

/// Main error type for Herald operations
#[derive(Debug, Error)]
pub enum HeraldError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Template bootstrap errors
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Template bootstrap errors
///
/// Every variant is fatal for a changelog run: a missing fragment would
/// otherwise render silently wrong output.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template directory does not exist
    #[error("Template directory not found at {0}")]
    DirectoryNotFound(PathBuf),

    /// A fragment could not be read
    #[error("Failed to read {fragment} template at {path}: {source}")]
    ReadFailed {
        fragment: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Remote not found
    #[error("Remote not found: {0}")]
    RemoteNotFound(String),

    /// Remote exists but has no URL configured
    #[error("Remote {0} has no URL")]
    MissingRemoteUrl(String),

    /// Remote URL could not be turned into a repository context
    #[error("Cannot derive repository from remote URL: {0}")]
    InvalidRemoteUrl(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}
