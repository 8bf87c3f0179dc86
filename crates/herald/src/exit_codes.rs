//! Exit codes for the CLI

use herald_core::error::{ConfigError, GitError, HeraldError, TemplateError};

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Template bootstrap error
pub const TEMPLATE_ERROR: i32 = 4;

/// Commit records could not be read or parsed
pub const INPUT_ERROR: i32 = 5;

/// Pick the exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
        if cause.is::<GitError>() {
            return GIT_ERROR;
        }
        if cause.is::<TemplateError>() {
            return TEMPLATE_ERROR;
        }
        if cause.is::<serde_json::Error>() {
            return INPUT_ERROR;
        }
        if let Some(err) = cause.downcast_ref::<HeraldError>() {
            return match err {
                HeraldError::Config(_) => CONFIG_ERROR,
                HeraldError::Git(_) => GIT_ERROR,
                HeraldError::Template(_) => TEMPLATE_ERROR,
                HeraldError::Json(_) => INPUT_ERROR,
                HeraldError::Io(_) => ERROR,
            };
        }
    }
    ERROR
}
