//! Configuration validation

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::{Config, LabsConfig, PresetConfig};

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_preset(&config.preset)?;
    validate_labs(&config.labs)?;
    validate_git(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        message: message.into(),
    }
}

fn validate_preset(preset: &PresetConfig) -> Result<()> {
    let titles = [
        ("preset.revert_title", &preset.revert_title),
        ("preset.fallback_title", &preset.fallback_title),
        ("preset.labs_title", &preset.labs_title),
        ("preset.breaking_title", &preset.breaking_title),
    ];
    for (field, title) in titles {
        if title.trim().is_empty() {
            return Err(invalid(field, "title cannot be empty").into());
        }
    }

    for (map_name, map) in [
        ("always_shown", &preset.always_shown),
        ("breaking_only", &preset.breaking_only),
    ] {
        for (commit_type, title) in map {
            if title.trim().is_empty() {
                return Err(invalid(
                    format!("preset.{}.{}", map_name, commit_type),
                    "title cannot be empty",
                )
                .into());
            }
        }
    }

    if let Some(commit_type) = preset
        .breaking_only
        .keys()
        .find(|t| preset.always_shown.contains_key(*t))
    {
        return Err(invalid(
            format!("preset.breaking_only.{}", commit_type),
            "type is already always shown",
        )
        .into());
    }

    let mut seen = HashSet::new();
    for (i, title) in preset.group_order.iter().enumerate() {
        if !seen.insert(title.as_str()) {
            return Err(invalid(
                format!("preset.group_order[{}]", i),
                format!("duplicate title '{}'", title),
            )
            .into());
        }
    }

    Ok(())
}

fn validate_labs(labs: &LabsConfig) -> Result<()> {
    if !labs.enabled {
        return Ok(());
    }

    if labs.owner.is_empty() || labs.repository.is_empty() {
        return Err(invalid("labs", "owner and repository are required when enabled").into());
    }

    if labs.path.as_os_str().is_empty() {
        return Err(invalid("labs.path", "path cannot be empty").into());
    }

    if labs.path.is_absolute() {
        return Err(invalid("labs.path", "must be relative to the repository root").into());
    }

    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    if config.git.remote.is_empty() {
        return Err(invalid("git.remote", "remote cannot be empty").into());
    }

    Ok(())
}
