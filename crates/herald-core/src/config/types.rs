//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::defaults;

/// Main configuration for Herald
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Section titles and ordering
    pub preset: PresetConfig,

    /// Labs scope discovery
    pub labs: LabsConfig,

    /// Template fragments
    pub templates: TemplatesConfig,

    /// Git configuration
    pub git: GitConfig,
}

/// Section titles and ordering used by the classifier and the ordering policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetConfig {
    /// Types that always get a section, keyed by commit type
    pub always_shown: BTreeMap<String, String>,

    /// Types that only get a section when they carry a breaking change
    pub breaking_only: BTreeMap<String, String>,

    /// Section for reverts, used when the revert type is not in `always_shown`
    pub revert_title: String,

    /// Section for commits with an unrecognized type
    pub fallback_title: String,

    /// Section for commits whose scope is a labs namespace
    pub labs_title: String,

    /// Title forced onto every breaking-change note
    pub breaking_title: String,

    /// Section priority, first to last
    pub group_order: Vec<String>,
}

impl Default for PresetConfig {
    fn default() -> Self {
        let always_shown = [
            ("feat", defaults::FEATURES_TITLE),
            ("fix", defaults::BUG_FIXES_TITLE),
            ("perf", defaults::PERFORMANCE_TITLE),
            ("revert", defaults::REVERTS_TITLE),
            ("refactor", defaults::REFACTORING_TITLE),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            always_shown,
            breaking_only: BTreeMap::new(),
            revert_title: defaults::REVERTS_TITLE.to_string(),
            fallback_title: defaults::OTHER_COMMITS_TITLE.to_string(),
            labs_title: defaults::LABS_TITLE.to_string(),
            breaking_title: defaults::BREAKING_CHANGES_TITLE.to_string(),
            group_order: defaults::GROUP_ORDER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PresetConfig {
    /// Title for reverted commits
    pub fn revert(&self) -> &str {
        self.always_shown
            .get("revert")
            .map(String::as_str)
            .unwrap_or(&self.revert_title)
    }
}

/// Where to discover labs namespaces
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabsConfig {
    /// Whether labs discovery runs at all
    pub enabled: bool,

    /// Host the repository must live on; any host when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Owner of the recognized repository
    pub owner: String,

    /// Name of the recognized repository
    pub repository: String,

    /// Directory, relative to the repository root, whose subdirectories are labs scopes
    pub path: PathBuf,
}

impl Default for LabsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: None,
            owner: defaults::LABS_OWNER.to_string(),
            repository: defaults::LABS_REPOSITORY.to_string(),
            path: PathBuf::from(defaults::LABS_PATH),
        }
    }
}

/// Template fragment location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory holding template.hbs, header.hbs, commit.hbs and footer.hbs.
    /// The bundled templates are used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote used to derive the repository context
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
        }
    }
}
