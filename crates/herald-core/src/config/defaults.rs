//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "herald.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "herald.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".herald.yaml";

/// Alternative configuration file name (TOML)
pub const ALT_CONFIG_TOML: &str = ".herald.toml";

pub const FEATURES_TITLE: &str = "🚀 Features";
pub const BUG_FIXES_TITLE: &str = "🔧 Bug Fixes";
pub const PERFORMANCE_TITLE: &str = "🔥 Performance Improvements";
pub const REVERTS_TITLE: &str = "🔄 Reverts";
pub const REFACTORING_TITLE: &str = "🔬 Code Refactoring";
pub const LABS_TITLE: &str = "🧪 Labs";
pub const OTHER_COMMITS_TITLE: &str = "Other Commits";
pub const BREAKING_CHANGES_TITLE: &str = "BREAKING CHANGES";

/// Section priority, first to last
pub const GROUP_ORDER: [&str; 7] = [
    FEATURES_TITLE,
    BUG_FIXES_TITLE,
    PERFORMANCE_TITLE,
    REFACTORING_TITLE,
    REVERTS_TITLE,
    LABS_TITLE,
    OTHER_COMMITS_TITLE,
];

/// Repository whose labs directory defines the labs scopes
pub const LABS_OWNER: &str = "vuetifyjs";
pub const LABS_REPOSITORY: &str = "vuetify";
pub const LABS_PATH: &str = "packages/vuetify/src/labs";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ALT_CONFIG_TOML,
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Herald Configuration

preset:
  always_shown:
    feat: "🚀 Features"
    fix: "🔧 Bug Fixes"
    perf: "🔥 Performance Improvements"
    refactor: "🔬 Code Refactoring"
    revert: "🔄 Reverts"
  breaking_only: {}
  revert_title: "🔄 Reverts"
  fallback_title: "Other Commits"
  labs_title: "🧪 Labs"
  breaking_title: "BREAKING CHANGES"
  group_order:
    - "🚀 Features"
    - "🔧 Bug Fixes"
    - "🔥 Performance Improvements"
    - "🔬 Code Refactoring"
    - "🔄 Reverts"
    - "🧪 Labs"
    - "Other Commits"

labs:
  enabled: true
  owner: vuetifyjs
  repository: vuetify
  path: packages/vuetify/src/labs

git:
  remote: origin
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        let defaults = Config::default();
        assert_eq!(config.preset.always_shown, defaults.preset.always_shown);
        assert_eq!(config.preset.group_order, defaults.preset.group_order);
        assert_eq!(config.labs.path, defaults.labs.path);
    }
}
