//! CLI commands

mod context;
mod init;
mod templates;
mod transform;

pub use context::ContextCommand;
pub use init::InitCommand;
pub use templates::TemplatesCommand;
pub use transform::TransformCommand;

use std::path::{Path, PathBuf};

use tracing::debug;

use herald_changelog::TemplateSet;
use herald_core::config::{load_config_or_default, Config};
use herald_git::GitRepo;

/// Configuration and locations shared by the commands
pub(crate) struct Workspace {
    pub cwd: PathBuf,
    pub config: Config,
    pub config_path: Option<PathBuf>,
}

impl Workspace {
    /// Load the configuration for the current directory
    pub fn load() -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(cwd)
    }

    fn load_from(cwd: PathBuf) -> anyhow::Result<Self> {
        let (config, config_path) = load_config_or_default(&cwd)?;
        Ok(Self {
            cwd,
            config,
            config_path,
        })
    }

    /// Template directory: an explicit override, then the configured
    /// directory (relative to the config file), then the bundled templates.
    pub fn templates_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        if let Some(dir) = override_dir {
            return self.cwd.join(dir);
        }
        match &self.config.templates.dir {
            Some(dir) => self.config_dir().join(dir),
            None => TemplateSet::bundled_dir(),
        }
    }

    /// Git repository containing the working directory, if any
    pub fn repo(&self) -> Option<GitRepo> {
        match GitRepo::discover(&self.cwd) {
            Ok(repo) => Some(repo),
            Err(e) => {
                debug!(error = %e, "no git repository");
                None
            }
        }
    }

    fn config_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_templates_dir_resolution() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::load_from(temp.path().to_path_buf()).unwrap();
        assert!(workspace.config_path.is_none());
        assert_eq!(workspace.templates_dir(None), TemplateSet::bundled_dir());
        assert_eq!(
            workspace.templates_dir(Some(Path::new("custom"))),
            temp.path().join("custom")
        );
    }

    #[test]
    fn test_configured_templates_dir_is_relative_to_config() {
        let temp = TempDir::new().unwrap();
        let github = temp.path().join(".github");
        std::fs::create_dir_all(&github).unwrap();
        std::fs::write(github.join("herald.yaml"), "templates:\n  dir: changelog\n").unwrap();

        let workspace = Workspace::load_from(temp.path().to_path_buf()).unwrap();
        assert_eq!(workspace.templates_dir(None), github.join("changelog"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("herald.yaml"), "git:\n  remote: \"\"\n").unwrap();
        assert!(Workspace::load_from(temp.path().to_path_buf()).is_err());
    }
}
