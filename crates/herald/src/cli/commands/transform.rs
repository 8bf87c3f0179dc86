//! Transform command

use std::fmt::Write as _;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use tracing::{info, warn};

use herald_changelog::{Changelog, LabsDirectory, WriterOptions};
use herald_core::{Commit, Context};

use super::Workspace;
use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Classify, link and group commit records into changelog sections
#[derive(Debug, Args)]
pub struct TransformCommand {
    /// JSON array of commit records (default: stdin)
    pub file: Option<PathBuf>,

    /// Base URL of the hosting service, e.g. https://github.com
    #[arg(long)]
    pub host: Option<String>,

    /// Repository owner
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long)]
    pub repository: Option<String>,

    /// Repository URL used for issue links when owner or repository is unknown
    #[arg(long = "repo-url", value_name = "URL")]
    pub repo_url: Option<String>,

    /// Remote the context is derived from (defaults to the configured remote)
    #[arg(long)]
    pub remote: Option<String>,

    /// Template directory (defaults to the configured or bundled templates)
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl TransformCommand {
    /// Execute the transform command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = ?self.file, remote = ?self.remote, "executing transform command");
        let workspace = Workspace::load()?;
        let commits = self.read_commits()?;

        let repo = workspace.repo();
        let derived = match &repo {
            Some(repo) => {
                let remote = self
                    .remote
                    .as_deref()
                    .unwrap_or(&workspace.config.git.remote);
                match repo.context(remote) {
                    Ok(context) => Some(context),
                    // An explicitly requested remote must exist
                    Err(e) if self.remote.is_some() => return Err(e.into()),
                    Err(e) => {
                        warn!(remote, error = %e, "could not derive context from remote");
                        None
                    }
                }
            }
            None => None,
        };
        let context = self.context(derived);

        let root = repo
            .as_ref()
            .map(|r| r.path().to_path_buf())
            .unwrap_or_else(|| workspace.cwd.clone());
        let taxonomy = LabsDirectory::new(&root, &workspace.config.labs);
        let templates_dir = workspace.templates_dir(self.templates.as_deref());

        let rt = tokio::runtime::Runtime::new()?;
        let options = rt.block_on(WriterOptions::create(
            &workspace.config.preset,
            taxonomy,
            &templates_dir,
        ))?;

        let changelog = options.group(&commits, &context);
        info!(
            commits = commits.len(),
            groups = changelog.commit_groups.len(),
            "transformed commits"
        );

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "context": context,
                    "groupBy": options.group_by(),
                    "commitGroups": changelog.commit_groups,
                    "noteGroups": changelog.note_groups,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if changelog.is_empty() {
                    if !cli.quiet {
                        output::warning("No commits left after classification.");
                    }
                    return Ok(());
                }
                print!("{}", render_text(&changelog));
            }
        }

        Ok(())
    }

    fn read_commits(&self) -> anyhow::Result<Vec<Commit>> {
        let input = match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read commit records from stdin")?;
                input
            }
        };

        let commits: Vec<Commit> =
            serde_json::from_str(&input).context("Failed to parse commit records")?;
        Ok(commits)
    }

    /// Context from the remote, with explicit flags taking precedence
    fn context(&self, derived: Option<Context>) -> Context {
        let mut context = derived.unwrap_or_default();
        if let Some(host) = &self.host {
            context.host = Some(host.trim_end_matches('/').to_string());
        }
        if let Some(owner) = &self.owner {
            context.owner = Some(owner.clone());
        }
        if let Some(repository) = &self.repository {
            context.repository = Some(repository.clone());
        }
        if let Some(repo_url) = &self.repo_url {
            context.repo_url = Some(repo_url.trim_end_matches('/').to_string());
        }
        context
    }
}

/// Plain markdown rendering for terminals; hosts render with the templates.
fn render_text(changelog: &Changelog) -> String {
    let mut out = String::new();

    for group in &changelog.note_groups {
        let _ = writeln!(out, "### ⚠️ {}\n", group.title);
        for note in &group.notes {
            match note.scope.as_deref().filter(|s| !s.is_empty()) {
                Some(scope) => {
                    let _ = writeln!(out, "* **{}:** {}", scope, note.text);
                }
                None => {
                    let _ = writeln!(out, "* {}", note.text);
                }
            }
        }
        out.push('\n');
    }

    for group in &changelog.commit_groups {
        let _ = writeln!(out, "### {}\n", group.title);
        for commit in &group.commits {
            out.push('*');
            if let Some(scope) = commit.sort_scope() {
                let _ = write!(out, " **{}:**", scope);
            }
            let subject = commit
                .commit
                .subject
                .as_deref()
                .unwrap_or(&commit.commit.header);
            let _ = write!(out, " {}", subject);
            if let Some(short_hash) = &commit.short_hash {
                let _ = write!(out, " ({})", short_hash);
            }
            if !commit.commit.references.is_empty() {
                let issues: Vec<String> = commit
                    .commit
                    .references
                    .iter()
                    .map(|r| format!("{}{}", r.prefix, r.issue))
                    .collect();
                let _ = write!(out, ", closes {}", issues.join(" "));
            }
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::{ClassifiedCommit, Note, Reference};
    use herald_changelog::{CommitGroup, NoteGroup};

    fn command() -> TransformCommand {
        TransformCommand {
            file: None,
            host: None,
            owner: None,
            repository: None,
            repo_url: None,
            remote: None,
            templates: None,
        }
    }

    #[test]
    fn test_flags_override_remote_context() {
        let derived = Context::new()
            .with_host("https://github.com")
            .with_owner("acme")
            .with_repository("widgets");
        let cmd = TransformCommand {
            host: Some("https://gitlab.example.com/".to_string()),
            repository: Some("gadgets".to_string()),
            ..command()
        };

        let context = cmd.context(Some(derived));
        assert_eq!(context.host.as_deref(), Some("https://gitlab.example.com"));
        assert_eq!(context.owner.as_deref(), Some("acme"));
        assert_eq!(context.repository.as_deref(), Some("gadgets"));
    }

    #[test]
    fn test_context_without_remote() {
        let cmd = TransformCommand {
            repo_url: Some("https://git.example.com/team/app".to_string()),
            ..command()
        };
        let context = cmd.context(None);
        assert_eq!(
            context.repository_url().as_deref(),
            Some("https://git.example.com/team/app")
        );
    }

    #[test]
    fn test_read_commits_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("commits.json");
        std::fs::write(&path, r#"[{"header": "feat: x", "type": "feat", "subject": "x"}]"#).unwrap();

        let cmd = TransformCommand {
            file: Some(path),
            ..command()
        };
        let commits = cmd.read_commits().unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].commit_type.as_deref(), Some("feat"));
    }

    #[test]
    fn test_read_commits_rejects_bad_json() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("commits.json");
        std::fs::write(&path, "{not json").unwrap();

        let cmd = TransformCommand {
            file: Some(path),
            ..command()
        };
        let err = cmd.read_commits().unwrap_err();
        assert!(err.to_string().contains("Failed to parse commit records"));
    }

    #[test]
    fn test_render_text() {
        let mut commit = Commit::new("fix(menu): close on escape")
            .with_type("fix")
            .with_scope("menu")
            .with_subject("close on escape")
            .with_reference(Reference::new("12").with_action("closes"));
        commit.notes.push(Note {
            title: "BREAKING CHANGES".to_string(),
            text: "Escape no longer propagates.".to_string(),
            scope: Some("menu".to_string()),
        });

        let changelog = Changelog {
            commit_groups: vec![CommitGroup {
                title: "🔧 Bug Fixes".to_string(),
                commits: vec![ClassifiedCommit {
                    commit: commit.clone(),
                    title: "🔧 Bug Fixes".to_string(),
                    short_hash: Some("abc1234".to_string()),
                }],
            }],
            note_groups: vec![NoteGroup {
                title: "BREAKING CHANGES".to_string(),
                notes: commit.notes.clone(),
            }],
        };

        let text = render_text(&changelog);
        assert!(text.starts_with("### ⚠️ BREAKING CHANGES\n\n* **menu:** Escape no longer propagates.\n"));
        assert!(text.contains("### 🔧 Bug Fixes\n\n* **menu:** close on escape (abc1234), closes #12\n"));
    }
}
