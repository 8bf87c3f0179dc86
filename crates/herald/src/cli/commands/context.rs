//! Context command

use clap::Args;
use console::style;
use tracing::info;

use herald_git::GitRepo;

use super::Workspace;
use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Show the repository context derived from a git remote
#[derive(Debug, Args)]
pub struct ContextCommand {
    /// Remote to read (defaults to the configured remote)
    #[arg(long)]
    pub remote: Option<String>,
}

impl ContextCommand {
    /// Execute the context command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(remote = ?self.remote, "executing context command");
        let workspace = Workspace::load()?;
        let remote = self
            .remote
            .as_deref()
            .unwrap_or(&workspace.config.git.remote);

        let repo = GitRepo::discover(&workspace.cwd)?;
        let context = match repo.context(remote) {
            Ok(context) => context,
            Err(e) => {
                let remotes = repo.remotes()?;
                if !remotes.is_empty() && !cli.quiet {
                    output::info(&format!("Available remotes: {}", remotes.join(", ")));
                }
                return Err(e.into());
            }
        };

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&context)?);
            }
            OutputFormat::Text => {
                let unknown = style("unknown").dim().to_string();
                println!("{}", output::header("Repository Context"));
                println!("{}", output::key_value("Remote", remote));
                println!(
                    "{}",
                    output::key_value("Host", context.host.as_deref().unwrap_or(&unknown))
                );
                println!(
                    "{}",
                    output::key_value("Owner", context.owner.as_deref().unwrap_or(&unknown))
                );
                println!(
                    "{}",
                    output::key_value(
                        "Repository",
                        context.repository.as_deref().unwrap_or(&unknown)
                    )
                );
                if let Some(url) = context.repository_url() {
                    println!("{}", output::key_value("Issues", &format!("{}/issues", url)));
                }
                let labs = &workspace.config.labs;
                if labs.enabled && context.is_repository(&labs.owner, &labs.repository) {
                    let dir = repo.path().join(&labs.path);
                    println!(
                        "{}",
                        output::key_value("Labs", &output::path_style().apply_to(dir.display()).to_string())
                    );
                }
            }
        }

        Ok(())
    }
}
