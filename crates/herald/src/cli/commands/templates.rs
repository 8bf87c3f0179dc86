//! Templates command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use herald_changelog::TemplateSet;

use super::Workspace;
use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Load the changelog templates and report them
#[derive(Debug, Args)]
pub struct TemplatesCommand {
    /// Template directory (defaults to the configured or bundled templates)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

impl TemplatesCommand {
    /// Execute the templates command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(dir = ?self.dir, "executing templates command");
        let workspace = Workspace::load()?;
        let dir = workspace.templates_dir(self.dir.as_deref());

        let rt = tokio::runtime::Runtime::new()?;
        let templates = rt.block_on(TemplateSet::load(&dir))?;

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "dir": dir.to_string_lossy(),
                    "templates": templates,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    return Ok(());
                }
                output::success(&format!(
                    "Loaded templates from {}",
                    output::path_style().apply_to(dir.display())
                ));
                for (name, content) in templates.fragments() {
                    let summary = if content.trim().is_empty() {
                        "empty".to_string()
                    } else {
                        format!("{} lines", content.lines().count())
                    };
                    println!("{}", output::key_value(name, &summary));
                }
            }
        }

        Ok(())
    }
}
