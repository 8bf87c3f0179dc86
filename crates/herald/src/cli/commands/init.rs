//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::info;

use herald_core::config::{load_config, Config, DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_YAML};

use crate::cli::output;
use crate::cli::Cli;

/// Initialize a new Herald configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_YAML));

        // Check if config already exists
        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let format = if self.yes {
            ConfigFormat::Yaml
        } else {
            let formats = ["yaml", "toml"];
            let selection = Select::new()
                .with_prompt("Configuration format")
                .items(&formats)
                .default(0)
                .interact()?;
            if selection == 1 {
                ConfigFormat::Toml
            } else {
                ConfigFormat::Yaml
            }
        };

        let config_path = write_config(&config_path, format)?;

        // Read it back so a broken template never lands silently
        load_config(&config_path)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path_style().apply_to(config_path.display())
            ));
            println!();
            println!("Next steps:");
            println!(
                "  1. Edit {} to adjust section titles and labs discovery",
                config_path.display()
            );
            println!("  2. Run {} to check the repository context", style("herald context").cyan());
            println!(
                "  3. Pipe commit records into {}",
                style("herald transform").cyan()
            );
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Toml,
}

/// Write the default configuration, switching a `.yaml` path to `.toml`
/// when TOML is requested. Returns the path written.
fn write_config(path: &Path, format: ConfigFormat) -> anyhow::Result<PathBuf> {
    let (path, content) = match format {
        ConfigFormat::Yaml => (path.to_path_buf(), DEFAULT_CONFIG_TEMPLATE.to_string()),
        ConfigFormat::Toml => {
            let path = if path.extension().is_some_and(|e| e == "yaml") {
                path.with_extension("toml")
            } else {
                path.to_path_buf()
            };
            (path, toml::to_string_pretty(&Config::default())?)
        }
    };

    std::fs::write(&path, content)?;
    info!(path = %path.display(), ?format, "wrote default configuration");
    Ok(path)
}
