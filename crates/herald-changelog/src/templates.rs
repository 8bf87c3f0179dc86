//! Template fragment bootstrap
//!
//! The four fragments are read concurrently and handed to the host renderer
//! as-is. A missing or unreadable fragment fails the whole run.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use herald_core::error::TemplateError;

/// Main document template file
pub const MAIN_TEMPLATE: &str = "template.hbs";
/// Header partial file
pub const HEADER_PARTIAL: &str = "header.hbs";
/// Per-commit partial file
pub const COMMIT_PARTIAL: &str = "commit.hbs";
/// Footer partial file
pub const FOOTER_PARTIAL: &str = "footer.hbs";

/// The four template fragments of a changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSet {
    /// Document skeleton
    pub main_template: String,
    /// Release header
    pub header_partial: String,
    /// One commit line
    pub commit_partial: String,
    /// Release footer
    pub footer_partial: String,
}

impl TemplateSet {
    /// Directory of the templates shipped with this crate
    pub fn bundled_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
    }

    /// Load the shipped templates
    pub async fn bundled() -> Result<Self, TemplateError> {
        Self::load(&Self::bundled_dir()).await
    }

    /// Read all four fragments from `dir`
    #[instrument(skip(dir), fields(dir = %dir.display()))]
    pub async fn load(dir: &Path) -> Result<Self, TemplateError> {
        let is_dir = tokio::fs::metadata(dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(TemplateError::DirectoryNotFound(dir.to_path_buf()));
        }

        let (main_template, header_partial, commit_partial, footer_partial) = tokio::try_join!(
            read_fragment(dir, "main", MAIN_TEMPLATE),
            read_fragment(dir, "header", HEADER_PARTIAL),
            read_fragment(dir, "commit", COMMIT_PARTIAL),
            read_fragment(dir, "footer", FOOTER_PARTIAL),
        )?;

        info!(dir = %dir.display(), "templates loaded");
        Ok(Self {
            main_template,
            header_partial,
            commit_partial,
            footer_partial,
        })
    }

    /// Fragments with their file names, in load order
    pub fn fragments(&self) -> [(&'static str, &str); 4] {
        [
            (MAIN_TEMPLATE, &self.main_template),
            (HEADER_PARTIAL, &self.header_partial),
            (COMMIT_PARTIAL, &self.commit_partial),
            (FOOTER_PARTIAL, &self.footer_partial),
        ]
    }
}

async fn read_fragment(
    dir: &Path,
    fragment: &'static str,
    file: &str,
) -> Result<String, TemplateError> {
    let path = dir.join(file);
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| TemplateError::ReadFailed {
            fragment,
            path: path.clone(),
            source,
        })?;
    debug!(fragment, path = %path.display(), bytes = content.len(), "read template fragment");
    Ok(content)
}
