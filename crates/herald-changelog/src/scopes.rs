//! Scope taxonomies
//!
//! A taxonomy answers "which scopes are labs namespaces for this repository?".
//! The classifier only consumes the answer; where it comes from is up to the
//! implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use herald_core::{Context, LabsConfig};

/// Source of labs scope names
pub trait ScopeTaxonomy: Send + Sync {
    /// Scope names treated as labs namespaces for `context`.
    ///
    /// Must not fail: an unreadable source yields an empty set.
    fn known_scopes(&self, context: &Context) -> HashSet<String>;
}

impl<F> ScopeTaxonomy for F
where
    F: Fn(&Context) -> HashSet<String> + Send + Sync,
{
    fn known_scopes(&self, context: &Context) -> HashSet<String> {
        self(context)
    }
}

/// Taxonomy with no labs scopes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScopes;

impl ScopeTaxonomy for NoScopes {
    fn known_scopes(&self, _context: &Context) -> HashSet<String> {
        HashSet::new()
    }
}

/// Labs scopes read from the subdirectories of a directory inside one
/// recognized repository.
///
/// The directory is only listed when the context matches the configured
/// owner and repository (and host, when one is configured), and never when
/// discovery is disabled. It is re-read on every call.
#[derive(Debug, Clone)]
pub struct LabsDirectory {
    enabled: bool,
    host: Option<String>,
    owner: String,
    repository: String,
    dir: PathBuf,
}

impl LabsDirectory {
    /// Create a taxonomy rooted at the repository checkout `root`
    pub fn new(root: &Path, config: &LabsConfig) -> Self {
        Self {
            enabled: config.enabled,
            host: config.host.clone(),
            owner: config.owner.clone(),
            repository: config.repository.clone(),
            dir: root.join(&config.path),
        }
    }

    /// Directory whose subdirectories are listed
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn matches(&self, context: &Context) -> bool {
        let host_matches = match &self.host {
            Some(host) => context.host.as_deref() == Some(host.as_str()),
            None => true,
        };
        self.enabled && host_matches && context.is_repository(&self.owner, &self.repository)
    }
}

impl ScopeTaxonomy for LabsDirectory {
    fn known_scopes(&self, context: &Context) -> HashSet<String> {
        if !self.matches(context) {
            return HashSet::new();
        }

        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %self.dir.display(), error = %e, "labs directory unreadable");
                return HashSet::new();
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }
}
