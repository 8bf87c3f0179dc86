//! Remote operations and repository context derivation

use tracing::{debug, instrument};
use url::Url;

use crate::repository::{GitRepo, Result};
use herald_core::error::GitError;
use herald_core::Context;

impl GitRepo {
    /// Get list of remote names
    pub fn remotes(&self) -> Result<Vec<String>> {
        let remotes = self.repo.remotes()?;
        Ok(remotes
            .iter()
            .filter_map(|r| r.map(|s| s.to_string()))
            .collect())
    }

    /// Get the URL for a remote
    pub fn remote_url(&self, name: &str) -> Result<String> {
        match self.repo.find_remote(name) {
            Ok(remote) => remote
                .url()
                .map(|s| s.to_string())
                .ok_or_else(|| GitError::MissingRemoteUrl(name.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Err(GitError::RemoteNotFound(name.to_string()))
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Derive the repository context from a remote's URL
    #[instrument(skip(self))]
    pub fn context(&self, remote: &str) -> Result<Context> {
        let url = self.remote_url(remote)?;
        let context = parse_remote_url(&url)?;
        debug!(
            remote,
            host = ?context.host,
            owner = ?context.owner,
            repository = ?context.repository,
            "derived context from remote"
        );
        Ok(context)
    }
}

/// Parse a git remote URL into a repository context.
///
/// Accepts `https://host/owner/repo(.git)`, `ssh://git@host[:port]/owner/repo`
/// and scp-like `git@host:owner/repo.git`. Nested group paths
/// (`group/subgroup/repo`) keep everything but the last segment as the owner.
pub fn parse_remote_url(raw: &str) -> Result<Context> {
    let invalid = || GitError::InvalidRemoteUrl(raw.to_string());
    let trimmed = raw.trim();

    let (host, path) = if trimmed.contains("://") {
        let url = Url::parse(trimmed).map_err(|_| invalid())?;
        let hostname = url.host_str().ok_or_else(invalid)?;
        let host = match (url.scheme(), url.port()) {
            ("http", Some(port)) | ("https", Some(port)) => {
                format!("{}://{}:{}", url.scheme(), hostname, port)
            }
            ("http", None) => format!("http://{}", hostname),
            _ => format!("https://{}", hostname),
        };
        (host, url.path().to_string())
    } else {
        // scp-like syntax: [user@]host:path
        let (authority, path) = trimmed.split_once(':').ok_or_else(invalid)?;
        let hostname = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);
        if hostname.is_empty() {
            return Err(invalid());
        }
        (format!("https://{}", hostname), path.to_string())
    };

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let (owner, repository) = path.rsplit_once('/').ok_or_else(invalid)?;
    if owner.is_empty() || repository.is_empty() {
        return Err(invalid());
    }

    Ok(Context::new()
        .with_repo_url(format!("{}/{}/{}", host, owner, repository))
        .with_host(host)
        .with_owner(owner)
        .with_repository(repository))
}
