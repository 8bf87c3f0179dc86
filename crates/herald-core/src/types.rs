//! Records exchanged with the host changelog framework
//!
//! Field names follow the host's JSON shape (camelCase). Fields Herald does
//! not interpret are carried through untouched in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Repository context for a changelog run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Context {
    /// Base URL of the hosting service (e.g. `https://github.com`)
    pub host: Option<String>,
    /// Repository owner or group path
    pub owner: Option<String>,
    /// Repository name
    pub repository: Option<String>,
    /// Fallback repository URL when owner/repository are unknown
    pub repo_url: Option<String>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the owner
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the repository name
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// Set the fallback repository URL
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    /// URL of the repository, used as the base for issue links.
    ///
    /// `{host}/{owner}/{repository}` when all three are known, otherwise the
    /// fallback `repo_url`.
    pub fn repository_url(&self) -> Option<String> {
        match (non_empty(&self.host), non_empty(&self.owner), non_empty(&self.repository)) {
            (Some(host), Some(owner), Some(repository)) => {
                Some(format!("{}/{}/{}", host, owner, repository))
            }
            _ => non_empty(&self.repo_url).map(str::to_string),
        }
    }

    /// Check whether this context points at the given repository
    pub fn is_repository(&self, owner: &str, repository: &str) -> bool {
        self.owner.as_deref() == Some(owner) && self.repository.as_deref() == Some(repository)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// A breaking-change note extracted from a commit body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Note heading as parsed (e.g. "BREAKING CHANGE")
    #[serde(default)]
    pub title: String,
    /// Note text
    #[serde(default)]
    pub text: String,
    /// Scope of the owning commit
    #[serde(default)]
    pub scope: Option<String>,
}

impl Note {
    /// Create a breaking-change note
    pub fn breaking(text: impl Into<String>) -> Self {
        Self {
            title: "BREAKING CHANGE".to_string(),
            text: text.into(),
            scope: None,
        }
    }
}

/// A reference to an issue or pull request mentioned in a commit footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Closing action keyword ("closes", "fixes", ...), `None` for plain mentions
    #[serde(default)]
    pub action: Option<String>,
    /// Owner of a cross-repository reference
    #[serde(default)]
    pub owner: Option<String>,
    /// Repository of a cross-repository reference
    #[serde(default)]
    pub repository: Option<String>,
    /// Issue number
    pub issue: String,
    /// Raw matched text
    #[serde(default)]
    pub raw: String,
    /// Issue prefix (usually `#`)
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "#".to_string()
}

impl Reference {
    /// Create a plain mention of an issue
    pub fn new(issue: impl Into<String>) -> Self {
        let issue = issue.into();
        Self {
            action: None,
            owner: None,
            repository: None,
            raw: format!("#{}", issue),
            issue,
            prefix: default_prefix(),
        }
    }

    /// Set the closing action
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// A commit record as produced by the host's commit parser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    /// Full commit hash
    #[serde(default)]
    pub hash: Option<String>,
    /// First line of the commit message
    #[serde(default)]
    pub header: String,
    /// Parsed subject
    #[serde(default)]
    pub subject: Option<String>,
    /// Parsed type (feat, fix, ...)
    #[serde(default, rename = "type")]
    pub commit_type: Option<String>,
    /// Parsed scope
    #[serde(default)]
    pub scope: Option<String>,
    /// Commit body
    #[serde(default)]
    pub body: Option<String>,
    /// Commit footer
    #[serde(default)]
    pub footer: Option<String>,
    /// The reverted commit as described by the host: `null`, a boolean, or
    /// an object such as `{header, hash}`. Kept as received.
    #[serde(default)]
    pub revert: Option<Value>,
    /// Breaking-change notes
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Issue references
    #[serde(default)]
    pub references: Vec<Reference>,
    /// Host fields Herald does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Commit {
    /// Create a commit from its header line
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    /// Set the hash
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Set the type
    pub fn with_type(mut self, commit_type: impl Into<String>) -> Self {
        self.commit_type = Some(commit_type.into());
        self
    }

    /// Set the scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the footer
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Mark as a revert
    pub fn reverting(mut self) -> Self {
        self.revert = Some(Value::Bool(true));
        self
    }

    /// Check whether the commit reverts another one; anything other than
    /// `null` or `false` counts
    pub fn is_revert(&self) -> bool {
        !matches!(self.revert, None | Some(Value::Null) | Some(Value::Bool(false)))
    }

    /// Add a note
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Add a reference
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    /// Check whether the commit carries a breaking-change note
    pub fn is_breaking(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// A commit after classification, ready to be grouped by `title`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedCommit {
    /// The rewritten commit
    #[serde(flatten)]
    pub commit: Commit,
    /// Display group
    pub title: String,
    /// First seven characters of the hash
    #[serde(default)]
    pub short_hash: Option<String>,
}

impl ClassifiedCommit {
    /// Scope used for ordering; empty scopes count as absent
    pub fn sort_scope(&self) -> Option<&str> {
        self.commit.scope.as_deref().filter(|s| !s.is_empty())
    }
}
