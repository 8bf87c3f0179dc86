//! Issue and user mention links
//!
//! Two independent rewrite rules, applied in order:
//!
//! 1. `#<digits>` becomes `[#<digits>](<repository>/issues/<digits>)` when the
//!    context resolves a repository URL.
//! 2. `@<name>` becomes `[@<name>](<host>/<name>)` when the context has a host.
//!    The `@` must not follow a word character, `<name>` is 1 to 39 characters
//!    of `[a-z0-9]` with single inner hyphens, and names containing `/` are
//!    left untouched since they are paths or package names, not users.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use herald_core::Context;

static ISSUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9]+)").expect("Invalid regex"));

static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([a-z0-9](?:-?[a-z0-9/]){0,38})").expect("Invalid regex")
});

/// Rewrite issue and user mentions in `text` into markdown links.
///
/// Issue numbers that get linked are appended to `issues` when a collector is
/// supplied. `None` passes through unchanged.
pub fn linkify(
    text: Option<&str>,
    context: &Context,
    issues: Option<&mut Vec<String>>,
) -> Option<String> {
    let text = text?;

    let text = match context.repository_url() {
        Some(url) => link_issues(text, &url, issues),
        None => text.to_string(),
    };

    match context.host.as_deref().filter(|h| !h.is_empty()) {
        Some(host) => Some(link_mentions(&text, host)),
        None => Some(text),
    }
}

fn link_issues(text: &str, repository_url: &str, mut issues: Option<&mut Vec<String>>) -> String {
    ISSUE_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let issue = &caps[1];
            if let Some(issues) = issues.as_deref_mut() {
                issues.push(issue.to_string());
            }
            format!("[#{}]({}/issues/{})", issue, repository_url, issue)
        })
        .into_owned()
}

fn link_mentions(text: &str, host: &str) -> String {
    MENTION_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let mention = &caps[0];
            let name = &caps[1];
            let start = caps.get(0).map_or(0, |m| m.start());

            if follows_word_char(text, start) || name.contains('/') {
                mention.to_string()
            } else {
                format!("[@{}]({}/{})", name, host, name)
            }
        })
        .into_owned()
}

/// `@` directly after a word character is part of a word (e.g. an email
/// address), not a mention.
fn follows_word_char(text: &str, index: usize) -> bool {
    text[..index]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}
