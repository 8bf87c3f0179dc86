//! Commit classification
//!
//! Decides which section a commit is listed under, or whether it is left out
//! of the changelog, and normalizes the fields templates rely on.

use tracing::{debug, trace};

use herald_core::{ClassifiedCommit, Commit, Context, Note, PresetConfig};

use crate::scopes::{NoScopes, ScopeTaxonomy};

/// Scope value meaning "everything"; rendered as an empty scope
const WILDCARD_SCOPE: &str = "*";

/// Length of abbreviated commit hashes
const SHORT_HASH_LEN: usize = 7;

/// Assigns sections to commits
pub struct Classifier {
    config: PresetConfig,
    taxonomy: Box<dyn ScopeTaxonomy>,
}

impl Classifier {
    /// Create a classifier without labs scopes
    pub fn new(config: PresetConfig) -> Self {
        Self {
            config,
            taxonomy: Box::new(NoScopes),
        }
    }

    /// Use a scope taxonomy for labs detection
    pub fn with_taxonomy<T: ScopeTaxonomy + 'static>(mut self, taxonomy: T) -> Self {
        self.taxonomy = Box::new(taxonomy);
        self
    }

    /// Classify a commit.
    ///
    /// Returns `None` when the commit is left out of the changelog, which only
    /// happens for breaking-only types without a breaking-change note.
    pub fn classify(&self, commit: &Commit, context: &Context) -> Option<ClassifiedCommit> {
        let config = &self.config;
        let mut classified = commit.clone();
        let commit_type = commit.commit_type.as_deref();

        let (mut title, untyped) = if commit.is_revert() {
            (config.revert().to_string(), false)
        } else if let Some(title) = commit_type.and_then(|t| config.always_shown.get(t)) {
            (title.clone(), false)
        } else if let Some(title) = commit_type.and_then(|t| config.breaking_only.get(t)) {
            if !commit.is_breaking() {
                debug!(
                    hash = ?commit.hash,
                    commit_type = ?commit_type,
                    "discarding commit without breaking change"
                );
                return None;
            }
            (title.clone(), false)
        } else {
            // No parsed structure to trust, show the raw header instead
            classified.subject = Some(commit.header.clone());
            classified.scope = None;
            (config.fallback_title.clone(), true)
        };

        match commit.scope.as_deref() {
            Some(WILDCARD_SCOPE) => {
                if !untyped {
                    classified.scope = Some(String::new());
                }
            }
            Some(scope) if !scope.is_empty() => {
                if self.taxonomy.known_scopes(context).contains(scope) {
                    trace!(scope, "scope is a labs namespace");
                    title = config.labs_title.clone();
                }
            }
            _ => {}
        }

        let note_scope = match commit.scope.as_deref() {
            Some(WILDCARD_SCOPE) => Some(String::new()),
            _ => commit.scope.clone(),
        };
        classified.notes = commit
            .notes
            .iter()
            .map(|note| Note {
                title: config.breaking_title.clone(),
                text: note.text.clone(),
                scope: note_scope.clone(),
            })
            .collect();

        let short_hash = commit
            .hash
            .as_deref()
            .filter(|hash| !hash.is_empty())
            .map(|hash| hash.chars().take(SHORT_HASH_LEN).collect());

        trace!(title = %title, hash = ?commit.hash, "classified commit");
        Some(ClassifiedCommit {
            commit: classified,
            title,
            short_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn classifier() -> Classifier {
        Classifier::new(PresetConfig::default())
    }

    fn vuetify() -> Context {
        Context::new()
            .with_host("https://github.com")
            .with_owner("vuetifyjs")
            .with_repository("vuetify")
    }

    fn labs_taxonomy(context: &Context) -> HashSet<String> {
        if context.is_repository("vuetifyjs", "vuetify") {
            HashSet::from(["VCalendar".to_string()])
        } else {
            HashSet::new()
        }
    }

    #[test]
    fn test_always_shown_types() {
        let expected = [
            ("feat", "🚀 Features"),
            ("fix", "🔧 Bug Fixes"),
            ("perf", "🔥 Performance Improvements"),
            ("revert", "🔄 Reverts"),
            ("refactor", "🔬 Code Refactoring"),
        ];
        for (commit_type, title) in expected {
            let commit = Commit::new(format!("{}(menu): change", commit_type))
                .with_type(commit_type)
                .with_scope("menu")
                .with_subject("change")
                .with_note(Note::breaking("gone"));
            let classified = classifier().classify(&commit, &Context::new()).unwrap();
            assert_eq!(classified.title, title);
            assert_eq!(classified.commit.scope.as_deref(), Some("menu"));
        }
    }

    #[test]
    fn test_revert_wins_over_type() {
        let commit = Commit::new("Revert \"feat: default revert format\"")
            .with_type("feat")
            .with_subject("default revert format")
            .reverting();
        let classified = classifier().classify(&commit, &Context::new()).unwrap();
        assert_eq!(classified.title, "🔄 Reverts");
    }

    #[test]
    fn test_unknown_type_uses_header() {
        let commit = Commit::new("Just a regular commit message")
            .with_scope("core")
            .with_subject("parsed wrongly");
        let classified = classifier().classify(&commit, &Context::new()).unwrap();

        assert_eq!(classified.title, "Other Commits");
        assert_eq!(
            classified.commit.subject.as_deref(),
            Some("Just a regular commit message")
        );
        assert!(classified.commit.scope.is_none());
    }

    #[test]
    fn test_unknown_type_with_wildcard_scope_stays_unscoped() {
        let commit = Commit::new("chore(*): tidy").with_type("chore").with_scope("*");
        let classified = classifier().classify(&commit, &Context::new()).unwrap();
        assert!(classified.commit.scope.is_none());
    }

    #[test]
    fn test_breaking_only_type_without_note_is_discarded() {
        let mut config = PresetConfig::default();
        config
            .breaking_only
            .insert("docs".to_string(), "Documentation".to_string());
        let classifier = Classifier::new(config);

        let commit = Commit::new("docs(readme): make it clear").with_type("docs");
        assert!(classifier.classify(&commit, &Context::new()).is_none());
    }

    #[test]
    fn test_breaking_only_type_with_note_is_kept() {
        let mut config = PresetConfig::default();
        config
            .breaking_only
            .insert("docs".to_string(), "Documentation".to_string());
        let classifier = Classifier::new(config);

        let commit = Commit::new("docs(readme): make it clear")
            .with_type("docs")
            .with_scope("readme")
            .with_note(Note::breaking("The Change is huge."));
        let classified = classifier.classify(&commit, &Context::new()).unwrap();
        assert_eq!(classified.title, "Documentation");
    }

    #[test]
    fn test_wildcard_scope_is_cleared() {
        let commit = Commit::new("feat(*): more tests")
            .with_type("feat")
            .with_scope("*")
            .with_note(Note::breaking("The Change is huge."));
        let classified = classifier().classify(&commit, &Context::new()).unwrap();

        assert_eq!(classified.commit.scope.as_deref(), Some(""));
        assert_eq!(classified.commit.notes[0].scope.as_deref(), Some(""));
    }

    #[test]
    fn test_notes_are_normalized() {
        let commit = Commit::new("fix(compile): avoid a bug")
            .with_type("fix")
            .with_scope("compile")
            .with_note(Note::breaking("The Change is huge."));
        let classified = classifier().classify(&commit, &Context::new()).unwrap();

        let note = &classified.commit.notes[0];
        assert_eq!(note.title, "BREAKING CHANGES");
        assert_eq!(note.scope.as_deref(), Some("compile"));
        assert_eq!(note.text, "The Change is huge.");
    }

    #[test]
    fn test_short_hash() {
        let commit = Commit::new("fix: oops")
            .with_type("fix")
            .with_hash("0123456789abcdef0123456789abcdef01234567");
        let classified = classifier().classify(&commit, &Context::new()).unwrap();
        assert_eq!(classified.short_hash.as_deref(), Some("0123456"));

        let commit = Commit::new("fix: oops").with_type("fix").with_hash("");
        let classified = classifier().classify(&commit, &Context::new()).unwrap();
        assert!(classified.short_hash.is_none());
    }

    #[test]
    fn test_labs_scope_overrides_title() {
        let classifier = classifier().with_taxonomy(labs_taxonomy);
        let commit = Commit::new("fix(VCalendar): events overlap")
            .with_type("fix")
            .with_scope("VCalendar");

        let classified = classifier.classify(&commit, &vuetify()).unwrap();
        assert_eq!(classified.title, "🧪 Labs");
        assert_eq!(classified.commit.scope.as_deref(), Some("VCalendar"));

        let other = Context::new().with_owner("acme").with_repository("widgets");
        let classified = classifier.classify(&commit, &other).unwrap();
        assert_eq!(classified.title, "🔧 Bug Fixes");
    }

    #[test]
    fn test_labs_scope_does_not_rescue_discarded_commit() {
        let mut config = PresetConfig::default();
        config
            .breaking_only
            .insert("style".to_string(), "Code Style".to_string());
        let classifier = Classifier::new(config).with_taxonomy(labs_taxonomy);

        let commit = Commit::new("style(VCalendar): whitespace")
            .with_type("style")
            .with_scope("VCalendar");
        assert!(classifier.classify(&commit, &vuetify()).is_none());
    }

    #[test]
    fn test_input_is_not_mutated_and_output_is_stable() {
        let commit = Commit::new("feat(*): implementing #5 by @dlmr")
            .with_type("feat")
            .with_scope("*")
            .with_subject("implementing #5 by @dlmr")
            .with_note(Note::breaking("x"));
        let before = commit.clone();

        let first = classifier().classify(&commit, &vuetify());
        let second = classifier().classify(&commit, &vuetify());

        assert_eq!(commit, before);
        assert_eq!(first, second);
    }
}
