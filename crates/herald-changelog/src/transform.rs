//! Per-commit transform handed to the host framework

use herald_core::{ClassifiedCommit, Commit, Context};

use crate::classifier::Classifier;
use crate::linkify::linkify;
use crate::references::dedupe;

/// Classifies a commit and rewrites its text for rendering
pub struct CommitTransform {
    classifier: Classifier,
}

impl CommitTransform {
    /// Create a transform around a classifier
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Transform one commit; `None` means it is left out of the changelog.
    ///
    /// Links are added after classification so untyped commits get links in
    /// the header that replaced their subject. Only issues linked in the
    /// subject take part in reference deduplication.
    pub fn apply(&self, commit: &Commit, context: &Context) -> Option<ClassifiedCommit> {
        let mut classified = self.classifier.classify(commit, context)?;
        let rewritten = &mut classified.commit;

        let mut linked_issues = Vec::new();
        rewritten.subject = linkify(rewritten.subject.as_deref(), context, Some(&mut linked_issues));
        rewritten.footer = linkify(rewritten.footer.as_deref(), context, None);
        rewritten.references = dedupe(std::mem::take(&mut rewritten.references), &linked_issues);

        Some(classified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::{PresetConfig, Reference};

    fn transform() -> CommitTransform {
        CommitTransform::new(Classifier::new(PresetConfig::default()))
    }

    fn context() -> Context {
        Context::new()
            .with_host("https://example.com")
            .with_owner("o")
            .with_repository("r")
    }

    #[test]
    fn test_subject_links_dedupe_references() {
        let commit = Commit::new("fix: fixes #42 and #43")
            .with_type("fix")
            .with_subject("fixes #42 and #43")
            .with_reference(Reference::new("42").with_action("Closes"))
            .with_reference(Reference::new("43").with_action("Closes"))
            .with_reference(Reference::new("43"))
            .with_reference(Reference::new("44").with_action("Closes"));

        let classified = transform().apply(&commit, &context()).unwrap();
        let subject = classified.commit.subject.unwrap();
        assert!(subject.contains("[#42](https://example.com/o/r/issues/42)"));
        assert!(subject.contains("[#43](https://example.com/o/r/issues/43)"));

        let issues: Vec<_> = classified
            .commit
            .references
            .iter()
            .map(|r| (r.issue.as_str(), r.action.is_some()))
            .collect();
        assert_eq!(issues, vec![("43", false), ("44", true)]);
    }

    #[test]
    fn test_footer_links_do_not_dedupe() {
        let commit = Commit::new("perf(ngOptions): make it faster")
            .with_type("perf")
            .with_scope("ngOptions")
            .with_subject("make it faster")
            .with_footer("closes #1, #2")
            .with_reference(Reference::new("1").with_action("closes"))
            .with_reference(Reference::new("2").with_action("closes"));

        let classified = transform().apply(&commit, &context()).unwrap();
        assert_eq!(
            classified.commit.footer.as_deref(),
            Some("closes [#1](https://example.com/o/r/issues/1), [#2](https://example.com/o/r/issues/2)")
        );
        assert_eq!(classified.commit.references.len(), 2);
    }

    #[test]
    fn test_untyped_header_is_linked() {
        let commit = Commit::new("Merge pull request #12 from @dlmr");
        let classified = transform().apply(&commit, &context()).unwrap();
        assert_eq!(
            classified.commit.subject.as_deref(),
            Some("Merge pull request [#12](https://example.com/o/r/issues/12) from [@dlmr](https://example.com/dlmr)")
        );
    }

    #[test]
    fn test_discarded_commit() {
        let mut config = PresetConfig::default();
        config
            .breaking_only
            .insert("ci".to_string(), "Continuous Integration".to_string());
        let transform = CommitTransform::new(Classifier::new(config));

        let commit = Commit::new("ci(travis): setup travis").with_type("ci");
        assert!(transform.apply(&commit, &context()).is_none());
    }

    #[test]
    fn test_missing_subject_passes_through() {
        let commit = Commit::new("feat: x").with_type("feat");
        let classified = transform().apply(&commit, &context()).unwrap();
        assert!(classified.commit.subject.is_none());
        assert!(classified.commit.footer.is_none());
    }
}
