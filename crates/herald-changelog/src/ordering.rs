//! Ordering of sections, commits and notes
//!
//! All comparators are total orders so output is identical across runs.
//! Callers sort with a stable sort; commits that compare equal keep the order
//! they were classified in.

use std::cmp::Ordering;

use herald_core::{ClassifiedCommit, Note, PresetConfig};

/// Section ordering policy
#[derive(Debug, Clone)]
pub struct OrderingPolicy {
    group_order: Vec<String>,
}

impl OrderingPolicy {
    /// Create a policy from a section priority list, first to last
    pub fn new(group_order: Vec<String>) -> Self {
        Self { group_order }
    }

    /// Create a policy from a preset's group order
    pub fn from_preset(config: &PresetConfig) -> Self {
        Self::new(config.group_order.clone())
    }

    fn index(&self, title: &str) -> Option<usize> {
        self.group_order.iter().position(|t| t == title)
    }

    /// Compare two section titles.
    ///
    /// Listed titles follow the priority list, unlisted titles come after all
    /// listed ones and sort lexicographically among themselves. A known title
    /// always sorts before an unknown one, even when the unknown title is
    /// lexicographically smaller (`"Documentation"` follows `"Other Commits"`).
    pub fn compare_groups(&self, a: &str, b: &str) -> Ordering {
        match (self.index(a), self.index(b)) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }

    /// Compare two commits in the same section.
    ///
    /// Unscoped commits first, then by scope. An empty scope counts as unscoped.
    pub fn compare_commits(a: &ClassifiedCommit, b: &ClassifiedCommit) -> Ordering {
        match (a.sort_scope(), b.sort_scope()) {
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(b),
            (None, None) => Ordering::Equal,
        }
    }

    /// Compare two notes by title, then scope, then text
    pub fn compare_notes(a: &Note, b: &Note) -> Ordering {
        a.title
            .cmp(&b.title)
            .then_with(|| a.scope.cmp(&b.scope))
            .then_with(|| a.text.cmp(&b.text))
    }
}

impl Default for OrderingPolicy {
    fn default() -> Self {
        Self::from_preset(&PresetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::Commit;

    fn scoped(scope: Option<&str>, subject: &str) -> ClassifiedCommit {
        let mut commit = Commit::new(subject).with_subject(subject);
        commit.scope = scope.map(str::to_string);
        ClassifiedCommit {
            commit,
            title: "🚀 Features".to_string(),
            short_hash: None,
        }
    }

    #[test]
    fn test_known_groups_follow_priority() {
        let policy = OrderingPolicy::default();
        let mut titles = vec![
            "Other Commits",
            "🧪 Labs",
            "🔧 Bug Fixes",
            "🔄 Reverts",
            "🚀 Features",
            "🔬 Code Refactoring",
            "🔥 Performance Improvements",
        ];
        titles.sort_by(|a, b| policy.compare_groups(a, b));
        assert_eq!(
            titles,
            vec![
                "🚀 Features",
                "🔧 Bug Fixes",
                "🔥 Performance Improvements",
                "🔬 Code Refactoring",
                "🔄 Reverts",
                "🧪 Labs",
                "Other Commits",
            ]
        );
    }

    #[test]
    fn test_unknown_groups_sort_lexicographically_after_known() {
        let policy = OrderingPolicy::default();
        let mut titles = vec!["Tests", "🔧 Bug Fixes", "Documentation", "Build System"];
        titles.sort_by(|a, b| policy.compare_groups(a, b));
        assert_eq!(
            titles,
            vec!["🔧 Bug Fixes", "Build System", "Documentation", "Tests"]
        );
        assert_eq!(
            policy.compare_groups("Documentation", "Other Commits"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_unscoped_commits_first() {
        let mut commits = vec![
            scoped(Some("menu"), "a"),
            scoped(None, "b"),
            scoped(Some("alert"), "c"),
            scoped(Some(""), "d"),
            scoped(None, "e"),
        ];
        commits.sort_by(OrderingPolicy::compare_commits);

        let subjects: Vec<_> = commits
            .iter()
            .map(|c| c.commit.subject.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(subjects, vec!["b", "d", "e", "c", "a"]);
    }

    #[test]
    fn test_compare_notes() {
        let mut notes = vec![
            Note {
                title: "BREAKING CHANGES".to_string(),
                text: "z".to_string(),
                scope: Some("b".to_string()),
            },
            Note {
                title: "BREAKING CHANGES".to_string(),
                text: "y".to_string(),
                scope: Some("a".to_string()),
            },
            Note {
                title: "BREAKING CHANGES".to_string(),
                text: "x".to_string(),
                scope: None,
            },
        ];
        notes.sort_by(OrderingPolicy::compare_notes);
        let texts: Vec<_> = notes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "y", "z"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn title() -> impl Strategy<Value = String> {
            prop_oneof![
                proptest::sample::select(herald_core::config::GROUP_ORDER.to_vec())
                    .prop_map(str::to_string),
                "[A-Za-z🔨🚀 ]{0,12}",
            ]
        }

        proptest! {
            #[test]
            fn compare_groups_is_antisymmetric(a in title(), b in title()) {
                let policy = OrderingPolicy::default();
                prop_assert_eq!(policy.compare_groups(&a, &b), policy.compare_groups(&b, &a).reverse());
            }

            #[test]
            fn compare_groups_is_transitive(a in title(), b in title(), c in title()) {
                let policy = OrderingPolicy::default();
                if policy.compare_groups(&a, &b) != Ordering::Greater
                    && policy.compare_groups(&b, &c) != Ordering::Greater
                {
                    prop_assert_ne!(policy.compare_groups(&a, &c), Ordering::Greater);
                }
            }

            #[test]
            fn unlisted_titles_sort_lexicographically(a in "[a-z]{1,10}", b in "[a-z]{1,10}") {
                let policy = OrderingPolicy::default();
                prop_assert_eq!(policy.compare_groups(&a, &b), a.cmp(&b));
            }
        }
    }
}
