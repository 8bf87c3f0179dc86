//! Reference grouping
//!
//! Does what a host framework does with [`WriterOptions`]: transform every
//! commit, group the survivors by title and sort everything with the preset's
//! comparators. Sorting is stable, so equal commits keep their input order.

use serde::Serialize;
use tracing::{debug, instrument};

use herald_core::{ClassifiedCommit, Commit, Context, Note};

use crate::writer::WriterOptions;

/// A changelog section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitGroup {
    /// Section title
    pub title: String,
    /// Commits in this section
    pub commits: Vec<ClassifiedCommit>,
}

/// Breaking-change notes sharing a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteGroup {
    /// Note title
    pub title: String,
    /// Notes under this title
    pub notes: Vec<Note>,
}

/// Grouped and sorted changelog content for one release
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Changelog {
    /// Sections in display order
    pub commit_groups: Vec<CommitGroup>,
    /// Breaking-change notes in display order
    pub note_groups: Vec<NoteGroup>,
}

impl Changelog {
    /// Check if there is anything to render
    pub fn is_empty(&self) -> bool {
        self.commit_groups.is_empty() && self.note_groups.is_empty()
    }

    /// Titles of the sections, in display order
    pub fn titles(&self) -> Vec<&str> {
        self.commit_groups.iter().map(|g| g.title.as_str()).collect()
    }
}

/// Transform, group and sort `commits` with `options`
pub fn group_commits(options: &WriterOptions, commits: &[Commit], context: &Context) -> Changelog {
    options.group(commits, context)
}

impl WriterOptions {
    /// Transform, group and sort `commits`
    #[instrument(skip(self, commits, context), fields(commit_count = commits.len()))]
    pub fn group(&self, commits: &[Commit], context: &Context) -> Changelog {
        let mut commit_groups: Vec<CommitGroup> = Vec::new();
        let mut note_groups: Vec<NoteGroup> = Vec::new();
        let mut discarded = 0usize;

        for commit in commits {
            let Some(classified) = self.transform(commit, context) else {
                discarded += 1;
                continue;
            };

            for note in &classified.commit.notes {
                match note_groups.iter_mut().find(|g| g.title == note.title) {
                    Some(group) => group.notes.push(note.clone()),
                    None => note_groups.push(NoteGroup {
                        title: note.title.clone(),
                        notes: vec![note.clone()],
                    }),
                }
            }

            match commit_groups.iter_mut().find(|g| g.title == classified.title) {
                Some(group) => group.commits.push(classified),
                None => commit_groups.push(CommitGroup {
                    title: classified.title.clone(),
                    commits: vec![classified],
                }),
            }
        }

        commit_groups.sort_by(|a, b| self.compare_groups(&a.title, &b.title));
        for group in &mut commit_groups {
            group.commits.sort_by(|a, b| self.compare_commits(a, b));
        }

        note_groups.sort_by(|a, b| a.title.cmp(&b.title));
        for group in &mut note_groups {
            group.notes.sort_by(|a, b| self.compare_notes(a, b));
        }

        debug!(
            groups = commit_groups.len(),
            note_groups = note_groups.len(),
            discarded,
            "commits grouped"
        );

        Changelog {
            commit_groups,
            note_groups,
        }
    }
}
