//! Writer options handed to the host framework
//!
//! Bundles the per-commit transform, the grouping key, the comparators and the
//! template fragments. Rendering stays with the host.

use std::cmp::Ordering;
use std::path::Path;

use tracing::{info, instrument};

use herald_core::error::TemplateError;
use herald_core::{ClassifiedCommit, Commit, Context, Note, PresetConfig};

use crate::classifier::Classifier;
use crate::ordering::OrderingPolicy;
use crate::scopes::ScopeTaxonomy;
use crate::templates::TemplateSet;
use crate::transform::CommitTransform;

/// Field of a classified commit that commits are grouped by
pub const GROUP_BY: &str = "title";

/// Everything the host needs to write a changelog
pub struct WriterOptions {
    transform: CommitTransform,
    ordering: OrderingPolicy,
    templates: TemplateSet,
}

impl WriterOptions {
    /// Assemble writer options from already loaded parts
    pub fn new(transform: CommitTransform, ordering: OrderingPolicy, templates: TemplateSet) -> Self {
        Self {
            transform,
            ordering,
            templates,
        }
    }

    /// Load the templates in `templates_dir` and build writer options for a preset.
    ///
    /// Fails if any template fragment cannot be read.
    #[instrument(skip(config, taxonomy), fields(templates_dir = %templates_dir.display()))]
    pub async fn create<T: ScopeTaxonomy + 'static>(
        config: &PresetConfig,
        taxonomy: T,
        templates_dir: &Path,
    ) -> Result<Self, TemplateError> {
        let templates = TemplateSet::load(templates_dir).await?;
        let classifier = Classifier::new(config.clone()).with_taxonomy(taxonomy);

        info!(
            always_shown = config.always_shown.len(),
            breaking_only = config.breaking_only.len(),
            groups = config.group_order.len(),
            "writer options ready"
        );
        Ok(Self::new(
            CommitTransform::new(classifier),
            OrderingPolicy::from_preset(config),
            templates,
        ))
    }

    /// Transform one commit; `None` means it is left out of the changelog
    pub fn transform(&self, commit: &Commit, context: &Context) -> Option<ClassifiedCommit> {
        self.transform.apply(commit, context)
    }

    /// Field commits are grouped by
    pub fn group_by(&self) -> &'static str {
        GROUP_BY
    }

    /// Order of sections
    pub fn compare_groups(&self, a: &str, b: &str) -> Ordering {
        self.ordering.compare_groups(a, b)
    }

    /// Order of commits within a section
    pub fn compare_commits(&self, a: &ClassifiedCommit, b: &ClassifiedCommit) -> Ordering {
        OrderingPolicy::compare_commits(a, b)
    }

    /// Order of breaking-change notes
    pub fn compare_notes(&self, a: &Note, b: &Note) -> Ordering {
        OrderingPolicy::compare_notes(a, b)
    }

    /// Template fragments
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }
}
