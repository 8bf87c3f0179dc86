//! Herald Changelog - Changelog preset for conventional commits
//!
//! This crate classifies parsed commits into changelog sections, rewrites
//! issue and mention references into links, and supplies the comparators and
//! template fragments a changelog writer needs.

pub mod classifier;
pub mod grouping;
pub mod linkify;
pub mod ordering;
pub mod references;
pub mod scopes;
pub mod templates;
pub mod transform;
pub mod writer;

pub use classifier::Classifier;
pub use grouping::{group_commits, Changelog, CommitGroup, NoteGroup};
pub use linkify::linkify;
pub use ordering::OrderingPolicy;
pub use references::dedupe;
pub use scopes::{LabsDirectory, NoScopes, ScopeTaxonomy};
pub use templates::TemplateSet;
pub use transform::CommitTransform;
pub use writer::{WriterOptions, GROUP_BY};
