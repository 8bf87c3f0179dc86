//! Herald Core - Core library for the Herald changelog preset
//!
//! This crate provides the commit and context records exchanged with the host
//! changelog framework, the preset configuration, and error handling.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, LabsConfig, PresetConfig, TemplatesConfig};
pub use error::{HeraldError, Result};
pub use types::{ClassifiedCommit, Commit, Context, Note, Reference};
