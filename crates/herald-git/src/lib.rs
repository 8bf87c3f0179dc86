//! Herald Git - Repository context for the Herald changelog preset
//!
//! Opens the repository a changelog is generated for and derives the
//! host/owner/repository context from its remote URL.

mod remote;
mod repository;

pub use remote::parse_remote_url;
pub use repository::{GitRepo, Result};
