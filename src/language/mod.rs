//! Language breakdown of a dependency's source repository.
//!
//! - [`repo_url`] — turns a registry `repository.url` into an owner/repo pair.
//! - [`classifier`] — queries the hosting API and keeps the dominant languages.

pub mod classifier;
pub mod repo_url;
