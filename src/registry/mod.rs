//! Async HTTP clients for the package registry and the source-hosting API.
//!
//! The lookup pipeline only sees the [`PackageRegistry`] and [`RepositoryHost`]
//! traits; [`npm::NpmRegistry`] and [`github::GithubHost`] are the production
//! implementations, tests substitute in-memory fakes.

pub mod github;
pub mod npm;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Source of package metadata documents.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Fetch the full metadata document of `name`.
    ///
    /// Returns `Ok(None)` when the registry does not answer with a success status,
    /// and `Err` on network or decoding failures.
    async fn fetch_package(&self, name: &str) -> Result<Option<Value>>;
}

/// Answer of the per-repository languages endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum LanguagesResponse {
    /// Language name → byte count, in the order the API listed them.
    Bytes(Vec<(String, u64)>),
    /// Any non-success status code.
    Status(u16),
}

/// Source-hosting service that knows the language breakdown of a repository.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    async fn fetch_languages(&self, owner: &str, repo: &str) -> Result<LanguagesResponse>;
}
