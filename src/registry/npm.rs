use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::PackageRegistry;

const USER_AGENT: &str = concat!("soup-register/", env!("CARGO_PKG_VERSION"));

/// The npm registry (or any registry speaking its packument format).
pub struct NpmRegistry {
    client: Client,
    base_url: String,
}

impl NpmRegistry {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn package_url(&self, name: &str) -> String {
        // Scoped packages need URL encoding: @scope/pkg → %40scope%2Fpkg
        let encoded_name = name.replace('@', "%40").replace('/', "%2F");
        format!("{}/{}", self.base_url, encoded_name)
    }
}

#[async_trait]
impl PackageRegistry for NpmRegistry {
    async fn fetch_package(&self, name: &str) -> Result<Option<Value>> {
        let url = self.package_url(name);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let data: Value = response
            .json()
            .await
            .with_context(|| format!("Invalid JSON from {}", url))?;
        Ok(Some(data))
    }
}

/// Reduce a declared range to the exact version key used in the `versions` map:
/// every character other than ASCII digits, `.` and `-` is dropped.
pub fn version_key(range: &str) -> String {
    range
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Homepage and repository URL of one published version.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionInfo {
    pub homepage: Option<String>,
    pub repository_url: Option<String>,
}

/// Outcome of looking a version key up in a package document.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionLookup {
    Found(VersionInfo),
    /// The document has a `versions` object, but not this key.
    Missing,
    /// The document has no `versions` object.
    NoVersions,
}

/// Find the metadata of exactly `key` in a packument.
pub fn find_version(document: &Value, key: &str) -> VersionLookup {
    let Some(versions) = document.get("versions").and_then(Value::as_object) else {
        return VersionLookup::NoVersions;
    };
    let Some(info) = versions.get(key) else {
        return VersionLookup::Missing;
    };

    let homepage = non_empty_str(info.get("homepage"));
    // `repository` is usually `{ "type": "git", "url": ... }` but may be a bare string
    let repository_url = match info.get("repository") {
        Some(Value::String(url)) => Some(url.clone()).filter(|u| !u.is_empty()),
        Some(repo) => non_empty_str(repo.get("url")),
        None => None,
    };

    VersionLookup::Found(VersionInfo {
        homepage,
        repository_url,
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
