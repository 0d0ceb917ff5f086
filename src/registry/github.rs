use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::{Map, Value};

use super::{LanguagesResponse, RepositoryHost};

const USER_AGENT: &str = concat!("soup-register/", env!("CARGO_PKG_VERSION"));

/// The GitHub REST API, optionally authenticated with a bearer token.
pub struct GithubHost {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GithubHost {
    pub fn new(client: Client, api_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    fn languages_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/languages", self.api_url, owner, repo)
    }

    fn request(&self, owner: &str, repo: &str) -> RequestBuilder {
        let request = self
            .client
            .get(self.languages_url(owner, repo))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl RepositoryHost for GithubHost {
    async fn fetch_languages(&self, owner: &str, repo: &str) -> Result<LanguagesResponse> {
        let url = self.languages_url(owner, repo);

        let response = self
            .request(owner, repo)
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Ok(LanguagesResponse::Status(status.as_u16()));
        }

        let data: Map<String, Value> = response
            .json()
            .await
            .with_context(|| format!("Invalid JSON from {}", url))?;
        Ok(LanguagesResponse::Bytes(language_bytes(data)))
    }
}

/// Keep the API's key order; non-numeric values are ignored.
fn language_bytes(data: Map<String, Value>) -> Vec<(String, u64)> {
    data.into_iter()
        .filter_map(|(lang, bytes)| bytes.as_u64().map(|b| (lang, b)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_languages_url() {
        let host = GithubHost::new(Client::new(), "https://api.github.com/", None);
        assert_eq!(
            host.languages_url("lodash", "lodash"),
            "https://api.github.com/repos/lodash/lodash/languages"
        );
    }

    #[test]
    fn test_token_is_sent_as_bearer() {
        let host = GithubHost::new(
            Client::new(),
            "https://api.github.com",
            Some("ghp_abc".into()),
        );
        let request = host.request("lodash", "lodash").build().unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://api.github.com/repos/lodash/lodash/languages"
        );
        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            "Bearer ghp_abc"
        );
        assert_eq!(
            request.headers().get("Accept").unwrap(),
            "application/vnd.github+json"
        );
    }

    #[test]
    fn test_no_token_sends_no_authorization() {
        let host = GithubHost::new(Client::new(), "https://api.github.com", None);
        let request = host.request("lodash", "lodash").build().unwrap();

        assert!(request.headers().get("Authorization").is_none());
        assert!(request.headers().get("User-Agent").is_some());
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let host = GithubHost::new(Client::new(), "https://api.github.com", Some(String::new()));
        assert!(host.token.is_none());
    }

    #[test]
    fn test_language_bytes_keeps_response_order() {
        let data = json!({ "TypeScript": 9000, "JavaScript": 700, "Shell": 12 });
        let Value::Object(map) = data else { unreachable!() };
        assert_eq!(
            language_bytes(map),
            vec![
                ("TypeScript".to_string(), 9000),
                ("JavaScript".to_string(), 700),
                ("Shell".to_string(), 12),
            ]
        );
    }
}
