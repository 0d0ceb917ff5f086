use crate::language::repo_url::parse_repo_url;
use crate::models::{Languages, Unresolved};
use crate::registry::{LanguagesResponse, RepositoryHost};

/// Classify the implementation languages of the repository at `repo_url`.
///
/// Never fails: a malformed URL, a transport error or a non-200 answer all
/// yield [`Languages::Unknown`] with the reason attached.
pub async fn classify(host: &dyn RepositoryHost, repo_url: &str) -> Languages {
    let Some(slug) = parse_repo_url(repo_url) else {
        return Languages::Unknown(Unresolved::MalformedRepoUrl(repo_url.to_string()));
    };

    match host.fetch_languages(&slug.owner, &slug.repo).await {
        Ok(LanguagesResponse::Bytes(bytes)) => Languages::Classified(dominant_languages(&bytes)),
        Ok(LanguagesResponse::Status(code)) => Languages::Unknown(Unresolved::HostingStatus(code)),
        Err(e) => Languages::Unknown(Unresolved::HostingUnavailable(format!("{:#}", e))),
    }
}

/// Languages whose byte count is strictly greater than 10% of the total, in input
/// order.
pub fn dominant_languages(bytes: &[(String, u64)]) -> Vec<String> {
    let total: u128 = bytes.iter().map(|(_, b)| u128::from(*b)).sum();

    bytes
        .iter()
        .filter(|(_, b)| u128::from(*b) * 10 > total)
        .map(|(lang, _)| lang.clone())
        .collect()
}
