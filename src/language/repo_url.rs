/// Owner and name of a hosted repository.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

/// Extract the owner/repo pair from a repository URL.
///
/// A trailing `.git` is dropped, then the last two `/`-separated segments are
/// taken as owner and repo. Returns `None` when there are fewer than two
/// segments or either one is empty.
pub fn parse_repo_url(url: &str) -> Option<RepoSlug> {
    let trimmed = url.strip_suffix(".git").unwrap_or(url);
    let mut segments = trimmed.rsplit('/');

    let repo = segments.next()?;
    let owner = segments.next()?;
    if owner.is_empty() || repo.is_empty() {
        return None;
    }

    Some(RepoSlug {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(owner: &str, repo: &str) -> Option<RepoSlug> {
        Some(RepoSlug {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    #[test]
    fn test_common_registry_forms() {
        assert_eq!(
            parse_repo_url("git+https://github.com/lodash/lodash.git"),
            slug("lodash", "lodash")
        );
        assert_eq!(
            parse_repo_url("https://github.com/facebook/react"),
            slug("facebook", "react")
        );
        assert_eq!(
            parse_repo_url("git://github.com/substack/node-mkdirp.git"),
            slug("substack", "node-mkdirp")
        );
    }

    #[test]
    fn test_only_trailing_git_is_stripped() {
        assert_eq!(
            parse_repo_url("https://github.com/isaacs/node.gitignore-parser"),
            slug("isaacs", "node.gitignore-parser")
        );
    }

    #[test]
    fn test_malformed_urls() {
        assert_eq!(parse_repo_url("github"), None);
        assert_eq!(parse_repo_url(""), None);
        assert_eq!(parse_repo_url("https://github.com/owner/"), None);
    }
}
