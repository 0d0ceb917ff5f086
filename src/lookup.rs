use std::sync::Arc;

use crate::config::ReportConfig;
use crate::language::classifier::classify;
use crate::models::{Languages, Site, SoupEntry, Unresolved};
use crate::registry::npm::{find_version, version_key, VersionLookup};
use crate::registry::{PackageRegistry, RepositoryHost};

/// Resolves one declared dependency into a [`SoupEntry`].
///
/// Cheap to clone; clones share the same registry and hosting clients.
#[derive(Clone)]
pub struct SoupLookup {
    registry: Arc<dyn PackageRegistry>,
    host: Arc<dyn RepositoryHost>,
    report: ReportConfig,
}

impl SoupLookup {
    pub fn new(
        registry: Arc<dyn PackageRegistry>,
        host: Arc<dyn RepositoryHost>,
        report: ReportConfig,
    ) -> Self {
        Self {
            registry,
            host,
            report,
        }
    }

    /// Look up `name` at the exact version named by `range`.
    ///
    /// Never fails; anything that cannot be resolved is recorded as
    /// [`Unresolved`] in the entry.
    pub async fn lookup(&self, name: &str, range: &str) -> SoupEntry {
        let (site, languages) = self.resolve(name, range).await;

        SoupEntry {
            name: name.to_string(),
            languages,
            site,
            version: range.to_string(),
            risk_level: self.report.risk_level.clone(),
            verification: self.report.verification.clone(),
        }
    }

    async fn resolve(&self, name: &str, range: &str) -> (Site, Languages) {
        let document = match self.registry.fetch_package(name).await {
            Ok(Some(doc)) => doc,
            Ok(None) => return unresolved(Unresolved::NotInRegistry),
            Err(e) => return unresolved(Unresolved::RegistryUnavailable(format!("{:#}", e))),
        };

        let key = version_key(range);
        let info = match find_version(&document, &key) {
            VersionLookup::Found(info) => info,
            VersionLookup::Missing => return unresolved(Unresolved::VersionNotPublished(key)),
            VersionLookup::NoVersions => return unresolved(Unresolved::NoVersions),
        };

        let languages = match info.repository_url.as_deref() {
            Some(url) if url.contains("github") => classify(self.host.as_ref(), url).await,
            _ => Languages::Unknown(Unresolved::NotGithub),
        };

        let site = match (info.homepage, info.repository_url) {
            (Some(homepage), _) => Site::Homepage(homepage),
            (None, Some(repo)) => Site::Repository(repo),
            (None, None) => Site::Unknown(Unresolved::NoWebsite),
        };

        (site, languages)
    }
}

fn unresolved(reason: Unresolved) -> (Site, Languages) {
    (Site::Unknown(reason.clone()), Languages::Unknown(reason))
}
