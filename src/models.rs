use std::collections::BTreeMap;

/// A parsed `package.json` that declares a `dependencies` section.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub name: String,
    /// Dependency name → declared version range.
    pub dependencies: BTreeMap<String, String>,
}

/// Why a lookup could not produce a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Unresolved {
    /// The registry request failed or the package document was unreadable.
    RegistryUnavailable(String),
    /// The registry does not know the package.
    NotInRegistry,
    /// The registry answered, but without a `versions` object.
    NoVersions,
    /// No published version matches the declared range exactly.
    VersionNotPublished(String),
    /// The published version lists neither a homepage nor a repository.
    NoWebsite,
    /// The repository is not hosted on GitHub (or no repository is listed).
    NotGithub,
    /// The repository URL has no owner/repo pair.
    MalformedRepoUrl(String),
    /// The hosting API answered with a non-success status.
    HostingStatus(u16),
    /// The hosting API request failed.
    HostingUnavailable(String),
}

impl std::fmt::Display for Unresolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unresolved::RegistryUnavailable(e) => write!(f, "registry unavailable: {}", e),
            Unresolved::NotInRegistry => write!(f, "package not in registry"),
            Unresolved::NoVersions => write!(f, "registry lists no versions"),
            Unresolved::VersionNotPublished(v) => write!(f, "version {} not published", v),
            Unresolved::NoWebsite => write!(f, "no homepage or repository"),
            Unresolved::NotGithub => write!(f, "repository not on GitHub"),
            Unresolved::MalformedRepoUrl(url) => write!(f, "malformed repository URL {}", url),
            Unresolved::HostingStatus(code) => write!(f, "languages API returned {}", code),
            Unresolved::HostingUnavailable(e) => write!(f, "languages API unavailable: {}", e),
        }
    }
}

/// Outcome of the language classification for one dependency.
#[derive(Debug, Clone, PartialEq)]
pub enum Languages {
    /// Languages above the share threshold, in the order the API listed them.
    Classified(Vec<String>),
    Unknown(Unresolved),
}

impl Languages {
    pub fn is_classified(&self) -> bool {
        matches!(self, Languages::Classified(_))
    }
}

impl std::fmt::Display for Languages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Languages::Classified(names) => write!(f, "{}", names.join(", ")),
            Languages::Unknown(_) => write!(f, "unknown"),
        }
    }
}

/// Outcome of the website resolution for one dependency.
#[derive(Debug, Clone, PartialEq)]
pub enum Site {
    Homepage(String),
    Repository(String),
    Unknown(Unresolved),
}

impl Site {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Site::Unknown(_))
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Site::Homepage(url) | Site::Repository(url) => write!(f, "{}", url),
            Site::Unknown(Unresolved::VersionNotPublished(_)) => write!(f, "private repo"),
            Site::Unknown(_) => write!(f, "unknown"),
        }
    }
}

/// One row of the SOUP register.
#[derive(Debug, Clone, PartialEq)]
pub struct SoupEntry {
    pub name: String,
    pub languages: Languages,
    pub site: Site,
    /// The range as declared in the manifest, not the resolved version.
    pub version: String,
    pub risk_level: String,
    pub verification: String,
}

impl SoupEntry {
    /// Reasons this entry degraded, in column order.
    pub fn unresolved(&self) -> Vec<&Unresolved> {
        let mut reasons = Vec::new();
        if let Languages::Unknown(reason) = &self.languages {
            reasons.push(reason);
        }
        if let Site::Unknown(reason) = &self.site {
            reasons.push(reason);
        }
        reasons
    }
}

/// The entries of one manifest, ready to be rendered.
#[derive(Debug, Clone)]
pub struct ManifestSoup {
    pub manifest: String,
    pub entries: Vec<SoupEntry>,
}
