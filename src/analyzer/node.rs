use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::Manifest;

/// The subset of `package.json` the register needs.
#[derive(Debug, Deserialize)]
struct PackageJson {
    name: Option<String>,
    /// Only direct runtime dependencies; `devDependencies` are not SOUP.
    dependencies: Option<BTreeMap<String, String>>,
}

pub struct NodeAnalyzer;

impl NodeAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for NodeAnalyzer {
    fn read(&self, path: &Path) -> Result<Option<Manifest>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_package_json(&content, path)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

fn parse_package_json(content: &str, path: &Path) -> Result<Option<Manifest>> {
    let pkg: PackageJson = serde_json::from_str(content)?;

    let Some(dependencies) = pkg.dependencies else {
        return Ok(None);
    };

    // Unnamed packages are listed under their directory name
    let name = pkg.name.unwrap_or_else(|| {
        path.parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string())
    });

    Ok(Some(Manifest { name, dependencies }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_package_json() {
        let json = r#"{
  "name": "my-app",
  "dependencies": {
    "express": "^4.18.2",
    "lodash": "~4.17.21"
  },
  "devDependencies": {
    "jest": "^29.0.0"
  }
}"#;
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "{}", json).unwrap();
        let manifest = NodeAnalyzer::new().read(f.path()).unwrap().unwrap();
        assert_eq!(manifest.name, "my-app");
        assert_eq!(manifest.dependencies.len(), 2);
        assert_eq!(manifest.dependencies["express"], "^4.18.2");
        assert_eq!(manifest.dependencies["lodash"], "~4.17.21");
    }

    #[test]
    fn test_missing_dependencies_is_skipped() {
        let json = r#"{ "name": "tooling", "devDependencies": { "jest": "^29.0.0" } }"#;
        let parsed = parse_package_json(json, Path::new("/repo/tooling/package.json")).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_empty_dependencies_is_kept() {
        let json = r#"{ "name": "empty", "dependencies": {} }"#;
        let parsed = parse_package_json(json, Path::new("/repo/package.json"))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.name, "empty");
        assert!(parsed.dependencies.is_empty());
    }

    #[test]
    fn test_unnamed_package_uses_directory_name() {
        let json = r#"{ "dependencies": { "react": "18.2.0" } }"#;
        let parsed = parse_package_json(json, Path::new("/repo/apps/web/package.json"))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.name, "web");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "{{ \"name\": \"broken\", ").unwrap();
        let err = NodeAnalyzer::new().read(f.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
