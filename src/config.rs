use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.soup-register/config.toml`.
///
/// Every section and key is optional; missing values fall back to the defaults
/// below.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub registry: RegistryConfig,
    pub hosting: HostingConfig,
    pub report: ReportConfig,
}

/// Which files are treated as manifests and which directories are skipped.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Exact file name of a manifest.
    pub manifest: String,
    /// Directories whose name contains any of these strings are not descended into.
    /// Dot-directories are always skipped.
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            manifest: "package.json".to_string(),
            exclude: vec!["node_modules".to_string()],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base URL of the npm registry.
    pub url: String,
    /// Per-request timeout applied to registry and hosting calls.
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            url: "https://registry.npmjs.org".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HostingConfig {
    /// Base URL of the GitHub REST API.
    pub api_url: String,
}

impl Default for HostingConfig {
    fn default() -> Self {
        HostingConfig {
            api_url: "https://api.github.com".to_string(),
        }
    }
}

/// Output file and the placeholder texts written into every row.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// File name of the register, relative to the scanned root.
    pub output: String,
    pub risk_level: String,
    pub verification: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output: "SOUP.md".to_string(),
            risk_level: "Low".to_string(),
            verification: "SOUP analysed and accepted by developer".to_string(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.soup-register/config.toml`
/// 3. `~/.config/soup-register/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".soup-register").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("soup-register")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}
