use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analyzer::node::NodeAnalyzer;
use crate::analyzer::Analyzer;
use crate::config::ScanConfig;
use crate::detector::find_manifests;
use crate::lookup::SoupLookup;
use crate::models::{Manifest, ManifestSoup};
use crate::report::markdown;

/// Locate and read every manifest below `root`, dropping those without dependencies.
pub fn read_manifests(root: &Path, scan: &ScanConfig) -> Result<Vec<Manifest>> {
    let analyzer = NodeAnalyzer::new();
    let mut manifests = Vec::new();

    for path in find_manifests(root, scan)? {
        if let Some(manifest) = analyzer.read(&path)? {
            manifests.push(manifest);
        }
    }

    Ok(manifests)
}

/// Resolve the dependencies of each manifest.
///
/// Lookups of one manifest run concurrently; manifests are processed one after
/// the other, in order.
pub async fn collect_soup(
    manifests: &[Manifest],
    lookup: &SoupLookup,
    pb: Option<&ProgressBar>,
) -> Vec<ManifestSoup> {
    let mut register = Vec::with_capacity(manifests.len());

    for manifest in manifests {
        if let Some(pb) = pb {
            pb.set_message(manifest.name.clone());
        }

        let futures: Vec<_> = manifest
            .dependencies
            .iter()
            .map(|(name, range)| async move {
                let entry = lookup.lookup(name, range).await;
                if let Some(pb) = pb {
                    pb.inc(1);
                }
                entry
            })
            .collect();

        register.push(ManifestSoup {
            manifest: manifest.name.clone(),
            entries: join_all(futures).await,
        });
    }

    register
}

/// Run the whole pipeline and write the register to `root/output`.
///
/// Nothing is written unless every manifest was read and resolved.
pub async fn generate(
    root: &Path,
    output: &str,
    scan: &ScanConfig,
    lookup: &SoupLookup,
    quiet: bool,
) -> Result<(PathBuf, Vec<ManifestSoup>)> {
    let soup_path = root.join(output);

    if !quiet {
        eprintln!(
            "  {} Starting SOUP generation in {}",
            "→".cyan(),
            root.display()
        );
    }

    let manifests = read_manifests(root, scan)?;
    let dependency_count: usize = manifests.iter().map(|m| m.dependencies.len()).sum();

    if manifests.is_empty() {
        eprintln!(
            "  {} No {} with dependencies found in {}",
            "!".yellow(),
            scan.manifest,
            root.display()
        );
    } else if !quiet {
        eprintln!(
            "  {} {} manifests, {} dependencies",
            "→".cyan(),
            manifests.len(),
            dependency_count
        );
    }

    let pb = if !quiet {
        let pb = ProgressBar::new(dependency_count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let register = collect_soup(&manifests, lookup, pb.as_ref()).await;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }
    if !quiet {
        eprintln!("  {} SOUP data retrieved", "✓".green());
    }

    let contents = markdown::render(&register);
    std::fs::write(&soup_path, contents)
        .with_context(|| format!("Failed to write SOUP register to {}", soup_path.display()))?;

    if !quiet {
        eprintln!(
            "  {} SOUP register written to {}",
            "✓".green(),
            soup_path.display()
        );
        eprintln!("  {} SOUP generation finished", "✓".green());
    }

    Ok((soup_path, register))
}
