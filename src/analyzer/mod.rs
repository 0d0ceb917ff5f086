use std::path::Path;

use anyhow::Result;

use crate::models::Manifest;

pub mod node;

/// Reads one manifest file into its declared direct dependencies.
pub trait Analyzer {
    /// `Ok(None)` when the manifest declares no dependency section at all.
    fn read(&self, path: &Path) -> Result<Option<Manifest>>;
}
