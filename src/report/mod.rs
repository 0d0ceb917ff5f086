//! Report renderers for the SOUP register.
//!
//! - [`markdown`] — the register itself: one pipe table per manifest.
//! - [`terminal`] — per-manifest resolution summary; respects `--verbose` / `--quiet`.

pub mod markdown;
pub mod terminal;
