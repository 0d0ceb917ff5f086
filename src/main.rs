//! `soup-register` — list the npm dependencies of a project tree as a SOUP register.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Find every `package.json` below the project path ([`detector`]).
//! 4. Read the direct dependencies of each manifest ([`analyzer`]).
//! 5. Look each dependency up in the registry and on GitHub ([`lookup`], [`registry`],
//!    [`language`]).
//! 6. Write one markdown table per manifest to `SOUP.md` ([`report::markdown`]).
//! 7. Print a summary ([`report::terminal`]). Any fatal error exits non-zero.

mod analyzer;
mod cli;
mod config;
mod detector;
mod generate;
mod language;
mod lookup;
mod models;
mod registry;
mod report;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::load_config;
use lookup::SoupLookup;
use registry::github::GithubHost;
use registry::npm::NpmRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve project path
    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let mut config = load_config(&path, cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.report.output = output;
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.registry.timeout_secs))
        .build()?;

    let lookup = SoupLookup::new(
        Arc::new(NpmRegistry::new(client.clone(), &config.registry.url)),
        Arc::new(GithubHost::new(client, &config.hosting.api_url, cli.token)),
        config.report.clone(),
    );

    let (soup_path, register) = generate::generate(
        &path,
        &config.report.output,
        &config.scan,
        &lookup,
        cli.quiet,
    )
    .await?;

    report::terminal::render(&register, &soup_path, cli.verbose, cli.quiet);

    Ok(())
}
