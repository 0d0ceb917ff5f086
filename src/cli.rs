use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "soup-register",
    about = "Generate a SOUP register from the npm dependencies of a project tree",
    version
)]
pub struct Cli {
    /// Project path to scan; the register is written here
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// GitHub token used for the languages API (unauthenticated when absent)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Config file [default: ./.soup-register/config.toml, fallback ~/.config/soup-register/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file name, relative to the project path [default: SOUP.md]
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,

    /// Report every dependency whose lookup degraded
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}
