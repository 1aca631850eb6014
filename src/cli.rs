use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "commit-scopes",
    version,
    about = "Discover .commit scopes and their configuration across a project tree",
    long_about = "commit-scopes walks a directory tree and lists every location that opts \
into tool behavior via a .commit marker directory, together with the settings \
resolved from its config.yml."
)]
pub struct Cli {
    /// Root directory to search
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Follow symbolic links during traversal
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Maximum traversal depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Strict mode: exit with an error when any scope's config fails to load
    #[arg(short, long)]
    pub strict: bool,

    /// Show each scope's resolved configuration
    #[arg(short, long)]
    pub verbose: bool,
}
