mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stockgrid")]
#[command(about = "Browse warehouse stock by category and watch what runs low", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $STOCKGRID_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Catalog source, overriding config.toml
    #[arg(long, global = true)]
    pub source: Option<SourceArg>,

    /// JSON catalog file; implies `--source file` when no source is given
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Base URL of the HTTP catalog
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Number of times each category is replicated (1-50)
    #[arg(long, global = true)]
    pub rounds: Option<u32>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
