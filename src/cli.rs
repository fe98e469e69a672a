use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "rtg-lists", about = "Reconcile list snapshots by stable identity")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the operations turning OLD into NEW
    Diff {
        old: PathBuf,
        new: PathBuf,
        /// Replay the operations against OLD and fail unless they reproduce NEW
        #[arg(long)]
        verify: bool,
    },
    /// Validate a snapshot file
    Check { snapshot: PathBuf },
}
