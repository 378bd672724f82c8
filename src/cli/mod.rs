pub mod commands;
pub mod input;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqpair",
    version,
    about = "Pairwise sequence alignment and seed-and-extend search",
    long_about = "Seqpair aligns two sequences globally (Needleman-Wunsch) or locally \
                  (Smith-Waterman), or searches a query against a subject by seeding on \
                  shared k-mers and extending each seed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Threads for seed extension when no cap is configured (0 = all available)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub threads: usize,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two sequences end to end (Needleman-Wunsch)
    Global(commands::global::GlobalArgs),

    /// Align the best matching regions of two sequences (Smith-Waterman)
    Local(commands::local::LocalArgs),

    /// Seed on shared k-mers and extend every seed
    Seed(commands::seed::SeedArgs),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
