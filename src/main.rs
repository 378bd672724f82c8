use anyhow::Context;
use clap::Parser;
use colored::*;
use seqpair::cli::{Cli, Commands};
use seqpair_core::parallel::configure_thread_pool;
use seqpair_core::{load_config, Config, SeqpairError};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

/// RUST_LOG wins, then SEQPAIR_LOG, then a level picked by `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let log_level = std::env::var("SEQPAIR_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();
}

fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<SeqpairError>() {
        Some(SeqpairError::Configuration(_)) | Some(SeqpairError::InvalidParameter(_)) => 2,
        Some(SeqpairError::Io(_)) => 3,
        Some(SeqpairError::Parse(_)) | Some(SeqpairError::MalformedMatrix { .. }) => 4,
        Some(SeqpairError::ExtensionFailed { .. }) => 5,
        _ => 1,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    configure_thread_pool(cli.threads)?;
    tracing::debug!(threads = rayon::current_num_threads(), "configured thread pool");

    let config = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            load_config(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::default(),
    };

    match cli.command {
        Commands::Global(args) => seqpair::cli::commands::global::run(args, &config),
        Commands::Local(args) => seqpair::cli::commands::local::run(args, &config),
        Commands::Seed(args) => seqpair::cli::commands::seed::run(args, &config, cli.threads),
    }
}
