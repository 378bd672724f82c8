use super::{build_local_aligner, ScoringArgs};
use crate::cli::input::read_sequence;
use crate::cli::output::print_extensions;
use crate::cli::OutputFormat;
use clap::Args;
use seqpair_bio::seed::{SeedExtendConfig, SeedExtender};
use seqpair_core::{Config, ExtensionStrategyName};

#[derive(Args)]
pub struct SeedArgs {
    /// Sequence to search in, or @FILE
    pub subject: String,

    /// Sequence to search for, or @FILE
    pub query: String,

    /// Seed length
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Extend seeds by local alignment instead of exact matching
    #[arg(long)]
    pub local: bool,

    /// Symbols taken on each side of a seed for local extension
    #[arg(long)]
    pub flank: Option<usize>,

    /// Substitution matrix for local extension
    #[arg(long, value_name = "NAME|FILE")]
    pub matrix: Option<String>,

    /// Extension tasks allowed to run at once (0 = all available cores)
    #[arg(long)]
    pub max_in_flight: Option<usize>,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Explicit flag, then a non-zero `[seed] max_in_flight`, then `-j`.
fn resolve_max_in_flight(flag: Option<usize>, configured: usize, threads: usize) -> usize {
    match (flag, configured) {
        (Some(cap), _) => cap,
        (None, 0) => threads,
        (None, cap) => cap,
    }
}

pub fn run(args: SeedArgs, config: &Config, threads: usize) -> anyhow::Result<()> {
    let subject = read_sequence(&args.subject)?;
    let query = read_sequence(&args.query)?;

    let k = args.k.unwrap_or(config.seed.k);
    let max_in_flight =
        resolve_max_in_flight(args.max_in_flight, config.seed.max_in_flight, threads);
    let mut extend_config = SeedExtendConfig::new(k).with_max_in_flight(max_in_flight);

    let local = args.local || config.seed.strategy == ExtensionStrategyName::Local;
    if !local && (args.matrix.is_some() || args.flank.is_some() || args.scoring.is_set()) {
        tracing::warn!("--matrix, --flank and scoring flags are ignored without --local");
    }
    if local {
        let aligner = build_local_aligner(&config.local, &args.scoring, args.matrix.as_deref())?;
        let flank = args.flank.unwrap_or(config.seed.flank);
        extend_config = extend_config.with_local_alignment(aligner, flank);
    }

    tracing::debug!(
        k,
        local,
        max_in_flight,
        subject_len = subject.len(),
        query_len = query.len(),
        "seed and extend"
    );

    let extensions = SeedExtender::new(extend_config).run(&subject, &query)?;
    print_extensions(&extensions, args.format)
}
