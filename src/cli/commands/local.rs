use super::{build_local_aligner, ScoringArgs};
use crate::cli::input::read_sequence;
use crate::cli::output::print_alignment;
use crate::cli::OutputFormat;
use clap::Args;
use seqpair_core::Config;

#[derive(Args)]
pub struct LocalArgs {
    /// First sequence, or @FILE
    pub seq_a: String,

    /// Second sequence, or @FILE
    pub seq_b: String,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Substitution matrix: BLOSUM45, BLOSUM62 or a matrix file
    #[arg(long, value_name = "NAME|FILE")]
    pub matrix: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: LocalArgs, config: &Config) -> anyhow::Result<()> {
    let seq_a = read_sequence(&args.seq_a)?;
    let seq_b = read_sequence(&args.seq_b)?;

    let aligner = build_local_aligner(&config.local, &args.scoring, args.matrix.as_deref())?;
    tracing::debug!(
        mode = ?aligner.default_mode(),
        len_a = seq_a.len(),
        len_b = seq_b.len(),
        "local alignment"
    );

    let alignment = aligner.align(&seq_a, &seq_b)?;
    print_alignment(&alignment, args.format)
}
