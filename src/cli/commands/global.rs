use super::ScoringArgs;
use crate::cli::input::read_sequence;
use crate::cli::output::print_alignment;
use crate::cli::OutputFormat;
use clap::Args;
use seqpair_bio::alignment::{ConstantScoring, NeedlemanWunsch};
use seqpair_core::Config;

#[derive(Args)]
pub struct GlobalArgs {
    /// First sequence, or @FILE
    pub seq_a: String,

    /// Second sequence, or @FILE
    pub seq_b: String,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: GlobalArgs, config: &Config) -> anyhow::Result<()> {
    let seq_a = read_sequence(&args.seq_a)?;
    let seq_b = read_sequence(&args.seq_b)?;

    let scoring = args.scoring.apply(ConstantScoring::new(
        config.global.match_score,
        config.global.mismatch,
        config.global.gap,
    ));
    tracing::debug!(?scoring, len_a = seq_a.len(), len_b = seq_b.len(), "global alignment");

    let alignment = NeedlemanWunsch::new(scoring).align(&seq_a, &seq_b);
    print_alignment(&alignment, args.format)
}
