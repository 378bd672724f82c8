pub mod global;
pub mod local;
pub mod seed;

use clap::Args;
use seqpair_bio::alignment::{ConstantScoring, LocalAligner, SubstitutionMatrix};
use seqpair_core::config::LocalConfig;

/// Constant-scoring overrides shared by every subcommand. Unset flags keep
/// the value from the configuration file.
#[derive(Args, Debug, Default)]
pub struct ScoringArgs {
    /// Score for a pair of identical symbols
    #[arg(long = "match", value_name = "SCORE", allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// Score for a pair of different symbols (also used for pairs a matrix does not cover)
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub mismatch: Option<i32>,

    /// Score for each gap position
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub gap: Option<i32>,
}

impl ScoringArgs {
    pub fn is_set(&self) -> bool {
        self.match_score.is_some() || self.mismatch.is_some() || self.gap.is_some()
    }

    pub fn apply(&self, base: ConstantScoring) -> ConstantScoring {
        ConstantScoring::new(
            self.match_score.unwrap_or(base.match_score),
            self.mismatch.unwrap_or(base.mismatch_score),
            self.gap.unwrap_or(base.gap),
        )
    }
}

/// Build the local aligner from the `[local]` section, then flags on top.
/// `matrix` names a built-in table or a matrix file.
pub fn build_local_aligner(
    config: &LocalConfig,
    scoring: &ScoringArgs,
    matrix: Option<&str>,
) -> anyhow::Result<LocalAligner> {
    let constants = scoring.apply(ConstantScoring::new(
        config.match_score,
        config.mismatch,
        config.gap,
    ));
    let aligner = LocalAligner::new().with_constants(constants);

    match matrix.or(config.matrix.as_deref()) {
        Some(name) => {
            tracing::debug!(matrix = name, "using substitution matrix");
            Ok(aligner.with_scoring_matrix(SubstitutionMatrix::resolve(name)?))
        }
        None => Ok(aligner),
    }
}
