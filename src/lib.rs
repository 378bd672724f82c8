//! Command-line front end for the seqpair alignment engines.

pub mod cli;

pub use seqpair_bio::{alignment, seed};
pub use seqpair_core::{Config, SeqpairError, SeqpairResult};
