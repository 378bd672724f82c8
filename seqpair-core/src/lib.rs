//! Core utilities and types shared across all seqpair crates

pub mod config;
pub mod error;
pub mod parallel;

// Re-export commonly used types
pub use config::{load_config, save_config, Config, ExtensionStrategyName};
pub use error::{SeqpairError, SeqpairResult};

/// Version information for the seqpair project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
