//! Configuration types for seqpair

use crate::SeqpairError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub local: LocalConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Constant scoring used by the Needleman-Wunsch engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalConfig {
    #[serde(default = "default_global_match", rename = "match")]
    pub match_score: i32,
    #[serde(default = "default_global_mismatch")]
    pub mismatch: i32,
    #[serde(default = "default_global_gap")]
    pub gap: i32,
}

/// Scoring used by the Smith-Waterman engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalConfig {
    #[serde(default = "default_local_match", rename = "match")]
    pub match_score: i32,
    #[serde(default = "default_local_mismatch")]
    pub mismatch: i32,
    #[serde(default = "default_local_gap")]
    pub gap: i32,
    /// Path to a substitution matrix file, or a built-in name such as "BLOSUM62"
    #[serde(default)]
    pub matrix: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionStrategyName {
    Greedy,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedConfig {
    #[serde(default = "default_k")]
    pub k: usize,
    /// Symbols taken on each side of a seed when extending by local alignment
    #[serde(default = "default_flank")]
    pub flank: usize,
    #[serde(default = "default_strategy")]
    pub strategy: ExtensionStrategyName,
    /// Upper bound on concurrently running extension tasks (0 = all available cores)
    #[serde(default)]
    pub max_in_flight: usize,
}

// Default value functions
fn default_global_match() -> i32 { 1 }
fn default_global_mismatch() -> i32 { -1 }
fn default_global_gap() -> i32 { -1 }
fn default_local_match() -> i32 { 2 }
fn default_local_mismatch() -> i32 { -1 }
fn default_local_gap() -> i32 { -2 }
fn default_k() -> usize { 11 }
fn default_flank() -> usize { 10 }
fn default_strategy() -> ExtensionStrategyName { ExtensionStrategyName::Greedy }

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            match_score: default_global_match(),
            mismatch: default_global_mismatch(),
            gap: default_global_gap(),
        }
    }
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            match_score: default_local_match(),
            mismatch: default_local_mismatch(),
            gap: default_local_gap(),
            matrix: None,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            flank: default_flank(),
            strategy: default_strategy(),
            max_in_flight: 0,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SeqpairError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| SeqpairError::Parse(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), SeqpairError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| SeqpairError::Serialization(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
