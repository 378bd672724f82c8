//! Seed-and-extend search for exact k-mer anchors and the match regions
//! grown around them.

pub mod extend;
pub mod index;

pub use extend::{
    extend_greedy, seed_and_extend, seed_and_extend_with, Extension, ExtensionStrategy,
    SeedExtendConfig, SeedExtender,
};
pub use index::{find_seeds, Seed, SeedIndex};
