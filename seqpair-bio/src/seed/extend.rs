//! Seed extension and consolidation.

use crate::alignment::result::{as_text, GAP};
use crate::alignment::sw_aligner::{LocalAligner, ScoringMode};
use crate::seed::index::{find_seeds, Seed};
use rayon::prelude::*;
use seqpair_core::parallel::bounded_pool;
use seqpair_core::{SeqpairError, SeqpairResult};
use serde::Serialize;
use std::collections::HashSet;

/// The match region grown from one seed.
///
/// Two extensions are the same only when all three fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Extension {
    pub subject_pos: usize,
    pub query_pos: usize,
    #[serde(serialize_with = "as_text")]
    pub text: Vec<u8>,
}

impl Extension {
    pub fn text_str(&self) -> String {
        String::from_utf8_lossy(&self.text).into_owned()
    }
}

#[derive(Debug, Clone, Default)]
pub enum ExtensionStrategy {
    /// Grow the exact match left and right until the first mismatch or
    /// sequence boundary.
    #[default]
    Greedy,
    /// Run local alignment on a window of `flank` symbols either side of the
    /// seed.
    ///
    /// The result is anchored at the first occurrence of the aligned text in
    /// each window. On repetitive input that can be a different copy of the
    /// motif than the one the seed came from.
    LocalAlignment {
        aligner: LocalAligner,
        mode: ScoringMode,
        flank: usize,
    },
}

#[derive(Debug, Clone)]
pub struct SeedExtendConfig {
    pub k: usize,
    pub strategy: ExtensionStrategy,
    /// Upper bound on extension tasks running at once (0 = use the global pool)
    pub max_in_flight: usize,
}

impl SeedExtendConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            strategy: ExtensionStrategy::Greedy,
            max_in_flight: 0,
        }
    }

    pub fn with_strategy(mut self, strategy: ExtensionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_local_alignment(self, aligner: LocalAligner, flank: usize) -> Self {
        let mode = aligner.default_mode();
        self.with_strategy(ExtensionStrategy::LocalAlignment {
            aligner,
            mode,
            flank,
        })
    }

    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight;
        self
    }
}

pub struct SeedExtender {
    config: SeedExtendConfig,
}

impl SeedExtender {
    pub fn new(config: SeedExtendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeedExtendConfig {
        &self.config
    }

    /// Seed, extend every seed concurrently, then drop exact duplicates.
    ///
    /// Extensions come back in the order their seeds were found. If any
    /// extension fails, the remaining tasks are abandoned and the whole call
    /// fails; no partial list is returned.
    pub fn run(&self, subject: &[u8], query: &[u8]) -> SeqpairResult<Vec<Extension>> {
        let _span = tracing::debug_span!(
            "seed_and_extend",
            subject_len = subject.len(),
            query_len = query.len(),
            k = self.config.k
        )
        .entered();

        let seeds = find_seeds(subject, query, self.config.k);
        if seeds.is_empty() {
            tracing::debug!("no seeds found");
            return Ok(Vec::new());
        }

        let extend_all = || {
            seeds
                .par_iter()
                .map(|seed| {
                    self.extend(seed, subject, query).map_err(|e| {
                        SeqpairError::extension_failed(seed.query_pos, seed.subject_pos, e)
                    })
                })
                .collect::<SeqpairResult<Vec<Extension>>>()
        };

        let extensions = match pool_size(self.config.max_in_flight, seeds.len()) {
            Some(threads) => {
                tracing::debug!(seeds = seeds.len(), threads, "extending seeds");
                bounded_pool(threads)?.install(extend_all)?
            }
            None => {
                tracing::debug!(
                    seeds = seeds.len(),
                    threads = rayon::current_num_threads(),
                    "extending seeds on the global pool"
                );
                extend_all()?
            }
        };

        let consolidated = consolidate(extensions);
        tracing::debug!(extensions = consolidated.len(), "consolidated extensions");
        Ok(consolidated)
    }

    fn extend(&self, seed: &Seed, subject: &[u8], query: &[u8]) -> SeqpairResult<Extension> {
        tracing::trace!(query_pos = seed.query_pos, subject_pos = seed.subject_pos, "extending seed");

        match &self.config.strategy {
            ExtensionStrategy::Greedy => Ok(extend_greedy(seed, subject, query, self.config.k)),
            ExtensionStrategy::LocalAlignment {
                aligner,
                mode,
                flank,
            } => extend_local(seed, subject, query, self.config.k, aligner, *mode, *flank),
        }
    }
}

/// Maximal exact match through the seed, along its diagonal.
pub fn extend_greedy(seed: &Seed, subject: &[u8], query: &[u8], k: usize) -> Extension {
    let mut subject_start = seed.subject_pos;
    let mut query_start = seed.query_pos;
    while subject_start > 0
        && query_start > 0
        && subject[subject_start - 1] == query[query_start - 1]
    {
        subject_start -= 1;
        query_start -= 1;
    }

    let mut subject_end = seed.subject_pos + k;
    let mut query_end = seed.query_pos + k;
    while subject_end < subject.len()
        && query_end < query.len()
        && subject[subject_end] == query[query_end]
    {
        subject_end += 1;
        query_end += 1;
    }

    Extension {
        subject_pos: subject_start,
        query_pos: query_start,
        text: subject[subject_start..subject_end].to_vec(),
    }
}

fn extend_local(
    seed: &Seed,
    subject: &[u8],
    query: &[u8],
    k: usize,
    aligner: &LocalAligner,
    mode: ScoringMode,
    flank: usize,
) -> SeqpairResult<Extension> {
    let (subject_start, subject_end) = window(seed.subject_pos, k, flank, subject.len());
    let (query_start, query_end) = window(seed.query_pos, k, flank, query.len());
    let subject_window = &subject[subject_start..subject_end];
    let query_window = &query[query_start..query_end];

    let alignment = aligner.align_with_mode(subject_window, query_window, mode)?;

    if alignment.is_empty() {
        // Nothing in the window scores above zero; keep the bare seed
        return Ok(Extension {
            subject_pos: seed.subject_pos,
            query_pos: seed.query_pos,
            text: subject[seed.subject_pos..seed.subject_pos + k].to_vec(),
        });
    }

    let subject_match = strip_gaps(&alignment.aligned_a);
    let query_match = strip_gaps(&alignment.aligned_b);

    // Anchored at the first copy of the match in each window, not at the
    // seed's own copy; on repeats these differ. A gap-stripped local
    // alignment is always a substring of its window, so the search succeeds.
    let subject_offset = first_occurrence(subject_window, &subject_match)
        .expect("local match is a substring of the subject window");
    let query_offset = first_occurrence(query_window, &query_match)
        .expect("local match is a substring of the query window");

    Ok(Extension {
        subject_pos: subject_start + subject_offset,
        query_pos: query_start + query_offset,
        text: subject_match,
    })
}

/// Workers for a capped fan-out: never more than there are seeds. `None`
/// when uncapped, in which case the global pool is used.
fn pool_size(max_in_flight: usize, seeds: usize) -> Option<usize> {
    match max_in_flight {
        0 => None,
        cap => Some(cap.min(seeds).max(1)),
    }
}

/// `[pos - flank, pos + k + flank)` clipped to `0..len`.
fn window(pos: usize, k: usize, flank: usize, len: usize) -> (usize, usize) {
    (
        pos.saturating_sub(flank),
        pos.saturating_add(k).saturating_add(flank).min(len),
    )
}

fn strip_gaps(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|&c| c != GAP).collect()
}

fn first_occurrence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|candidate| candidate == needle)
}

/// Keep the first of every fully identical extension, preserving order.
fn consolidate(extensions: Vec<Extension>) -> Vec<Extension> {
    let mut seen = HashSet::with_capacity(extensions.len());
    extensions
        .into_iter()
        .filter(|extension| seen.insert(extension.clone()))
        .collect()
}

/// Greedy seed-and-extend.
pub fn seed_and_extend(subject: &[u8], query: &[u8], k: usize) -> SeqpairResult<Vec<Extension>> {
    SeedExtender::new(SeedExtendConfig::new(k)).run(subject, query)
}

/// Seed-and-extend that delegates extension to `local_aligner`, or falls back
/// to greedy extension when none is given.
pub fn seed_and_extend_with(
    subject: &[u8],
    query: &[u8],
    k: usize,
    local_aligner: Option<&LocalAligner>,
    flank: usize,
) -> SeqpairResult<Vec<Extension>> {
    let config = match local_aligner {
        Some(aligner) => SeedExtendConfig::new(k).with_local_alignment(aligner.clone(), flank),
        None => SeedExtendConfig::new(k),
    };
    SeedExtender::new(config).run(subject, query)
}
