//! k-mer index over the subject and exact seed enumeration.

use seqpair_core::{SeqpairError, SeqpairResult};
use serde::Serialize;
use std::collections::HashMap;

/// Start offsets of an exact k-length match shared by query and subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Seed {
    pub query_pos: usize,
    pub subject_pos: usize,
}

/// Every k-mer of a subject mapped to its start offsets, in increasing order.
pub struct SeedIndex<'a> {
    k: usize,
    kmers: HashMap<&'a [u8], Vec<usize>>,
}

impl<'a> SeedIndex<'a> {
    /// Index `subject`. Fails with `InvalidParameter` when `k` is zero or
    /// longer than the subject.
    pub fn build(subject: &'a [u8], k: usize) -> SeqpairResult<Self> {
        if k == 0 || k > subject.len() {
            return Err(SeqpairError::InvalidParameter(format!(
                "k = {} is outside 1..={} for the subject",
                k,
                subject.len()
            )));
        }

        let mut kmers: HashMap<&[u8], Vec<usize>> = HashMap::new();
        for (offset, kmer) in subject.windows(k).enumerate() {
            kmers.entry(kmer).or_default().push(offset);
        }

        tracing::trace!(k, distinct = kmers.len(), "indexed subject k-mers");
        Ok(Self { k, kmers })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Offsets of `kmer` in the subject, or an empty slice.
    pub fn offsets(&self, kmer: &[u8]) -> &[usize] {
        self.kmers.get(kmer).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn distinct_kmers(&self) -> usize {
        self.kmers.len()
    }

    /// One seed per (query k-mer, subject offset) pair, ordered by query
    /// offset and then subject offset. A query shorter than `k` yields none.
    pub fn seeds(&self, query: &[u8]) -> Vec<Seed> {
        if query.len() < self.k {
            return Vec::new();
        }

        query
            .windows(self.k)
            .enumerate()
            .flat_map(|(query_pos, kmer)| {
                self.offsets(kmer).iter().map(move |&subject_pos| Seed {
                    query_pos,
                    subject_pos,
                })
            })
            .collect()
    }
}

/// Seeds shared by `subject` and `query`.
///
/// Requires `1 <= k <= min(len(subject), len(query))`. Out-of-range values are
/// not an error: they simply produce no seeds.
pub fn find_seeds(subject: &[u8], query: &[u8], k: usize) -> Vec<Seed> {
    if k > query.len() {
        tracing::warn!(k, query_len = query.len(), "k exceeds query length, no seeds");
        return Vec::new();
    }

    match SeedIndex::build(subject, k) {
        Ok(index) => index.seeds(query),
        Err(e) => {
            tracing::warn!(error = %e, "no seeds");
            Vec::new()
        }
    }
}
