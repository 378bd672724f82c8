use anyhow::Context;
use seqpair_core::SeqpairError;

/// A sequence argument: literal text, or `@path` to read it from a file.
///
/// FASTA header lines are skipped and all whitespace is removed, so a
/// single-record FASTA file can be passed as is.
pub fn read_sequence(arg: &str) -> anyhow::Result<Vec<u8>> {
    match arg.strip_prefix('@') {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(SeqpairError::from)
                .with_context(|| format!("reading sequence from {}", path))?;
            let sequence = clean(&contents);
            tracing::debug!(path, length = sequence.len(), "read sequence file");
            Ok(sequence)
        }
        None => Ok(clean(arg)),
    }
}

fn clean(text: &str) -> Vec<u8> {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('>'))
        .flat_map(|line| line.bytes())
        .filter(|b| !b.is_ascii_whitespace())
        .collect()
}
