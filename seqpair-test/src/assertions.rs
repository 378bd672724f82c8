//! Custom assertions for alignment output

const GAP: u8 = b'-';

fn strip_gaps(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|&c| c != GAP).collect()
}

fn assert_columns(aligned_a: &[u8], aligned_b: &[u8]) {
    assert_eq!(
        aligned_a.len(),
        aligned_b.len(),
        "Aligned sequences differ in length: {} vs {}",
        aligned_a.len(),
        aligned_b.len()
    );

    if let Some(column) = aligned_a
        .iter()
        .zip(aligned_b)
        .position(|(&a, &b)| a == GAP && b == GAP)
    {
        panic!("Column {} pairs a gap with a gap", column);
    }
}

/// A global alignment must spell out both inputs in full.
pub fn assert_alignment_shape(aligned_a: &[u8], aligned_b: &[u8], a: &[u8], b: &[u8]) {
    assert_columns(aligned_a, aligned_b);
    assert_eq!(strip_gaps(aligned_a), a, "Aligned A does not spell input A");
    assert_eq!(strip_gaps(aligned_b), b, "Aligned B does not spell input B");
}

/// A local alignment must spell out a contiguous piece of each input.
pub fn assert_local_alignment_shape(aligned_a: &[u8], aligned_b: &[u8], a: &[u8], b: &[u8]) {
    assert_columns(aligned_a, aligned_b);

    let is_substring = |needle: &[u8], haystack: &[u8]| {
        needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
    };
    assert!(
        is_substring(&strip_gaps(aligned_a), a),
        "Aligned A is not a substring of input A"
    );
    assert!(
        is_substring(&strip_gaps(aligned_b), b),
        "Aligned B is not a substring of input B"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_alignment() {
        assert_alignment_shape(b"AC-T", b"ACGT", b"ACT", b"ACGT");
        assert_local_alignment_shape(b"CG", b"CG", b"ACGT", b"TCGA");
    }

    #[test]
    #[should_panic(expected = "gap with a gap")]
    fn test_rejects_double_gap() {
        assert_alignment_shape(b"A-C", b"A-C", b"AC", b"AC");
    }
}
