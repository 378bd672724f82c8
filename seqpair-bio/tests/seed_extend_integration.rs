/// Integration tests for seeding, extension and consolidation
use pretty_assertions::assert_eq;
use seqpair_bio::alignment::{LocalAligner, ScoringMode, SubstitutionMatrix};
use seqpair_bio::seed::{
    find_seeds, seed_and_extend, seed_and_extend_with, Extension, ExtensionStrategy,
    SeedExtendConfig, SeedExtender,
};
use seqpair_core::SeqpairError;
use seqpair_test::{generate_sequence, init_test_logging, mutate, DNA_ALPHABET};

fn ext(subject_pos: usize, query_pos: usize, text: &str) -> Extension {
    Extension {
        subject_pos,
        query_pos,
        text: text.as_bytes().to_vec(),
    }
}

#[test]
fn test_single_converged_extension() {
    init_test_logging();

    let extensions = seed_and_extend(b"AGTCGA", b"TCG", 2).unwrap();

    assert_eq!(extensions.len(), 1);
    assert_eq!(extensions[0].text_str(), "TCG");
    assert_eq!(extensions[0].subject_pos, 2);
    assert_eq!(extensions[0].query_pos, 0);
}

#[test]
fn test_k_out_of_range_gives_empty_result() {
    assert!(seed_and_extend(b"AGTCGA", b"TCG", 4).unwrap().is_empty());
    assert!(seed_and_extend(b"AG", b"TCG", 3).unwrap().is_empty());
    assert!(seed_and_extend(b"AGTCGA", b"TCG", 0).unwrap().is_empty());
    assert!(seed_and_extend(b"", b"", 1).unwrap().is_empty());
}

#[test]
fn test_no_shared_kmer_gives_empty_result() {
    assert!(seed_and_extend(b"AAAAAA", b"CCC", 2).unwrap().is_empty());
}

#[test]
fn test_repetitive_input_keeps_distinct_offsets() {
    let extensions = seed_and_extend(b"AAAAA", b"AAA", 2).unwrap();

    // Seeds that touch the end of the subject or the start of the query
    // cannot grow past two symbols
    assert_eq!(
        extensions,
        vec![
            ext(0, 0, "AAA"),
            ext(1, 0, "AAA"),
            ext(2, 0, "AAA"),
            ext(3, 0, "AA"),
            ext(0, 1, "AA"),
        ]
    );

    let full: Vec<_> = extensions.iter().filter(|e| e.text == b"AAA").collect();
    assert_eq!(full.len(), 3);
    assert!(extensions.iter().all(|e| e.text.iter().all(|&c| c == b'A')));
}

#[test]
fn test_extensions_follow_seed_order() {
    let subject = b"ACGTTTTACGT";
    let query = b"ACGT";

    let seeds = find_seeds(subject, query, 4);
    let extensions = seed_and_extend(subject, query, 4).unwrap();

    assert_eq!(seeds.len(), 2);
    assert_eq!(extensions, vec![ext(0, 0, "ACGT"), ext(7, 0, "ACGT")]);
}

#[test]
fn test_delegated_extension_bridges_mismatch() {
    let subject = b"GGACGTACGTGG";
    let query = b"ACGTTCGT";
    let aligner = LocalAligner::new();

    let greedy = seed_and_extend(subject, query, 4).unwrap();
    assert_eq!(greedy, vec![ext(2, 0, "ACGT"), ext(6, 0, "ACGT")]);

    let delegated = seed_and_extend_with(subject, query, 4, Some(&aligner), 4).unwrap();
    assert_eq!(delegated, vec![ext(2, 0, "ACGTACGT")]);
}

#[test]
fn test_delegated_extension_anchors_to_first_repeat() {
    // Both copies of ACGT seed separately, but the local match is anchored at
    // its first occurrence in the window, so the second copy is reported at
    // the first copy's offset and then dropped as a duplicate.
    let subject = b"ACGTTTTACGT";
    let query = b"ACGT";
    let aligner = LocalAligner::new();

    let extensions = seed_and_extend_with(subject, query, 4, Some(&aligner), 20).unwrap();
    assert_eq!(extensions, vec![ext(0, 0, "ACGT")]);
}

#[test]
fn test_absent_aligner_matches_greedy() {
    let subject = generate_sequence(300, DNA_ALPHABET, 11);
    let query = mutate(&subject[100..180], DNA_ALPHABET, 0.1, 12);

    let greedy = seed_and_extend(&subject, &query, 6).unwrap();
    let fallback = seed_and_extend_with(&subject, &query, 6, None, 10).unwrap();

    assert_eq!(greedy, fallback);
}

#[test]
fn test_failing_extension_fails_whole_call() {
    init_test_logging();

    let config = SeedExtendConfig::new(2).with_strategy(ExtensionStrategy::LocalAlignment {
        aligner: LocalAligner::new(),
        mode: ScoringMode::Matrix,
        flank: 3,
    });

    let err = SeedExtender::new(config)
        .run(b"AGTCGA", b"TCG")
        .unwrap_err();

    match err {
        SeqpairError::ExtensionFailed { source, .. } => {
            assert!(matches!(*source, SeqpairError::Configuration(_)));
        }
        other => panic!("expected ExtensionFailed, got {:?}", other),
    }
}

#[test]
fn test_failing_strategy_without_seeds_is_not_an_error() {
    let config = SeedExtendConfig::new(2).with_strategy(ExtensionStrategy::LocalAlignment {
        aligner: LocalAligner::new(),
        mode: ScoringMode::Matrix,
        flank: 3,
    });

    let extensions = SeedExtender::new(config).run(b"AAAA", b"CCCC").unwrap();
    assert!(extensions.is_empty());
}

#[test]
fn test_concurrency_cap_does_not_change_results() {
    let subject = generate_sequence(500, DNA_ALPHABET, 21);
    let query = mutate(&subject[50..250], DNA_ALPHABET, 0.05, 22);

    let unbounded = SeedExtender::new(SeedExtendConfig::new(8))
        .run(&subject, &query)
        .unwrap();
    let serial = SeedExtender::new(SeedExtendConfig::new(8).with_max_in_flight(1))
        .run(&subject, &query)
        .unwrap();

    assert!(!unbounded.is_empty());
    assert_eq!(unbounded, serial);
}

#[test]
fn test_matrix_mode_delegated_extension() {
    let aligner = LocalAligner::new()
        .with_scoring_matrix(SubstitutionMatrix::builtin("BLOSUM62").unwrap());
    let config = SeedExtendConfig::new(3).with_local_alignment(aligner, 4);

    let extensions = SeedExtender::new(config)
        .run(b"KKMEEPQSDPSVKK", b"MEEPQSDPSV")
        .unwrap();

    assert!(extensions
        .iter()
        .any(|e| e.text == b"MEEPQSDPSV" && e.subject_pos == 2 && e.query_pos == 0));
}

#[test]
fn test_extension_serializes_text() {
    let extensions = seed_and_extend(b"AGTCGA", b"TCG", 2).unwrap();
    let json = serde_json::to_string(&extensions).unwrap();

    assert_eq!(json, r#"[{"subject_pos":2,"query_pos":0,"text":"TCG"}]"#);
}
