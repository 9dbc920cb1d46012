//! Property tests for neuronet-similarity: bounds, symmetry, identity, monotonicity, ordering.

use proptest::prelude::*;

use neuronet_core::config::SimilarityConfig;
use neuronet_core::models::ContentRecord;
use neuronet_similarity::algorithms::{cosine, jaccard};
use neuronet_similarity::SimilarityAnalyzer;

const VOCABULARY: &[&str] = &[
    "city", "neon", "glow", "forest", "tower", "bright", "camel", "dune", "river", "misty",
    "street", "vivid", "apple", "banana", "cherry", "digital", "garden", "plaza", "signs", "rain",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 1..12).prop_map(|w| w.join(" "))
}

fn analyzer() -> SimilarityAnalyzer {
    SimilarityAnalyzer::default()
}

// =============================================================================
// Every sub-score in [0, 1], every percentage in [0, 100]
// =============================================================================
proptest! {
    #[test]
    fn scores_are_bounded(a in "\\PC{0,40}", b in "\\PC{0,40}") {
        let breakdown = analyzer().breakdown(&a, &b);
        prop_assert!(breakdown.is_bounded(), "{breakdown:?}");
        let score = analyzer().score(&a, &b).unwrap();
        prop_assert!((0.0..=100.0).contains(&score), "score {score}");
    }
}

// =============================================================================
// score(A, B) == score(B, A), bit for bit
// =============================================================================
proptest! {
    #[test]
    fn score_is_symmetric(a in sentence(), b in "[a-z ]{0,60}") {
        let forward = analyzer().score(&a, &b).unwrap();
        let backward = analyzer().score(&b, &a).unwrap();
        prop_assert_eq!(forward.to_bits(), backward.to_bits());
    }
}

// =============================================================================
// Self-match never drops below the review threshold
// =============================================================================
proptest! {
    #[test]
    fn self_match_reaches_the_floor(text in sentence()) {
        let score = analyzer().score(&text, &text).unwrap();
        prop_assert!(score >= 85.0, "self score {score} for {text:?}");
    }
}

// =============================================================================
// Sharing more of B's vocabulary never lowers Jaccard or cosine
// =============================================================================
proptest! {
    #[test]
    fn shared_vocabulary_is_monotonic(words in prop::collection::hash_set("[a-z]{3,8}", 2..12)) {
        let words: Vec<String> = words.into_iter().collect();
        let full = words.join(" ");
        let mut previous = (0.0, 0.0);
        for k in 1..=words.len() {
            let prefix = words[..k].join(" ");
            let current = (
                jaccard::word_jaccard(&prefix, &full, 3),
                cosine::text_cosine(&prefix, &full, 3),
            );
            prop_assert!(current.0 >= previous.0, "jaccard fell at k={k}");
            prop_assert!(current.1 >= previous.1, "cosine fell at k={k}");
            previous = current;
        }
        prop_assert_eq!(previous, (1.0, 1.0));
    }
}

// =============================================================================
// Parallel and sequential scoring pick the same record
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn parallel_matches_sequential(
        candidate in sentence(),
        contents in prop::collection::vec(sentence(), 1..40),
    ) {
        let records: Vec<ContentRecord> = contents
            .iter()
            .enumerate()
            .map(|(i, c)| ContentRecord::new(i as u64, "t", c.as_str(), "prompt", "art"))
            .collect();
        let parallel = SimilarityAnalyzer::new(SimilarityConfig {
            parallel_min_records: 1,
            ..SimilarityConfig::default()
        })
        .unwrap();
        let sequential = SimilarityAnalyzer::new(SimilarityConfig {
            parallel_min_records: usize::MAX,
            ..SimilarityConfig::default()
        })
        .unwrap();
        prop_assert_eq!(
            parallel.analyze(&candidate, "prompt", &records).unwrap(),
            sequential.analyze(&candidate, "prompt", &records).unwrap()
        );
    }
}
