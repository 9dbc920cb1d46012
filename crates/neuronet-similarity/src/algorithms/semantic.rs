//! Keyword-group overlap: a coarse topical proxy.
//!
//! For every group both texts hit, the smaller hit count is added to the
//! matched total and the larger to the possible total.

use neuronet_core::config::KeywordGroup;

use super::tokenizer::words;

/// Hits per group: how many of `words` (lowercased) are terms of each group.
/// A word that belongs to several groups counts once in each of them.
pub fn keyword_hits(words: &[String], groups: &[KeywordGroup]) -> Vec<usize> {
    groups
        .iter()
        .map(|group| words.iter().filter(|w| group.contains(w)).count())
        .collect()
}

/// Overlap of two per-group hit vectors produced against the same groups.
pub fn keyword_overlap(hits_a: &[usize], hits_b: &[usize]) -> f64 {
    let (mut matched, mut possible) = (0usize, 0usize);
    for (&a, &b) in hits_a.iter().zip(hits_b) {
        if a > 0 && b > 0 {
            matched += a.min(b);
            possible += a.max(b);
        }
    }
    if possible == 0 {
        0.0
    } else {
        matched as f64 / possible as f64
    }
}

/// Keyword-group overlap of two texts.
pub fn semantic_similarity(a: &str, b: &str, groups: &[KeywordGroup]) -> f64 {
    keyword_overlap(
        &keyword_hits(&words(a), groups),
        &keyword_hits(&words(b), groups),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuronet_core::config::SimilarityConfig;

    fn groups() -> Vec<KeywordGroup> {
        SimilarityConfig::default().keyword_groups
    }

    #[test]
    fn no_keywords_scores_zero() {
        assert_eq!(semantic_similarity("apple banana", "apple banana", &groups()), 0.0);
    }

    #[test]
    fn shared_groups_score_one() {
        assert_eq!(
            semantic_similarity("city tower", "Downtown skyscraper", &groups()),
            1.0
        );
    }

    #[test]
    fn one_sided_groups_are_ignored() {
        // urban hit on both sides; nature only on the left.
        assert_eq!(
            semantic_similarity("city forest garden", "street", &groups()),
            1.0
        );
    }

    #[test]
    fn min_over_max_within_a_group() {
        // urban: 3 vs 1
        let sim = semantic_similarity("city street plaza", "avenue", &groups());
        assert!((sim - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn word_in_two_groups_counts_in_both() {
        let hits = keyword_hits(&words("bright"), &groups());
        let lighting = groups().iter().position(|g| g.name == "lighting").unwrap();
        let color = groups().iter().position(|g| g.name == "color").unwrap();
        assert_eq!(hits[lighting], 1);
        assert_eq!(hits[color], 1);
    }

    #[test]
    fn requires_whole_word_match() {
        // "towers," is neither "tower" nor "towers".
        assert_eq!(semantic_similarity("towers,", "tower", &groups()), 0.0);
    }

    #[test]
    fn custom_groups_are_honored() {
        let fruit = vec![KeywordGroup::new("fruit", &["apple", "banana"])];
        assert_eq!(semantic_similarity("apple pie", "banana split", &fruit), 1.0);
    }
}
