use neuronet_core::config::*;
use neuronet_core::errors::NeuronetError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = NeuronetConfig::from_toml("").unwrap();

    // Similarity defaults
    let sim = &config.similarity;
    assert_eq!(sim.ngram_size, 3);
    assert_eq!(sim.scoring_min_token_chars, 3);
    assert_eq!(sim.analysis_min_token_chars, 4);
    assert_eq!(sim.max_shared_terms, 10);
    assert_eq!(sim.max_unique_terms, 5);
    assert_eq!(sim.max_key_concepts, 10);
    assert_eq!(sim.similar_length_ratio, 0.8);
    assert!(sim.filter_by_item_type);
    assert_eq!(sim.parallel_min_records, 32);
    assert_eq!(sim.max_content_chars, None);

    // Weights
    assert_eq!(sim.weights.jaccard, 0.25);
    assert_eq!(sim.weights.cosine, 0.25);
    assert_eq!(sim.weights.levenshtein, 0.15);
    assert_eq!(sim.weights.ngram, 0.15);
    assert_eq!(sim.weights.semantic, 0.15);
    assert_eq!(sim.weights.length, 0.05);
    assert!((sim.weights.total() - 1.0).abs() < 1e-12);

    // Keyword groups
    let names: Vec<&str> = sim.keyword_groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "architecture",
            "technology",
            "nature",
            "urban",
            "futuristic",
            "lighting",
            "color"
        ]
    );

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_output);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[similarity]
max_content_chars = 20000
parallel_min_records = 4

[similarity.weights]
semantic = 0.0

[observability]
json_output = true
"#;
    let config = NeuronetConfig::from_toml(toml).unwrap();
    assert_eq!(config.similarity.max_content_chars, Some(20_000));
    assert_eq!(config.similarity.parallel_min_records, 4);
    assert_eq!(config.similarity.weights.semantic, 0.0);
    // Non-overridden fields keep defaults
    assert_eq!(config.similarity.weights.jaccard, 0.25);
    assert_eq!(config.similarity.ngram_size, 3);
    assert_eq!(config.similarity.keyword_groups.len(), 7);
    assert!(config.observability.json_output);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn custom_keyword_groups_replace_the_defaults() {
    let toml = r#"
[[similarity.keyword_groups]]
name = "fruit"
terms = ["apple", "banana"]
"#;
    let config = NeuronetConfig::from_toml(toml).unwrap();
    assert_eq!(config.similarity.keyword_groups.len(), 1);
    assert!(config.similarity.keyword_groups[0].contains("banana"));
    assert!(!config.similarity.keyword_groups[0].contains("city"));
}

#[test]
fn config_serde_roundtrip() {
    let config = NeuronetConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = NeuronetConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.similarity.weights, config.similarity.weights);
    assert_eq!(
        roundtripped.similarity.keyword_groups,
        config.similarity.keyword_groups
    );
    assert_eq!(roundtripped.similarity.max_content_chars, None);
}

#[test]
fn negative_weight_is_rejected() {
    let err = NeuronetConfig::from_toml("[similarity.weights]\ncosine = -0.1\n").unwrap_err();
    match err {
        NeuronetError::ConfigError { reason } => assert!(reason.contains("cosine")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn all_zero_weights_are_rejected() {
    let toml = r#"
[similarity.weights]
jaccard = 0.0
cosine = 0.0
levenshtein = 0.0
ngram = 0.0
semantic = 0.0
length = 0.0
"#;
    assert!(matches!(
        NeuronetConfig::from_toml(toml),
        Err(NeuronetError::ConfigError { .. })
    ));
}

#[test]
fn zero_ngram_size_is_rejected() {
    let mut config = SimilarityConfig::default();
    config.ngram_size = 0;
    assert!(config.validate().is_err());
}

#[test]
fn length_ratio_out_of_range_is_rejected() {
    let mut config = SimilarityConfig::default();
    config.similar_length_ratio = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn unnamed_keyword_group_is_rejected() {
    let mut config = SimilarityConfig::default();
    config.keyword_groups.push(KeywordGroup::new("  ", &["x"]));
    assert!(config.validate().is_err());
}

#[test]
fn zero_content_limit_is_rejected() {
    let mut config = SimilarityConfig::default();
    config.max_content_chars = Some(0);
    assert!(config.validate().is_err());
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = NeuronetConfig::from_toml("[similarity\nngram_size = ").unwrap_err();
    assert!(matches!(err, NeuronetError::ConfigError { .. }));
}

#[test]
fn keyword_group_terms_are_lowercased() {
    let group = KeywordGroup::new("Mixed", &["Neon", "GLOW"]);
    assert!(group.contains("neon"));
    assert!(group.contains("glow"));
}
