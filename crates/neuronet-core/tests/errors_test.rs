use neuronet_core::errors::*;

#[test]
fn invalid_argument_carries_reason() {
    let err = NeuronetError::invalid_argument("newContent is required");
    let msg = err.to_string();
    assert!(msg.contains("invalid argument"));
    assert!(msg.contains("newContent is required"));
}

#[test]
fn computation_error_carries_reason() {
    let err = NeuronetError::computation("blended score is not finite");
    assert!(err.to_string().contains("not finite"));
}

#[test]
fn config_error_carries_reason() {
    let err = NeuronetError::config("ngram_size must be at least 1");
    assert!(err.to_string().contains("ngram_size"));
}

// --- From impls ---

#[test]
fn serialization_error_converts_to_neuronet_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: NeuronetError = json_err.into();
    assert!(matches!(err, NeuronetError::SerializationError(_)));
}

#[test]
fn toml_error_converts_to_config_error() {
    let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let err: NeuronetError = toml_err.into();
    assert!(matches!(err, NeuronetError::ConfigError { .. }));
}
