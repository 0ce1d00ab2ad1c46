use super::*;

#[test]
fn test_default_config() {
    let config = AssignConfig::default();
    assert_eq!(config.completion_order, CompletionOrder::CircuitName);
    assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config = AssignConfig::from_toml_str("").unwrap();
    assert_eq!(config, AssignConfig::default());
}

#[test]
fn test_parse_full_config() {
    let config = AssignConfig::from_toml_str(
        r#"
        completion_order = "load_order"
        output_path = "results/assignments.txt"
        "#,
    )
    .unwrap();
    assert_eq!(config.completion_order, CompletionOrder::LoadOrder);
    assert_eq!(config.output_path, PathBuf::from("results/assignments.txt"));
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let config = AssignConfig::from_toml_str(r#"completion_order = "circuit_name""#).unwrap();
    assert_eq!(config.completion_order, CompletionOrder::CircuitName);
    assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
}

#[test]
fn test_invalid_completion_order_rejected() {
    let result = AssignConfig::from_toml_str(r#"completion_order = "random""#);
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_builders() {
    let config = AssignConfig::new()
        .with_completion_order(CompletionOrder::LoadOrder)
        .with_output_path("custom.txt");
    assert_eq!(config.completion_order, CompletionOrder::LoadOrder);
    assert_eq!(config.output_path, PathBuf::from("custom.txt"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = AssignConfig::load("definitely/not/a/real/path.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
