//! Integration tests for configuration parsing and handling.

use logsift::prelude::*;
use logsift::query::{CONFIG_FILE_NAME, ErrorCode, Operator};

/// Test minimal configuration
#[test]
fn test_config_minimal() {
    let config = StatementConfig::from_toml_str(r#"strategy = "all""#).expect("Failed to parse config");
    assert_eq!(config.strategy, StrategyKind::All);
    assert_eq!(config.query_string, QueryStringOptions::default());
}

/// Test full configuration with all options
#[test]
fn test_config_full() {
    let config_str = r#"
        strategy = "not"

        [query_string]
        default_field = "message"
        default_operator = "AND"
        analyze_wildcard = true
        lenient = true
    "#;

    let config: StatementConfig = toml::from_str(config_str).expect("Failed to parse config");
    assert_eq!(config.strategy, StrategyKind::NoneOf);
    assert_eq!(config.query_string.default_field.as_deref(), Some("message"));
    assert_eq!(config.query_string.default_operator, Some(Operator::And));
    assert_eq!(config.query_string.analyze_wildcard, Some(true));
    assert_eq!(config.query_string.lenient, Some(true));
}

/// Test strategy aliases in configuration
#[test]
fn test_config_strategy_aliases() {
    for (name, kind) in [
        ("and", StrategyKind::All),
        ("MUST", StrategyKind::All),
        ("should", StrategyKind::Any),
        ("must_not", StrategyKind::NoneOf),
    ] {
        let config = StatementConfig::from_toml_str(&format!("strategy = \"{}\"", name)).unwrap();
        assert_eq!(config.strategy, kind, "alias {}", name);
    }
}

/// Test invalid configuration values
#[test]
fn test_config_invalid() {
    let err = StatementConfig::from_toml_str("strategy = 3").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidConfiguration);

    let err = StatementConfig::from_toml_str(
        r#"
        [query_string]
        default_operator = "XOR"
        "#,
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidConfiguration);
}

/// Test rendering and re-parsing
#[test]
fn test_config_toml_round_trip() {
    let config = StatementConfig {
        strategy: StrategyKind::Any,
        query_string: QueryStringOptions::new().default_field("log").analyze_wildcard(false),
    };

    let rendered = config.to_documented_toml().unwrap();
    assert!(rendered.contains("strategy = \"any\""));
    assert!(rendered.contains("# lenient = true"));
    assert_eq!(StatementConfig::from_toml_str(&rendered).unwrap(), config);
}

/// Test default config file name
#[test]
fn test_config_file_name() {
    assert_eq!(CONFIG_FILE_NAME, "logsift.toml");
}
