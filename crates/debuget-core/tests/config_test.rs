use std::collections::HashMap;

use debuget_core::config::DebugetConfig;
use debuget_core::errors::ConfigError;
use debuget_core::models::Theme;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = DebugetConfig::from_toml("").unwrap();
    assert_eq!(config.theme(), Theme::default());
    assert_eq!(config.observability.log_filter, "debuget=warn");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let config = DebugetConfig::from_toml(
        r#"
[theme]
stack_depth = 15
show_stack = false
"#,
    )
    .unwrap();
    let theme = config.theme();
    assert_eq!(theme.stack_depth, 15);
    assert!(!theme.show_stack);
    assert!(theme.emoji);
    assert!(theme.colors);
}

#[test]
fn load_missing_project_file_falls_back_to_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = DebugetConfig::load_with_env(dir.path(), no_env).unwrap();
    assert_eq!(config, DebugetConfig::default());
}

#[test]
fn env_overrides_project_file() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("debuget.toml"),
        "[theme]\nstack_depth = 5\nemoji = false\n",
    )
    .unwrap();

    let env = env_of(&[("DEBUGET_STACK_DEPTH", "7")]);
    let config = DebugetConfig::load_with_env(dir.path(), env).unwrap();
    let theme = config.theme();
    assert_eq!(theme.stack_depth, 7);
    assert!(!theme.emoji);
}

#[test]
fn no_color_disables_colors_unless_explicitly_enabled() {
    let dir = tempfile::TempDir::new().unwrap();

    let config = DebugetConfig::load_with_env(dir.path(), env_of(&[("NO_COLOR", "1")])).unwrap();
    assert!(!config.theme().colors);

    let config = DebugetConfig::load_with_env(
        dir.path(),
        env_of(&[("NO_COLOR", "1"), ("DEBUGET_COLORS", "true")]),
    )
    .unwrap();
    assert!(config.theme().colors);

    let config = DebugetConfig::load_with_env(dir.path(), env_of(&[("NO_COLOR", "")])).unwrap();
    assert!(config.theme().colors);
}

#[test]
fn log_filter_comes_from_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let config =
        DebugetConfig::load_with_env(dir.path(), env_of(&[("DEBUGET_LOG", "debuget=debug")]))
            .unwrap();
    assert_eq!(config.observability.log_filter, "debuget=debug");
}

#[test]
fn invalid_toml_returns_parse_error() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("debuget.toml"), "this is not valid toml {{{{").unwrap();

    match DebugetConfig::load_with_env(dir.path(), no_env).unwrap_err() {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("debuget.toml")),
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn invalid_env_value_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = DebugetConfig::load_with_env(dir.path(), env_of(&[("DEBUGET_EMOJI", "maybe")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "DEBUGET_EMOJI"));

    let err = DebugetConfig::load_with_env(dir.path(), env_of(&[("DEBUGET_STACK_DEPTH", "-1")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn config_roundtrips_through_toml() {
    let config = DebugetConfig::from_toml("[theme]\ncolors = false\n").unwrap();
    let text = config.to_toml().unwrap();
    let again = DebugetConfig::from_toml(&text).unwrap();
    assert_eq!(config, again);
}
