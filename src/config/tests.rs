//! Tests for config functionality.

use crate::config::{ColorChoice, Config, RenderMode};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.default_mode, RenderMode::Unified);
    assert_eq!(config.color, ColorChoice::Auto);
    assert_eq!(config.split_column_width, 60);
    assert_eq!(config.line_number_width, 5);
    assert_eq!(config.tab_width, 4);
    assert!(config.ignore_globs.is_empty());
    assert_eq!(config.download_filename, "changes.patch");
    assert!(config.pager.is_none());
    assert!(config.event_log);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.default_mode, RenderMode::Unified);
    assert_eq!(config.download_filename, "changes.patch");
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
default_mode: split
split_column_width: 80
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.default_mode, RenderMode::Split);
    assert_eq!(config.split_column_width, 80);

    // Unspecified values should use defaults
    assert_eq!(config.tab_width, 4);
    assert!(config.event_log);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
default_mode: split
color: never
split_column_width: 40
line_number_width: 4
tab_width: 2
ignore_globs:
  - "Cargo.lock"
  - "**/*.snap"
download_filename: review.patch
pager: "less -R"
event_log: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.default_mode, RenderMode::Split);
    assert_eq!(config.color, ColorChoice::Never);
    assert_eq!(config.split_column_width, 40);
    assert_eq!(config.line_number_width, 4);
    assert_eq!(config.tab_width, 2);
    assert_eq!(config.ignore_globs, vec!["Cargo.lock", "**/*.snap"]);
    assert_eq!(config.download_filename, "review.patch");
    assert_eq!(config.pager.as_deref(), Some("less -R"));
    assert!(!config.event_log);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config = Config::from_yaml("future_option: 42\ntab_width: 8\n").unwrap();
    assert_eq!(config.tab_width, 8);
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("default_mode: sideways").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_split_column_width() {
    let err = Config::from_yaml("split_column_width: 3").unwrap_err();
    assert!(err.to_string().contains("split_column_width"));
}

#[test]
fn test_validate_line_number_width() {
    assert!(Config::from_yaml("line_number_width: 0").is_err());
    assert!(Config::from_yaml("line_number_width: 11").is_err());
    assert!(Config::from_yaml("line_number_width: 10").is_ok());
}

#[test]
fn test_validate_tab_width() {
    assert!(Config::from_yaml("tab_width: 0").is_err());
    assert!(Config::from_yaml("tab_width: 17").is_err());
}

#[test]
fn test_validate_download_filename() {
    let err = Config::from_yaml("download_filename: \"  \"").unwrap_err();
    assert!(err.to_string().contains("download_filename"));
}

#[test]
fn test_validate_ignore_globs() {
    let err = Config::from_yaml("ignore_globs: [\"src/[\"]").unwrap_err();
    assert!(err.to_string().contains("ignore_globs"));
}

#[test]
fn test_ignore_globset_matches_paths() {
    let config = Config::from_yaml("ignore_globs: [\"**/*.lock\", \"vendor/**\"]").unwrap();
    let set = config.ignore_globset().unwrap();

    assert!(set.is_match("Cargo.lock"));
    assert!(set.is_match("vendor/a/b.rs"));
    assert!(!set.is_match("src/lib.rs"));
}

#[test]
fn test_pager_command_split() {
    let config = Config::from_yaml("pager: \"less -R --prompt='diff view'\"").unwrap();
    let args = config.pager_command().unwrap().unwrap();
    assert_eq!(args, vec!["less", "-R", "--prompt=diff view"]);

    assert!(Config::default().pager_command().unwrap().is_none());
}

#[test]
fn test_pager_unmatched_quote_fails() {
    let err = Config::from_yaml("pager: \"less 'oops\"").unwrap_err();
    assert!(err.to_string().contains("pager"));
}

#[test]
fn test_round_trip_yaml() {
    let mut config = Config::default();
    config.default_mode = RenderMode::Split;
    config.pager = Some("less -R".to_string());

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed.default_mode, RenderMode::Split);
    assert_eq!(parsed.pager.as_deref(), Some("less -R"));
}

#[test]
fn test_load_or_default_missing_file() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_or_default(temp.path().join("absent.yaml")).unwrap();
    assert_eq!(config.split_column_width, 60);
}

#[test]
fn test_load_reads_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, "color: always\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.color, ColorChoice::Always);
}

#[test]
fn test_color_choice_enabled() {
    assert!(ColorChoice::Auto.enabled(true));
    assert!(!ColorChoice::Auto.enabled(false));
    assert!(ColorChoice::Always.enabled(false));
    assert!(!ColorChoice::Never.enabled(true));
}
