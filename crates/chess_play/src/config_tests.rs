use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    let config = PlayConfig::from_toml("").unwrap();
    assert_eq!(config, PlayConfig::default());
    assert_eq!(config.promotion_kind().unwrap(), PieceKind::Queen);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = PlayConfig::from_toml(
        r#"
        log_level = "debug"

        [display]
        unicode = true

        [selfplay]
        seed = 42
        "#,
    )
    .unwrap();
    assert_eq!(config.log_level, "debug");
    assert!(config.display.unicode);
    assert!(!config.display.flip);
    assert_eq!(config.selfplay.seed, Some(42));
    assert_eq!(config.selfplay.max_plies, 300);
}

#[test]
fn test_promotion_letter() {
    let config = PlayConfig::from_toml("[game]\ndefault_promotion = \"N\"").unwrap();
    assert_eq!(config.promotion_kind().unwrap(), PieceKind::Knight);

    assert!(PlayConfig::from_toml("[game]\ndefault_promotion = \"k\"").is_err());
    assert!(PlayConfig::from_toml("[game]\ndefault_promotion = \"qq\"").is_err());
}

#[test]
fn test_malformed_toml_is_an_error() {
    assert!(PlayConfig::from_toml("[display\nunicode = true").is_err());
    assert!(PlayConfig::from_toml("[display]\nunicode = \"yes\"").is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = PlayConfig::resolve(Some(Path::new("does/not/exist.toml"))).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.toml"));
}
