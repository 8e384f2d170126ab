//! Tests for the type-safe configuration builder pattern

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tempfile::TempDir;
use wp2hugo::config::ConvertConfig;

#[test]
fn test_builder_requires_export_path_and_site_dir() -> Result<()> {
    // This should not compile if uncommented - both required fields missing
    // let config = ConvertConfig::builder().build();

    // This should also not compile - missing site_dir
    // let config = ConvertConfig::builder()
    //     .export_path("export.xml")
    //     .build();

    let temp_dir = TempDir::new()?;
    let config = ConvertConfig::builder()
        .export_path(temp_dir.path().join("export.xml"))
        .site_dir(temp_dir.path())
        .build()?;

    assert_eq!(config.export_path(), temp_dir.path().join("export.xml"));
    assert_eq!(config.site_dir(), temp_dir.path());
    Ok(())
}

#[test]
fn test_builder_optional_fields_have_defaults() -> Result<()> {
    let config = ConvertConfig::builder()
        .export_path("export.xml")
        .site_dir("site")
        .build()?;

    assert_eq!(config.content_dir(), Path::new("content"));
    assert_eq!(config.post_section(), "blog");
    assert_eq!(config.scaffold_command(), Some("hugo"));
    assert!(config.download_assets());
    assert_eq!(config.max_fetch_attempts(), 5);
    assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
    assert!(config.user_agent().starts_with("wp2hugo/"));
    Ok(())
}

#[test]
fn test_builder_overrides() -> Result<()> {
    let config = ConvertConfig::builder()
        .export_path("export.xml")
        .site_dir("site")
        .content_dir("pages")
        .highlight_language("rust")
        .allowed_attributes(vec!["href".into(), "title".into()])
        .max_fetch_attempts(2)
        .fetch_backoff(Duration::from_millis(10))
        .user_agent("custom/1.0")
        .build()?;

    assert_eq!(config.content_root(), Path::new("site").join("pages"));
    assert_eq!(config.highlight_language(), "rust");
    assert_eq!(config.allowed_attributes(), ["href".to_string(), "title".to_string()]);
    assert_eq!(config.max_fetch_attempts(), 2);
    assert_eq!(config.fetch_backoff(), Duration::from_millis(10));
    assert_eq!(config.user_agent(), "custom/1.0");
    Ok(())
}

#[test]
fn test_empty_post_section_rejected() {
    let result = ConvertConfig::builder()
        .export_path("export.xml")
        .site_dir("site")
        .post_section("/")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_serializes() -> Result<()> {
    let config = ConvertConfig::builder()
        .export_path("export.xml")
        .site_dir("site")
        .build()?;
    let json = serde_json::to_value(&config)?;
    assert_eq!(json["post_section"], "blog");
    assert_eq!(json["download_assets"], true);
    Ok(())
}
