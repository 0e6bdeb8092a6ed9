use super::*;

#[test]
fn test_defaults() {
    let config = SiteConfig::default();
    assert_eq!(config.catalog.active_threshold, 150.0);
    assert_eq!(config.catalog.throttle_ms, 200);
    assert_eq!(config.catalog.reveal_offset, 400.0);
    assert_eq!(config.catalog.indent_unit, 12);
    assert_eq!(config.theme.post_list_style, PostListStyle::Page);
    assert_eq!(config.theme.not_found_redirect_ms, 3000);
    assert_eq!(config.build.output, PathBuf::from("public"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_str_partial_sections() {
    let config = SiteConfig::from_str(
        r#"
        [site]
        title = "Notes"

        [theme]
        post_list_style = "scroll"

        [catalog]
        throttle_ms = 100
        "#,
    )
    .unwrap();

    assert_eq!(config.site.title, "Notes");
    assert_eq!(config.site.language, "en");
    assert_eq!(config.theme.post_list_style, PostListStyle::Scroll);
    assert_eq!(config.theme.posts_per_page, 12);
    assert_eq!(config.catalog.throttle_ms, 100);
    assert_eq!(config.catalog.active_threshold, 150.0);
}

#[test]
fn test_path_prefix_from_url() {
    let config = SiteConfig::from_str(
        r#"
        [site]
        url = "https://example.github.io/blog/"
        "#,
    )
    .unwrap();

    assert_eq!(config.build.path_prefix, "/blog");
    assert_eq!(config.url_for("/tag/rust"), "/blog/tag/rust");
    assert_eq!(config.url_for("archive"), "/blog/archive");
    assert_eq!(config.asset_url("catalog.js"), "/blog/assets/catalog.js");
}

#[test]
fn test_root_url_has_no_prefix() {
    let config = SiteConfig::from_str("[site]\nurl = \"https://example.com\"").unwrap();
    assert_eq!(config.build.path_prefix, "");
    assert_eq!(config.url_for("/"), "/");
}

#[test]
fn test_unknown_fields_are_collected() {
    let (config, ignored) = SiteConfig::parse_with_ignored(
        r#"
        [site]
        title = "x"
        colour = "red"

        [catalog]
        speed = 3
        "#,
    )
    .unwrap();

    assert_eq!(config.site.title, "x");
    assert_eq!(ignored, vec!["site.colour", "catalog.speed"]);
}

#[test]
fn test_invalid_toml() {
    assert!(SiteConfig::from_str("[site\ntitle = 1").is_err());
}

#[test]
fn test_validation_reports_every_error() {
    let mut config = SiteConfig::default();
    config.site.url = Some("not a url".into());
    config.theme.posts_per_page = 0;
    config.catalog.throttle_ms = 0;
    config.catalog.reveal_offset = -1.0;

    match config.validate() {
        Err(ConfigError::Diagnostics(diag)) => {
            let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
            assert_eq!(
                fields,
                vec![
                    "site.url",
                    "theme.posts_per_page",
                    "catalog.reveal_offset",
                    "catalog.throttle_ms",
                ]
            );
        }
        other => panic!("expected diagnostics, got {other:?}"),
    }
}

#[test]
fn test_paths_are_rooted() {
    let mut config = SiteConfig::default();
    config.set_root(Path::new("/site"));
    assert_eq!(config.output_dir(), PathBuf::from("/site/public"));
    assert_eq!(config.data_path(), PathBuf::from("/site/site.json"));
    assert_eq!(config.assets_dir(), PathBuf::from("/site/public/assets"));
}

#[test]
fn test_roundtrip_default_toml() {
    let text = toml::to_string_pretty(&SiteConfig::default()).unwrap();
    let parsed = SiteConfig::from_str(&text).unwrap();
    assert_eq!(parsed.catalog.indent_unit, 12);
    assert_eq!(parsed.build.data, PathBuf::from("site.json"));
}
