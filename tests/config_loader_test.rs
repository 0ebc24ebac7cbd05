#[cfg(test)]
mod tests {
    use cloudnix_onboard::cli::commands::check_config::CheckConfigCommand;
    use cloudnix_onboard::cli::commands::themes::ThemesCommand;
    use cloudnix_onboard::config::{ConfigLoader, ConfigSource, OnboardConfig};
    use cloudnix_onboard::OnboardError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const CUSTOM_CONFIG: &str = r#"
brand: Acme
themes:
  - id: retro
    name: Retro
    description: Pixel fonts and warm colors
  - id: mono
    name: Monochrome
product_types: [Gadget, Gizmo]
product_categories: [Toys]
validation:
  product_name_min: 3
timings:
  notification_dismiss_ms: 1500
"#;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ConfigLoader::parse("   \n").unwrap();
        assert_eq!(config.brand, "Cloudnix");
        assert_eq!(config.themes.len(), 4);
        assert_eq!(config.validation.product_name_min, 2);
        assert_eq!(config.validation.description_max, 200);
        assert_eq!(config.timings.completion_delay_ms, 2000);
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let config = ConfigLoader::parse(CUSTOM_CONFIG).unwrap();

        assert_eq!(config.brand, "Acme");
        let ids: Vec<&str> = config.themes.iter().map(|theme| theme.id.as_str()).collect();
        assert_eq!(ids, vec!["retro", "mono"]);
        assert_eq!(config.themes[1].display_name, "Monochrome");
        assert_eq!(config.themes[1].description, "");
        assert_eq!(config.product_types, vec!["Gadget", "Gizmo"]);
        assert_eq!(config.validation.product_name_min, 3);
        assert_eq!(config.validation.description_max, 200);
        assert_eq!(config.timings.notification_dismiss_ms, 1500);
        assert_eq!(config.timings.notification_show_ms, 100);
    }

    #[test]
    fn test_rejects_duplicate_theme_ids() {
        let yaml = r#"
themes:
  - id: same
    name: One
  - id: same
    name: Two
"#;
        let err = ConfigLoader::parse(yaml).unwrap_err();
        assert!(matches!(err, OnboardError::Config(ref message) if message.contains("same")));
    }

    #[test]
    fn test_rejects_empty_lists() {
        assert!(ConfigLoader::parse("themes: []").is_err());
        assert!(ConfigLoader::parse("product_types: []").is_err());
        assert!(ConfigLoader::parse("product_categories: []").is_err());
        assert!(ConfigLoader::parse("brand: '  '").is_err());
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = ConfigLoader::parse("themes: {not: [a list").unwrap_err();
        assert!(matches!(err, OnboardError::Yaml(_)));
    }

    #[test]
    fn test_explicit_path_wins() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("explicit.yaml");
        let user = temp_dir.path().join("onboard.yaml");
        fs::write(&explicit, CUSTOM_CONFIG).unwrap();
        fs::write(&user, "brand: User").unwrap();

        let loader = ConfigLoader::with_user_config(Some(user));
        let (config, source) = loader.load(Some(&explicit)).unwrap();

        assert_eq!(config.brand, "Acme");
        assert_eq!(source, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn test_user_config_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("onboard.yaml");
        fs::write(&user, "brand: User").unwrap();

        let loader = ConfigLoader::with_user_config(Some(user.clone()));
        let (config, source) = loader.load(None).unwrap();

        assert_eq!(config.brand, "User");
        assert_eq!(source, ConfigSource::User(user));
    }

    #[test]
    fn test_defaults_when_nothing_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ConfigLoader::with_user_config(Some(temp_dir.path().join("absent.yaml")));

        let (config, source) = loader.load(None).unwrap();
        assert_eq!(config.brand, "Cloudnix");
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(source.to_string(), "built-in defaults");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ConfigLoader::with_user_config(None);

        let err = loader
            .load(Some(&temp_dir.path().join("nope.yaml")))
            .unwrap_err();
        assert!(matches!(err, OnboardError::Config(ref message) if message.contains("nope.yaml")));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "brand: [unclosed").unwrap();

        let err = ConfigLoader::load_file(&path).unwrap_err();
        assert!(matches!(err, OnboardError::Config(ref message) if message.contains("broken.yaml")));
    }

    #[test]
    fn test_themes_command_output() {
        let config = ConfigLoader::parse(CUSTOM_CONFIG).unwrap();

        let text = ThemesCommand::new(config.clone(), "text".to_string())
            .render()
            .unwrap();
        assert_eq!(
            text,
            "retro  Retro - Pixel fonts and warm colors\nmono   Monochrome - "
        );

        let json = ThemesCommand::new(config.clone(), "json".to_string())
            .render()
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["id"], "retro");
        assert_eq!(parsed[0]["name"], "Retro");

        assert!(ThemesCommand::new(config, "xml".to_string()).render().is_err());
    }

    #[test]
    fn test_check_config_summary() {
        let summary =
            CheckConfigCommand::new(OnboardConfig::default(), ConfigSource::Defaults).summary();

        assert!(summary.starts_with("✓ Configuration OK (built-in defaults)"));
        assert!(summary.contains("Brand:              Cloudnix"));
        assert!(summary.contains("Themes:             4"));
        assert!(summary.contains("min 2 / max 200 characters"));
    }
}
