//! Tests for TOML configuration parsing.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_bot_section() {
        let toml = r#"
            [bot]
            token = "secret"
            base_url = "http://localhost:9000/send"
            timeout = 5
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.bot.token.as_deref(), Some("secret"));
        assert_eq!(
            config.bot.base_url.as_deref(),
            Some("http://localhost:9000/send")
        );
        assert_eq!(config.bot.timeout, Some(5));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.bot.token.is_none());
        assert!(config.bot.base_url.is_none());
        assert!(config.bot.timeout.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [bot]
            tokn = "typo"
        "#;

        assert!(matches!(
            TomlConfig::parse(toml),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let toml = r#"
            [retry]
            max_attempts = 3
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let toml = r#"
            [bot]
            timeout = "thirty"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[bot]\ntoken = \"from-file\"").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();

        assert_eq!(config.bot.token.as_deref(), Some("from-file"));
    }

    #[test]
    fn load_missing_file_returns_file_read_error() {
        let path = Path::new("nonexistent_config_file_12345.toml");

        assert!(matches!(
            TomlConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        // Token stays commented out so the user has to fill it in
        assert!(config.bot.token.is_none());
        assert_eq!(config.bot.timeout, Some(30));
    }

    #[test]
    fn default_template_documents_every_field() {
        let template = default_config_template();

        assert!(template.contains("token"));
        assert!(template.contains("base_url"));
        assert!(template.contains("timeout"));
    }
}
