//! Tests for configuration loading from files.

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, tempdir};

use super::*;
use crate::config::write_default_config;

mod config_load {
    use super::*;

    #[test]
    fn explicit_config_file_is_read() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [api]
            access_token = "from-file"
        "#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();
        let cli = cli(&["--config", path, "transactions"]);

        let config = ValidatedConfig::load_with_default(&cli, None).unwrap();

        assert_eq!(config.client.access_token.unwrap().expose(), "from-file");
    }

    #[test]
    fn missing_explicit_config_file_returns_error() {
        let cli = cli(&["--config", "nonexistent_config_file_12345.toml", "rates"]);

        let result = ValidatedConfig::load_with_default(&cli, None);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn default_file_is_used_when_present() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\naccess_token = \"default-file\"\n").unwrap();
        let cli = cli(&["invoices"]);

        let config = ValidatedConfig::load_with_default(&cli, Some(&path)).unwrap();

        assert_eq!(config.client.access_token.unwrap().expose(), "default-file");
    }

    #[test]
    fn absent_default_file_is_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cli = cli(&["rates"]);

        let config = ValidatedConfig::load_with_default(&cli, Some(&path)).unwrap();

        assert!(config.client.access_token.is_none());
    }

    #[test]
    fn explicit_config_wins_over_default_file() {
        let dir = tempdir().unwrap();
        let default_path = dir.path().join("default.toml");
        fs::write(&default_path, "[api]\naccess_token = \"default-file\"\n").unwrap();
        let explicit_path = dir.path().join("explicit.toml");
        fs::write(&explicit_path, "[api]\naccess_token = \"explicit-file\"\n").unwrap();
        let cli = cli(&["--config", explicit_path.to_str().unwrap(), "invoices"]);

        let config = ValidatedConfig::load_with_default(&cli, Some(&default_path)).unwrap();

        assert_eq!(config.client.access_token.unwrap().expose(), "explicit-file");
    }
}

mod init {
    use super::*;

    #[test]
    fn written_template_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bitpapa-pay.toml");

        write_default_config(&path).unwrap();
        let toml = TomlConfig::load(&path).unwrap();

        assert_eq!(toml.api.timeout, Some(30));
    }

    #[test]
    fn write_to_missing_directory_returns_error() {
        let path = Path::new("/nonexistent-dir-12345/bitpapa-pay.toml");

        let result = write_default_config(path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
