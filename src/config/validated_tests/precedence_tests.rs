//! Tests for CLI vs TOML precedence rules.

use std::time::Duration;

use super::*;

mod cli_precedence {
    use super::*;

    #[test]
    fn cli_token_overrides_toml() {
        let cli = cli(&["--token", "from-cli", "transactions"]);
        let toml = toml(
            r#"
            [api]
            access_token = "from-file"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.client.access_token.unwrap().expose(), "from-cli");
    }

    #[test]
    fn cli_base_url_overrides_toml() {
        let cli = cli(&["--base-url", "https://cli.bitpapa.test", "rates"]);
        let toml = toml(
            r#"
            [api]
            base_url = "https://toml.bitpapa.test"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.client.base_url.as_str(), "https://cli.bitpapa.test/");
    }

    #[test]
    fn cli_timeout_overrides_toml() {
        let cli = cli(&["--timeout", "5", "rates"]);
        let toml = toml(
            r"
            [api]
            timeout = 60
        ",
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn cli_user_agent_overrides_toml() {
        let cli = cli(&["--user-agent", "cli/1.0", "rates"]);
        let toml = toml(
            r#"
            [api]
            user_agent = "toml/1.0"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.client.user_agent, "cli/1.0");
    }
}

mod toml_fallback {
    use super::*;

    #[test]
    fn toml_values_used_when_cli_silent() {
        let cli = cli(&["invoices"]);
        let toml = toml(
            r#"
            [api]
            base_url = "https://toml.bitpapa.test"
            access_token = "from-file"
            user_agent = "toml/1.0"
            timeout = 12
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.client.base_url.as_str(), "https://toml.bitpapa.test/");
        assert_eq!(config.client.access_token.unwrap().expose(), "from-file");
        assert_eq!(config.client.user_agent, "toml/1.0");
        assert_eq!(config.client.timeout, Duration::from_secs(12));
    }
}

mod defaults {
    use super::*;
    use crate::client::DEFAULT_USER_AGENT;

    #[test]
    fn defaults_apply_without_any_source() {
        let cli = cli(&["rates"]);

        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.client.base_url.as_str(), "https://bitpapa.com/");
        assert_eq!(config.client.timeout, Duration::from_secs(30));
        assert_eq!(config.client.user_agent, DEFAULT_USER_AGENT);
        assert!(config.client.access_token.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn command_and_verbosity_carried_through() {
        let cli = cli(&["-v", "rates"]);

        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.command, crate::config::Command::Rates);
        assert!(config.verbose);
    }
}
