//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::client::{AccessToken, ClientConfig, DEFAULT_BASE_URL};

use super::cli::{Cli, Command};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Settings for the API client
    pub client: ClientConfig,

    /// Operation to run
    pub command: Command,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ base_url: {}, token: {}, user_agent: {}, timeout: {}s }}",
            self.client.base_url,
            if self.client.access_token.is_some() {
                "set"
            } else {
                "none"
            },
            self.client.user_agent.to_str().unwrap_or("<binary>"),
            self.client.timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, which take
    /// precedence over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL is invalid
    /// - The token is empty, not a valid header value, or missing for a
    ///   command that needs it
    /// - The user agent is not a valid header value
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let base_url = Self::resolve_base_url(cli, toml)?;
        let access_token = Self::resolve_access_token(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        if access_token.is_none() && cli.command.requires_token() {
            return Err(ConfigError::missing(
                field::ACCESS_TOKEN,
                "Use --token or set api.access_token in config file",
            ));
        }

        let mut client = ClientConfig::new()
            .with_base_url(base_url)
            .with_timeout(timeout);

        if let Some(token) = access_token {
            client = client.with_access_token(token);
        }

        if let Some(user_agent) = Self::resolve_user_agent(cli, toml) {
            client =
                client
                    .with_user_agent(user_agent)
                    .map_err(|e| ConfigError::InvalidUserAgent {
                        value: user_agent.to_string(),
                        reason: e.to_string(),
                    })?;
        }

        Ok(Self {
            client,
            command: cli.command.clone(),
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// Uses `cli.config` if set; otherwise the default config file is read
    /// when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_default(cli, defaults::config_path().as_deref())
    }

    /// Like [`load`](Self::load), with an explicit fallback config path.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_default(cli: &Cli, default_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path: Option<PathBuf> = cli.config.clone().or_else(|| {
            default_path
                .filter(|p| p.is_file())
                .map(Path::to_path_buf)
        });

        let toml = match path {
            Some(ref path) => Some(TomlConfig::load(path)?),
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.base_url.as_deref()))
            .unwrap_or(DEFAULT_BASE_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_access_token(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<AccessToken>, ConfigError> {
        let Some(token) = cli
            .token
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.access_token.as_deref()))
        else {
            return Ok(None);
        };

        if token.trim().is_empty() {
            return Err(ConfigError::InvalidToken {
                reason: "must not be empty".to_string(),
            });
        }

        AccessToken::new(token)
            .map(Some)
            .map_err(|e| ConfigError::InvalidToken {
                reason: e.to_string(),
            })
    }

    fn resolve_user_agent<'a>(cli: &'a Cli, toml: Option<&'a TomlConfig>) -> Option<&'a str> {
        cli.user_agent
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.user_agent.as_deref()))
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.api.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
