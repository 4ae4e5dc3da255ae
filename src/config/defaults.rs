//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::path::PathBuf;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default config file name written by `init`.
pub const CONFIG_FILE_NAME: &str = "bitpapa-pay.toml";

/// Directory under the platform config dir holding the default config file.
pub const CONFIG_DIR_NAME: &str = "bitpapa-pay";

/// Default config file location: `<config dir>/bitpapa-pay/config.toml`.
///
/// `None` on platforms without a config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}
