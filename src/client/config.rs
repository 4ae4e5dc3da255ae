//! Client configuration.

use std::fmt;
use std::time::Duration;

use http::HeaderValue;
use http::header::InvalidHeaderValue;
use url::Url;

/// Default API origin.
pub const DEFAULT_BASE_URL: &str = "https://bitpapa.com";

/// Default per-request timeout, enforced by the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent`: `<crate name>/<crate version>`.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Merchant API access token.
///
/// Validated as a header value on construction and marked sensitive, so it
/// is redacted from `Debug` output and traces.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    raw: String,
    value: HeaderValue,
}

impl AccessToken {
    /// Wraps `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if `token` contains characters not allowed in a header.
    pub fn new(token: &str) -> Result<Self, InvalidHeaderValue> {
        let raw = token.trim().to_string();
        let mut value = HeaderValue::from_str(&raw)?;
        value.set_sensitive(true);
        Ok(Self { raw, value })
    }

    /// The token as a header value.
    #[must_use]
    pub const fn header_value(&self) -> &HeaderValue {
        &self.value
    }

    /// The token in clear text, for endpoints that take it in the body.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.raw
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Settings fixed for the lifetime of a client.
///
/// Rotating the token means building a new client: headers are computed
/// once, when the session is created.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin that endpoint paths are joined onto
    pub base_url: Url,
    /// Token sent as `X-Access-Token`; `None` for public endpoints only
    pub access_token: Option<AccessToken>,
    /// `User-Agent` header value
    pub user_agent: HeaderValue,
    /// Transport timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration pointing at the production API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            user_agent: HeaderValue::from_static(DEFAULT_USER_AGENT),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the API origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the access token.
    #[must_use]
    pub fn with_access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the `User-Agent` header.
    ///
    /// # Errors
    ///
    /// Returns an error if `user_agent` is not a valid header value.
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, InvalidHeaderValue> {
        self.user_agent = HeaderValue::from_str(user_agent)?;
        Ok(self)
    }

    /// Sets the transport timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL")
}
