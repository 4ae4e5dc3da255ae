//! Headers attached to every request of a client.

use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue};

use super::config::{AccessToken, ClientConfig};

/// Header carrying the merchant access token.
pub const ACCESS_TOKEN: HeaderName = HeaderName::from_static("x-access-token");

/// Produces the fixed header set of one client.
///
/// A pure function of the client configuration: the same three entries
/// every time (the token only when one is configured).
#[derive(Debug, Clone)]
pub struct HeaderProvider {
    user_agent: HeaderValue,
    access_token: Option<AccessToken>,
}

impl HeaderProvider {
    /// Creates a provider from a user agent and an optional token.
    #[must_use]
    pub const fn new(user_agent: HeaderValue, access_token: Option<AccessToken>) -> Self {
        Self {
            user_agent,
            access_token,
        }
    }

    /// Creates a provider from the client configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.user_agent.clone(), config.access_token.clone())
    }

    /// Builds the header map.
    #[must_use]
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, self.user_agent.clone());
        if let Some(token) = &self.access_token {
            headers.insert(ACCESS_TOKEN, token.header_value().clone());
        }
        headers
    }
}
