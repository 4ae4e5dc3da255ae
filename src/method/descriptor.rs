//! Method descriptor value type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// HTTP verb of an API operation.
///
/// The API only uses GET and POST; anything else is rejected when
/// converting from a string or an [`http::Method`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Query-string request
    Get,
    /// JSON-body request
    Post,
}

impl Verb {
    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Verb> for http::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Self::GET,
            Verb::Post => Self::POST,
        }
    }
}

impl TryFrom<&http::Method> for Verb {
    type Error = Error;

    fn try_from(method: &http::Method) -> Result<Self> {
        if *method == http::Method::GET {
            Ok(Self::Get)
        } else if *method == http::Method::POST {
            Ok(Self::Post)
        } else {
            Err(Error::UnsupportedVerb(method.to_string()))
        }
    }
}

impl FromStr for Verb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            _ => Err(Error::UnsupportedVerb(s.to_string())),
        }
    }
}

/// Ordered query parameters whose values may be absent.
///
/// Absent values are kept so a descriptor mirrors its operation's full
/// parameter list; [`QueryParams::present`] yields only the ones that
/// are actually sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a parameter.
    pub fn push<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        self.entries
            .push((name.into(), value.map(|v| v.to_string())));
    }

    /// Returns the value of a parameter, `None` if missing or absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Iterates over parameters that have a value, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(n, v)| v.as_deref().map(|v| (n.as_str(), v)))
    }

    /// Number of parameters, absent ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameters were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable transport shape of one API call.
///
/// Built fresh for every call by [`ApiMethod::descriptor`] and consumed by
/// the request executor. GET descriptors carry [`QueryParams`]; POST
/// descriptors carry a JSON payload.
///
/// [`ApiMethod::descriptor`]: super::ApiMethod::descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    endpoint: String,
    verb: Verb,
    query: QueryParams,
    payload: Option<serde_json::Value>,
    authenticated: bool,
}

impl MethodDescriptor {
    /// Creates an authenticated GET descriptor with no parameters.
    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            verb: Verb::Get,
            query: QueryParams::new(),
            payload: None,
            authenticated: true,
        }
    }

    /// Creates an authenticated POST descriptor with `payload` as JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Payload`] if `payload` cannot be represented as JSON.
    pub fn post<P: Serialize>(endpoint: impl Into<String>, payload: &P) -> Result<Self> {
        let payload = serde_json::to_value(payload).map_err(Error::Payload)?;

        Ok(Self {
            endpoint: endpoint.into(),
            verb: Verb::Post,
            query: QueryParams::new(),
            payload: Some(payload),
            authenticated: true,
        })
    }

    /// Adds a query parameter; `None` values are declared but never sent.
    #[must_use]
    pub fn with_param<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        self.query.push(name, value);
        self
    }

    /// Marks the operation as not using the access token header.
    #[must_use]
    pub const fn public(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// Endpoint path relative to the API origin.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// HTTP verb.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        self.verb
    }

    /// Declared query parameters.
    #[must_use]
    pub const fn query(&self) -> &QueryParams {
        &self.query
    }

    /// JSON payload for POST descriptors.
    #[must_use]
    pub const fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    /// Whether the access token header is sent with this call.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
