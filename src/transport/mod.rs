//! Transport layer for talking to the payment API over HTTP.
//!
//! This module provides:
//! - Request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The transport abstraction ([`HttpClient`])
//! - The production transport built on reqwest ([`ReqwestClient`])
//! - Low-level transport failures ([`HttpError`])
//!
//! Nothing here knows about API methods or response schemas; the
//! [`client`](crate::client) layer builds requests and interprets responses.

mod client;
mod error;
mod http;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
pub(crate) mod mock;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
