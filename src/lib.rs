//! Bitpapa Pay: typed async client for the Bitpapa cryptocurrency payment API.
//!
//! Every API operation is described by an [`ApiMethod`], turned into a
//! [`MethodDescriptor`] and executed by one shared [`Executor`] that owns
//! the client's session, injects the auth and content headers and
//! normalizes failures into [`ApiError`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod method;
pub mod models;
pub mod transport;

pub use client::{AccessToken, BitpapaClient, ClientConfig, Executor};
pub use error::{ApiError, ApiFailure, Error, Result};
pub use method::{ApiMethod, MethodDescriptor, Verb};
