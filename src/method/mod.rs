//! Declarative description of API operations.
//!
//! A [`MethodDescriptor`] captures the transport shape of one call (path,
//! verb, query parameters or JSON payload, whether the access token header
//! is sent). [`ApiMethod`] is the closed set of operations the API offers;
//! each variant turns into a descriptor through a pure constructor.

mod descriptor;
pub mod endpoints;
mod operation;


pub use descriptor::{MethodDescriptor, QueryParams, Verb};
pub use operation::ApiMethod;
