//! HTTP transport layer
//!
//! This module is the single chokepoint through which every resource
//! operation issues an HTTP call: URL assembly, authentication injection,
//! per-attempt timeouts, retry/backoff scheduling and response decoding all
//! live here.

pub use request::RequestBuilder;
pub use response::{Envelope, Page, Response};
pub use transport::{HttpTransport, HttpTransportBuilder};

mod request;
mod response;
mod transport;

#[cfg(test)]
pub(crate) use request::backoff_delay;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
