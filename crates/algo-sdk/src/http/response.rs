//! HTTP response and envelope decoding
//!
//! Success responses from the Algo API wrap their payload in an envelope
//! separating the data from pagination metadata:
//! `{"data": <payload>, "pagination"?: {...}}`.

use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::types::Pagination;

/// A terminal HTTP response with status, headers and buffered body.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

/// The decoded success envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// The payload (object or sequence)
    pub data: T,
    /// Pagination metadata, present on list responses
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// One page of a list response: decoded items plus pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Decoded records for this page
    pub items: Vec<T>,
    /// Pagination metadata as reported by the server
    pub pagination: Option<Pagination>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Whether the body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Decode the whole body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            Error::ResponseValidation(format!("failed to decode response body: {e}"))
        })
    }

    /// Decode the body as a success envelope.
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<Envelope<T>> {
        if self.body.is_empty() {
            return Err(Error::ResponseValidation(
                "expected an envelope but the response body was empty".to_string(),
            ));
        }
        self.json()
    }

    /// Decode the envelope and return its `data` payload.
    pub fn data<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(self.envelope::<T>()?.data)
    }

    /// Decode the envelope's `data` payload, tolerating an absent body.
    ///
    /// An empty body decodes to `None`, never an error.
    pub fn optional_data<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if self.body.is_empty() {
            return Ok(None);
        }
        self.data().map(Some)
    }

    /// Decode a list envelope into a [`Page`] of typed records.
    pub fn page<T: DeserializeOwned>(&self) -> Result<Page<T>> {
        let envelope = self.envelope::<Vec<T>>()?;
        Ok(Page {
            items: envelope.data,
            pagination: envelope.pagination,
        })
    }
}
