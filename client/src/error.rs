//! Error types for the Vantage API client.
//!
//! # Design
//! `Unauthorized` and `NotFound` get dedicated variants because callers
//! frequently distinguish "the token was rejected" and "the segment does not
//! exist" from "the server returned an unexpected status." All other non-2xx
//! responses land in `Http` with the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `VantageClient` constructor and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL is missing an `http://` or `https://` scheme.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// The server returned 401 — the bearer token was rejected.
    #[error("authentication rejected (HTTP 401)")]
    Unauthorized,

    /// The server returned 404 — the requested segment does not exist.
    #[error("segment not found")]
    NotFound,

    /// The server returned a non-2xx status other than 401 or 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
