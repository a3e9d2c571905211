//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `BadRequest` get dedicated variants because callers want to
//! tell "no such todo" and "the backend rejected my input" apart from an
//! unexpected status. All other non-2xx responses land in `HttpError` with the
//! raw status code and body. Nothing here is retried or recovered locally.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400. Carries the backend's `error` message when
    /// the body has one, otherwise the raw body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned a non-2xx status other than 400 and 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS,
    /// timeout, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Errors raised while loading client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive whole number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
}
