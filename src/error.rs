//! Error types and utilities.
//!
//! Almost every input htmx accepts is accepted here as well, so errors are rare:
//!
//! - [`Error::MissingLocationPath`] is the one argument error of the protocol: a structured
//!   `HX-Location` value must carry a `path`.
//! - [`Error::MissingResponseHeaders`] means a directive had something to write but no response
//!   headers were supplied.
//! - The remaining variants come from serialization or from [`http::HeaderMap`], which cannot hold
//!   arbitrary names or values.
//!
//! # Examples
//!
//! ```rust
//! use htmx_kit::{Error, StatusCode};
//!
//! let err = Error::MissingLocationPath;
//! assert!(err.is_invalid_argument());
//! assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
//! ```
use http::{
    header::{InvalidHeaderName, InvalidHeaderValue},
    StatusCode,
};

/// The error type for header operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A structured `HX-Location` value did not contain a `path` entry.
    #[error("HX-Location context requires a `path` entry")]
    MissingLocationPath,
    /// A directive was issued before any response headers were supplied.
    #[error("no response headers to write to")]
    MissingResponseHeaders,
    /// A header value could not be serialized to JSON.
    #[error("failed to serialize header value: {0}")]
    Json(#[from] serde_json::Error),
    /// The header name is not valid for an [`http::HeaderMap`].
    #[error(transparent)]
    InvalidHeaderName(#[from] InvalidHeaderName),
    /// The header value is not valid for an [`http::HeaderMap`].
    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}

/// A specialized Result type for header operations.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Returns `true` if the error was caused by an argument the caller passed in.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::MissingLocationPath)
    }

    /// Returns the HTTP status a handler should answer with when this error escapes it.
    ///
    /// Every variant points at a bug in the handler rather than in the client request.
    pub const fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
