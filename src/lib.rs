#![deny(unsafe_code)]
#![no_std]
#![warn(missing_docs, missing_debug_implementations)]
//! Typed htmx headers for Rust HTTP servers.
//!
//! htmx talks to the server through HTTP headers: requests say where they came from
//! (`HX-Request`, `HX-Target`, `HX-Trigger`, ...) and responses steer the client
//! (`HX-Location`, `HX-Push-Url`, `HX-Reswap`, `HX-Trigger`, ...). This crate translates between
//! those header strings and typed Rust values. It performs no I/O and owns no connection: the
//! surrounding framework supplies the header containers and sends the response.
//!
//! # Features
//!
//! - **Request decoding** - [`RequestInfo`] holds every htmx request header, and only exists for
//!   requests marked `HX-Request: true`
//! - **Response directives** - [`HxHeaders`] writes one well-known header per method, and stays
//!   silent on requests that did not come from htmx
//! - **Any header container** - [`http::HeaderMap`], [`http::Request`]/[`http::Response`] and
//!   their parts, ordered `(name, value)` lists and string-keyed maps, through the
//!   [`headers::HeaderSource`] and [`headers::HeaderSink`] traits
//! - **Typed values** - [`LocationOptions`], [`UrlUpdate`], [`SwapModifier`] and
//!   [`TriggerTiming`] instead of hand-built header strings
//!
//! # Optional Features
//!
//! - `std` - Header source and sink for `std::collections::HashMap` (enabled by default)
//! - `tracing` - Debug and trace events through the `tracing` crate (enabled by default)
//!
//! # Examples
//!
//! ## Reading the request
//!
//! ```rust
//! use htmx_kit::HxHeaders;
//!
//! let request = http::Request::builder()
//!     .header("HX-Request", "true")
//!     .header("HX-Target", "results")
//!     .body(())
//!     .unwrap();
//!
//! let hx = HxHeaders::from_request(&request);
//! assert!(hx.is_htmx());
//! assert_eq!(hx.target_id(), Some("results"));
//! assert_eq!(hx.boosted(), Some(false));
//! ```
//!
//! ## Steering the client
//!
//! ```rust
//! use htmx_kit::HxHeaders;
//! use http::HeaderMap;
//! use serde_json::json;
//!
//! let request = [("HX-Request", "true")];
//! let mut response = HeaderMap::new();
//!
//! let mut hx = HxHeaders::new(&request, &mut response);
//! hx.push_url("/search?q=rust")?;
//! hx.reswap(["innerHTML", "show:top"])?;
//! hx.trigger(&json!({"resultsLoaded": {"count": 3}}))?;
//!
//! assert_eq!(response["HX-Push-Url"], "/search?q=rust");
//! assert_eq!(response["HX-Reswap"], "innerHTML show:top");
//! assert_eq!(response["HX-Trigger"], r#"{"resultsLoaded":{"count":3}}"#);
//! # Ok::<(), htmx_kit::Error>(())
//! ```
//!
//! ## Plain browser requests
//!
//! ```rust
//! use htmx_kit::HxHeaders;
//!
//! let mut response: Vec<(String, String)> = Vec::new();
//! let mut hx = HxHeaders::new(&[("Accept", "text/html")], &mut response);
//! hx.refresh()?;
//! hx.redirect("/dashboard")?;
//!
//! assert_eq!(hx.status(), Some(htmx_kit::StatusCode::SEE_OTHER));
//! assert_eq!(response, [("Location".to_string(), "/dashboard".to_string())]);
//! # Ok::<(), htmx_kit::Error>(())
//! ```
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod error;
pub use error::{Error, Result};

pub mod header;

pub mod headers;
#[doc(inline)]
pub use headers::{HeaderSink, HeaderSource};

mod hx;
pub use hx::HxHeaders;

pub mod request;
pub use request::{is_htmx_request, RequestInfo};

pub mod response;
pub use response::{Location, LocationOptions, TriggerTiming, UrlUpdate};

pub mod swap;
pub use swap::{SwapModifier, SwapStrategy};

pub use http::StatusCode;
