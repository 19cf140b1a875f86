//! The request/response adapter.
//!
//! [`HxHeaders`] decodes the htmx request headers once and then writes htmx response headers
//! into a caller-owned container. Directives only make sense to htmx, so on a request that did
//! not come from htmx every directive writes nothing. The exception is [`HxHeaders::redirect`],
//! which falls back to a plain `303 See Other` redirect that any browser follows.
//!
//! # Examples
//!
//! ```rust
//! use htmx_kit::{HxHeaders, StatusCode};
//! use http::HeaderMap;
//!
//! // A full page navigation.
//! let mut response = http::Response::new(());
//! let mut hx = HxHeaders::new(&HeaderMap::new(), &mut response);
//! hx.retarget("#errors")?;
//! hx.redirect("/login")?;
//!
//! assert_eq!(response.status(), StatusCode::SEE_OTHER);
//! assert_eq!(response.headers()["location"], "/login");
//! assert!(!response.headers().contains_key("hx-retarget"));
//! # Ok::<(), htmx_kit::Error>(())
//! ```
use alloc::{string::ToString, vec::Vec};
use core::fmt;
use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::{
    header::canonical,
    headers::{HeaderSink, HeaderSource},
    request::RequestInfo,
    response::{Location, TriggerTiming, UrlUpdate},
    swap::SwapModifier,
    Error, Result,
};

/// Reads htmx request headers and writes htmx response headers.
///
/// One adapter serves one request/response pair. The response headers are borrowed mutably for
/// the adapter's lifetime `'r`, and are modified in place.
#[derive(Default)]
pub struct HxHeaders<'r> {
    state: Option<RequestInfo>,
    response: Option<&'r mut dyn HeaderSink>,
    status: Option<StatusCode>,
}

impl fmt::Debug for HxHeaders<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HxHeaders")
            .field("state", &self.state)
            .field("has_response", &self.response.is_some())
            .field("status", &self.status)
            .finish()
    }
}

impl<'r> HxHeaders<'r> {
    /// Creates an adapter over request headers and the response headers to write.
    pub fn new<S, R>(request: &S, response: &'r mut R) -> Self
    where
        S: HeaderSource + ?Sized,
        R: HeaderSink + 'r,
    {
        Self::from_request(request).with_response(response)
    }

    /// Creates an adapter that only decodes request headers.
    ///
    /// Supply response headers with [`with_response`](Self::with_response) or
    /// [`set_response_headers`](Self::set_response_headers) before issuing directives.
    pub fn from_request<S: HeaderSource + ?Sized>(request: &S) -> Self {
        let mut hx = Self::default();
        hx.set_request_headers(request);
        hx
    }

    /// Sets the response headers and returns the adapter.
    pub fn with_response<R: HeaderSink + 'r>(mut self, response: &'r mut R) -> Self {
        self.set_response_headers(response);
        self
    }

    /// Decodes the request headers, replacing whatever an earlier call decoded.
    pub fn set_request_headers<S: HeaderSource + ?Sized>(&mut self, request: &S) {
        self.state = RequestInfo::from_headers(request);
        log!(debug, htmx = self.state.is_some(), "decoded request headers");
    }

    /// Points the adapter at a different response header container.
    pub fn set_response_headers<R: HeaderSink + 'r>(&mut self, response: &'r mut R) {
        let response: &'r mut dyn HeaderSink = response;
        self.response = Some(response);
    }

    /// Whether the request was issued by htmx (`HX-Request: true`).
    pub const fn is_htmx(&self) -> bool {
        self.state.is_some()
    }

    /// The decoded request headers, `None` for requests not issued by htmx.
    pub const fn state(&self) -> Option<&RequestInfo> {
        self.state.as_ref()
    }

    /// See [`RequestInfo::boosted`].
    pub fn boosted(&self) -> Option<bool> {
        self.state.as_ref().map(RequestInfo::boosted)
    }

    /// See [`RequestInfo::history_restore_request`].
    pub fn history_restore_request(&self) -> Option<bool> {
        self.state.as_ref().map(RequestInfo::history_restore_request)
    }

    /// See [`RequestInfo::current_url`].
    pub fn current_url(&self) -> Option<&str> {
        self.state.as_ref().and_then(RequestInfo::current_url)
    }

    /// See [`RequestInfo::prompt`].
    pub fn prompt(&self) -> Option<&str> {
        self.state.as_ref().and_then(RequestInfo::prompt)
    }

    /// See [`RequestInfo::target_id`].
    pub fn target_id(&self) -> Option<&str> {
        self.state.as_ref().and_then(RequestInfo::target_id)
    }

    /// See [`RequestInfo::trigger_id`].
    pub fn trigger_id(&self) -> Option<&str> {
        self.state.as_ref().and_then(RequestInfo::trigger_id)
    }

    /// See [`RequestInfo::trigger_name`].
    pub fn trigger_name(&self) -> Option<&str> {
        self.state.as_ref().and_then(RequestInfo::trigger_name)
    }

    /// The response headers written so far.
    pub fn response_headers(&self) -> Option<&(dyn HeaderSink + 'r)> {
        self.response.as_deref()
    }

    /// The status a directive asked for, if any.
    ///
    /// Only set by the `303 See Other` fallback of [`redirect`](Self::redirect). Containers
    /// without a status of their own rely on the caller reading it from here.
    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn directed(&self, header: &str) -> bool {
        if self.state.is_none() {
            log!(debug, header, "skipping htmx directive for a non-htmx request");
            return false;
        }
        true
    }

    /// Client-side redirect without a full page reload (`HX-Location`).
    ///
    /// htmx issues a request to the path and pushes it into history, as if following an
    /// `hx-boost` link. A context object can choose the target, swap, values and so on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingLocationPath`] when a context has no `path` entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use htmx_kit::{HxHeaders, LocationOptions};
    /// use http::HeaderMap;
    ///
    /// let mut response = HeaderMap::new();
    /// let mut hx = HxHeaders::new(&[("HX-Request", "true")], &mut response);
    /// hx.location(LocationOptions::new("/test2").target("#testdiv"))?;
    ///
    /// assert_eq!(response["hx-location"], r##"{"path":"/test2","target":"#testdiv"}"##);
    /// # Ok::<(), htmx_kit::Error>(())
    /// ```
    pub fn location(&mut self, location: impl Into<Location>) -> Result<()> {
        if !self.directed(canonical::HX_LOCATION) {
            return Ok(());
        }
        let value = location.into().into_value()?;
        self.insert_response_header(canonical::HX_LOCATION, &value)
    }

    /// Pushes a URL into the browser history (`HX-Push-Url`).
    ///
    /// [`UrlUpdate::Disabled`] keeps the history as it is.
    pub fn push_url(&mut self, url: impl Into<UrlUpdate>) -> Result<()> {
        if !self.directed(canonical::HX_PUSH_URL) {
            return Ok(());
        }
        self.insert_response_header(canonical::HX_PUSH_URL, url.into().as_str())
    }

    /// Replaces the current URL in the location bar without a new history entry
    /// (`HX-Replace-Url`).
    ///
    /// [`UrlUpdate::Disabled`] keeps the current URL.
    pub fn replace_url(&mut self, url: impl Into<UrlUpdate>) -> Result<()> {
        if !self.directed(canonical::HX_REPLACE_URL) {
            return Ok(());
        }
        self.insert_response_header(canonical::HX_REPLACE_URL, url.into().as_str())
    }

    /// Redirects to `url`.
    ///
    /// htmx requests get `HX-Redirect`. Any other request gets `Location` and the status is set
    /// to `303 See Other`, so a plain form post or link lands on the same page.
    pub fn redirect(&mut self, url: &str) -> Result<()> {
        if self.is_htmx() {
            return self.insert_response_header(canonical::HX_REDIRECT, url);
        }
        log!(debug, url, "redirecting non-htmx request with 303 See Other");
        self.insert_response_header(canonical::LOCATION, url)?;
        self.set_status(StatusCode::SEE_OTHER)
    }

    /// Makes the client do a full refresh of the page (`HX-Refresh`).
    pub fn refresh(&mut self) -> Result<()> {
        if !self.directed(canonical::HX_REFRESH) {
            return Ok(());
        }
        self.insert_response_header(canonical::HX_REFRESH, "true")
    }

    /// Overrides how the response is swapped (`HX-Reswap`).
    ///
    /// Repeated modifiers are sent once, in the order they first appear.
    ///
    /// ```rust
    /// use htmx_kit::{swap::SwapStrategy, HxHeaders, SwapModifier};
    /// use core::time::Duration;
    ///
    /// let mut response: Vec<(String, String)> = Vec::new();
    /// let mut hx = HxHeaders::new(&[("HX-Request", "true")], &mut response);
    /// hx.reswap([
    ///     SwapModifier::from(SwapStrategy::InnerHtml),
    ///     SwapModifier::swap(Duration::from_secs(1)),
    ///     SwapModifier::from("innerHTML"),
    /// ])?;
    ///
    /// assert_eq!(response, [("HX-Reswap".to_string(), "innerHTML swap:1s".to_string())]);
    /// # Ok::<(), htmx_kit::Error>(())
    /// ```
    pub fn reswap<I>(&mut self, modifiers: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<SwapModifier>,
    {
        if !self.directed(canonical::HX_RESWAP) {
            return Ok(());
        }
        let mut unique: Vec<SwapModifier> = Vec::new();
        for modifier in modifiers {
            let modifier = modifier.into();
            if !unique.contains(&modifier) {
                unique.push(modifier);
            }
        }
        let value = unique
            .iter()
            .map(SwapModifier::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        self.insert_response_header(canonical::HX_RESWAP, value.as_str())
    }

    /// Swaps the response into the element matched by `selector` instead of the original
    /// target (`HX-Retarget`).
    pub fn retarget(&mut self, selector: &str) -> Result<()> {
        if !self.directed(canonical::HX_RETARGET) {
            return Ok(());
        }
        self.insert_response_header(canonical::HX_RETARGET, selector)
    }

    /// Triggers client-side events as soon as the response is received (`HX-Trigger`).
    ///
    /// `events` maps event names to their details and is sent as JSON. A plain string is sent
    /// as-is, which htmx reads as a comma-separated list of event names.
    pub fn trigger<T: Serialize + ?Sized>(&mut self, events: &T) -> Result<()> {
        self.trigger_with(events, TriggerTiming::Immediate)
    }

    /// Triggers client-side events at the given point of the swap cycle.
    ///
    /// ```rust
    /// use htmx_kit::HxHeaders;
    /// use serde_json::json;
    /// use std::collections::BTreeMap;
    ///
    /// let mut response: BTreeMap<String, String> = BTreeMap::new();
    /// let mut hx = HxHeaders::new(&[("HX-Request", "true")], &mut response);
    /// hx.trigger_with(&json!({"showMessage": "Saved"}), "afterSettle")?;
    ///
    /// assert_eq!(response["HX-Trigger-After-Settle"], r#"{"showMessage":"Saved"}"#);
    /// # Ok::<(), htmx_kit::Error>(())
    /// ```
    pub fn trigger_with<T: Serialize + ?Sized>(
        &mut self,
        events: &T,
        timing: impl Into<TriggerTiming>,
    ) -> Result<()> {
        let header = timing.into().header_name();
        if !self.directed(header) {
            return Ok(());
        }
        self.insert_response_header(header, events)
    }

    /// Writes a response header whether or not the request came from htmx.
    ///
    /// Strings are written as they are; any other value is serialized to compact JSON.
    ///
    /// # Errors
    ///
    /// Fails when no response headers were supplied, when `value` cannot be serialized, or when
    /// the container rejects the name or value.
    pub fn insert_response_header<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
    ) -> Result<()> {
        let value = match serde_json::to_value(value)? {
            Value::String(text) => text,
            other => other.to_string(),
        };
        let response = self
            .response
            .as_deref_mut()
            .ok_or(Error::MissingResponseHeaders)?;
        log!(trace, header = name, value = value.as_str(), "writing response header");
        response.put_header(name, value)
    }

    fn set_status(&mut self, status: StatusCode) -> Result<()> {
        let response = self
            .response
            .as_deref_mut()
            .ok_or(Error::MissingResponseHeaders)?;
        response.set_status(status);
        self.status = Some(status);
        Ok(())
    }
}
