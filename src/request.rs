//! Decoding of htmx request headers.
//!
//! htmx marks every request it issues with `HX-Request: true` and describes the element that
//! issued it through a handful of further headers. [`RequestInfo`] is the decoded form of those
//! headers. It only exists for requests carrying the marker: a plain browser navigation has no
//! `RequestInfo` at all, never a partially filled one.
//!
//! # Examples
//!
//! ```rust
//! use htmx_kit::RequestInfo;
//!
//! let headers = [
//!     ("HX-Request", "true"),
//!     ("HX-Boosted", "true"),
//!     ("HX-Trigger-Name", "q"),
//! ];
//! let info = RequestInfo::from_headers(&headers).expect("htmx request");
//! assert!(info.boosted());
//! assert_eq!(info.trigger_name(), Some("q"));
//! assert_eq!(info.prompt(), None);
//!
//! assert!(RequestInfo::from_headers(&[("HX-Request", "True")]).is_none());
//! ```
use alloc::{borrow::Cow, string::String};

use crate::{header::canonical, headers::HeaderSource};

/// Returns `true` if the headers mark a request issued by htmx.
///
/// The marker must be exactly `true`; `True`, `1` or an empty value do not count.
pub fn is_htmx_request<S: HeaderSource + ?Sized>(headers: &S) -> bool {
    flag(headers, canonical::HX_REQUEST)
}

fn flag<S: HeaderSource + ?Sized>(headers: &S, name: &str) -> bool {
    headers.header(name).is_some_and(|value| value == "true")
}

fn text<S: HeaderSource + ?Sized>(headers: &S, name: &str) -> Option<String> {
    headers.header(name).map(Cow::into_owned)
}

/// Everything htmx tells the server about a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RequestInfo {
    boosted: bool,
    history_restore_request: bool,
    current_url: Option<String>,
    prompt: Option<String>,
    target_id: Option<String>,
    trigger_id: Option<String>,
    trigger_name: Option<String>,
}

impl RequestInfo {
    /// Decodes the htmx request headers.
    ///
    /// Returns `None` unless the request carries `HX-Request: true`. Missing flags decode as
    /// `false` and missing text headers as `None`; an empty header stays an empty string.
    pub fn from_headers<S: HeaderSource + ?Sized>(headers: &S) -> Option<Self> {
        if !is_htmx_request(headers) {
            return None;
        }
        Some(Self {
            boosted: flag(headers, canonical::HX_BOOSTED),
            history_restore_request: flag(headers, canonical::HX_HISTORY_RESTORE_REQUEST),
            current_url: text(headers, canonical::HX_CURRENT_URL),
            prompt: text(headers, canonical::HX_PROMPT),
            target_id: text(headers, canonical::HX_TARGET),
            trigger_id: text(headers, canonical::HX_TRIGGER),
            trigger_name: text(headers, canonical::HX_TRIGGER_NAME),
        })
    }

    /// Whether the request came from an element using `hx-boost` (`HX-Boosted`).
    pub const fn boosted(&self) -> bool {
        self.boosted
    }

    /// Whether the request restores history after a local cache miss
    /// (`HX-History-Restore-Request`).
    pub const fn history_restore_request(&self) -> bool {
        self.history_restore_request
    }

    /// The current URL of the browser (`HX-Current-URL`).
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// The user response to an `hx-prompt` (`HX-Prompt`).
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// The `id` of the target element (`HX-Target`).
    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    /// The `id` of the triggering element (`HX-Trigger`).
    pub fn trigger_id(&self) -> Option<&str> {
        self.trigger_id.as_deref()
    }

    /// The `name` of the triggering element (`HX-Trigger-Name`).
    pub fn trigger_name(&self) -> Option<&str> {
        self.trigger_name.as_deref()
    }
}
