//! Values carried by htmx response headers.
//!
//! - [`Location`] and [`LocationOptions`] for `HX-Location`
//! - [`UrlUpdate`] for `HX-Push-Url` and `HX-Replace-Url`
//! - [`TriggerTiming`] to pick between `HX-Trigger`, `HX-Trigger-After-Settle` and
//!   `HX-Trigger-After-Swap`
//!
//! Swap modifiers for `HX-Reswap` live in [`crate::swap`].
use alloc::string::{String, ToString};
use core::{convert::Infallible, str::FromStr};
use serde_json::{Map, Value};

use crate::{header::canonical, Error, Result};

/// The value of an `HX-Location` header.
///
/// Either a bare path, or a context object that mirrors the `htmx.ajax()` options. A context
/// must contain a `path` entry; a context holding nothing but `path` is sent as the bare path.
///
/// # Examples
///
/// ```rust
/// use htmx_kit::{Location, LocationOptions};
/// use serde_json::json;
///
/// let plain = Location::from("/inbox");
/// let typed = Location::from(LocationOptions::new("/inbox").target("#main"));
///
/// let raw = match json!({"path": "/inbox", "swap": "outerHTML"}) {
///     serde_json::Value::Object(context) => Location::from(context),
///     _ => unreachable!(),
/// };
/// assert!(matches!(raw, Location::Context(_)));
/// assert_eq!(plain, Location::Path("/inbox".to_string()));
/// # let _ = typed;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// A path to load, as if following an `hx-boost` link.
    Path(String),
    /// A context object with at least a `path` entry.
    Context(Map<String, Value>),
}

impl Location {
    /// Resolves the value written into the header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingLocationPath`] for a context without `path`.
    pub(crate) fn into_value(self) -> Result<Value> {
        match self {
            Self::Path(path) => Ok(Value::String(path)),
            Self::Context(mut context) => {
                if !context.contains_key("path") {
                    return Err(Error::MissingLocationPath);
                }
                if context.len() == 1 {
                    if let Some(path) = context.remove("path") {
                        return Ok(path);
                    }
                }
                Ok(Value::Object(context))
            }
        }
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for Location {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<Map<String, Value>> for Location {
    fn from(context: Map<String, Value>) -> Self {
        Self::Context(context)
    }
}

impl From<LocationOptions> for Location {
    fn from(options: LocationOptions) -> Self {
        let mut context = Map::new();
        context.insert("path".to_string(), Value::String(options.path));
        let rest = [
            ("source", options.source.map(Value::String)),
            ("event", options.event.map(Value::String)),
            ("handler", options.handler.map(Value::String)),
            ("target", options.target.map(Value::String)),
            ("swap", options.swap.map(Value::String)),
            ("values", options.values),
            ("headers", options.headers),
            ("select", options.select.map(Value::String)),
        ];
        for (key, value) in rest {
            if let Some(value) = value {
                context.insert(key.to_string(), value);
            }
        }
        Self::Context(context)
    }
}

/// Typed builder for an `HX-Location` context.
///
/// Entries are sent in the order `path`, `source`, `event`, `handler`, `target`, `swap`,
/// `values`, `headers`, `select`; unset entries are left out.
///
/// ```rust
/// use htmx_kit::LocationOptions;
/// use serde_json::json;
///
/// let options = LocationOptions::new("/test")
///     .target("#testdiv")
///     .values(json!({"page": 2}));
/// assert_eq!(options.path(), "/test");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationOptions {
    path: String,
    source: Option<String>,
    event: Option<String>,
    handler: Option<String>,
    target: Option<String>,
    swap: Option<String>,
    values: Option<Value>,
    headers: Option<Value>,
    select: Option<String>,
}

impl LocationOptions {
    /// Creates a context that loads `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// The URL the response is loaded from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The source element of the request.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The event that triggered the request.
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// The name of a callback that handles the response HTML.
    pub fn handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    /// The element to swap the response into.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// How the response is swapped in relative to the target.
    pub fn swap(mut self, swap: impl Into<String>) -> Self {
        self.swap = Some(swap.into());
        self
    }

    /// Values to submit with the request.
    pub fn values(mut self, values: impl Into<Value>) -> Self {
        self.values = Some(values.into());
        self
    }

    /// Headers to submit with the request.
    pub fn headers(mut self, headers: impl Into<Value>) -> Self {
        self.headers = Some(headers.into());
        self
    }

    /// Selects the content to swap from the response.
    pub fn select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }
}

/// The value of `HX-Push-Url` and `HX-Replace-Url`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UrlUpdate {
    /// A relative or absolute URL to put in the location bar.
    Url(String),
    /// Leave the browser history untouched, sent as `false`.
    Disabled,
}

impl UrlUpdate {
    /// Returns the header value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Disabled => "false",
        }
    }
}

impl From<&str> for UrlUpdate {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for UrlUpdate {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

/// `None` disables the history update.
impl<T: Into<String>> From<Option<T>> for UrlUpdate {
    fn from(url: Option<T>) -> Self {
        url.map_or(Self::Disabled, |url| Self::Url(url.into()))
    }
}

/// When client-side events named in a trigger header fire.
///
/// Parsing is case-insensitive and never fails: anything other than `aftersettle` or
/// `afterswap` means [`TriggerTiming::Immediate`].
///
/// ```rust
/// use htmx_kit::TriggerTiming;
///
/// assert_eq!(TriggerTiming::from("AfterSettle"), TriggerTiming::AfterSettle);
/// assert_eq!(TriggerTiming::from("later"), TriggerTiming::Immediate);
/// assert_eq!(TriggerTiming::AfterSwap.header_name(), "HX-Trigger-After-Swap");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TriggerTiming {
    /// As soon as the response is received (`HX-Trigger`).
    #[default]
    Immediate,
    /// After the settle step (`HX-Trigger-After-Settle`).
    AfterSettle,
    /// After the swap step (`HX-Trigger-After-Swap`).
    AfterSwap,
}

impl TriggerTiming {
    /// Returns the response header carrying events with this timing.
    pub const fn header_name(self) -> &'static str {
        match self {
            Self::Immediate => canonical::HX_TRIGGER,
            Self::AfterSettle => canonical::HX_TRIGGER_AFTER_SETTLE,
            Self::AfterSwap => canonical::HX_TRIGGER_AFTER_SWAP,
        }
    }

    /// Parses a timing name, falling back to [`TriggerTiming::Immediate`].
    pub fn parse(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("aftersettle") {
            Self::AfterSettle
        } else if mode.eq_ignore_ascii_case("afterswap") {
            Self::AfterSwap
        } else {
            Self::Immediate
        }
    }
}

impl FromStr for TriggerTiming {
    type Err = Infallible;

    fn from_str(mode: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::parse(mode))
    }
}

impl From<&str> for TriggerTiming {
    fn from(mode: &str) -> Self {
        Self::parse(mode)
    }
}

impl From<Option<&str>> for TriggerTiming {
    fn from(mode: Option<&str>) -> Self {
        mode.map_or(Self::Immediate, Self::parse)
    }
}
