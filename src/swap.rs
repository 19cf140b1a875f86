//! Swap modifiers for the `HX-Reswap` header.
//!
//! A [`SwapModifier`] is one space-separated token of an `hx-swap` value. The typed
//! constructors only ever produce tokens htmx understands:
//!
//! - a [`SwapStrategy`] such as `innerHTML` or `delete`
//! - timing: `swap:<n><ms|s|m>`, `settle:<n><ms|s|m>`
//! - scrolling: `scroll:<top|bottom|selector>`, `show:<top|bottom|selector>`,
//!   `focus-scroll:<bool>`
//!
//! Converting from a string performs no validation. htmx ignores tokens it does not know, and
//! newer htmx releases keep adding modifiers, so the raw form stays available.
//!
//! ```rust
//! use core::time::Duration;
//! use htmx_kit::swap::{ScrollTarget, SwapModifier, SwapStrategy};
//!
//! assert_eq!(SwapModifier::from(SwapStrategy::OuterHtml).as_str(), "outerHTML");
//! assert_eq!(SwapModifier::swap(Duration::from_secs(1)).as_str(), "swap:1s");
//! assert_eq!(SwapModifier::settle(Duration::from_millis(250)).as_str(), "settle:250ms");
//! assert_eq!(SwapModifier::scroll(ScrollTarget::Bottom).as_str(), "scroll:bottom");
//! assert_eq!(SwapModifier::show("#top-bar").as_str(), "show:#top-bar");
//! assert_eq!(SwapModifier::focus_scroll(false).as_str(), "focus-scroll:false");
//! ```
use alloc::{
    format,
    string::{String, ToString},
};
use core::{fmt, time::Duration};

/// How the response content replaces content on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapStrategy {
    /// Replace the inner HTML of the target element.
    InnerHtml,
    /// Replace the entire target element.
    OuterHtml,
    /// Insert before the target element.
    BeforeBegin,
    /// Insert before the first child of the target element.
    AfterBegin,
    /// Insert after the last child of the target element.
    BeforeEnd,
    /// Insert after the target element.
    AfterEnd,
    /// Delete the target element regardless of the response.
    Delete,
    /// Do not append content from the response.
    None,
}

impl SwapStrategy {
    /// Returns the token htmx uses for this strategy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InnerHtml => "innerHTML",
            Self::OuterHtml => "outerHTML",
            Self::BeforeBegin => "beforebegin",
            Self::AfterBegin => "afterbegin",
            Self::BeforeEnd => "beforeend",
            Self::AfterEnd => "afterend",
            Self::Delete => "delete",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SwapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where `scroll:` and `show:` modifiers point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScrollTarget {
    /// The top of the target element.
    Top,
    /// The bottom of the target element.
    Bottom,
    /// An element matched by a CSS selector, optionally followed by `:top` or `:bottom`.
    Selector(String),
}

impl ScrollTarget {
    fn as_str(&self) -> &str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Selector(selector) => selector,
        }
    }
}

impl From<&str> for ScrollTarget {
    fn from(target: &str) -> Self {
        match target {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            selector => Self::Selector(selector.to_string()),
        }
    }
}

impl From<String> for ScrollTarget {
    fn from(target: String) -> Self {
        match target.as_str() {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            _ => Self::Selector(target),
        }
    }
}

/// One token of an `HX-Reswap` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapModifier(String);

impl SwapModifier {
    /// Delay between receiving the response and swapping it in, as `swap:<time>`.
    ///
    /// The delay is rounded to the nearest millisecond.
    pub fn swap(delay: Duration) -> Self {
        Self(format!("swap:{}", format_duration(delay)))
    }

    /// Delay between the swap and the settle step, as `settle:<time>`, rounded like
    /// [`swap`](Self::swap).
    pub fn settle(delay: Duration) -> Self {
        Self(format!("settle:{}", format_duration(delay)))
    }

    /// Scroll the target after the swap, as `scroll:<target>`.
    pub fn scroll(target: impl Into<ScrollTarget>) -> Self {
        Self(format!("scroll:{}", target.into().as_str()))
    }

    /// Scroll the viewport to show the target, as `show:<target>`.
    pub fn show(target: impl Into<ScrollTarget>) -> Self {
        Self(format!("show:{}", target.into().as_str()))
    }

    /// Whether focused inputs scroll into view, as `focus-scroll:<bool>`.
    pub fn focus_scroll(enabled: bool) -> Self {
        Self(format!("focus-scroll:{enabled}"))
    }

    /// Returns the token as written into the header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// htmx parses `<n>ms`, `<n>s` and `<n>m`; the largest unit that divides evenly wins.
// Sub-millisecond parts round to the nearest millisecond, half up.
fn format_duration(delay: Duration) -> String {
    let millis = (delay.as_nanos() + 500_000) / 1_000_000;
    if millis != 0 && millis % 60_000 == 0 {
        format!("{}m", millis / 60_000)
    } else if millis != 0 && millis % 1_000 == 0 {
        format!("{}s", millis / 1_000)
    } else {
        format!("{millis}ms")
    }
}

impl From<SwapStrategy> for SwapModifier {
    fn from(strategy: SwapStrategy) -> Self {
        Self(strategy.as_str().to_string())
    }
}

impl From<&str> for SwapModifier {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for SwapModifier {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&SwapModifier> for SwapModifier {
    fn from(modifier: &SwapModifier) -> Self {
        modifier.clone()
    }
}

impl AsRef<str> for SwapModifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SwapModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
