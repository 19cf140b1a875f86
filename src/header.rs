//! Names of the headers exchanged with htmx.
//!
//! Every name exists twice: as an [`http::HeaderName`] constant at the module root (lowercase,
//! ready for [`http::HeaderMap`] lookups) and as a `&str` in [`canonical`] with the casing used
//! by the htmx documentation.
//!
//! ```rust
//! use htmx_kit::header;
//!
//! assert_eq!(header::HX_REQUEST.as_str(), "hx-request");
//! assert_eq!(header::canonical::HX_REQUEST, "HX-Request");
//! ```
use http::header::HeaderName;

header_names! {
    /// Marks a request issued by htmx. Always `true` when present.
    (HX_REQUEST, "HX-Request", "hx-request");
    /// Set when the request came from an element using `hx-boost`.
    (HX_BOOSTED, "HX-Boosted", "hx-boosted");
    /// Set when the request restores history after a miss in the local history cache.
    (HX_HISTORY_RESTORE_REQUEST, "HX-History-Restore-Request", "hx-history-restore-request");
    /// The current URL of the browser.
    (HX_CURRENT_URL, "HX-Current-URL", "hx-current-url");
    /// The user response to an `hx-prompt`.
    (HX_PROMPT, "HX-Prompt", "hx-prompt");
    /// The `id` of the target element, if it has one.
    (HX_TARGET, "HX-Target", "hx-target");
    /// The `name` of the triggering element, if it has one.
    (HX_TRIGGER_NAME, "HX-Trigger-Name", "hx-trigger-name");
    /// On requests, the `id` of the triggering element. On responses, client-side events to
    /// trigger as soon as the response is received.
    (HX_TRIGGER, "HX-Trigger", "hx-trigger");
    /// Client-side redirect that does not do a full page reload.
    (HX_LOCATION, "HX-Location", "hx-location");
    /// Pushes a new URL into the history stack.
    (HX_PUSH_URL, "HX-Push-Url", "hx-push-url");
    /// Replaces the current URL in the location bar.
    (HX_REPLACE_URL, "HX-Replace-Url", "hx-replace-url");
    /// Client-side redirect to a new location with a full page load.
    (HX_REDIRECT, "HX-Redirect", "hx-redirect");
    /// Full refresh of the page when set to `true`.
    (HX_REFRESH, "HX-Refresh", "hx-refresh");
    /// Overrides how the response is swapped.
    (HX_RESWAP, "HX-Reswap", "hx-reswap");
    /// CSS selector that replaces the target of the content update.
    (HX_RETARGET, "HX-Retarget", "hx-retarget");
    /// Client-side events triggered after the settle step.
    (HX_TRIGGER_AFTER_SETTLE, "HX-Trigger-After-Settle", "hx-trigger-after-settle");
    /// Client-side events triggered after the swap step.
    (HX_TRIGGER_AFTER_SWAP, "HX-Trigger-After-Swap", "hx-trigger-after-swap");
    /// Standard redirect target, used when a redirect is answered for a plain browser request.
    (LOCATION, "Location", "location");
}
