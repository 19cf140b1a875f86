use std::collections::BTreeMap;

use htmx_kit::{
    header, Error, HeaderSource, HxHeaders, Location, LocationOptions, StatusCode, SwapModifier,
    SwapStrategy, TriggerTiming, UrlUpdate,
};
use http::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::{json, Map, Value};

fn htmx_request(extra: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::HX_REQUEST, HeaderValue::from_static("true"));
    for (name, value) in extra {
        headers.insert(*name, HeaderValue::from_static(value));
    }
    headers
}

fn context(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn test_htmx_exists() {
    let hx = HxHeaders::from_request(&htmx_request(&[]));
    assert!(hx.is_htmx());
}

#[test]
fn test_htmx_does_not_exist() {
    let hx = HxHeaders::from_request(&HeaderMap::new());
    assert!(!hx.is_htmx());
    assert_eq!(hx.state(), None);
    assert_eq!(hx.boosted(), None);
    assert_eq!(hx.history_restore_request(), None);
    assert_eq!(hx.current_url(), None);
    assert_eq!(hx.prompt(), None);
    assert_eq!(hx.target_id(), None);
    assert_eq!(hx.trigger_id(), None);
    assert_eq!(hx.trigger_name(), None);
}

#[test]
fn test_marker_other_than_true_is_not_htmx() {
    for value in ["True", "1", "yes", ""] {
        let request = [("HX-Request", value), ("HX-Prompt", "ignored")];
        let hx = HxHeaders::from_request(&request);
        assert!(!hx.is_htmx(), "{value:?}");
        assert_eq!(hx.prompt(), None);
    }
}

#[test]
fn test_request_without_boost() {
    let hx = HxHeaders::from_request(&htmx_request(&[]));
    assert!(hx.is_htmx());
    assert_eq!(hx.boosted(), Some(false));
}

#[test]
fn test_request_boosted() {
    let hx = HxHeaders::from_request(&htmx_request(&[("hx-boosted", "true")]));
    assert_eq!(hx.boosted(), Some(true));
}

#[test]
fn test_request_restore_history() {
    let hx = HxHeaders::from_request(&htmx_request(&[("hx-history-restore-request", "true")]));
    assert!(hx.is_htmx());
    assert_eq!(hx.history_restore_request(), Some(true));
}

#[test]
fn test_request_prompt() {
    let hx = HxHeaders::from_request(&htmx_request(&[("hx-prompt", "test")]));
    assert_eq!(hx.prompt(), Some("test"));
}

#[test]
fn test_request_prompt_latin1() {
    let mut request = htmx_request(&[]);
    request.insert("hx-prompt", HeaderValue::from_bytes(b"caf\xe9").unwrap());
    let hx = HxHeaders::from_request(&request);
    assert!(hx.is_htmx());
    assert_eq!(hx.prompt(), Some("caf\u{e9}"));
}

#[test]
fn test_request_current_url() {
    let hx = HxHeaders::from_request(&htmx_request(&[("hx-current-url", "/test")]));
    assert_eq!(hx.current_url(), Some("/test"));
}

#[test]
fn test_request_target_id() {
    let hx = HxHeaders::from_request(&htmx_request(&[("hx-target", "test")]));
    assert_eq!(hx.target_id(), Some("test"));
}

#[test]
fn test_request_trigger_name() {
    let hx = HxHeaders::from_request(&htmx_request(&[("hx-trigger-name", "test")]));
    assert_eq!(hx.trigger_name(), Some("test"));
}

#[test]
fn test_request_trigger_id() {
    let hx = HxHeaders::from_request(&htmx_request(&[("hx-trigger", "test")]));
    assert_eq!(hx.trigger_id(), Some("test"));
}

#[test]
fn test_request_shapes_decode_alike() {
    let pairs = vec![
        ("hx-request".to_string(), "true".to_string()),
        ("HX-TARGET".to_string(), "list".to_string()),
    ];
    let record = BTreeMap::from([("HX-Request", "true"), ("hx-target", "list")]);
    let request = http::Request::builder()
        .header("HX-Request", "true")
        .header("HX-Target", "list")
        .body(())
        .unwrap();
    let (parts, ()) = request.into_parts();

    let decoded = [
        HxHeaders::from_request(&pairs).state().cloned(),
        HxHeaders::from_request(&record).state().cloned(),
        HxHeaders::from_request(&parts).state().cloned(),
    ];
    for info in decoded {
        assert_eq!(info.as_ref().and_then(|info| info.target_id()), Some("list"));
    }
}

#[test]
fn test_set_request_headers_replaces_snapshot() {
    let mut hx = HxHeaders::from_request(&htmx_request(&[
        ("hx-prompt", "first"),
        ("hx-boosted", "true"),
    ]));
    hx.set_request_headers(&htmx_request(&[("hx-target", "second")]));
    assert_eq!(hx.prompt(), None);
    assert_eq!(hx.boosted(), Some(false));
    assert_eq!(hx.target_id(), Some("second"));

    hx.set_request_headers(&HeaderMap::new());
    assert!(!hx.is_htmx());
    assert_eq!(hx.target_id(), None);
}

#[test]
fn test_respond_with_location_string() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.location("/test").unwrap();
    assert_eq!(response["HX-Location"], "/test");
}

#[test]
fn test_respond_with_location_object_only_path() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.location(context(json!({"path": "/test"}))).unwrap();
    assert_eq!(response["HX-Location"], "/test");
}

#[test]
fn test_respond_with_location_object() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.location(context(json!({"path": "/test", "event": "test"})))
        .unwrap();
    assert_eq!(response["HX-Location"], r#"{"path":"/test","event":"test"}"#);
}

#[test]
fn test_respond_with_location_options() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.location(
        LocationOptions::new("/test")
            .event("test")
            .headers(json!({"X-Page": "2"})),
    )
    .unwrap();
    assert_eq!(
        response["HX-Location"],
        r#"{"path":"/test","event":"test","headers":{"X-Page":"2"}}"#
    );
}

#[test]
fn test_location_without_path_fails() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    let err = hx
        .location(Location::Context(context(json!({"event": "test"}))))
        .unwrap_err();
    assert!(matches!(err, Error::MissingLocationPath));
    assert!(response.is_empty());
}

#[test]
fn test_respond_with_push_url() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.push_url("/test").unwrap();
    assert_eq!(response["HX-Push-Url"], "/test");
}

#[test]
fn test_respond_with_push_url_disabled() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.push_url(UrlUpdate::Disabled).unwrap();
    assert_eq!(response["HX-Push-Url"], "false");
}

#[test]
fn test_respond_with_replace_url() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.replace_url("/test").unwrap();
    assert_eq!(response["HX-Replace-Url"], "/test");
}

#[test]
fn test_respond_with_replace_url_disabled() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.replace_url(None::<String>).unwrap();
    assert_eq!(response["HX-Replace-Url"], "false");
}

#[test]
fn test_respond_with_redirect() {
    let mut response = http::Response::new(());
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.redirect("/test").unwrap();
    assert_eq!(hx.status(), None);
    assert_eq!(response.headers()["HX-Redirect"], "/test");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!response.headers().contains_key(http::header::LOCATION));
}

#[test]
fn test_respond_with_redirect_without_hx_request() {
    let mut response = http::Response::new(());
    let mut hx = HxHeaders::new(&HeaderMap::new(), &mut response);
    hx.redirect("/test").unwrap();
    assert_eq!(hx.status(), Some(StatusCode::SEE_OTHER));
    assert_eq!(response.headers()[http::header::LOCATION], "/test");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(!response.headers().contains_key(header::HX_REDIRECT));
}

#[test]
fn test_respond_with_redirect_into_response_parts() {
    let (mut parts, ()) = http::Response::new(()).into_parts();
    let mut hx = HxHeaders::new(&[("Accept", "text/html")], &mut parts);
    hx.redirect("/test").unwrap();
    assert_eq!(parts.status, StatusCode::SEE_OTHER);
    assert_eq!(parts.headers["location"], "/test");
}

#[test]
fn test_respond_with_refresh() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.refresh().unwrap();
    assert_eq!(response["HX-Refresh"], "true");
}

#[test]
fn test_respond_with_single_reswap() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.reswap(["innerHTML"]).unwrap();
    assert_eq!(response["HX-Reswap"], "innerHTML");
}

#[test]
fn test_respond_with_reswap_modifiers() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.reswap(["innerHTML", "scroll:top", "swap:1s"]).unwrap();
    assert_eq!(response["HX-Reswap"], "innerHTML scroll:top swap:1s");
}

#[test]
fn test_reswap_removes_duplicates() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.reswap([
        SwapModifier::from(SwapStrategy::InnerHtml),
        SwapModifier::from("innerHTML"),
        SwapModifier::scroll("top"),
    ])
    .unwrap();
    assert_eq!(response["HX-Reswap"], "innerHTML scroll:top");
}

#[test]
fn test_respond_with_retarget_css_selector() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.retarget("div").unwrap();
    assert_eq!(response["HX-Retarget"], "div");
}

#[test]
fn test_respond_with_trigger_event() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.trigger(&json!({"my-event": "my-value"})).unwrap();
    assert_eq!(response["HX-Trigger"], r#"{"my-event":"my-value"}"#);
}

#[test]
fn test_respond_with_trigger_event_with_multiple_values() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.trigger(&json!({"my-event": ["my-value", "my-value2"]}))
        .unwrap();
    assert_eq!(
        response["HX-Trigger"],
        r#"{"my-event":["my-value","my-value2"]}"#
    );
}

#[test]
fn test_respond_with_trigger_multiple_events() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.trigger(&json!({
        "my-event": {"prop": "value"},
        "my-event2": "my-value3",
    }))
    .unwrap();
    assert_eq!(
        response["HX-Trigger"],
        r#"{"my-event":{"prop":"value"},"my-event2":"my-value3"}"#
    );
}

#[test]
fn test_respond_with_trigger_typed_events() {
    #[derive(Serialize)]
    struct Events {
        #[serde(rename = "itemSaved")]
        item_saved: Saved,
    }

    #[derive(Serialize)]
    struct Saved {
        id: u32,
    }

    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.trigger(&Events {
        item_saved: Saved { id: 7 },
    })
    .unwrap();
    assert_eq!(response["HX-Trigger"], r#"{"itemSaved":{"id":7}}"#);
}

#[test]
fn test_respond_with_trigger_after_settle() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.trigger_with(&json!({"my-event": "my-value"}), "aftersettle")
        .unwrap();
    assert_eq!(response["HX-Trigger-After-Settle"], r#"{"my-event":"my-value"}"#);
    assert!(!response.contains_key(header::HX_TRIGGER));
}

#[test]
fn test_respond_with_trigger_after_swap() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.trigger_with(&json!({"my-event": "my-value"}), TriggerTiming::AfterSwap)
        .unwrap();
    assert_eq!(response["HX-Trigger-After-Swap"], r#"{"my-event":"my-value"}"#);
}

#[test]
fn test_trigger_unknown_timing_uses_default_header() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.trigger_with(&json!({"e": "v"}), "AFTERREQUEST").unwrap();
    assert_eq!(response["HX-Trigger"], r#"{"e":"v"}"#);
    assert_eq!(response.len(), 1);
}

#[test]
fn test_directives_skipped_without_hx_request() {
    let mut response = HeaderMap::new();
    let mut hx = HxHeaders::new(&HeaderMap::new(), &mut response);
    hx.location("/test").unwrap();
    hx.push_url("/test").unwrap();
    hx.replace_url("/test").unwrap();
    hx.refresh().unwrap();
    hx.reswap(["innerHTML"]).unwrap();
    hx.retarget("div").unwrap();
    hx.trigger(&json!({"e": "v"})).unwrap();
    hx.trigger_with(&json!({"e": "v"}), "afterswap").unwrap();
    assert_eq!(hx.status(), None);
    assert!(response.is_empty());
}

#[test]
fn test_pair_list_response_appends() {
    let mut response: Vec<(String, String)> = vec![("HX-Trigger".into(), "first".into())];
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.trigger(&json!({"second": true})).unwrap();
    assert_eq!(response.len(), 2);
    assert_eq!(
        response.header("hx-trigger").as_deref(),
        Some(r#"first, {"second":true}"#)
    );
}

#[test]
fn test_record_response_overwrites() {
    let mut response: BTreeMap<String, String> = BTreeMap::new();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.retarget("#a").unwrap();
    hx.retarget("#b").unwrap();
    assert_eq!(response.len(), 1);
    assert_eq!(response["HX-Retarget"], "#b");
}

#[cfg(feature = "std")]
#[test]
fn test_hash_map_response_overwrites() {
    let mut response: std::collections::HashMap<String, String> = Default::default();
    let mut hx = HxHeaders::new(&htmx_request(&[]), &mut response);
    hx.push_url("/a").unwrap();
    hx.push_url("/b").unwrap();
    assert_eq!(response.len(), 1);
    assert_eq!(response["HX-Push-Url"], "/b");
}

#[test]
fn test_missing_response_headers() {
    let mut hx = HxHeaders::from_request(&htmx_request(&[]));
    let err = hx.retarget("div").unwrap_err();
    assert!(matches!(err, Error::MissingResponseHeaders));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
