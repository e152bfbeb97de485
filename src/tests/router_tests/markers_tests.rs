use crate::router::handle;
use crate::tests::utils::{app_with, body_string, listing_a, located, request};
use std::sync::atomic::Ordering;

#[test]
fn markers_json_does_not_fetch() {
    let (app, calls) = app_with(vec![Ok(vec![listing_a()])]);

    let resp = handle(request("GET", "/markers.json"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["markers"].as_array().unwrap().len(), 0);
}

#[test]
fn markers_json_reflects_last_mount() {
    let (app, _) = app_with(vec![Ok(vec![located("x", "(3,3)"), located("y", "(3,3)")])]);
    handle(request("GET", "/"), &app).unwrap();

    let resp = handle(request("GET", "/markers.json"), &app).unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let markers = json["markers"].as_array().unwrap();
    // same coordinate, both in the one group
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0]["lat"], markers[1]["lat"]);
}

#[test]
fn matching_etag_gives_not_modified() {
    let (app, _) = app_with(vec![Ok(vec![listing_a()])]);
    handle(request("GET", "/"), &app).unwrap();

    let first = handle(request("GET", "/markers.json"), &app).unwrap();
    let etag = first
        .headers()
        .get("ETag")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let mut conditional = request("GET", "/markers.json");
    conditional
        .headers_mut()
        .insert("If-None-Match", etag.parse().unwrap());

    let resp = handle(conditional, &app).unwrap();
    assert_eq!(resp.status(), 304);
    assert!(body_string(resp).is_empty());
}

#[test]
fn stale_etag_gets_full_body() {
    let (app, _) = app_with(vec![Ok(vec![listing_a()])]);

    let mut conditional = request("GET", "/markers.json");
    conditional
        .headers_mut()
        .insert("If-None-Match", "\"stale\"".parse().unwrap());

    let resp = handle(conditional, &app).unwrap();
    assert_eq!(resp.status(), 200);
}
