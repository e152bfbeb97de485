// src/tests/router_tests/map_page_tests.rs

use crate::listings::FetchError;
use crate::router::handle;
use crate::tests::utils::{app_with, body_string, listing_a, located, map_payload, request};
use std::sync::atomic::Ordering;

#[test]
fn page_renders_single_listing_marker() {
    let (app, calls) = app_with(vec![Ok(vec![listing_a()])]);

    let resp = handle(request("GET", "/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let body = body_string(resp);
    assert!(body.contains("Map View of Properties"));

    let payload = map_payload(&body);
    let markers = payload["layer"]["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0]["lat"], 10.0);
    assert_eq!(markers[0]["lng"], 20.0);

    let popup = markers[0]["popup"].as_str().unwrap();
    assert!(popup.contains("A"));
    assert!(popup.contains("$100"));
    assert!(popup.contains("Beds: 2, Baths: 1"));
    assert!(popup.contains("1/4"));
}

#[test]
fn page_still_renders_when_first_fetch_fails() {
    let (app, _) = app_with(vec![Err(FetchError::Network("refused".into()))]);

    let resp = handle(request("GET", "/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let payload = map_payload(&body_string(resp));
    assert_eq!(payload["layer"]["markers"].as_array().unwrap().len(), 0);
    assert!(app.store().snapshot().listings().is_empty());
}

#[test]
fn failed_refetch_keeps_previous_listings() {
    let (app, calls) = app_with(vec![
        Ok(vec![listing_a(), located("B", "(11,21)")]),
        Err(FetchError::Decode("expected value".into())),
    ]);

    handle(request("GET", "/"), &app).unwrap();
    let before = app.store().snapshot();

    let resp = handle(request("GET", "/"), &app).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(std::sync::Arc::ptr_eq(&before, &app.store().snapshot()));

    let payload = map_payload(&body_string(resp));
    assert_eq!(payload["layer"]["markers"].as_array().unwrap().len(), 2);
}

#[test]
fn malformed_locations_are_left_off_the_map() {
    let (app, _) = app_with(vec![Ok(vec![
        located("good", "(1,1)"),
        located("no comma", "(1 1)"),
        located("letters", "(a,b)"),
        located("empty", ""),
    ])]);

    let payload = map_payload(&body_string(handle(request("GET", "/"), &app).unwrap()));
    let markers = payload["layer"]["markers"].as_array().unwrap();

    assert_eq!(markers.len(), 1);
    assert!(markers[0]["popup"].as_str().unwrap().contains("good"));
}

#[test]
fn repeated_mounts_keep_a_single_layer() {
    let (app, _) = app_with(vec![
        Ok(vec![listing_a()]),
        Ok(vec![listing_a(), located("B", "(5,5)")]),
        Ok(vec![located("C", "(6,6)")]),
    ]);

    for _ in 0..3 {
        handle(request("GET", "/"), &app).unwrap();
    }

    assert_eq!(app.layer_count(), 1);
}

#[test]
fn page_embeds_map_settings_and_client_libraries() {
    let (app, _) = app_with(vec![Ok(vec![])]);

    let body = body_string(handle(request("GET", "/"), &app).unwrap());
    let payload = map_payload(&body);

    assert_eq!(payload["zoom"], 2.5);
    assert_eq!(payload["center"][0], 29.7617);
    assert_eq!(
        payload["tiles"]["url"],
        "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
    );
    assert!(payload["icons"]["shadow"]
        .as_str()
        .unwrap()
        .ends_with("marker-shadow.png"));
    assert!(body.contains("leaflet.markercluster.js"));
    assert!(body.contains("height: 400px; width: 100%;"));
}
