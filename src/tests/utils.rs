use crate::app::App;
use crate::listings::{FetchError, Listing, ListingSource};
use astra::{Body, Request, Response};
use std::collections::VecDeque;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Replays queued fetch outcomes, then keeps failing.
pub struct ScriptedSource {
    outcomes: Mutex<VecDeque<Result<Vec<Listing>, FetchError>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(outcomes: Vec<Result<Vec<Listing>, FetchError>>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Arc::clone(&calls),
        };
        (source, calls)
    }
}

impl ListingSource for ScriptedSource {
    fn fetch(&self) -> Result<Vec<Listing>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("connection refused".into())))
    }
}

pub fn app_with(outcomes: Vec<Result<Vec<Listing>, FetchError>>) -> (App, Arc<AtomicUsize>) {
    let (source, calls) = ScriptedSource::new(outcomes);
    (App::new(Box::new(source)), calls)
}

/// The listing used throughout the page tests.
pub fn listing_a() -> Listing {
    Listing {
        property_name: "A".into(),
        property_price: 100i64.into(),
        beds: 2i64.into(),
        baths: 1i64.into(),
        location: "(10,20)".into(),
        property_location: "1 Test Lane".into(),
        no_of_shares: 4i64.into(),
    }
}

pub fn located(name: &str, location: &str) -> Listing {
    Listing {
        property_name: name.into(),
        location: location.into(),
        ..Listing::default()
    }
}

pub fn request(method: &str, path: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

/// Pulls the embedded map payload out of a rendered page.
pub fn map_payload(page: &str) -> serde_json::Value {
    let doc = scraper::Html::parse_document(page);
    let selector = scraper::Selector::parse("script#map-data").unwrap();
    let text: String = doc
        .select(&selector)
        .next()
        .expect("map payload missing")
        .text()
        .collect();
    serde_json::from_str(&text).unwrap()
}
