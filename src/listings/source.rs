// source.rs
use crate::listings::{FetchError, Listing};
use log::{debug, warn};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("properly_map/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce the current listing collection.
pub trait ListingSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Listing>, FetchError>;
}

/// Fetches listings from the backend with a plain `GET`.
pub struct HttpListingSource {
    client: Client,
    url: Url,
}

impl HttpListingSource {
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl ListingSource for HttpListingSource {
    fn fetch(&self) -> Result<Vec<Listing>, FetchError> {
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        // Status is not a failure by itself; only the body decides.
        let status = resp.status();
        if !status.is_success() {
            warn!("Listings endpoint {} answered {status}", self.url);
        }

        let text = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let listings: Vec<Listing> =
            serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))?;

        debug!("Listings payload: {listings:?}");
        Ok(listings)
    }
}
