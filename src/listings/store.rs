use crate::listings::Listing;
use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};

/// An immutable view of the listing collection at one point in time.
/// Two snapshots are "the same" only if they are the same allocation.
#[derive(Debug, Default)]
pub struct ListingsSnapshot {
    listings: Vec<Listing>,
    fetched_at: Option<DateTime<Utc>>,
}

impl ListingsSnapshot {
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}

/// State container for the map view. Only ever replaced wholesale.
#[derive(Debug, Default)]
pub struct ListingStore {
    current: RwLock<Arc<ListingsSnapshot>>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<ListingsSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn replace_listings(&self, listings: Vec<Listing>) {
        let next = Arc::new(ListingsSnapshot {
            listings,
            fetched_at: Some(Utc::now()),
        });

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
    }
}
