use crate::listings::{ListingSource, ListingStore};
use log::{error, info};

/// Runs one fetch per mount and feeds the store.
pub struct DataLoader {
    source: Box<dyn ListingSource>,
}

impl DataLoader {
    pub fn new(source: Box<dyn ListingSource>) -> Self {
        Self { source }
    }

    /// Fetches once. On success the store's collection is replaced; on any
    /// failure the error is logged and the store keeps its last good value.
    /// Returns whether the store was updated.
    pub fn load(&self, store: &ListingStore) -> bool {
        match self.source.fetch() {
            Ok(listings) => {
                info!("Fetched {} listings", listings.len());
                store.replace_listings(listings);
                true
            }
            Err(e) => {
                error!("Error fetching properties: {e}");
                false
            }
        }
    }
}
