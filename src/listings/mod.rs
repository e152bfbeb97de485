mod fetch_error;
mod loader;
mod models;
mod source;
mod store;

pub use fetch_error::FetchError;
pub use loader::DataLoader;
pub use models::Listing;
pub use source::{HttpListingSource, ListingSource};
pub use store::{ListingStore, ListingsSnapshot};
