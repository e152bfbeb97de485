use crate::listings::Listing;
use crate::map::{parse_location, LatLng};
use maud::{html, Markup};
use serde::Serialize;

/// A point annotation with its popup body (already rendered HTML).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    #[serde(flatten)]
    pub position: LatLng,
    pub popup: String,
}

impl Marker {
    /// `None` when the listing's location is not a usable coordinate pair.
    pub fn from_listing(listing: &Listing) -> Option<Self> {
        let position = listing.location.as_str().and_then(parse_location)?;

        Some(Marker {
            position,
            popup: popup_markup(listing).into_string(),
        })
    }
}

pub fn popup_markup(listing: &Listing) -> Markup {
    html! {
        strong { (listing.property_name) }
        br;
        "Price: $" (listing.property_price)
        br;
        "Beds: " (listing.beds) ", Baths: " (listing.baths)
        br;
        "Location: " (listing.property_location)
        br;
        "Min. Investment: 1/" (listing.no_of_shares) " ownership"
    }
}
