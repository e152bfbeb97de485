use crate::listings::Listing;
use crate::map::Marker;
use serde::Serialize;

/// The marker container handed to the browser's cluster layer.
/// Proximity grouping itself happens client side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClusterGroup {
    markers: Vec<Marker>,
}

impl ClusterGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// One marker per listing with a usable location, in input order.
/// Listings without one are skipped silently.
pub fn build_cluster_group(listings: &[Listing]) -> ClusterGroup {
    let mut group = ClusterGroup::new();

    for marker in listings.iter().filter_map(Marker::from_listing) {
        group.add_marker(marker);
    }

    group
}
