mod cluster;
mod coords;
mod layer;
mod marker;
mod surface;
pub mod view;

pub use cluster::{build_cluster_group, ClusterGroup};
pub use coords::{parse_location, LatLng};
pub use layer::MarkerLayer;
pub use marker::Marker;
pub use surface::{MapId, MapSurface};
pub use view::MapViewSettings;
