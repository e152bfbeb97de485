use serde::Serialize;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const ICON_RETINA_URL: &str = "https://unpkg.com/leaflet@1.7.1/dist/images/marker-icon-2x.png";
pub const ICON_URL: &str = "https://unpkg.com/leaflet@1.7.1/dist/images/marker-icon.png";
pub const ICON_SHADOW_URL: &str = "https://unpkg.com/leaflet@1.7.1/dist/images/marker-shadow.png";

pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.7.1/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.7.1/dist/leaflet.js";
pub const MARKERCLUSTER_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
pub const MARKERCLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
pub const MARKERCLUSTER_JS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";

#[derive(Debug, Clone, Serialize)]
pub struct TileSource {
    pub url: &'static str,
    pub attribution: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct IconSet {
    pub retina: &'static str,
    pub default: &'static str,
    pub shadow: &'static str,
}

/// Fixed presentation settings of the map view.
#[derive(Debug, Clone, Serialize)]
pub struct MapViewSettings {
    pub center: [f64; 2],
    pub zoom: f64,
    pub height_px: u32,
    pub tiles: TileSource,
    pub icons: IconSet,
}

impl Default for MapViewSettings {
    fn default() -> Self {
        Self {
            center: [29.7617, 0.0],
            zoom: 2.5,
            height_px: 400,
            tiles: TileSource {
                url: TILE_URL,
                attribution: TILE_ATTRIBUTION,
            },
            icons: IconSet {
                retina: ICON_RETINA_URL,
                default: ICON_URL,
                shadow: ICON_SHADOW_URL,
            },
        }
    }
}
