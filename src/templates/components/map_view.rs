use crate::map::view::{LEAFLET_JS, MARKERCLUSTER_JS};
use crate::map::{ClusterGroup, MapViewSettings};
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

pub const MAP_ELEMENT_ID: &str = "property-map";
pub const MAP_DATA_ID: &str = "map-data";

// Draws the server-built layer. All grouping by proximity is left to
// Leaflet.markercluster.
const MAP_BOOT_JS: &str = r#"
(function () {
  var data = JSON.parse(document.getElementById('map-data').textContent);

  delete L.Icon.Default.prototype._getIconUrl;
  L.Icon.Default.mergeOptions({
    iconRetinaUrl: data.icons.retina,
    iconUrl: data.icons.default,
    shadowUrl: data.icons.shadow
  });

  var map = L.map('property-map').setView(data.center, data.zoom);
  L.tileLayer(data.tiles.url, { attribution: data.tiles.attribution }).addTo(map);

  var markers = L.markerClusterGroup();
  data.layer.markers.forEach(function (m) {
    markers.addLayer(L.marker([m.lat, m.lng]).bindPopup(m.popup));
  });
  map.addLayer(markers);
})();
"#;

#[derive(Serialize)]
struct MapPayload<'a> {
    #[serde(flatten)]
    settings: &'a MapViewSettings,
    layer: &'a ClusterGroup,
}

/// JSON for embedding in a `<script>` element. `<` is escaped so popup HTML
/// cannot close the element early.
pub fn map_payload_json(settings: &MapViewSettings, layer: &ClusterGroup) -> String {
    let payload = MapPayload { settings, layer };
    serde_json::to_string(&payload)
        .map(|json| json.replace('<', "\\u003c"))
        .unwrap_or_else(|_| "{}".to_string())
}

pub fn map_view(settings: &MapViewSettings, layer: &ClusterGroup) -> Markup {
    html! {
        div
            id=(MAP_ELEMENT_ID)
            style={ "height: " (settings.height_px) "px; width: 100%;" }
        {}
        script type="application/json" id=(MAP_DATA_ID) {
            (PreEscaped(map_payload_json(settings, layer)))
        }
        script src=(LEAFLET_JS) {}
        script src=(MARKERCLUSTER_JS) {}
        script { (PreEscaped(MAP_BOOT_JS)) }
    }
}
