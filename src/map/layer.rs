use crate::listings::ListingsSnapshot;
use crate::map::{build_cluster_group, ClusterGroup, MapId, MapSurface};
use log::debug;
use std::sync::Arc;

/// Keeps one cluster group on a map in step with the listings snapshot.
///
/// The group is rebuilt only when the (map, snapshot) pair changes, compared
/// by identity. The previous group is detached before the new one goes on,
/// so the surface never carries more than one marker layer from here.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    deps: Option<(MapId, Arc<ListingsSnapshot>)>,
    attached: Option<Arc<ClusterGroup>>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the layer was rebuilt.
    pub fn sync(&mut self, map: &mut MapSurface, snapshot: &Arc<ListingsSnapshot>) -> bool {
        if let Some((map_id, seen)) = &self.deps {
            if *map_id == map.id() && Arc::ptr_eq(seen, snapshot) {
                return false;
            }
        }

        if let Some(previous) = self.attached.take() {
            map.remove_layer(&previous);
        }

        let group = Arc::new(build_cluster_group(snapshot.listings()));
        debug!(
            "Marker layer rebuilt: {} markers from {} listings",
            group.len(),
            snapshot.listings().len()
        );

        map.add_layer(Arc::clone(&group));
        self.attached = Some(group);
        self.deps = Some((map.id(), Arc::clone(snapshot)));
        true
    }

    pub fn attached(&self) -> Option<Arc<ClusterGroup>> {
        self.attached.clone()
    }
}
