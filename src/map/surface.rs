use crate::map::ClusterGroup;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_MAP_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapId(u64);

/// The live map a marker layer is attached to. Each surface has its own id,
/// so a replaced surface is distinguishable from the old one.
#[derive(Debug)]
pub struct MapSurface {
    id: MapId,
    layers: Vec<Arc<ClusterGroup>>,
}

impl MapSurface {
    pub fn new() -> Self {
        Self {
            id: MapId(NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed)),
            layers: Vec::new(),
        }
    }

    pub fn id(&self) -> MapId {
        self.id
    }

    pub fn add_layer(&mut self, layer: Arc<ClusterGroup>) {
        self.layers.push(layer);
    }

    /// Removes by identity. Returns whether the layer was attached.
    pub fn remove_layer(&mut self, layer: &Arc<ClusterGroup>) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| !Arc::ptr_eq(l, layer));
        self.layers.len() != before
    }

    pub fn layers(&self) -> &[Arc<ClusterGroup>] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl Default for MapSurface {
    fn default() -> Self {
        Self::new()
    }
}
