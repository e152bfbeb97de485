use crate::listings::{DataLoader, ListingSource, ListingStore, ListingsSnapshot};
use crate::map::{ClusterGroup, MapSurface, MapViewSettings, MarkerLayer};
use std::sync::{Arc, Mutex, PoisonError};

/// Everything one page render needs.
pub struct MapPageVm {
    pub settings: MapViewSettings,
    pub snapshot: Arc<ListingsSnapshot>,
    pub layer: Arc<ClusterGroup>,
}

struct MapState {
    surface: MapSurface,
    layer: MarkerLayer,
}

/// Shared application state: the loader, the listings state container and
/// the map surface with its marker layer.
pub struct App {
    loader: DataLoader,
    store: ListingStore,
    map: Mutex<MapState>,
    settings: MapViewSettings,
}

impl App {
    pub fn new(source: Box<dyn ListingSource>) -> Self {
        Self {
            loader: DataLoader::new(source),
            store: ListingStore::new(),
            map: Mutex::new(MapState {
                surface: MapSurface::new(),
                layer: MarkerLayer::new(),
            }),
            settings: MapViewSettings::default(),
        }
    }

    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    /// A page mount: fetch once, then bring the marker layer up to date.
    pub fn mount(&self) -> MapPageVm {
        self.loader.load(&self.store);
        self.current_view()
    }

    /// The current page state without fetching.
    pub fn current_view(&self) -> MapPageVm {
        let snapshot = self.store.snapshot();
        let layer = self.sync_layer(&snapshot);

        MapPageVm {
            settings: self.settings.clone(),
            snapshot,
            layer,
        }
    }

    pub fn layer_count(&self) -> usize {
        self.lock_map().surface.layer_count()
    }

    fn sync_layer(&self, snapshot: &Arc<ListingsSnapshot>) -> Arc<ClusterGroup> {
        let mut guard = self.lock_map();
        let state = &mut *guard;
        state.layer.sync(&mut state.surface, snapshot);
        // sync always leaves a group attached
        state.layer.attached().unwrap_or_default()
    }

    fn lock_map(&self) -> std::sync::MutexGuard<'_, MapState> {
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
