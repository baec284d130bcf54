//! In-memory application state store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use domain::models::{Device, GuardedObject, MapFilter, TapeEntry};

use crate::intents::{FilterName, SetFilter};

/// A point-in-time copy of the externally owned monitoring state.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub objects: Vec<GuardedObject>,
    pub devices: HashMap<Uuid, Device>,
    pub tape: Vec<TapeEntry>,
    pub loading: bool,
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: Snapshot,
    filter: MapFilter,
}

/// Shared state store.
///
/// Reads hand out cloned snapshots, so derivations run on immutable data and
/// never observe a partially applied update. Filter mutation goes through
/// intents only.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    inner: Arc<RwLock<Inner>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    pub async fn snapshot(&self) -> Snapshot {
        self.inner.read().await.snapshot.clone()
    }

    /// Current map filter.
    pub async fn filter(&self) -> MapFilter {
        self.inner.read().await.filter.clone()
    }

    /// Replaces the whole snapshot. Devices are re-indexed by their UUID;
    /// the loading flag is preserved.
    pub async fn replace_snapshot(
        &self,
        objects: Vec<GuardedObject>,
        devices: Vec<Device>,
        tape: Vec<TapeEntry>,
    ) {
        let mut inner = self.inner.write().await;
        let loading = inner.snapshot.loading;
        inner.snapshot = Snapshot {
            objects,
            devices: devices.into_iter().map(|d| (d.device_id, d)).collect(),
            tape,
            loading,
        };
    }

    /// Appends entries to the general tape.
    pub async fn append_tape(&self, entries: Vec<TapeEntry>) {
        self.inner.write().await.snapshot.tape.extend(entries);
    }

    /// Sets the loading-indicator flag.
    pub async fn set_loading(&self, loading: bool) {
        self.inner.write().await.snapshot.loading = loading;
    }

    /// Applies a set-filter intent and returns the updated filter.
    pub async fn set_filter(&self, intent: SetFilter) -> MapFilter {
        let mut inner = self.inner.write().await;
        match intent {
            SetFilter::Status(status) => inner.filter.status = status,
            SetFilter::Type(types) => inner.filter.device_types = types,
            SetFilter::Number(number) => inner.filter.number = Some(number),
        }
        inner.filter.clone()
    }

    /// Clears one filter part and returns the updated filter.
    pub async fn clear_filter(&self, name: FilterName) -> MapFilter {
        let mut inner = self.inner.write().await;
        match name {
            FilterName::Status => inner.filter.status.clear(),
            FilterName::Type => inner.filter.device_types.clear(),
            FilterName::Number => inner.filter.number = None,
        }
        inner.filter.clone()
    }

    /// Resets the whole filter and returns it.
    pub async fn clear_all_filters(&self) -> MapFilter {
        let mut inner = self.inner.write().await;
        inner.filter = MapFilter::default();
        inner.filter.clone()
    }

    /// Collection sizes, for health reporting.
    pub async fn counts(&self) -> (usize, usize, usize) {
        let inner = self.inner.read().await;
        (
            inner.snapshot.objects.len(),
            inner.snapshot.devices.len(),
            inner.snapshot.tape.len(),
        )
    }
}
