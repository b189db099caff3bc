//! Dataset store — the current snapshot of travel times.
//!
//! The snapshot is replaced wholesale on every load and read back as a copy.
//! Sharing across threads goes through [`SharedStore`]: one writer at a time,
//! readers see either the old or the new snapshot, never a mix.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};
use tracing::info;

use crate::graph::TravelTime;

/// Shared, lock-guarded dataset for multi-request front ends.
pub type SharedStore = Arc<RwLock<DatasetStore>>;

/// Owner of the current travel-time snapshot.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    travel_times: Vec<TravelTime>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store wrapped for sharing.
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Replace the whole snapshot.
    pub fn store(&mut self, travel_times: Vec<TravelTime>) {
        info!(
            previous = self.travel_times.len(),
            records = travel_times.len(),
            "dataset replaced"
        );
        self.travel_times = travel_times;
    }

    /// A copy of the current snapshot.
    pub fn get_all(&self) -> Vec<TravelTime> {
        self.travel_times.clone()
    }

    pub fn clear(&mut self) {
        self.travel_times.clear();
    }

    /// Records departing from `location`, in load order.
    pub fn travel_times_from(&self, location: &str) -> Vec<TravelTime> {
        self.travel_times
            .iter()
            .filter(|tt| tt.from() == location)
            .cloned()
            .collect()
    }

    /// Every location appearing as either endpoint, sorted.
    pub fn all_locations(&self) -> Vec<String> {
        let locations: BTreeSet<&str> = self
            .travel_times
            .iter()
            .flat_map(|tt| [tt.from(), tt.to()])
            .collect();
        locations.into_iter().map(String::from).collect()
    }

    pub fn count(&self) -> usize {
        self.travel_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travel_times.is_empty()
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            edge_count: self.count(),
            location_count: self.all_locations().len(),
        }
    }
}

/// Size of the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub edge_count: usize,
    pub location_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TravelTime> {
        vec![
            TravelTime::new("R11", "R12", 20).unwrap(),
            TravelTime::new("R11", "CP1", 92).unwrap(),
            TravelTime::new("CP1", "CP2", 7).unwrap(),
        ]
    }

    #[test]
    fn test_empty_store() {
        let store = DatasetStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
        assert!(store.get_all().is_empty());
        assert!(store.all_locations().is_empty());
    }

    #[test]
    fn test_store_replaces_snapshot() {
        let mut store = DatasetStore::new();
        store.store(sample());
        assert_eq!(store.count(), 3);

        store.store(vec![TravelTime::new("X", "Y", 1).unwrap()]);
        assert_eq!(store.count(), 1);
        assert_eq!(store.all_locations(), vec!["X", "Y"]);
    }

    #[test]
    fn test_get_all_is_a_copy() {
        let mut store = DatasetStore::new();
        store.store(sample());

        let mut copy = store.get_all();
        copy.clear();
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_travel_times_from() {
        let mut store = DatasetStore::new();
        store.store(sample());

        let from_r11 = store.travel_times_from("R11");
        assert_eq!(from_r11.len(), 2);
        assert!(from_r11.iter().all(|tt| tt.from() == "R11"));
        assert!(store.travel_times_from("R12").is_empty());
        assert!(store.travel_times_from("nowhere").is_empty());
    }

    #[test]
    fn test_all_locations_distinct() {
        let mut store = DatasetStore::new();
        store.store(sample());
        assert_eq!(store.all_locations(), vec!["CP1", "CP2", "R11", "R12"]);
    }

    #[test]
    fn test_clear() {
        let mut store = DatasetStore::new();
        store.store(sample());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_stats() {
        let mut store = DatasetStore::new();
        store.store(sample());
        assert_eq!(
            store.stats(),
            DatasetStats {
                edge_count: 3,
                location_count: 4
            }
        );
    }

    #[test]
    fn test_shared_store_last_write_wins() {
        let shared = DatasetStore::shared();
        shared.write().unwrap().store(sample());
        shared.write().unwrap().store(Vec::new());
        assert_eq!(shared.read().unwrap().count(), 0);
    }
}
