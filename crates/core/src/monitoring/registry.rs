//! Local region registry
//!
//! The authoritative application-side view of which regions are under
//! monitoring and under ranging. The native layer is treated as eventually
//! consistent with this cache; drift is detected by querying the native
//! view through the port and reconciling against these sets.

use std::collections::HashMap;

use beaconkit_domain::BeaconRegion;
use parking_lot::RwLock;

/// Two independent sets of regions keyed by identifier.
///
/// A region may be in neither, either, or both sets simultaneously. Locks
/// are held only for map operations, never across awaits.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    monitored: RwLock<HashMap<String, BeaconRegion>>,
    ranged: RwLock<HashMap<String, BeaconRegion>>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region to the monitored set. Returns `false` if the identifier
    /// was already present (idempotent re-add, not an error).
    pub fn add_monitored(&self, region: BeaconRegion) -> bool {
        self.monitored.write().insert(region.identifier.clone(), region).is_none()
    }

    /// Remove a region from the monitored set. Returns `false` if it was
    /// not present (no-op, not an error).
    pub fn remove_monitored(&self, identifier: &str) -> bool {
        self.monitored.write().remove(identifier).is_some()
    }

    pub fn is_monitored(&self, identifier: &str) -> bool {
        self.monitored.read().contains_key(identifier)
    }

    /// Add a region to the ranged set. Same idempotence contract as
    /// [`add_monitored`](Self::add_monitored).
    pub fn add_ranged(&self, region: BeaconRegion) -> bool {
        self.ranged.write().insert(region.identifier.clone(), region).is_none()
    }

    pub fn remove_ranged(&self, identifier: &str) -> bool {
        self.ranged.write().remove(identifier).is_some()
    }

    pub fn is_ranged(&self, identifier: &str) -> bool {
        self.ranged.read().contains_key(identifier)
    }

    /// Snapshot of the monitored set, sorted by identifier for stable
    /// comparison against the native view.
    pub fn monitored(&self) -> Vec<BeaconRegion> {
        let mut regions: Vec<_> = self.monitored.read().values().cloned().collect();
        regions.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        regions
    }

    /// Snapshot of the ranged set, sorted by identifier.
    pub fn ranged(&self) -> Vec<BeaconRegion> {
        let mut regions: Vec<_> = self.ranged.read().values().cloned().collect();
        regions.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: &str) -> BeaconRegion {
        BeaconRegion::new(id, "A0B1")
    }

    #[test]
    fn add_monitored_is_idempotent() {
        let registry = RegionRegistry::new();
        assert!(registry.add_monitored(region("home")));
        assert!(!registry.add_monitored(region("home")));
        assert_eq!(registry.monitored().len(), 1);
    }

    #[test]
    fn remove_unknown_region_is_a_noop() {
        let registry = RegionRegistry::new();
        assert!(!registry.remove_monitored("home"));
        assert!(!registry.remove_ranged("home"));
    }

    #[test]
    fn monitored_and_ranged_sets_are_independent() {
        let registry = RegionRegistry::new();
        registry.add_monitored(region("home"));
        registry.add_ranged(region("home"));
        registry.add_ranged(region("lab"));

        assert!(registry.is_monitored("home"));
        assert!(registry.is_ranged("home"));
        assert!(!registry.is_monitored("lab"));

        registry.remove_monitored("home");
        assert!(!registry.is_monitored("home"));
        assert!(registry.is_ranged("home"));
    }

    #[test]
    fn snapshots_are_sorted_by_identifier() {
        let registry = RegionRegistry::new();
        registry.add_monitored(region("zeta"));
        registry.add_monitored(region("alpha"));
        let ids: Vec<_> =
            registry.monitored().into_iter().map(|r| r.identifier).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }
}
