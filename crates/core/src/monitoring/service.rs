//! Region lifecycle service - command dispatcher over the native port
//!
//! Every start/stop resolves optimistically: `Ok` means the native call was
//! issued and accepted synchronously, not that the operation was confirmed
//! active. The local registry is only mutated after the native call
//! succeeds, so a rejected start leaves no phantom entry.

use std::sync::Arc;

use beaconkit_domain::{BeaconRegion, Result};
use tracing::{debug, info};

use super::ports::NativeBeaconPort;
use super::registry::RegionRegistry;

/// Region registry and command dispatcher.
pub struct RegionService {
    native: Arc<dyn NativeBeaconPort>,
    registry: RegionRegistry,
}

impl RegionService {
    /// Create a new region service over a native port.
    pub fn new(native: Arc<dyn NativeBeaconPort>) -> Self {
        Self { native, registry: RegionRegistry::new() }
    }

    /// Start monitoring a region.
    ///
    /// Idempotent: re-adding an already-monitored identifier is not an
    /// error.
    ///
    /// # Errors
    /// Rejects on a malformed region or a synchronous native failure.
    pub async fn start_monitoring(&self, region: &BeaconRegion) -> Result<()> {
        region.validate()?;
        self.native.start_monitoring(region).await?;

        if self.registry.add_monitored(region.clone()) {
            info!(region = %region.identifier, "region monitoring started");
        } else {
            debug!(region = %region.identifier, "region already monitored; start re-issued");
        }
        Ok(())
    }

    /// Stop monitoring a region. Stopping an unmonitored region is not an
    /// error; the native stop is still issued so a drifted native
    /// registration gets cleared.
    pub async fn stop_monitoring(&self, region: &BeaconRegion) -> Result<()> {
        region.validate()?;
        self.native.stop_monitoring(region).await?;

        if self.registry.remove_monitored(&region.identifier) {
            info!(region = %region.identifier, "region monitoring stopped");
        } else {
            debug!(region = %region.identifier, "stop for unmonitored region; no-op locally");
        }
        Ok(())
    }

    /// Start ranging beacons within a region. Same contract as
    /// [`start_monitoring`](Self::start_monitoring) against the ranged set.
    pub async fn start_ranging(&self, region: &BeaconRegion) -> Result<()> {
        region.validate()?;
        self.native.start_ranging(region).await?;

        if self.registry.add_ranged(region.clone()) {
            info!(region = %region.identifier, "beacon ranging started");
        } else {
            debug!(region = %region.identifier, "region already ranged; start re-issued");
        }
        Ok(())
    }

    /// Stop ranging beacons within a region.
    pub async fn stop_ranging(&self, region: &BeaconRegion) -> Result<()> {
        region.validate()?;
        self.native.stop_ranging(region).await?;

        if self.registry.remove_ranged(&region.identifier) {
            info!(region = %region.identifier, "beacon ranging stopped");
        } else {
            debug!(region = %region.identifier, "stop for unranged region; no-op locally");
        }
        Ok(())
    }

    /// Ask the platform for the region's inside/outside state. The answer
    /// arrives later as a region-state event on the bridge, not here.
    pub async fn request_region_state(&self, region: &BeaconRegion) -> Result<()> {
        region.validate()?;
        self.native.request_region_state(region).await
    }

    /// The NATIVE layer's monitored set. Used to detect drift between the
    /// local registry and native truth after process restarts.
    pub async fn monitored_regions(&self) -> Result<Vec<BeaconRegion>> {
        self.native.monitored_regions().await
    }

    /// The NATIVE layer's ranged set.
    pub async fn ranged_regions(&self) -> Result<Vec<BeaconRegion>> {
        self.native.ranged_regions().await
    }

    /// Local cache of the monitored set, for reconciliation against
    /// [`monitored_regions`](Self::monitored_regions).
    pub fn local_monitored(&self) -> Vec<BeaconRegion> {
        self.registry.monitored()
    }

    /// Local cache of the ranged set.
    pub fn local_ranged(&self) -> Vec<BeaconRegion> {
        self.registry.ranged()
    }

    /// Instruct the native layer to discard stale region registrations.
    pub async fn clean_up_regions(&self) -> Result<()> {
        info!("requesting native region cleanup");
        self.native.clean_up_regions().await
    }
}
