//! Port interfaces for the native beacon layer
//!
//! These traits define the boundaries between the lifecycle logic and the
//! platform: the beacon driver behind the transport bridge, and the host
//! runtime's notion of application state.

use async_trait::async_trait;
use beaconkit_domain::{AppExecutionState, AuthorizationStatus, BeaconRegion, Result};

/// Command surface of the native beacon layer.
///
/// Each method maps 1:1 to a single native invocation over the transport
/// bridge (reliable, in-order, at-most-once per invocation). An `Ok` return
/// means the request was accepted by the native side, never that the
/// operation was confirmed; genuinely asynchronous native failures are not
/// surfaced here at all.
#[async_trait]
pub trait NativeBeaconPort: Send + Sync {
    /// Request the always-on authorization tier. Fire-and-forget; the
    /// platform prompts at most once per install per tier.
    async fn request_always_authorization(&self);

    /// Request the when-in-use authorization tier. Fire-and-forget.
    async fn request_when_in_use_authorization(&self);

    /// One-shot query of the current authorization tier.
    async fn authorization_status(&self) -> Result<AuthorizationStatus>;

    /// Toggle location updates while the app is backgrounded. Silent on
    /// failure; a missing capability declaration surfaces as absent events.
    async fn set_background_location_updates(&self, allow: bool);

    /// Prime location delivery. Needed on some platforms before region
    /// monitoring produces events.
    async fn start_updating_location(&self);

    /// Stop location delivery to save power.
    async fn stop_updating_location(&self);

    /// Start monitoring a region. Fails only on synchronous rejection
    /// (malformed region).
    async fn start_monitoring(&self, region: &BeaconRegion) -> Result<()>;

    /// Stop monitoring a region. Stopping an unknown region is not an error.
    async fn stop_monitoring(&self, region: &BeaconRegion) -> Result<()>;

    /// Start ranging beacons within a region.
    async fn start_ranging(&self, region: &BeaconRegion) -> Result<()>;

    /// Stop ranging beacons within a region.
    async fn stop_ranging(&self, region: &BeaconRegion) -> Result<()>;

    /// Ask for the region's inside/outside state. The answer arrives later
    /// as a region-state event on the bridge subscription.
    async fn request_region_state(&self, region: &BeaconRegion) -> Result<()>;

    /// The native layer's view of the monitored set (drift detection).
    async fn monitored_regions(&self) -> Result<Vec<BeaconRegion>>;

    /// The native layer's view of the ranged set (drift detection).
    async fn ranged_regions(&self) -> Result<Vec<BeaconRegion>>;

    /// Discard stale or orphaned native region registrations left behind by
    /// a previous process. Resolves when acknowledged.
    async fn clean_up_regions(&self) -> Result<()>;
}

/// Host runtime's view of the application execution state.
pub trait AppStateProvider: Send + Sync {
    fn execution_state(&self) -> AppExecutionState;
}

/// Fixed-state provider, mainly for tests and single-mode hosts.
#[derive(Debug, Clone, Copy)]
pub struct FixedAppState(pub AppExecutionState);

impl AppStateProvider for FixedAppState {
    fn execution_state(&self) -> AppExecutionState {
        self.0
    }
}
