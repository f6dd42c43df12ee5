//! In-memory native beacon layer
//!
//! Stands in for the platform driver behind the transport bridge. Keeps its
//! own region sets ("native truth", which may drift from the application's
//! local registry), an authorization tier, and the single event channel the
//! bridge subscribes to.
//!
//! Delivery honours the platform's silent-failure mode: with an
//! insufficient authorization tier, commands still succeed optimistically
//! but simulated events are quietly not delivered.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use beaconkit_core::NativeBeaconPort;
use beaconkit_domain::constants::DEFAULT_EVENT_CHANNEL_CAPACITY;
use beaconkit_domain::{
    AuthorizationStatus, BeaconError, BeaconEvent, BeaconRegion, RangedBeacon, RangingUpdate,
    RegionState, RegionStateUpdate, Result,
};
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

struct DriverState {
    authorization: AuthorizationStatus,
    monitored: HashMap<String, BeaconRegion>,
    ranged: HashMap<String, BeaconRegion>,
    inside: HashSet<String>,
    background_updates: bool,
    updating_location: bool,
}

impl Default for DriverState {
    fn default() -> Self {
        Self {
            authorization: AuthorizationStatus::NotDetermined,
            monitored: HashMap::new(),
            ranged: HashMap::new(),
            inside: HashSet::new(),
            background_updates: false,
            updating_location: false,
        }
    }
}

/// Simulated beacon driver implementing [`NativeBeaconPort`].
pub struct SimulatedBeaconDriver {
    state: RwLock<DriverState>,
    events: mpsc::Sender<BeaconEvent>,
    subscription: Mutex<Option<mpsc::Receiver<BeaconEvent>>>,
}

impl SimulatedBeaconDriver {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        Self {
            state: RwLock::new(DriverState::default()),
            events: tx,
            subscription: Mutex::new(Some(rx)),
        }
    }

    /// Take the single event subscription. The bridge owns it; a second
    /// call returns `None`.
    pub fn subscribe(&self) -> Option<mpsc::Receiver<BeaconEvent>> {
        self.subscription.lock().take()
    }

    /// Set the authorization tier, as if the user had answered the prompt.
    pub fn set_authorization_status(&self, status: AuthorizationStatus) {
        self.state.write().authorization = status;
        debug!(?status, "simulated authorization status set");
    }

    /// Register a native region entry that the application never asked for,
    /// as left behind by a crashed or reinstalled process.
    pub fn register_orphaned_region(&self, region: BeaconRegion) {
        self.state.write().monitored.insert(region.identifier.clone(), region);
    }

    /// Simulate the device crossing into a monitored region. Returns
    /// whether the event was actually delivered.
    pub fn simulate_enter(&self, identifier: &str) -> bool {
        let region = {
            let mut state = self.state.write();
            let Some(region) = state.monitored.get(identifier).cloned() else {
                trace!(identifier, "enter ignored; region not monitored natively");
                return false;
            };
            state.inside.insert(identifier.to_string());
            if !state.authorization.allows_monitoring() {
                // Silent non-delivery: the registration exists but the tier
                // is insufficient, so the platform says nothing.
                debug!(identifier, "enter not delivered; authorization insufficient");
                return false;
            }
            region
        };
        self.deliver(BeaconEvent::RegionEntered { region })
    }

    /// Simulate the device crossing out of a monitored region.
    pub fn simulate_exit(&self, identifier: &str) -> bool {
        let region = {
            let mut state = self.state.write();
            let Some(region) = state.monitored.get(identifier).cloned() else {
                trace!(identifier, "exit ignored; region not monitored natively");
                return false;
            };
            state.inside.remove(identifier);
            if !state.authorization.allows_monitoring() {
                debug!(identifier, "exit not delivered; authorization insufficient");
                return false;
            }
            region
        };
        self.deliver(BeaconEvent::RegionExited { region })
    }

    /// Simulate one ranging pass over a ranged region. `beacons` may be
    /// empty; whether empty passes reach listeners is the bridge's call.
    pub fn simulate_ranging(&self, identifier: &str, beacons: Vec<RangedBeacon>) -> bool {
        let region = {
            let state = self.state.read();
            let Some(region) = state.ranged.get(identifier).cloned() else {
                trace!(identifier, "ranging ignored; region not ranged natively");
                return false;
            };
            if !state.authorization.allows_monitoring() {
                debug!(identifier, "ranging not delivered; authorization insufficient");
                return false;
            }
            region
        };
        self.deliver(BeaconEvent::RangingUpdate(RangingUpdate { region, beacons }))
    }

    fn deliver(&self, event: BeaconEvent) -> bool {
        match self.events.try_send(event) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(event)) => {
                warn!(?event, "event channel full; native event dropped");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                debug!("event subscription closed; native event dropped");
                false
            }
        }
    }
}

impl Default for SimulatedBeaconDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NativeBeaconPort for SimulatedBeaconDriver {
    async fn request_always_authorization(&self) {
        let state = self.state.read();
        // Prompting is idempotent after a decision, like the real platform.
        if state.authorization == AuthorizationStatus::NotDetermined {
            debug!("always authorization prompt would be shown");
        }
    }

    async fn request_when_in_use_authorization(&self) {
        let state = self.state.read();
        if state.authorization == AuthorizationStatus::NotDetermined {
            debug!("when-in-use authorization prompt would be shown");
        }
    }

    async fn authorization_status(&self) -> Result<AuthorizationStatus> {
        Ok(self.state.read().authorization)
    }

    async fn set_background_location_updates(&self, allow: bool) {
        self.state.write().background_updates = allow;
    }

    async fn start_updating_location(&self) {
        self.state.write().updating_location = true;
    }

    async fn stop_updating_location(&self) {
        self.state.write().updating_location = false;
    }

    async fn start_monitoring(&self, region: &BeaconRegion) -> Result<()> {
        // The platform rejects malformed definitions synchronously but
        // accepts registrations regardless of the current tier.
        if region.uuid.is_empty() {
            return Err(BeaconError::Native("malformed region: empty uuid".into()));
        }
        self.state.write().monitored.insert(region.identifier.clone(), region.clone());
        Ok(())
    }

    async fn stop_monitoring(&self, region: &BeaconRegion) -> Result<()> {
        let mut state = self.state.write();
        state.monitored.remove(&region.identifier);
        state.inside.remove(&region.identifier);
        Ok(())
    }

    async fn start_ranging(&self, region: &BeaconRegion) -> Result<()> {
        if region.uuid.is_empty() {
            return Err(BeaconError::Native("malformed region: empty uuid".into()));
        }
        self.state.write().ranged.insert(region.identifier.clone(), region.clone());
        Ok(())
    }

    async fn stop_ranging(&self, region: &BeaconRegion) -> Result<()> {
        self.state.write().ranged.remove(&region.identifier);
        Ok(())
    }

    async fn request_region_state(&self, region: &BeaconRegion) -> Result<()> {
        let (region, state) = {
            let driver = self.state.read();
            if !driver.authorization.allows_monitoring() {
                debug!(
                    identifier = %region.identifier,
                    "state answer not delivered; authorization insufficient"
                );
                return Ok(());
            }
            let state = if !driver.monitored.contains_key(&region.identifier) {
                RegionState::Unknown
            } else if driver.inside.contains(&region.identifier) {
                RegionState::Inside
            } else {
                RegionState::Outside
            };
            (region.clone(), state)
        };
        // Delivered on the event stream, never as a return value.
        self.deliver(BeaconEvent::RegionStateChanged(RegionStateUpdate { region, state }));
        Ok(())
    }

    async fn monitored_regions(&self) -> Result<Vec<BeaconRegion>> {
        let mut regions: Vec<_> = self.state.read().monitored.values().cloned().collect();
        regions.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        Ok(regions)
    }

    async fn ranged_regions(&self) -> Result<Vec<BeaconRegion>> {
        let mut regions: Vec<_> = self.state.read().ranged.values().cloned().collect();
        regions.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        Ok(regions)
    }

    async fn clean_up_regions(&self) -> Result<()> {
        let mut state = self.state.write();
        let discarded = state.monitored.len() + state.ranged.len();
        state.monitored.clear();
        state.ranged.clear();
        state.inside.clear();
        debug!(discarded, "native region registrations discarded");
        Ok(())
    }
}
