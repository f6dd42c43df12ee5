//! Beacon context - dependency injection container

use std::sync::Arc;

use beaconkit_core::{AppStateProvider, AuthorizationGate, EventBridge, NativeBeaconPort, RegionService};
use beaconkit_domain::{BeaconConfig, BeaconError, BeaconEvent, Result};
use beaconkit_infra::{SharedAppState, SimulatedBeaconDriver};
use tokio::sync::mpsc;
use tracing::info;

/// Holds all services and their shared wiring.
///
/// Construction establishes the single persistent native subscription and
/// starts the event bridge, so a context is the init-once lifecycle anchor
/// for the whole facade.
pub struct BeaconContext {
    pub config: BeaconConfig,
    pub authorization: Arc<AuthorizationGate>,
    pub regions: Arc<RegionService>,
    pub events: Arc<EventBridge>,
    native: Arc<dyn NativeBeaconPort>,
}

impl BeaconContext {
    /// Wire a context over an arbitrary native driver.
    ///
    /// `subscription` must be the driver's single event stream; the bridge
    /// consumes it here and no other subscription is ever taken.
    ///
    /// # Errors
    /// Fails if the event bridge cannot be started.
    pub async fn new(
        native: Arc<dyn NativeBeaconPort>,
        subscription: mpsc::Receiver<BeaconEvent>,
        app_state: Arc<dyn AppStateProvider>,
        config: BeaconConfig,
    ) -> Result<Self> {
        let authorization = Arc::new(AuthorizationGate::new(Arc::clone(&native)));
        let regions = Arc::new(RegionService::new(Arc::clone(&native)));

        let events = Arc::new(EventBridge::new(app_state));
        events.start(subscription).await.map_err(BeaconError::from)?;
        events.set_drop_empty_ranges(config.drop_empty_ranges);

        if config.allows_background_location_updates {
            authorization.allows_background_location_updates(true).await;
        }

        info!("beacon context initialized");
        Ok(Self { config, authorization, regions, events, native })
    }

    /// Convenience wiring over the in-process simulated driver. Returns the
    /// driver and app-state handles so tests and demos can steer the
    /// simulation.
    ///
    /// # Errors
    /// Fails if the event bridge cannot be started.
    pub async fn with_simulator(
        config: BeaconConfig,
    ) -> Result<(Self, Arc<SimulatedBeaconDriver>, Arc<SharedAppState>)> {
        let driver = Arc::new(SimulatedBeaconDriver::with_capacity(config.event_channel_capacity));
        let subscription = driver
            .subscribe()
            .ok_or_else(|| BeaconError::Internal("simulator subscription already taken".into()))?;
        let app_state = Arc::new(SharedAppState::default());

        let context = Self::new(
            Arc::clone(&driver) as Arc<dyn NativeBeaconPort>,
            subscription,
            Arc::clone(&app_state) as Arc<dyn AppStateProvider>,
            config,
        )
        .await?;

        Ok((context, driver, app_state))
    }

    /// Direct access to the native port, for hosts that need commands not
    /// covered by the service wrappers.
    pub fn native(&self) -> &Arc<dyn NativeBeaconPort> {
        &self.native
    }

    /// Stop the event bridge gracefully.
    ///
    /// The context cannot be restarted afterwards; the native subscription
    /// is gone. Services keep answering queries against the native layer.
    pub async fn shutdown(&self) -> Result<()> {
        info!("shutting down beacon context");
        self.events.stop().await.map_err(BeaconError::from)
    }
}
