//! # BeaconKit
//!
//! Client-side facade over a platform location-beacon subsystem: request
//! location authorization, start/stop monitoring geofenced beacon regions,
//! start/stop ranging beacons, and receive region enter/exit events even
//! while the hosting application is suspended in the background.
//!
//! The facade is wired through a [`BeaconContext`]: a native driver behind
//! the [`NativeBeaconPort`] trait, the region services, and the process-wide
//! event bridge that owns the single native subscription.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use beaconkit::commands;
//! use beaconkit::{BeaconConfig, BeaconContext, BeaconRegion};
//!
//! # async fn example() -> beaconkit::Result<()> {
//! let (ctx, _driver, _app_state) = BeaconContext::with_simulator(BeaconConfig::default()).await?;
//! let ctx = Arc::new(ctx);
//!
//! commands::request_always_authorization(&ctx).await;
//! commands::start_monitoring_for_region(&ctx, &BeaconRegion::new("home", "U1")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Background events
//!
//! Register the background monitor handler with
//! [`commands::set_background_monitor_handler`] BEFORE the host
//! application's primary entry point runs; otherwise early background
//! events may be missed. This is a documented integration precondition, not
//! something this crate can enforce.

pub mod commands;
pub mod context;
pub mod utils;

pub use beaconkit_core::{
    AppStateProvider, AuthorizationGate, BridgeError, EventBridge, ListenerHandle,
    NativeBeaconPort, RegionService,
};
pub use beaconkit_domain::{
    AppExecutionState, AuthorizationStatus, BackgroundMonitorEvent, BeaconConfig, BeaconError,
    BeaconEvent, BeaconRegion, EventKind, Proximity, RangedBeacon, RangingUpdate, RegionState,
    RegionStateUpdate, RegionTransition, Result,
};
pub use beaconkit_infra::{SharedAppState, SimulatedBeaconDriver};
pub use context::BeaconContext;
