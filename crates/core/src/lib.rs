//! # BeaconKit Core
//!
//! Pure region-lifecycle logic - no platform dependencies.
//!
//! This crate contains:
//! - Port interfaces to the native beacon layer and the host app state
//! - The Region Registry and Command Dispatcher (`RegionService`)
//! - The Authorization Gate
//! - The Event Bridge with listener fan-out and the single-slot
//!   background monitor handler
//!
//! ## Architecture Principles
//! - Only depends on `beaconkit-domain`
//! - No platform or transport code
//! - All external effects go through traits
//! - Pure, testable lifecycle logic

pub mod authorization;
pub mod events;
pub mod monitoring;

// Re-export specific items to avoid ambiguity
pub use authorization::AuthorizationGate;
pub use events::bridge::{EventBridge, ListenerHandle};
pub use events::error::{BridgeError, BridgeResult};
pub use monitoring::ports::{AppStateProvider, NativeBeaconPort};
pub use monitoring::registry::RegionRegistry;
pub use monitoring::RegionService;
