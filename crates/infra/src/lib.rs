//! # BeaconKit Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - A simulated beacon driver implementing the native port (tests, demos,
//!   hosts that provide their own transport)
//! - A shared application-state provider
//! - Configuration loading (environment variables, TOML files)
//!
//! ## Architecture
//! - Implements traits defined in `beaconkit-core`
//! - Depends on `beaconkit-domain` and `beaconkit-core`
//! - Contains all "impure" code (channels, environment, files)

pub mod config;
pub mod platform;

// Re-export commonly used items
pub use platform::app_state::SharedAppState;
pub use platform::simulator::SimulatedBeaconDriver;
