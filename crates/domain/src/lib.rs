//! # BeaconKit Domain
//!
//! Domain types and models for the beacon region lifecycle.
//!
//! This crate contains:
//! - Region and event data types (BeaconRegion, BeaconEvent, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (native event names, channel defaults)
//!
//! ## Architecture
//! - No dependencies on other BeaconKit crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
