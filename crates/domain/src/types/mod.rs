//! Domain types and models

pub mod authorization;
pub mod events;
pub mod region;

pub use authorization::{AppExecutionState, AuthorizationStatus};
pub use events::{
    BackgroundMonitorEvent, BeaconEvent, EventKind, Proximity, RangedBeacon, RangingUpdate,
    RegionState, RegionStateUpdate, RegionTransition,
};
pub use region::BeaconRegion;
