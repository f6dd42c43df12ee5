//! Event payloads decoded from the native beacon stream

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    EVENT_BEACONS_DID_RANGE, EVENT_DID_DETERMINE_STATE, EVENT_REGION_DID_ENTER,
    EVENT_REGION_DID_EXIT,
};
use crate::types::region::BeaconRegion;

/// Coarse distance bucket reported by the driver for a ranged beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proximity {
    Immediate,
    Near,
    Far,
    Unknown,
}

/// A single beacon observed during ranging. Signal values are carried
/// through from the driver untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangedBeacon {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<u16>,
    pub proximity: Proximity,
    pub accuracy: f64,
    pub rssi: i32,
}

/// One ranging pass over a region. `beacons` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangingUpdate {
    pub region: BeaconRegion,
    pub beacons: Vec<RangedBeacon>,
}

/// Inside/outside answer to a region state query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionState {
    Inside,
    Outside,
    Unknown,
}

/// Asynchronous answer to `request_region_state`, delivered on the event
/// stream rather than as a direct return value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStateUpdate {
    pub region: BeaconRegion,
    pub state: RegionState,
}

/// Direction of a region boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionTransition {
    Enter,
    Exit,
}

/// Event handed to the background monitor handler when a boundary crossing
/// arrives while the app has no foreground execution context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundMonitorEvent {
    pub region: BeaconRegion,
    pub event: RegionTransition,
    pub received_at: DateTime<Utc>,
}

/// Decoded native event, as delivered on the single bridge subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum BeaconEvent {
    RegionEntered { region: BeaconRegion },
    RegionExited { region: BeaconRegion },
    RangingUpdate(RangingUpdate),
    RegionStateChanged(RegionStateUpdate),
}

impl BeaconEvent {
    /// Discriminant used to key listener registration.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::RegionEntered { .. } => EventKind::RegionEnter,
            Self::RegionExited { .. } => EventKind::RegionExit,
            Self::RangingUpdate(_) => EventKind::RangingUpdate,
            Self::RegionStateChanged(_) => EventKind::RegionState,
        }
    }
}

/// Kind of native event a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    RegionEnter,
    RegionExit,
    RangingUpdate,
    RegionState,
}

impl EventKind {
    /// Native event name on the wire surface.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::RegionEnter => EVENT_REGION_DID_ENTER,
            Self::RegionExit => EVENT_REGION_DID_EXIT,
            Self::RangingUpdate => EVENT_BEACONS_DID_RANGE,
            Self::RegionState => EVENT_DID_DETERMINE_STATE,
        }
    }
}
