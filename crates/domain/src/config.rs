//! Configuration structures

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EVENT_CHANNEL_CAPACITY;

/// Process-wide configuration for the beacon facade.
///
/// Both flags map to configuration calls on the native layer and affect all
/// subsequent behaviour until changed again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeaconConfig {
    /// Keep delivering location updates while the app is backgrounded.
    ///
    /// Must be enabled before background monitoring is relied upon. A missing
    /// platform capability declaration is not detectable here; it surfaces
    /// later as absent events.
    #[serde(default)]
    pub allows_background_location_updates: bool,

    /// Suppress ranging updates that carry zero detected beacons.
    #[serde(default)]
    pub drop_empty_ranges: bool,

    /// Bound of the native event channel.
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,
}

fn default_event_channel_capacity() -> usize {
    DEFAULT_EVENT_CHANNEL_CAPACITY
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            allows_background_location_updates: false,
            drop_empty_ranges: false,
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
        }
    }
}
