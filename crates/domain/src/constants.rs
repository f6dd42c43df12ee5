//! Domain constants
//!
//! Native event names match the wire surface of the platform bridge, so
//! logs and diagnostics line up with what the native side emits.

/// Native event name for region entry.
pub const EVENT_REGION_DID_ENTER: &str = "regionDidEnter";

/// Native event name for region exit.
pub const EVENT_REGION_DID_EXIT: &str = "regionDidExit";

/// Native event name for a ranging update.
pub const EVENT_BEACONS_DID_RANGE: &str = "beaconsDidRange";

/// Native event name for an asynchronous region state answer.
pub const EVENT_DID_DETERMINE_STATE: &str = "didDetermineState";

/// Default bound for the native event channel. The native side never blocks
/// on the application; events past this bound are dropped.
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;
