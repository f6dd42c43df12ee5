//! Command wrappers over the beacon context
//!
//! Thin async functions mirroring the native command surface, one module
//! per concern. Every wrapper logs command name, duration and outcome.

pub mod authorization;
pub mod events;
pub mod monitoring;
pub mod ranging;
pub mod regions;

pub use authorization::{
    allows_background_location_updates, get_authorization_status, request_always_authorization,
    request_when_in_use_authorization, start_updating_location, stop_updating_location,
};
pub use events::{
    add_event_listener, remove_event_listener, set_background_monitor_handler,
    should_drop_empty_ranges,
};
pub use monitoring::{start_monitoring_for_region, stop_monitoring_for_region};
pub use ranging::{start_ranging_beacons_in_region, stop_ranging_beacons_in_region};
pub use regions::{
    clean_up_regions, get_monitored_regions, get_ranged_regions, request_state_for_region,
};
