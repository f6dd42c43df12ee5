//! Structured logging helpers for command wrappers

use std::time::Duration;

use beaconkit_domain::BeaconError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` is the logical command identifier (e.g.
/// `"monitoring::start_monitoring_for_region"`). The helper keeps command
/// wrappers concise and the log shape consistent. Callers must avoid
/// forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `BeaconError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &BeaconError) -> &'static str {
    match error {
        BeaconError::InvalidRegion(_) => "invalid_region",
        BeaconError::Authorization(_) => "authorization",
        BeaconError::Native(_) => "native",
        BeaconError::Bridge(_) => "bridge",
        BeaconError::Config(_) => "config",
        BeaconError::Internal(_) => "internal",
    }
}
