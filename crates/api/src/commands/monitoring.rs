//! Region monitoring commands

use std::sync::Arc;
use std::time::Instant;

use beaconkit_domain::{BeaconRegion, Result};
use tracing::{info, warn};

use crate::context::BeaconContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Start monitoring enter/exit transitions for a region.
///
/// Resolves `Ok` once the native call is accepted; it is not a
/// confirmation that monitoring is active. Idempotent across repeats.
///
/// # Errors
/// Rejects a malformed region or a synchronous native refusal.
pub async fn start_monitoring_for_region(
    ctx: &Arc<BeaconContext>,
    region: &BeaconRegion,
) -> Result<()> {
    let command_name = "monitoring::start_monitoring_for_region";
    let start = Instant::now();

    info!(command = command_name, region = %region.identifier, "Starting region monitoring");
    let result = ctx.regions.start_monitoring(region).await;

    if let Err(error) = &result {
        warn!(command = command_name, error = error_label(error), "Region monitoring start failed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Stop monitoring a region. Stopping a region that was never started is
/// not an error.
///
/// # Errors
/// Rejects a malformed region or a synchronous native refusal.
pub async fn stop_monitoring_for_region(
    ctx: &Arc<BeaconContext>,
    region: &BeaconRegion,
) -> Result<()> {
    let command_name = "monitoring::stop_monitoring_for_region";
    let start = Instant::now();

    info!(command = command_name, region = %region.identifier, "Stopping region monitoring");
    let result = ctx.regions.stop_monitoring(region).await;

    if let Err(error) = &result {
        warn!(command = command_name, error = error_label(error), "Region monitoring stop failed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}
