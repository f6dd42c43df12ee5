//! Beacon ranging commands

use std::sync::Arc;
use std::time::Instant;

use beaconkit_domain::{BeaconRegion, Result};
use tracing::{info, warn};

use crate::context::BeaconContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Start ranging beacons within a region. Ranging is continuous and
/// power-hungry; stop it when proximity readings are no longer needed.
///
/// # Errors
/// Rejects a malformed region or a synchronous native refusal.
pub async fn start_ranging_beacons_in_region(
    ctx: &Arc<BeaconContext>,
    region: &BeaconRegion,
) -> Result<()> {
    let command_name = "ranging::start_ranging_beacons_in_region";
    let start = Instant::now();

    info!(command = command_name, region = %region.identifier, "Starting beacon ranging");
    let result = ctx.regions.start_ranging(region).await;

    if let Err(error) = &result {
        warn!(command = command_name, error = error_label(error), "Beacon ranging start failed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Stop ranging beacons within a region. A stop for a region that was
/// never ranged is not an error.
///
/// # Errors
/// Rejects a malformed region or a synchronous native refusal.
pub async fn stop_ranging_beacons_in_region(
    ctx: &Arc<BeaconContext>,
    region: &BeaconRegion,
) -> Result<()> {
    let command_name = "ranging::stop_ranging_beacons_in_region";
    let start = Instant::now();

    info!(command = command_name, region = %region.identifier, "Stopping beacon ranging");
    let result = ctx.regions.stop_ranging(region).await;

    if let Err(error) = &result {
        warn!(command = command_name, error = error_label(error), "Beacon ranging stop failed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}
