//! Region queries and maintenance commands

use std::sync::Arc;
use std::time::Instant;

use beaconkit_domain::{BeaconRegion, Result};
use tracing::{info, warn};

use crate::context::BeaconContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Ask the platform whether the device is currently inside or outside a
/// region. The answer arrives asynchronously as a region-state event on
/// the bridge; this command only issues the request.
///
/// # Errors
/// Rejects a malformed region or a synchronous native refusal.
pub async fn request_state_for_region(
    ctx: &Arc<BeaconContext>,
    region: &BeaconRegion,
) -> Result<()> {
    let command_name = "regions::request_state_for_region";
    let start = Instant::now();

    info!(command = command_name, region = %region.identifier, "Requesting region state");
    let result = ctx.regions.request_region_state(region).await;

    if let Err(error) = &result {
        warn!(command = command_name, error = error_label(error), "Region state request failed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Snapshot of the native layer's monitored set. This is the platform's
/// view, which may include registrations that survived a process restart
/// and are absent from the local cache.
///
/// # Errors
/// Fails if the native query fails.
pub async fn get_monitored_regions(ctx: &Arc<BeaconContext>) -> Result<Vec<BeaconRegion>> {
    let command_name = "regions::get_monitored_regions";
    let start = Instant::now();

    let result = ctx.regions.monitored_regions().await;
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Snapshot of the native layer's ranged set.
///
/// # Errors
/// Fails if the native query fails.
pub async fn get_ranged_regions(ctx: &Arc<BeaconContext>) -> Result<Vec<BeaconRegion>> {
    let command_name = "regions::get_ranged_regions";
    let start = Instant::now();

    let result = ctx.regions.ranged_regions().await;
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Discard all native region registrations, including orphans left over
/// from previous process runs.
///
/// # Errors
/// Fails if the native cleanup fails.
pub async fn clean_up_regions(ctx: &Arc<BeaconContext>) -> Result<()> {
    let command_name = "regions::clean_up_regions";
    let start = Instant::now();

    info!(command = command_name, "Cleaning up native regions");
    let result = ctx.regions.clean_up_regions().await;

    if let Err(error) = &result {
        warn!(command = command_name, error = error_label(error), "Region cleanup failed");
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}
