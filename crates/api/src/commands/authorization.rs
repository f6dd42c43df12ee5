//! Authorization commands

use std::sync::Arc;
use std::time::Instant;

use beaconkit_domain::{AuthorizationStatus, Result};
use tracing::info;

use crate::context::BeaconContext;
use crate::utils::logging::log_command_execution;

/// Request always-on authorization (required for background monitoring,
/// at the cost of energy drain). The platform prompt appears at most once
/// per install per tier.
pub async fn request_always_authorization(ctx: &Arc<BeaconContext>) {
    let command_name = "authorization::request_always_authorization";
    let start = Instant::now();

    info!(command = command_name, "Requesting always authorization");
    ctx.authorization.request_always_authorization().await;

    log_command_execution(command_name, start.elapsed(), true);
}

/// Request when-in-use authorization (bare minimum for ranging).
pub async fn request_when_in_use_authorization(ctx: &Arc<BeaconContext>) {
    let command_name = "authorization::request_when_in_use_authorization";
    let start = Instant::now();

    info!(command = command_name, "Requesting when-in-use authorization");
    ctx.authorization.request_when_in_use_authorization().await;

    log_command_execution(command_name, start.elapsed(), true);
}

/// One-shot query of the current authorization status.
///
/// This is the only way a permission decision becomes observable; poll it
/// after a request, and poll it again when events go silent.
pub async fn get_authorization_status(ctx: &Arc<BeaconContext>) -> Result<AuthorizationStatus> {
    let command_name = "authorization::get_authorization_status";
    let start = Instant::now();

    let result = ctx.authorization.authorization_status().await;
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Keep location updates flowing while the app is backgrounded. Must be
/// set before background monitoring is relied upon.
pub async fn allows_background_location_updates(ctx: &Arc<BeaconContext>, allow: bool) {
    let command_name = "authorization::allows_background_location_updates";
    let start = Instant::now();

    info!(command = command_name, allow, "Setting background location updates");
    ctx.authorization.allows_background_location_updates(allow).await;

    log_command_execution(command_name, start.elapsed(), true);
}

/// Prime location delivery; needed before monitoring produces events on
/// some platforms.
pub async fn start_updating_location(ctx: &Arc<BeaconContext>) {
    let command_name = "authorization::start_updating_location";
    let start = Instant::now();

    ctx.authorization.start_updating_location().await;
    log_command_execution(command_name, start.elapsed(), true);
}

/// Stop location delivery to save battery.
pub async fn stop_updating_location(ctx: &Arc<BeaconContext>) {
    let command_name = "authorization::stop_updating_location";
    let start = Instant::now();

    ctx.authorization.stop_updating_location().await;
    log_command_execution(command_name, start.elapsed(), true);
}
