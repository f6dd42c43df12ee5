//! Event bridge commands

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use beaconkit_core::ListenerHandle;
use beaconkit_domain::{BackgroundMonitorEvent, BeaconEvent, EventKind};
use tracing::info;

use crate::context::BeaconContext;
use crate::utils::logging::log_command_execution;

/// Subscribe a listener to one event kind. Listeners for the same kind
/// fire in subscription order; a panicking listener is isolated and does
/// not affect the others.
pub fn add_event_listener<F>(
    ctx: &Arc<BeaconContext>,
    kind: EventKind,
    callback: F,
) -> ListenerHandle
where
    F: Fn(&BeaconEvent) + Send + Sync + 'static,
{
    let command_name = "events::add_event_listener";
    let start = Instant::now();

    let handle = ctx.events.add_listener(kind, callback);
    log_command_execution(command_name, start.elapsed(), true);
    handle
}

/// Unsubscribe a listener. Returns `false` if the handle was already
/// removed.
pub fn remove_event_listener(ctx: &Arc<BeaconContext>, handle: ListenerHandle) -> bool {
    let command_name = "events::remove_event_listener";
    let start = Instant::now();

    let removed = ctx.events.remove_listener(handle);
    log_command_execution(command_name, start.elapsed(), true);
    removed
}

/// Install the single background monitor handler, replacing any previous
/// one. The handler fires only for enter/exit transitions received while
/// the app is not in the foreground.
pub fn set_background_monitor_handler<F, Fut>(ctx: &Arc<BeaconContext>, handler: F)
where
    F: Fn(BackgroundMonitorEvent) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let command_name = "events::set_background_monitor_handler";
    let start = Instant::now();

    info!(command = command_name, "Installing background monitor handler");
    ctx.events.set_background_monitor_handler(handler);

    log_command_execution(command_name, start.elapsed(), true);
}

/// Toggle suppression of ranging updates that carry no beacons. Takes
/// effect for the next delivered update.
pub fn should_drop_empty_ranges(ctx: &Arc<BeaconContext>, drop: bool) {
    let command_name = "events::should_drop_empty_ranges";
    let start = Instant::now();

    info!(command = command_name, drop, "Setting empty-range suppression");
    ctx.events.set_drop_empty_ranges(drop);

    log_command_execution(command_name, start.elapsed(), true);
}
