//! Integration tests for the init-once context and bridge lifecycle.

use std::sync::Arc;

use beaconkit::commands;
use beaconkit::{BeaconConfig, BeaconError, BeaconRegion, EventKind};
use parking_lot::Mutex;
use tokio::sync::mpsc;

mod support;
use support::{settle, setup_context};

#[tokio::test(flavor = "multi_thread")]
async fn context_starts_the_bridge_once() {
    let (ctx, _driver, _app_state) = setup_context(BeaconConfig::default()).await;
    assert!(ctx.events.is_running());

    // The single native subscription is consumed during wiring; a second
    // start has no stream to own.
    let (_tx, rx) = mpsc::channel(8);
    let err = ctx.events.start(rx).await.unwrap_err();
    assert!(matches!(BeaconError::from(err), BeaconError::Bridge(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn shutdown_is_terminal() {
    let (ctx, driver, _app_state) = setup_context(BeaconConfig::default()).await;
    commands::start_monitoring_for_region(&ctx, &BeaconRegion::new("home", "U1")).await.unwrap();

    let count = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&count);
    commands::add_event_listener(&ctx, EventKind::RegionEnter, move |_| *sink.lock() += 1);

    ctx.shutdown().await.unwrap();
    assert!(!ctx.events.is_running());

    // Events after shutdown go nowhere.
    driver.simulate_enter("home");
    settle().await;
    assert_eq!(*count.lock(), 0);

    // A second shutdown reports the bridge as already stopped.
    assert!(ctx.shutdown().await.is_err());

    // No restart: the lifecycle is init-once by design.
    let (_tx, rx) = mpsc::channel(8);
    assert!(ctx.events.start(rx).await.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn queries_survive_bridge_shutdown() {
    let (ctx, _driver, _app_state) = setup_context(BeaconConfig::default()).await;
    commands::start_monitoring_for_region(&ctx, &BeaconRegion::new("home", "U1")).await.unwrap();

    ctx.shutdown().await.unwrap();

    // Command dispatch does not depend on the event stream.
    let monitored = commands::get_monitored_regions(&ctx).await.unwrap();
    assert_eq!(monitored.len(), 1);
    commands::stop_monitoring_for_region(&ctx, &BeaconRegion::new("home", "U1")).await.unwrap();
    assert!(commands::get_monitored_regions(&ctx).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn config_flags_are_applied_at_wiring_time() {
    let config = BeaconConfig {
        allows_background_location_updates: true,
        drop_empty_ranges: true,
        ..BeaconConfig::default()
    };
    let (ctx, _driver, _app_state) = setup_context(config).await;

    assert!(ctx.config.allows_background_location_updates);
    assert!(ctx.config.drop_empty_ranges);
}
