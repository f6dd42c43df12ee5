//! Integration tests for the monitoring and region maintenance commands.

use beaconkit::commands;
use beaconkit::{BeaconConfig, BeaconError, BeaconRegion};

mod support;
use support::setup_context;

#[tokio::test(flavor = "multi_thread")]
async fn start_monitoring_is_idempotent() {
    let (ctx, _driver, _app_state) = setup_context(BeaconConfig::default()).await;
    let region = BeaconRegion::new("home", "U1");

    commands::start_monitoring_for_region(&ctx, &region).await.unwrap();
    commands::start_monitoring_for_region(&ctx, &region).await.unwrap();

    let monitored = commands::get_monitored_regions(&ctx).await.unwrap();
    assert_eq!(monitored.len(), 1);
    assert_eq!(monitored[0].identifier, "home");
    assert_eq!(ctx.regions.local_monitored().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn stop_monitoring_unknown_region_is_ok() {
    let (ctx, _driver, _app_state) = setup_context(BeaconConfig::default()).await;
    let region = BeaconRegion::new("never-started", "U1");

    commands::stop_monitoring_for_region(&ctx, &region).await.unwrap();
    assert!(commands::get_monitored_regions(&ctx).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_region_is_rejected() {
    let (ctx, _driver, _app_state) = setup_context(BeaconConfig::default()).await;

    // Minor without major has no native meaning.
    let region = BeaconRegion::new("bad", "U1").with_minor(7);
    let err = commands::start_monitoring_for_region(&ctx, &region).await.unwrap_err();
    assert!(matches!(err, BeaconError::InvalidRegion(_)));

    let empty_uuid = BeaconRegion::new("bad", "");
    let err = commands::start_monitoring_for_region(&ctx, &empty_uuid).await.unwrap_err();
    assert!(matches!(err, BeaconError::InvalidRegion(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn native_view_includes_orphans_and_cleanup_clears_them() {
    let (ctx, driver, _app_state) = setup_context(BeaconConfig::default()).await;

    // An orphan survives from a previous process run: native knows it, the
    // local cache does not.
    driver.register_orphaned_region(BeaconRegion::new("orphan", "U9"));
    commands::start_monitoring_for_region(&ctx, &BeaconRegion::new("home", "U1")).await.unwrap();

    let native_view = commands::get_monitored_regions(&ctx).await.unwrap();
    assert_eq!(native_view.len(), 2);
    assert_eq!(ctx.regions.local_monitored().len(), 1);

    commands::clean_up_regions(&ctx).await.unwrap();
    assert!(commands::get_monitored_regions(&ctx).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn ranging_commands_track_their_own_set() {
    let (ctx, _driver, _app_state) = setup_context(BeaconConfig::default()).await;
    let region = BeaconRegion::new("lobby", "U2");

    commands::start_ranging_beacons_in_region(&ctx, &region).await.unwrap();
    assert_eq!(commands::get_ranged_regions(&ctx).await.unwrap().len(), 1);
    assert!(commands::get_monitored_regions(&ctx).await.unwrap().is_empty());

    commands::stop_ranging_beacons_in_region(&ctx, &region).await.unwrap();
    assert!(commands::get_ranged_regions(&ctx).await.unwrap().is_empty());
}
