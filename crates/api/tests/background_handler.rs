//! Integration tests for the single-slot background monitor handler.

use std::sync::Arc;

use beaconkit::commands;
use beaconkit::{
    AppExecutionState, BackgroundMonitorEvent, BeaconConfig, BeaconRegion, EventKind,
    RegionTransition,
};
use parking_lot::Mutex;

mod support;
use support::{settle, setup_context, wait_until};

#[tokio::test(flavor = "multi_thread")]
async fn handler_fires_for_background_exit() {
    let (ctx, driver, app_state) = setup_context(BeaconConfig::default()).await;
    commands::start_monitoring_for_region(&ctx, &BeaconRegion::new("home", "U1")).await.unwrap();
    app_state.set(AppExecutionState::Background);

    let received: Arc<Mutex<Vec<BackgroundMonitorEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    commands::set_background_monitor_handler(&ctx, move |event| {
        let sink = Arc::clone(&sink);
        async move {
            sink.lock().push(event);
        }
    });

    driver.simulate_enter("home");
    driver.simulate_exit("home");
    assert!(wait_until(|| received.lock().len() == 2).await);

    let events = received.lock();
    assert_eq!(events[0].event, RegionTransition::Enter);
    assert_eq!(events[1].event, RegionTransition::Exit);
    assert_eq!(events[1].region.identifier, "home");
    assert_eq!(events[1].region.uuid, "U1");
}

#[tokio::test(flavor = "multi_thread")]
async fn handler_is_skipped_while_foregrounded() {
    let (ctx, driver, app_state) = setup_context(BeaconConfig::default()).await;
    commands::start_monitoring_for_region(&ctx, &BeaconRegion::new("home", "U1")).await.unwrap();

    let background_count = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&background_count);
    commands::set_background_monitor_handler(&ctx, move |_event| {
        let sink = Arc::clone(&sink);
        async move {
            *sink.lock() += 1;
        }
    });

    // Ordinary listeners receive the event regardless of app state.
    let listener_count = Arc::new(Mutex::new(0usize));
    let listener_sink = Arc::clone(&listener_count);
    commands::add_event_listener(&ctx, EventKind::RegionEnter, move |_| {
        *listener_sink.lock() += 1;
    });

    app_state.set(AppExecutionState::Active);
    driver.simulate_enter("home");
    assert!(wait_until(|| *listener_count.lock() == 1).await);
    settle().await;
    assert_eq!(*background_count.lock(), 0);

    // Once backgrounded, the same transition reaches the handler too.
    app_state.set(AppExecutionState::Background);
    driver.simulate_enter("home");
    assert!(wait_until(|| *background_count.lock() == 1).await);
    assert_eq!(*listener_count.lock(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn installing_a_new_handler_replaces_the_old_one() {
    let (ctx, driver, app_state) = setup_context(BeaconConfig::default()).await;
    commands::start_monitoring_for_region(&ctx, &BeaconRegion::new("home", "U1")).await.unwrap();
    app_state.set(AppExecutionState::Background);

    let old_count = Arc::new(Mutex::new(0usize));
    let old_sink = Arc::clone(&old_count);
    commands::set_background_monitor_handler(&ctx, move |_event| {
        let old_sink = Arc::clone(&old_sink);
        async move {
            *old_sink.lock() += 1;
        }
    });

    let new_count = Arc::new(Mutex::new(0usize));
    let new_sink = Arc::clone(&new_count);
    commands::set_background_monitor_handler(&ctx, move |_event| {
        let new_sink = Arc::clone(&new_sink);
        async move {
            *new_sink.lock() += 1;
        }
    });

    driver.simulate_exit("home");
    assert!(wait_until(|| *new_count.lock() == 1).await);
    assert_eq!(*old_count.lock(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn ranging_updates_never_reach_the_handler() {
    let (ctx, driver, app_state) = setup_context(BeaconConfig::default()).await;
    commands::start_ranging_beacons_in_region(&ctx, &BeaconRegion::new("lobby", "U2"))
        .await
        .unwrap();
    app_state.set(AppExecutionState::Background);

    let count = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&count);
    commands::set_background_monitor_handler(&ctx, move |_event| {
        let sink = Arc::clone(&sink);
        async move {
            *sink.lock() += 1;
        }
    });

    driver.simulate_ranging("lobby", vec![]);
    settle().await;
    assert_eq!(*count.lock(), 0);
}
