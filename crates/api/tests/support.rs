use std::sync::Arc;
use std::time::Duration;

use beaconkit::{
    AuthorizationStatus, BeaconConfig, BeaconContext, SharedAppState, SimulatedBeaconDriver,
};

/// Wire a context over the simulated driver with always authorization
/// already granted, so event delivery is unblocked by default.
pub async fn setup_context(
    config: BeaconConfig,
) -> (Arc<BeaconContext>, Arc<SimulatedBeaconDriver>, Arc<SharedAppState>) {
    let (ctx, driver, app_state) =
        BeaconContext::with_simulator(config).await.expect("context wiring failed");
    driver.set_authorization_status(AuthorizationStatus::AuthorizedAlways);
    (Arc::new(ctx), driver, app_state)
}

/// Poll `predicate` until it holds or a 2 second deadline passes.
pub async fn wait_until(predicate: impl Fn() -> bool) -> bool {
    for _ in 0..200 {
        if predicate() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    predicate()
}

/// Give the dispatch loop a moment to drain already-queued events.
pub async fn settle() {
    for _ in 0..20 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
