//! Authorization gate
//!
//! Thin wrapper over the native port's permission surface. Requests are
//! fire-and-forget; the status is pull-only and must be polled after a
//! request, since the platform never pushes a decision back through this
//! layer.

use std::sync::Arc;

use beaconkit_domain::{AuthorizationStatus, Result};
use tracing::{debug, info};

use crate::monitoring::ports::NativeBeaconPort;

/// Gate in front of monitoring/ranging: tracks and requests the permission
/// tier required before region commands produce events.
pub struct AuthorizationGate {
    native: Arc<dyn NativeBeaconPort>,
}

impl AuthorizationGate {
    pub fn new(native: Arc<dyn NativeBeaconPort>) -> Self {
        Self { native }
    }

    /// Request always-on authorization (needed for background monitoring).
    /// The platform prompts at most once per install per tier; repeated
    /// calls after a decision are no-ops.
    pub async fn request_always_authorization(&self) {
        info!("requesting always authorization");
        self.native.request_always_authorization().await;
    }

    /// Request when-in-use authorization (bare minimum for ranging in the
    /// foreground).
    pub async fn request_when_in_use_authorization(&self) {
        info!("requesting when-in-use authorization");
        self.native.request_when_in_use_authorization().await;
    }

    /// One-shot query of the current authorization tier.
    ///
    /// Authorization insufficiency discovered only asynchronously (the
    /// native layer silently stops delivering events) is not surfaced as an
    /// error anywhere; callers are expected to poll this.
    pub async fn authorization_status(&self) -> Result<AuthorizationStatus> {
        let status = self.native.authorization_status().await?;
        debug!(?status, "authorization status queried");
        Ok(status)
    }

    /// Toggle background location updates. Must be set before background
    /// monitoring is relied upon; failure is silent at this layer.
    pub async fn allows_background_location_updates(&self, allow: bool) {
        info!(allow, "setting background location updates");
        self.native.set_background_location_updates(allow).await;
    }

    /// Prime location delivery for region monitoring.
    pub async fn start_updating_location(&self) {
        debug!("starting location updates");
        self.native.start_updating_location().await;
    }

    /// Stop location delivery to save power.
    pub async fn stop_updating_location(&self) {
        debug!("stopping location updates");
        self.native.stop_updating_location().await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use beaconkit_domain::BeaconRegion;
    use parking_lot::RwLock;

    use super::*;

    #[derive(Default)]
    struct MockNativePort {
        always_requests: AtomicUsize,
        when_in_use_requests: AtomicUsize,
        background_updates: AtomicBool,
        status: RwLock<Option<AuthorizationStatus>>,
    }

    #[async_trait]
    impl NativeBeaconPort for MockNativePort {
        async fn request_always_authorization(&self) {
            self.always_requests.fetch_add(1, Ordering::SeqCst);
        }

        async fn request_when_in_use_authorization(&self) {
            self.when_in_use_requests.fetch_add(1, Ordering::SeqCst);
        }

        async fn authorization_status(&self) -> Result<AuthorizationStatus> {
            Ok(self.status.read().unwrap_or(AuthorizationStatus::NotDetermined))
        }

        async fn set_background_location_updates(&self, allow: bool) {
            self.background_updates.store(allow, Ordering::SeqCst);
        }

        async fn start_updating_location(&self) {}
        async fn stop_updating_location(&self) {}

        async fn start_monitoring(&self, _region: &BeaconRegion) -> Result<()> {
            Ok(())
        }
        async fn stop_monitoring(&self, _region: &BeaconRegion) -> Result<()> {
            Ok(())
        }
        async fn start_ranging(&self, _region: &BeaconRegion) -> Result<()> {
            Ok(())
        }
        async fn stop_ranging(&self, _region: &BeaconRegion) -> Result<()> {
            Ok(())
        }
        async fn request_region_state(&self, _region: &BeaconRegion) -> Result<()> {
            Ok(())
        }
        async fn monitored_regions(&self) -> Result<Vec<BeaconRegion>> {
            Ok(Vec::new())
        }
        async fn ranged_regions(&self) -> Result<Vec<BeaconRegion>> {
            Ok(Vec::new())
        }
        async fn clean_up_regions(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn requests_are_forwarded_fire_and_forget() {
        let port = Arc::new(MockNativePort::default());
        let gate = AuthorizationGate::new(port.clone());

        gate.request_always_authorization().await;
        gate.request_always_authorization().await;
        gate.request_when_in_use_authorization().await;

        assert_eq!(port.always_requests.load(Ordering::SeqCst), 2);
        assert_eq!(port.when_in_use_requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn status_is_pull_only() {
        let port = Arc::new(MockNativePort::default());
        let gate = AuthorizationGate::new(port.clone());

        assert_eq!(
            gate.authorization_status().await.unwrap(),
            AuthorizationStatus::NotDetermined
        );

        *port.status.write() = Some(AuthorizationStatus::Denied);
        assert_eq!(gate.authorization_status().await.unwrap(), AuthorizationStatus::Denied);
    }

    #[tokio::test]
    async fn background_updates_toggle_reaches_native() {
        let port = Arc::new(MockNativePort::default());
        let gate = AuthorizationGate::new(port.clone());

        gate.allows_background_location_updates(true).await;
        assert!(port.background_updates.load(Ordering::SeqCst));

        gate.allows_background_location_updates(false).await;
        assert!(!port.background_updates.load(Ordering::SeqCst));
    }
}
