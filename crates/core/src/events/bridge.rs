//! Process-wide event dispatch service
//!
//! Owns the single native event subscription and fans typed events out to
//! registered listeners, in registration order. Two distinct registration
//! capabilities are exposed on purpose:
//!
//! - ordinary listeners: additive, many per event kind, invoked for every
//!   matching event while the stream is live;
//! - the background monitor handler: a single slot with replace semantics,
//!   invoked only for enter/exit events while the app has no foreground
//!   execution context. Its returned future is awaited to completion before
//!   the next event is dispatched, mirroring the platform's rule that
//!   background work must finish before the process may be suspended.
//!
//! There is no buffering: events that arrive while no listener is
//! registered for their kind are dropped. Delivery is at-most-once,
//! best-effort, with no replay.

use std::collections::HashMap;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use beaconkit_domain::{
    BackgroundMonitorEvent, BeaconEvent, BeaconRegion, EventKind, RegionTransition,
};
use chrono::Utc;
use parking_lot::RwLock;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

use super::error::{BridgeError, BridgeResult};
use crate::monitoring::ports::AppStateProvider;

/// Callback registered for an event kind.
pub type ListenerCallback = Box<dyn Fn(&BeaconEvent) + Send + Sync>;

type BackgroundFuture = Pin<Box<dyn Future<Output = ()> + Send>>;
type BackgroundCallback = Box<dyn Fn(BackgroundMonitorEvent) -> BackgroundFuture + Send + Sync>;

/// Handle returned by listener registration, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle {
    kind: EventKind,
    id: u64,
}

struct ListenerEntry {
    id: u64,
    callback: Arc<ListenerCallback>,
}

/// State shared between the bridge facade and its dispatch loop task.
struct BridgeInner {
    listeners: RwLock<HashMap<EventKind, Vec<ListenerEntry>>>,
    background_handler: RwLock<Option<Arc<BackgroundCallback>>>,
    next_listener_id: AtomicU64,
    drop_empty_ranges: AtomicBool,
    app_state: Arc<dyn AppStateProvider>,
}

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Mutex<Option<JoinHandle<()>>>;

/// Process-wide event dispatch service with an init-once lifecycle.
pub struct EventBridge {
    inner: Arc<BridgeInner>,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
    started: AtomicBool,
}

impl EventBridge {
    pub fn new(app_state: Arc<dyn AppStateProvider>) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                listeners: RwLock::new(HashMap::new()),
                background_handler: RwLock::new(None),
                next_listener_id: AtomicU64::new(1),
                drop_empty_ranges: AtomicBool::new(false),
                app_state,
            }),
            cancellation_token: CancellationToken::new(),
            task_handle: Mutex::new(None),
            started: AtomicBool::new(false),
        }
    }

    /// Take ownership of the single native subscription and spawn the
    /// dispatch loop.
    ///
    /// Init-once: the bridge cannot be started a second time, even after
    /// [`stop`](Self::stop).
    ///
    /// # Errors
    /// Returns [`BridgeError::AlreadyRunning`] if the subscription was
    /// already consumed.
    pub async fn start(&self, events: mpsc::Receiver<BeaconEvent>) -> BridgeResult<()> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(BridgeError::AlreadyRunning);
        }

        info!("starting event bridge");

        let inner = Arc::clone(&self.inner);
        let cancel = self.cancellation_token.clone();
        let handle = tokio::spawn(async move {
            Self::dispatch_loop(inner, events, cancel).await;
        });

        *self.task_handle.lock().await = Some(handle);

        info!("event bridge started");
        Ok(())
    }

    /// Stop the dispatch loop gracefully.
    ///
    /// # Errors
    /// Returns [`BridgeError::NotRunning`] if there is no loop to stop.
    pub async fn stop(&self) -> BridgeResult<()> {
        let handle = self.task_handle.lock().await.take().ok_or(BridgeError::NotRunning)?;

        info!("stopping event bridge");
        self.cancellation_token.cancel();

        let join_timeout = Duration::from_secs(5);
        tokio::time::timeout(join_timeout, handle)
            .await
            .map_err(|_| BridgeError::Timeout { seconds: join_timeout.as_secs() })?
            .map_err(|err| BridgeError::TaskJoinFailed(err.to_string()))?;

        info!("event bridge stopped");
        Ok(())
    }

    /// Whether the dispatch loop is currently live.
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Register a listener for an event kind. Listeners are invoked in
    /// registration order; duplicates are not collapsed.
    pub fn add_listener<F>(&self, kind: EventKind, callback: F) -> ListenerHandle
    where
        F: Fn(&BeaconEvent) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::SeqCst);
        self.inner
            .listeners
            .write()
            .entry(kind)
            .or_default()
            .push(ListenerEntry { id, callback: Arc::new(Box::new(callback)) });
        debug!(?kind, listener_id = id, "listener registered");
        ListenerHandle { kind, id }
    }

    /// Remove a previously registered listener. Returns `false` if the
    /// handle was already removed.
    pub fn remove_listener(&self, handle: ListenerHandle) -> bool {
        let mut listeners = self.inner.listeners.write();
        let Some(entries) = listeners.get_mut(&handle.kind) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|entry| entry.id != handle.id);
        let removed = entries.len() != before;
        if removed {
            debug!(kind = ?handle.kind, listener_id = handle.id, "listener removed");
        }
        removed
    }

    /// Register the background monitor handler.
    ///
    /// Single slot: re-registering replaces the previous handler rather
    /// than adding to it. Must be registered before the host application's
    /// primary entry point runs, otherwise early background events may be
    /// missed (documented precondition, not enforced here).
    pub fn set_background_monitor_handler<F, Fut>(&self, handler: F)
    where
        F: Fn(BackgroundMonitorEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let callback: BackgroundCallback = Box::new(move |event| Box::pin(handler(event)));
        let previous = self.inner.background_handler.write().replace(Arc::new(callback));
        if previous.is_some() {
            info!("background monitor handler replaced");
        } else {
            info!("background monitor handler registered");
        }
    }

    /// Remove the background monitor handler, if any.
    pub fn clear_background_monitor_handler(&self) {
        if self.inner.background_handler.write().take().is_some() {
            info!("background monitor handler cleared");
        }
    }

    /// Suppress (or deliver) ranging updates that carry zero beacons.
    pub fn set_drop_empty_ranges(&self, drop: bool) {
        self.inner.drop_empty_ranges.store(drop, Ordering::SeqCst);
        debug!(drop, "drop_empty_ranges updated");
    }

    async fn dispatch_loop(
        inner: Arc<BridgeInner>,
        mut events: mpsc::Receiver<BeaconEvent>,
        cancel: CancellationToken,
    ) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("dispatch loop cancelled");
                    break;
                }
                received = events.recv() => {
                    match received {
                        Some(event) => Self::dispatch(&inner, event).await,
                        None => {
                            debug!("native event stream closed; dispatch loop exiting");
                            break;
                        }
                    }
                }
            }
        }
    }

    async fn dispatch(inner: &Arc<BridgeInner>, event: BeaconEvent) {
        if let BeaconEvent::RangingUpdate(update) = &event {
            if update.beacons.is_empty() && inner.drop_empty_ranges.load(Ordering::SeqCst) {
                trace!(region = %update.region.identifier, "empty ranging update suppressed");
                return;
            }
        }

        let kind = event.kind();
        Self::fan_out(inner, kind, &event);

        // Background path only exists for boundary crossings.
        let crossing = match &event {
            BeaconEvent::RegionEntered { region } => {
                Some((region.clone(), RegionTransition::Enter))
            }
            BeaconEvent::RegionExited { region } => Some((region.clone(), RegionTransition::Exit)),
            _ => None,
        };

        if let Some((region, transition)) = crossing {
            Self::dispatch_background(inner, region, transition).await;
        }
    }

    /// Invoke every listener for `kind`, in registration order. A panicking
    /// listener is isolated and logged; the remaining listeners still run.
    fn fan_out(inner: &Arc<BridgeInner>, kind: EventKind, event: &BeaconEvent) {
        let entries: Vec<(u64, Arc<ListenerCallback>)> = {
            let listeners = inner.listeners.read();
            match listeners.get(&kind) {
                Some(entries) => {
                    entries.iter().map(|e| (e.id, Arc::clone(&e.callback))).collect()
                }
                None => Vec::new(),
            }
        };

        if entries.is_empty() {
            // Fire-only-if-subscribed: nothing registered, event is dropped.
            trace!(event = kind.native_name(), "no listeners registered; event dropped");
            return;
        }

        for (id, callback) in entries {
            if let Err(panic) = catch_unwind(AssertUnwindSafe(|| (callback)(event))) {
                let message = if let Some(s) = panic.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };
                error!(
                    event = kind.native_name(),
                    listener_id = id,
                    panic = %message,
                    "listener panicked; continuing with remaining listeners"
                );
            }
        }
    }

    /// Forward a boundary crossing to the background handler when the app
    /// has no foreground execution context. The handler's future is awaited
    /// before the next event is dispatched.
    async fn dispatch_background(
        inner: &Arc<BridgeInner>,
        region: BeaconRegion,
        transition: RegionTransition,
    ) {
        let state = inner.app_state.execution_state();
        if state.is_foreground() {
            trace!(region = %region.identifier, "app active; background handler skipped");
            return;
        }

        let handler = inner.background_handler.read().as_ref().map(Arc::clone);
        let Some(handler) = handler else {
            debug!(
                region = %region.identifier,
                ?transition,
                "no background handler registered; background event dropped"
            );
            return;
        };

        let event = BackgroundMonitorEvent { region, event: transition, received_at: Utc::now() };
        warn_if_slow(handler(event)).await;
    }
}

/// Await a background handler, logging if it runs long enough to risk the
/// platform's suspension deadline. The deadline itself is enforced by the
/// platform, not here.
async fn warn_if_slow(future: BackgroundFuture) {
    let budget = Duration::from_secs(25);
    let started = std::time::Instant::now();
    future.await;
    let elapsed = started.elapsed();
    if elapsed > budget {
        warn!(
            elapsed_ms = elapsed.as_millis() as u64,
            "background handler exceeded the platform suspension budget"
        );
    }
}

/// Ensure the dispatch loop is cancelled when the bridge is dropped.
impl Drop for EventBridge {
    fn drop(&mut self) {
        if !self.cancellation_token.is_cancelled() {
            self.cancellation_token.cancel();
        }
    }
}
