//! Shared application execution state
//!
//! Hosts feed their runtime's app-state transitions into this provider so
//! the event bridge can decide whether the background handler applies.

use beaconkit_core::AppStateProvider;
use beaconkit_domain::AppExecutionState;
use parking_lot::RwLock;
use tracing::debug;

/// Mutable [`AppStateProvider`] backed by a lock.
#[derive(Debug)]
pub struct SharedAppState {
    state: RwLock<AppExecutionState>,
}

impl SharedAppState {
    pub fn new(initial: AppExecutionState) -> Self {
        Self { state: RwLock::new(initial) }
    }

    /// Record a host app-state transition.
    pub fn set(&self, state: AppExecutionState) {
        let mut current = self.state.write();
        if *current != state {
            debug!(from = ?*current, to = ?state, "app execution state changed");
            *current = state;
        }
    }

    pub fn get(&self) -> AppExecutionState {
        *self.state.read()
    }
}

impl Default for SharedAppState {
    fn default() -> Self {
        Self::new(AppExecutionState::Active)
    }
}

impl AppStateProvider for SharedAppState {
    fn execution_state(&self) -> AppExecutionState {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_active() {
        let state = SharedAppState::default();
        assert_eq!(state.execution_state(), AppExecutionState::Active);
    }

    #[test]
    fn transitions_are_observable() {
        let state = SharedAppState::default();
        state.set(AppExecutionState::Background);
        assert_eq!(state.execution_state(), AppExecutionState::Background);
        state.set(AppExecutionState::Active);
        assert_eq!(state.execution_state(), AppExecutionState::Active);
    }
}
