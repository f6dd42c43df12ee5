//! Event bridge error types

use beaconkit_domain::BeaconError;
use thiserror::Error;

/// Bridge lifecycle errors
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The bridge already consumed its native subscription
    #[error("Event bridge already started")]
    AlreadyRunning,

    /// The bridge has no running dispatch loop
    #[error("Event bridge not running")]
    NotRunning,

    /// Shutdown did not complete in time
    #[error("Bridge operation timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Dispatch task join failed
    #[error("Dispatch task join failed: {0}")]
    TaskJoinFailed(String),
}

impl From<BridgeError> for BeaconError {
    fn from(err: BridgeError) -> Self {
        BeaconError::Bridge(err.to_string())
    }
}

/// Convenience type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
