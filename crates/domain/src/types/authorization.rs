//! Authorization and application execution state

use serde::{Deserialize, Serialize};

/// Location authorization tier granted by the platform.
///
/// Pull-only: transitions happen in response to a user or system permission
/// decision and are observed via a status query, never pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedAlways,
    AuthorizedWhenInUse,
}

impl AuthorizationStatus {
    /// Whether this tier is sufficient for event delivery at all.
    pub fn allows_monitoring(self) -> bool {
        matches!(self, Self::AuthorizedAlways | Self::AuthorizedWhenInUse)
    }
}

/// Execution state of the hosting application.
///
/// Anything other than `Active` counts as "no foreground execution context"
/// for background-event dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppExecutionState {
    Active,
    Inactive,
    Background,
}

impl AppExecutionState {
    pub fn is_foreground(self) -> bool {
        matches!(self, Self::Active)
    }
}
