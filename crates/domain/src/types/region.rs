//! Beacon region definitions

use serde::{Deserialize, Serialize};

use crate::errors::{BeaconError, Result};

/// A geofenced beacon region.
///
/// `identifier` is the unique key within a registry set. `uuid` selects the
/// beacon family; `major`/`minor` optionally narrow it down to a group or a
/// single beacon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeaconRegion {
    pub identifier: String,
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<u16>,
}

impl BeaconRegion {
    /// Create a region matching every beacon under `uuid`.
    pub fn new(identifier: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), uuid: uuid.into(), major: None, minor: None }
    }

    /// Narrow the region to a major group.
    #[must_use]
    pub fn with_major(mut self, major: u16) -> Self {
        self.major = Some(major);
        self
    }

    /// Narrow the region to a single beacon. Requires `major` to be set.
    #[must_use]
    pub fn with_minor(mut self, minor: u16) -> Self {
        self.minor = Some(minor);
        self
    }

    /// Check the structural invariants of a region definition.
    ///
    /// # Errors
    /// Returns `BeaconError::InvalidRegion` if the identifier or uuid is
    /// empty, or if `minor` is set without `major`.
    pub fn validate(&self) -> Result<()> {
        if self.identifier.is_empty() {
            return Err(BeaconError::InvalidRegion("identifier must not be empty".into()));
        }
        if self.uuid.is_empty() {
            return Err(BeaconError::InvalidRegion("uuid must not be empty".into()));
        }
        if self.minor.is_some() && self.major.is_none() {
            return Err(BeaconError::InvalidRegion(format!(
                "region '{}' specifies minor without major",
                self.identifier
            )));
        }
        Ok(())
    }
}
