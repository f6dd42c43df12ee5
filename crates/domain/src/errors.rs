//! Error types used throughout the beacon stack

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for BeaconKit
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum BeaconError {
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Native layer error: {0}")]
    Native(String),

    #[error("Event bridge error: {0}")]
    Bridge(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for BeaconKit operations
pub type Result<T> = std::result::Result<T, BeaconError>;
