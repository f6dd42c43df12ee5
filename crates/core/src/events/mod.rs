//! Event bridge: native event fan-out and background dispatch

pub mod bridge;
pub mod error;

pub use bridge::{EventBridge, ListenerHandle};
pub use error::{BridgeError, BridgeResult};
