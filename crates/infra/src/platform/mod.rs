//! Platform adapters for the native beacon port and host app state

pub mod app_state;
pub mod simulator;

pub use app_state::SharedAppState;
pub use simulator::SimulatedBeaconDriver;
