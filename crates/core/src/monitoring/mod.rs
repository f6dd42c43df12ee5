//! Region monitoring and ranging lifecycle

pub mod ports;
pub mod registry;
pub mod service;

pub use service::RegionService;
