//! Backend implementations for the skipyard core ports: the WeWantWaste
//! by-location catalog API and a simulated booking gateway.

/// Simulated booking gateway with latency and a probabilistic outcome.
pub mod booking;
/// Catalog fetch against the WeWantWaste HTTP API.
pub mod catalog;

pub use booking::*;
pub use catalog::*;
