//! Core types and state management for the skipyard skip-hire storefront.

/// Booking workflow state machine.
pub mod booking;
/// In-memory shopping cart store and price aggregation.
pub mod cart;
/// Catalog loading, enrichment, and the static fallback data.
pub mod catalog;
/// Domain data structures shared by all components.
pub mod model;
/// Traits describing the catalog and booking backends.
pub mod ports;
/// Booking form validation rules.
pub mod validate;

pub use booking::*;
pub use cart::*;
pub use catalog::*;
pub use model::*;
pub use ports::*;
pub use validate::*;
