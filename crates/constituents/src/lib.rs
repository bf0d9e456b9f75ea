//! Standard astronomical tidal constituent catalog.
//!
//! Tidal constituents are the sinusoidal components of the astronomical
//! tide. Each has a fixed angular speed known from astronomy, conventionally
//! quoted in degrees per hour. The catalog here is a compile-time constant:
//! adding a constituent is a data change, not a runtime parameter.

mod catalog;

pub use catalog::{ConstituentDefinition, STANDARD, by_name, standard};
