//! Solar Bike Range Core Library
//!
//! Estimates the range of an electrically-assisted bicycle carrying a solar
//! panel under one set of rider-supplied conditions. Computes the resistive
//! forces, the electrical power drawn from the battery, energy consumption
//! per kilometre and the resulting range with and without the solar gain.
//!
//! ## Usage
//! ```
//! use solar_bike_core::{compute_range, LocationTable, ScenarioInputs};
//!
//! let table = LocationTable::builtin();
//! let inputs = ScenarioInputs {
//!     energy_source: table.energy_source("Hostouň (Rovina)").unwrap(),
//!     ..ScenarioInputs::default()
//! };
//! let out = compute_range(&inputs);
//! assert!(out.range_with_solar_km > out.range_battery_only_km);
//! ```

// Core types and configuration
pub mod core_types;

// Formula chain
pub mod model;
pub mod physics;

pub use core_types::{
    EnergySource, EnergySupply, Location, LocationError, LocationTable, PhysicalConstants,
    RangeOutputs, ScenarioInputs,
};
pub use model::{compute_range, RangeModel};
