//! Core types: constants, scenario records and the location table

pub mod constants;
pub mod location;
pub mod scenario;

pub use constants::PhysicalConstants;
pub use location::{Location, LocationError, LocationTable};
pub use scenario::{EnergySource, EnergySupply, RangeOutputs, ScenarioInputs};
