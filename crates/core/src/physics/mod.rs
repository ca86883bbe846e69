//! Closed-form physics of an assisted bicycle
//!
//! Each step of the range formula chain as a standalone pure function, so
//! the steps can be validated in isolation.

pub mod power;
pub mod range;
pub mod resistance;

pub use power::{electrical_actual, electrical_needed, mechanical_power, motor_share};
pub use range::{consumption_per_km, range_for, ranges, solar_energy};
pub use resistance::{air_force, rolling_force, slope_force, total_force};
