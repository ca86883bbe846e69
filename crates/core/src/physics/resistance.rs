//! Resistive forces on a rider moving at constant speed
//!
//! # Scientific Basis
//!
//! Steady-state road load of a bicycle is the sum of aerodynamic drag,
//! tyre rolling resistance and the along-slope component of gravity:
//!
//! `F = ½ρv²·CdA + m·g·Crr + m·g·sin(θ)`
//!
//! The grade is converted to an angle exactly, `θ = atan(grade / 100)`,
//! rather than the small-angle `sin θ ≈ grade / 100`.

use crate::core_types::constants::PhysicalConstants;

/// Aerodynamic drag (N) at `speed_ms`
#[inline]
pub fn air_force(constants: &PhysicalConstants, speed_ms: f64) -> f64 {
    0.5 * constants.air_density * speed_ms.powi(2) * constants.drag_coefficient_area
}

/// Rolling resistance (N); independent of speed
#[inline]
pub fn rolling_force(constants: &PhysicalConstants, mass_kg: f64) -> f64 {
    mass_kg * constants.gravity * constants.rolling_resistance_coeff
}

/// Gravity component along the road (N). Negative downhill.
#[inline]
pub fn slope_force(constants: &PhysicalConstants, mass_kg: f64, slope_percent: f64) -> f64 {
    let angle = (slope_percent / 100.0).atan();
    mass_kg * constants.gravity * angle.sin()
}

/// Net resistive force (N), clamped at zero.
///
/// A descent steep enough to overcome drag and rolling resistance does not
/// recharge the battery, so net force never goes negative.
#[inline]
pub fn total_force(air_n: f64, roll_n: f64, slope_n: f64) -> f64 {
    let total = air_n + roll_n + slope_n;
    if total < 0.0 {
        0.0
    } else {
        total
    }
}
