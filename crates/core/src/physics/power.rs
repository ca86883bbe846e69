//! Mechanical and electrical power at the wheel and at the battery

use crate::core_types::constants::PhysicalConstants;

/// Power needed to hold `speed_ms` against `total_force_n` (W)
#[inline]
pub fn mechanical_power(total_force_n: f64, speed_ms: f64) -> f64 {
    total_force_n * speed_ms
}

/// Share of the mechanical power delivered by the motor (W)
#[inline]
pub fn motor_share(mechanical_w: f64, assist_percent: f64) -> f64 {
    mechanical_w * (assist_percent / 100.0)
}

/// Electrical draw needed for `motor_mechanical_w` at the shaft (W)
#[inline]
pub fn electrical_needed(constants: &PhysicalConstants, motor_mechanical_w: f64) -> f64 {
    motor_mechanical_w / constants.motor_efficiency
}

/// Electrical draw after the controller limit (W).
///
/// The limit is the rated mechanical power scaled up by motor efficiency;
/// any shortfall is left to the rider.
#[inline]
pub fn electrical_actual(
    constants: &PhysicalConstants,
    needed_w: f64,
    motor_nominal_power_w: f64,
) -> f64 {
    needed_w.min(constants.electrical_cap_w(motor_nominal_power_w))
}
