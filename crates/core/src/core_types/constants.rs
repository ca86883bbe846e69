//! Physical and drivetrain constants for the range model
//!
//! Values are immutable once a [`PhysicalConstants`] is built and are injected
//! into [`crate::RangeModel`] rather than read from process-wide state.

use serde::{Deserialize, Serialize};

/// Constants used by every step of the range formula chain.
///
/// # Scientific Basis
/// - `drag_coefficient_area`: upright city rider with panel, Cd × A ≈ 0.45 m²
/// - `rolling_resistance_coeff`: touring tyres on asphalt
/// - `air_density`: ISA sea level at 15 °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Drag coefficient × frontal area (m²)
    pub drag_coefficient_area: f64,
    /// Tyre/road rolling resistance coefficient (dimensionless)
    pub rolling_resistance_coeff: f64,
    /// Air density (kg/m³)
    pub air_density: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Mechanical output / electrical input of the hub motor (0-1)
    pub motor_efficiency: f64,
    /// Realized / nominal panel energy (0-1)
    pub panel_efficiency: f64,
}

impl PhysicalConstants {
    /// Standard constants for an assisted city bike with a roof-mounted panel
    pub const STANDARD: PhysicalConstants = PhysicalConstants {
        drag_coefficient_area: 0.45,
        rolling_resistance_coeff: 0.008,
        air_density: 1.225,
        gravity: 9.81,
        motor_efficiency: 0.85,
        panel_efficiency: 0.70,
    };

    /// Largest electrical draw the motor controller allows (W).
    ///
    /// The rated power is mechanical output, so the electrical cap is the
    /// rating divided by motor efficiency.
    #[inline]
    pub fn electrical_cap_w(&self, motor_nominal_power_w: f64) -> f64 {
        motor_nominal_power_w / self.motor_efficiency
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}
