//! Scenario inputs and derived range outputs
//!
//! A [`ScenarioInputs`] is built fresh for every request and a [`RangeOutputs`]
//! is computed from it and thrown away after display. Neither is cached.

use serde::{Deserialize, Serialize};

use super::location::Location;

/// Where the slope and the supplied solar energy for a scenario come from.
///
/// Replaces the "custom settings" pseudo-location of the lookup table with an
/// explicit variant, so both input paths are handled by `match`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnergySource {
    /// Terrain and sunshine of a known location; supplied energy is derived
    /// from the panel rating.
    NamedLocation {
        /// Terrain grade (%), signed
        slope_percent: f64,
        /// Effective full-power sunlight hours per day
        exposure_hours: f64,
    },
    /// Slope and supplied energy entered directly by the rider; used verbatim.
    ManualOverride {
        /// Terrain grade (%), signed; typically -5 to 15
        slope_percent: f64,
        /// Solar energy delivered to the battery (Wh)
        supplied_energy_wh: f64,
    },
}

impl EnergySource {
    /// Terrain grade carried by either variant (%)
    #[inline]
    pub fn slope_percent(&self) -> f64 {
        match *self {
            EnergySource::NamedLocation { slope_percent, .. }
            | EnergySource::ManualOverride { slope_percent, .. } => slope_percent,
        }
    }
}

/// One set of rider-supplied conditions.
///
/// Values are expected to be validated and defaulted by the caller; the model
/// only guards zero speed and negative net force.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    /// Rider + bike + cargo (kg)
    pub total_mass_kg: f64,
    /// Average riding speed (km/h), 0 allowed
    pub avg_speed_kmh: f64,
    /// Nominal pack voltage (V). Informational, not used by the formulas.
    pub battery_voltage_v: f64,
    /// Usable battery energy (Wh)
    pub battery_capacity_wh: f64,
    /// Share of mechanical power supplied by the motor (0-100 %)
    pub assist_percent: f64,
    /// Rated mechanical motor power (W)
    pub motor_nominal_power_w: f64,
    /// Nominal panel power (Wp), only used on the location path
    pub panel_power_wp: f64,
    /// Slope and solar energy source
    pub energy_source: EnergySource,
}

impl Default for ScenarioInputs {
    /// 100 kg at 25 km/h on a 36 V / 540 Wh pack, full assist from a 250 W
    /// motor and a 100 Wp panel, riding at the first built-in location
    /// (Hostouň, 0.5 % grade, 3.8 h of sun).
    fn default() -> Self {
        ScenarioInputs {
            total_mass_kg: 100.0,
            avg_speed_kmh: 25.0,
            battery_voltage_v: 36.0,
            battery_capacity_wh: 540.0,
            assist_percent: 100.0,
            motor_nominal_power_w: 250.0,
            panel_power_wp: 100.0,
            energy_source: Location::BUILTIN[0].1.energy_source(),
        }
    }
}

/// Slope and solar energy after the energy source has been resolved.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergySupply {
    /// Terrain grade (%) used for the slope force
    pub slope_percent: f64,
    /// Solar energy added to the battery budget (Wh)
    pub supplied_energy_wh: f64,
}

/// Everything the formula chain derives from one [`ScenarioInputs`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeOutputs {
    pub supply: EnergySupply,
    pub speed_ms: f64,

    pub air_force_n: f64,
    pub roll_force_n: f64,
    pub slope_force_n: f64,
    /// Sum of the three forces, never negative
    pub total_force_n: f64,

    pub mechanical_power_w: f64,
    pub motor_mechanical_power_w: f64,
    pub electrical_power_needed_w: f64,
    /// Electrical draw after the motor cap
    pub electrical_power_actual_w: f64,

    /// 0 when standing still
    pub consumption_wh_per_km: f64,
    pub range_battery_only_km: f64,
    pub range_with_solar_km: f64,
    pub solar_bonus_km: f64,
}

impl RangeOutputs {
    /// True when the motor could not deliver its full assist share.
    #[inline]
    pub fn is_motor_capped(&self) -> bool {
        self.electrical_power_actual_w < self.electrical_power_needed_w
    }
}
