//! Range model: the full formula chain from scenario to range
//!
//! # Steps
//! 1. Resolve the energy source into a slope and a solar energy supply
//! 2. Resistive forces at the average speed
//! 3. Mechanical and electrical power, with the motor cap applied
//! 4. Consumption per kilometre and the two range figures
//!
//! The model holds only its constants. Every call is independent, so one
//! model can serve any number of scenarios.

use tracing::{debug, trace, warn};

use crate::core_types::constants::PhysicalConstants;
use crate::core_types::scenario::{EnergySource, EnergySupply, RangeOutputs, ScenarioInputs};
use crate::physics;

/// Range calculator with its physical constants injected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeModel {
    constants: PhysicalConstants,
}

impl RangeModel {
    pub fn new(constants: PhysicalConstants) -> Self {
        RangeModel { constants }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Slope and solar energy the chain will use for `inputs`.
    ///
    /// A manual override is passed through untouched; a named location derives
    /// the supplied energy from the panel rating, its sunshine hours and the
    /// panel efficiency.
    pub fn resolve_supply(&self, inputs: &ScenarioInputs) -> EnergySupply {
        let supplied_energy_wh = match inputs.energy_source {
            EnergySource::ManualOverride {
                supplied_energy_wh, ..
            } => supplied_energy_wh,
            EnergySource::NamedLocation { exposure_hours, .. } => physics::solar_energy(
                &self.constants,
                inputs.panel_power_wp,
                exposure_hours,
            ),
        };
        EnergySupply {
            slope_percent: inputs.energy_source.slope_percent(),
            supplied_energy_wh,
        }
    }

    /// Run the formula chain for one scenario.
    ///
    /// Never fails: zero speed yields zero consumption and range, and a net
    /// downhill force is clamped to zero.
    pub fn compute_range(&self, inputs: &ScenarioInputs) -> RangeOutputs {
        let c = &self.constants;
        let supply = self.resolve_supply(inputs);
        trace!(
            slope_percent = supply.slope_percent,
            supplied_energy_wh = supply.supplied_energy_wh,
            "Resolved energy supply"
        );

        let speed_ms = inputs.avg_speed_kmh / 3.6;

        let air_force_n = physics::air_force(c, speed_ms);
        let roll_force_n = physics::rolling_force(c, inputs.total_mass_kg);
        let slope_force_n = physics::slope_force(c, inputs.total_mass_kg, supply.slope_percent);
        let total_force_n = physics::total_force(air_force_n, roll_force_n, slope_force_n);

        let mechanical_power_w = physics::mechanical_power(total_force_n, speed_ms);
        let motor_mechanical_power_w =
            physics::motor_share(mechanical_power_w, inputs.assist_percent);
        let electrical_power_needed_w = physics::electrical_needed(c, motor_mechanical_power_w);
        let electrical_power_actual_w = physics::electrical_actual(
            c,
            electrical_power_needed_w,
            inputs.motor_nominal_power_w,
        );

        let consumption_wh_per_km =
            physics::consumption_per_km(electrical_power_actual_w, inputs.avg_speed_kmh);
        let (range_battery_only_km, range_with_solar_km, solar_bonus_km) =
            physics::ranges(inputs.battery_capacity_wh, &supply, consumption_wh_per_km);

        let outputs = RangeOutputs {
            supply,
            speed_ms,
            air_force_n,
            roll_force_n,
            slope_force_n,
            total_force_n,
            mechanical_power_w,
            motor_mechanical_power_w,
            electrical_power_needed_w,
            electrical_power_actual_w,
            consumption_wh_per_km,
            range_battery_only_km,
            range_with_solar_km,
            solar_bonus_km,
        };

        if outputs.is_motor_capped() {
            warn!(
                needed_w = electrical_power_needed_w,
                cap_w = electrical_power_actual_w,
                "Motor at rated limit, rider covers the shortfall"
            );
        }
        debug!(
            consumption_wh_per_km,
            range_battery_only_km, range_with_solar_km, "Computed range"
        );

        outputs
    }
}

/// [`RangeModel::compute_range`] with the standard constants.
pub fn compute_range(inputs: &ScenarioInputs) -> RangeOutputs {
    RangeModel::default().compute_range(inputs)
}
