//! Energy per kilometre and the resulting range
//!
//! Both divisions are guarded: a stationary rider consumes 0 Wh/km and a
//! zero consumption yields 0 km of range instead of infinity.

use crate::core_types::constants::PhysicalConstants;
use crate::core_types::scenario::EnergySupply;

/// Solar energy a panel delivers over a day at a location (Wh)
#[inline]
pub fn solar_energy(
    constants: &PhysicalConstants,
    panel_power_wp: f64,
    exposure_hours: f64,
) -> f64 {
    panel_power_wp * exposure_hours * constants.panel_efficiency
}

/// Battery energy per kilometre (Wh/km); 0 when not moving
#[inline]
pub fn consumption_per_km(electrical_w: f64, avg_speed_kmh: f64) -> f64 {
    if avg_speed_kmh > 0.0 {
        electrical_w / avg_speed_kmh
    } else {
        0.0
    }
}

/// Distance covered by `energy_wh` at `consumption_wh_per_km` (km); 0 when
/// nothing is consumed
#[inline]
pub fn range_for(energy_wh: f64, consumption_wh_per_km: f64) -> f64 {
    if consumption_wh_per_km > 0.0 {
        energy_wh / consumption_wh_per_km
    } else {
        0.0
    }
}

/// Battery-only range, range with the solar supply, and the difference (km)
#[inline]
pub fn ranges(
    battery_capacity_wh: f64,
    supply: &EnergySupply,
    consumption_wh_per_km: f64,
) -> (f64, f64, f64) {
    let battery_only = range_for(battery_capacity_wh, consumption_wh_per_km);
    let with_solar = range_for(
        battery_capacity_wh + supply.supplied_energy_wh,
        consumption_wh_per_km,
    );
    (battery_only, with_solar, with_solar - battery_only)
}
