//! Range model validation against hand-worked scenarios
//!
//! # Test Categories
//! 1. Stationary rider (zero-speed guard)
//! 2. Flat 25 km/h cruise at full assist
//! 3. Location-derived solar energy
//! 4. Descents and the net force clamp
//! 5. Determinism
//!
//! Run tests with: `cargo test --test range_model_validation`

use approx::{assert_abs_diff_eq, assert_relative_eq};
use solar_bike_core::{
    compute_range, EnergySource, LocationTable, RangeModel, ScenarioInputs,
};

fn manual(slope_percent: f64, supplied_energy_wh: f64) -> EnergySource {
    EnergySource::ManualOverride {
        slope_percent,
        supplied_energy_wh,
    }
}

fn cruise() -> ScenarioInputs {
    ScenarioInputs {
        total_mass_kg: 100.0,
        avg_speed_kmh: 25.0,
        battery_voltage_v: 36.0,
        battery_capacity_wh: 540.0,
        assist_percent: 100.0,
        motor_nominal_power_w: 250.0,
        panel_power_wp: 100.0,
        energy_source: manual(0.0, 0.0),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: STATIONARY RIDER
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_stationary_rider_has_no_consumption_or_range() {
    let inputs = ScenarioInputs {
        avg_speed_kmh: 0.0,
        assist_percent: 0.0,
        energy_source: manual(0.0, 150.0),
        ..cruise()
    };
    let out = compute_range(&inputs);

    assert_eq!(out.air_force_n, 0.0);
    assert_relative_eq!(out.roll_force_n, 7.848, epsilon = 1e-12);
    assert_eq!(out.slope_force_n, 0.0);
    assert_eq!(out.mechanical_power_w, 0.0);
    assert_eq!(out.consumption_wh_per_km, 0.0);
    assert_eq!(out.range_battery_only_km, 0.0);
    assert_eq!(out.range_with_solar_km, 0.0);
    assert_eq!(out.solar_bonus_km, 0.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: FLAT CRUISE
// ═══════════════════════════════════════════════════════════════════════════════

/// 25 km/h on the flat, full assist, 250 W motor, 540 Wh pack
#[test]
fn test_flat_cruise_full_assist() {
    let out = compute_range(&cruise());

    let v = 25.0 / 3.6;
    assert_relative_eq!(out.speed_ms, v, epsilon = 1e-12);
    assert_abs_diff_eq!(out.speed_ms, 6.944, epsilon = 1e-3);

    let air = 0.5 * 1.225 * v * v * 0.45;
    assert_relative_eq!(out.air_force_n, air, epsilon = 1e-12);
    assert_abs_diff_eq!(out.air_force_n, 13.29, epsilon = 0.01);
    assert_relative_eq!(out.roll_force_n, 7.848, epsilon = 1e-12);
    assert_eq!(out.slope_force_n, 0.0);
    assert_abs_diff_eq!(out.total_force_n, 21.14, epsilon = 0.01);

    assert_abs_diff_eq!(out.mechanical_power_w, 146.8, epsilon = 0.1);
    assert_eq!(out.motor_mechanical_power_w, out.mechanical_power_w);
    assert_abs_diff_eq!(out.electrical_power_needed_w, 172.7, epsilon = 0.1);
    assert!(!out.is_motor_capped());
    assert_eq!(out.electrical_power_actual_w, out.electrical_power_needed_w);

    assert_abs_diff_eq!(out.consumption_wh_per_km, 6.91, epsilon = 0.01);
    assert_abs_diff_eq!(out.range_battery_only_km, 78.2, epsilon = 0.1);
    // No solar input, no bonus
    assert_eq!(out.range_with_solar_km, out.range_battery_only_km);
    assert_eq!(out.solar_bonus_km, 0.0);
}

#[test]
fn test_half_assist_doubles_range() {
    let full = compute_range(&cruise());
    let half = compute_range(&ScenarioInputs {
        assist_percent: 50.0,
        ..cruise()
    });
    assert_relative_eq!(
        half.range_battery_only_km,
        2.0 * full.range_battery_only_km,
        epsilon = 1e-9
    );
}

#[test]
fn test_voltage_does_not_affect_results() {
    let a = compute_range(&cruise());
    let b = compute_range(&ScenarioInputs {
        battery_voltage_v: 48.0,
        ..cruise()
    });
    assert_eq!(a, b);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: LOCATION-DERIVED SOLAR ENERGY
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_flatland_location_yields_266_wh() {
    let table = LocationTable::builtin();
    let inputs = ScenarioInputs {
        energy_source: table.energy_source("Hostouň (Rovina)").unwrap(),
        ..cruise()
    };
    let out = compute_range(&inputs);

    assert_eq!(out.supply.slope_percent, 0.5);
    assert_relative_eq!(out.supply.supplied_energy_wh, 266.0, epsilon = 1e-9);
    assert!(out.slope_force_n > 0.0);
    assert_relative_eq!(
        out.range_with_solar_km,
        (540.0 + out.supply.supplied_energy_wh) / out.consumption_wh_per_km,
        epsilon = 1e-9
    );
    assert!(out.solar_bonus_km > 0.0);
}

#[test]
fn test_manual_override_ignores_panel_rating() {
    let inputs = ScenarioInputs {
        panel_power_wp: 400.0,
        energy_source: manual(1.25, 150.0),
        ..cruise()
    };
    let out = compute_range(&inputs);
    assert_eq!(out.supply.slope_percent, 1.25);
    assert_eq!(out.supply.supplied_energy_wh, 150.0);
}

#[test]
fn test_mountains_shorter_range_than_flatland() {
    let table = LocationTable::builtin();
    let at = |name: &str| {
        compute_range(&ScenarioInputs {
            energy_source: table.energy_source(name).unwrap(),
            ..cruise()
        })
    };
    let flat = at("Hostouň (Rovina)");
    let mountains = at("Šumava (Hory)");
    assert!(mountains.consumption_wh_per_km > flat.consumption_wh_per_km);
    assert!(mountains.range_battery_only_km < flat.range_battery_only_km);
    assert_relative_eq!(mountains.supply.supplied_energy_wh, 210.0, epsilon = 1e-9);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 4: DESCENTS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_steep_descent_clamps_net_force() {
    let inputs = ScenarioInputs {
        avg_speed_kmh: 15.0,
        energy_source: manual(-5.0, 150.0),
        ..cruise()
    };
    let out = compute_range(&inputs);
    assert!(out.air_force_n + out.roll_force_n + out.slope_force_n < 0.0);
    assert_eq!(out.total_force_n, 0.0);
    assert_eq!(out.consumption_wh_per_km, 0.0);
    assert_eq!(out.range_battery_only_km, 0.0);
    assert_eq!(out.range_with_solar_km, 0.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 5: DETERMINISM
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_repeated_calls_identical() {
    let model = RangeModel::default();
    let inputs = ScenarioInputs {
        energy_source: LocationTable::builtin().energy_source("Itálie (Jih)").unwrap(),
        ..cruise()
    };
    let first = model.compute_range(&inputs);
    let second = model.compute_range(&inputs);
    assert_eq!(first, second);
    assert_eq!(first.range_with_solar_km.to_bits(), second.range_with_solar_km.to_bits());
}
