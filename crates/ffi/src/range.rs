use solar_bike_core::{compute_range, EnergySource, RangeOutputs, ScenarioInputs};

use crate::error::{DefaultSolarBikeError, SolarBikeErrorCode};
use crate::helpers::{handle_ffi_result_error, str_from_ptr, track_error};
use crate::locations::BUILTIN_LOCATIONS;
use std::os::raw::c_char;

/// Scalar scenario inputs shared by both compute entry points.
///
/// The slope and solar energy are passed separately because they depend on
/// which entry point is used.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarBikeInputs {
    /// Rider + bike + cargo (kg)
    pub total_mass_kg: f64,
    /// Average speed (km/h)
    pub avg_speed_kmh: f64,
    /// Pack voltage (V), informational
    pub battery_voltage_v: f64,
    /// Battery energy (Wh)
    pub battery_capacity_wh: f64,
    /// Motor assist share (0-100 %)
    pub assist_percent: f64,
    /// Rated motor power (W)
    pub motor_nominal_power_w: f64,
    /// Panel rating (Wp)
    pub panel_power_wp: f64,
}

impl SolarBikeInputs {
    fn with_source(self, energy_source: EnergySource) -> ScenarioInputs {
        ScenarioInputs {
            total_mass_kg: self.total_mass_kg,
            avg_speed_kmh: self.avg_speed_kmh,
            battery_voltage_v: self.battery_voltage_v,
            battery_capacity_wh: self.battery_capacity_wh,
            assist_percent: self.assist_percent,
            motor_nominal_power_w: self.motor_nominal_power_w,
            panel_power_wp: self.panel_power_wp,
            energy_source,
        }
    }
}

impl From<&ScenarioInputs> for SolarBikeInputs {
    fn from(inputs: &ScenarioInputs) -> Self {
        SolarBikeInputs {
            total_mass_kg: inputs.total_mass_kg,
            avg_speed_kmh: inputs.avg_speed_kmh,
            battery_voltage_v: inputs.battery_voltage_v,
            battery_capacity_wh: inputs.battery_capacity_wh,
            assist_percent: inputs.assist_percent,
            motor_nominal_power_w: inputs.motor_nominal_power_w,
            panel_power_wp: inputs.panel_power_wp,
        }
    }
}

/// Default dashboard inputs: 100 kg, 25 km/h, 36 V / 540 Wh, 100 % assist,
/// 250 W motor, 100 Wp panel.
#[no_mangle]
pub extern "C" fn solar_bike_default_inputs() -> SolarBikeInputs {
    SolarBikeInputs::from(&ScenarioInputs::default())
}

/// Compute the range with a manually entered slope and solar energy.
///
/// Returns
/// - `SolarBikeErrorCode::Ok` (0) on success, with `out_outputs` filled
/// - `SolarBikeErrorCode::NullPointer` if `inputs` or `out_outputs` is null
///
/// # Safety
///
/// - `inputs` must be null or a valid pointer to a `SolarBikeInputs`.
/// - `out_outputs` must be null or a valid pointer to a `RangeOutputs` that this function will write to.
#[no_mangle]
pub unsafe extern "C" fn solar_bike_compute_manual(
    inputs: *const SolarBikeInputs,
    slope_percent: f64,
    supplied_energy_wh: f64,
    out_outputs: *mut RangeOutputs,
) -> SolarBikeErrorCode {
    if out_outputs.is_null() {
        return track_error(&DefaultSolarBikeError::null_pointer("out_outputs"));
    }

    handle_ffi_result_error(|| {
        // SAFETY: caller guarantees a valid pointer when non-null
        let inputs = unsafe { inputs.as_ref() }
            .ok_or_else(|| DefaultSolarBikeError::null_pointer("inputs"))?;
        let scenario = inputs.with_source(EnergySource::ManualOverride {
            slope_percent,
            supplied_energy_wh,
        });
        unsafe {
            *out_outputs = compute_range(&scenario);
        }
        Ok(())
    })
}

/// Compute the range at a named location from the built-in table.
///
/// Returns
/// - `SolarBikeErrorCode::Ok` (0) on success, with `out_outputs` filled
/// - `SolarBikeErrorCode::NullPointer` if any pointer is null
/// - `SolarBikeErrorCode::InvalidParameter` if `location_name` is not UTF-8
/// - `SolarBikeErrorCode::UnknownLocation` if the name is not in the table
///
/// # Safety
///
/// - `inputs` must be null or a valid pointer to a `SolarBikeInputs`.
/// - `location_name` must be null or a valid null-terminated C string.
/// - `out_outputs` must be null or a valid pointer to a `RangeOutputs` that this function will write to.
#[no_mangle]
pub unsafe extern "C" fn solar_bike_compute_at_location(
    inputs: *const SolarBikeInputs,
    location_name: *const c_char,
    out_outputs: *mut RangeOutputs,
) -> SolarBikeErrorCode {
    if out_outputs.is_null() {
        return track_error(&DefaultSolarBikeError::null_pointer("out_outputs"));
    }

    handle_ffi_result_error(|| {
        // SAFETY: caller guarantees a valid pointer when non-null
        let inputs = unsafe { inputs.as_ref() }
            .ok_or_else(|| DefaultSolarBikeError::null_pointer("inputs"))?;
        let name = unsafe { str_from_ptr(location_name, "location_name")? };
        let source = BUILTIN_LOCATIONS.energy_source(name)?;
        unsafe {
            *out_outputs = compute_range(&inputs.with_source(source));
        }
        Ok(())
    })
}
