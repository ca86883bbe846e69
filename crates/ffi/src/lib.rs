//! C ABI for the solar bike range model
//!
//! Lets a non-Rust input or display layer (a mobile app, a spreadsheet
//! plugin, a game engine) run the range model. Every function is stateless
//! apart from the per-thread last-error slot; the header is generated by
//! `cbindgen` into `SolarBikeFFI.h` at the workspace root.
//!
//! ## C Example
//! ```c
//! SolarBikeInputs in = solar_bike_default_inputs();
//! RangeOutputs out;
//! if (solar_bike_compute_at_location(&in, "Brno (Zvlněné)", &out) == Ok) {
//!     printf("%.1f km (+%.1f km solar)\n", out.range_battery_only_km, out.solar_bonus_km);
//! }
//! ```

mod error;
mod helpers;
mod locations;
mod range;

pub use error::{solar_bike_get_last_error, solar_bike_get_last_error_code, SolarBikeErrorCode};
pub use locations::{solar_bike_location_at, solar_bike_location_count};
pub use range::{
    solar_bike_compute_at_location, solar_bike_compute_manual, solar_bike_default_inputs,
    SolarBikeInputs,
};
pub use solar_bike_core::{EnergySupply, Location, RangeOutputs};
