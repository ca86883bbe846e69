use solar_bike_core::{Location, LocationTable};
use std::ffi::CString;
use std::os::raw::c_char;
use std::sync::LazyLock;

use crate::error::{DefaultSolarBikeError, SolarBikeErrorCode};
use crate::helpers::{handle_ffi_result_error, track_error};

/// Built-in location table, shared read-only by every caller
pub(crate) static BUILTIN_LOCATIONS: LazyLock<LocationTable> =
    LazyLock::new(LocationTable::builtin);

/// C copies of the built-in names, indexed like the table
static LOCATION_NAMES: LazyLock<Vec<CString>> = LazyLock::new(|| {
    BUILTIN_LOCATIONS
        .names()
        .map(|name| CString::new(name).unwrap_or_default())
        .collect()
});

/// Number of entries in the built-in location table.
#[no_mangle]
pub extern "C" fn solar_bike_location_count() -> usize {
    BUILTIN_LOCATIONS.len()
}

/// Name and values of the built-in location at `index`, for populating a picker.
///
/// - `out_name` receives a borrowed UTF-8 C string. **DO NOT FREE THIS POINTER**;
///   it lives for the rest of the process.
/// - `out_location` (optional) receives the slope and exposure hours. If null, ignored.
///
/// Returns
/// - `SolarBikeErrorCode::Ok` (0) on success
/// - `SolarBikeErrorCode::NullPointer` if `out_name` is null
/// - `SolarBikeErrorCode::InvalidParameter` if `index` is out of range
///
/// # Safety
///
/// - `out_name` must be null or a valid pointer to a `const char*`.
/// - `out_location` if non-null, must be a valid pointer to a `Location`.
#[no_mangle]
pub unsafe extern "C" fn solar_bike_location_at(
    index: usize,
    out_name: *mut *const c_char,
    out_location: *mut Location,
) -> SolarBikeErrorCode {
    if out_name.is_null() {
        return track_error(&DefaultSolarBikeError::null_pointer("out_name"));
    }

    handle_ffi_result_error(|| {
        let (_, location) = BUILTIN_LOCATIONS
            .get_index(index)
            .ok_or_else(|| {
                DefaultSolarBikeError::index_out_of_range(index, BUILTIN_LOCATIONS.len())
            })?;
        let name = LOCATION_NAMES
            .get(index)
            .ok_or_else(|| DefaultSolarBikeError::index_out_of_range(index, LOCATION_NAMES.len()))?;
        unsafe {
            *out_name = name.as_ptr();
            if !out_location.is_null() {
                *out_location = *location;
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;
    use std::ptr;

    #[test]
    fn test_count_matches_builtin() {
        assert_eq!(solar_bike_location_count(), 5);
    }

    #[test]
    fn test_location_at_index() {
        let mut name: *const c_char = ptr::null();
        let mut location = Location::new(0.0, 0.0);
        let code = unsafe { solar_bike_location_at(3, &mut name, &mut location) };
        assert_eq!(code, SolarBikeErrorCode::Ok);
        let name = unsafe { CStr::from_ptr(name) };
        assert_eq!(name.to_str().unwrap(), "Šumava (Hory)");
        assert_eq!(location, Location::new(5.0, 3.0));
    }

    #[test]
    fn test_location_out_of_range() {
        let mut name: *const c_char = ptr::null();
        let code = unsafe { solar_bike_location_at(5, &mut name, ptr::null_mut()) };
        assert_eq!(code, SolarBikeErrorCode::InvalidParameter);
        assert!(name.is_null());
    }
}
