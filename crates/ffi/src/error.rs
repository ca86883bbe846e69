use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use solar_bike_core::LocationError;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait SolarBikeError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> SolarBikeErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `SolarBikeError` for the FFI failure cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultSolarBikeError {
    code: SolarBikeErrorCode,
    msg: String,
}

impl DefaultSolarBikeError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_outputs"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: SolarBikeErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a string argument that is not valid UTF-8.
    pub fn invalid_utf8(param_name: &str) -> Self {
        Self {
            code: SolarBikeErrorCode::InvalidParameter,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }

    /// Create error for an index past the end of the location table.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self {
            code: SolarBikeErrorCode::InvalidParameter,
            msg: format!("Location index {index} out of range (table has {len} entries)"),
        }
    }
}

impl From<LocationError> for DefaultSolarBikeError {
    fn from(error: LocationError) -> Self {
        let code = match error {
            LocationError::UnknownLocation(_) => SolarBikeErrorCode::UnknownLocation,
            LocationError::DuplicateLocation(_)
            | LocationError::InvalidLocation { .. }
            | LocationError::Malformed(_) => SolarBikeErrorCode::InvalidParameter,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl SolarBikeError for DefaultSolarBikeError {
    fn code(&self) -> SolarBikeErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by solar bike functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarBikeErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter passed to function.
    InvalidParameter = 2,

    /// Location name not present in the built-in table.
    UnknownLocation = 3,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    static LAST_ERROR: RefCell<(Option<CString>, SolarBikeErrorCode)> =
        const { RefCell::new((None, SolarBikeErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, SolarBikeErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, SolarBikeErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last call succeeded.
///
/// Error messages are stored per-thread. The returned pointer is valid until
/// the next FFI call on this thread. **DO NOT FREE THIS POINTER**.
///
/// Example:
/// ```c
/// RangeOutputs out;
/// if (solar_bike_compute_at_location(&inputs, "Brno (Zvlněné)", &out) != Ok) {
///     printf("range failed: %s\n", solar_bike_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn solar_bike_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if the last call succeeded).
#[no_mangle]
pub extern "C" fn solar_bike_get_last_error_code() -> SolarBikeErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
