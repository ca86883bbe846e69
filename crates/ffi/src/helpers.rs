use crate::error::with_last_error_mut;
use crate::error::{DefaultSolarBikeError, SolarBikeError, SolarBikeErrorCode};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Set the thread-local error message and code.
/// Accepts any type implementing `SolarBikeError` trait.
pub(crate) fn set_last_error(error: &impl SolarBikeError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl SolarBikeError) -> SolarBikeErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = SolarBikeErrorCode::Ok;
    });
}

/// Run a fallible FFI body, recording the error on failure and clearing the
/// last error on success.
pub(crate) fn handle_ffi_result_error<F>(body: F) -> SolarBikeErrorCode
where
    F: FnOnce() -> Result<(), DefaultSolarBikeError>,
{
    match body() {
        Ok(()) => {
            clear_last_error();
            SolarBikeErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow a C string argument as `&str`.
///
/// # Safety
/// `ptr` must be null or point to a null-terminated string that outlives the
/// returned reference.
pub(crate) unsafe fn str_from_ptr<'a>(
    ptr: *const c_char,
    param_name: &str,
) -> Result<&'a str, DefaultSolarBikeError> {
    if ptr.is_null() {
        return Err(DefaultSolarBikeError::null_pointer(param_name));
    }
    // SAFETY: non-null and null-terminated per the caller contract
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| DefaultSolarBikeError::invalid_utf8(param_name))
}
