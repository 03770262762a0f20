//! String utilities for FFI.
//!
//! Two ownership rules apply to strings leaving this library:
//! static strings (`GetLPSTR`, `GetLibraryVersion`, ...) are never freed, and
//! allocated strings (`DuplicateLPSTR`, `GetSurfaceManifestJson`) must be
//! released with [`FreeLPSTR`] exactly once.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::error::ParseError;

/// Allocates a C copy of `s`. Returns null if `s` contains an interior NUL.
pub fn rust_str_to_c(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Borrows a caller-owned C string as UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a zero-terminated byte sequence that outlives `'a`.
pub unsafe fn c_str_to_rust<'a>(ptr: *const c_char) -> Result<&'a str, ParseError> {
    if ptr.is_null() {
        return Err(ParseError::NullPointer);
    }
    Ok(CStr::from_ptr(ptr).to_str()?)
}

/// Views a static, terminated byte literal as a C string pointer.
pub(crate) const fn static_c_ptr(bytes: &'static [u8]) -> *const c_char {
    bytes.as_ptr() as *const c_char
}

/// Returns a library-allocated copy of `input`.
///
/// # Returns
/// * Pointer to the copy (caller must free with `FreeLPSTR`)
/// * null if `input` is null or not valid UTF-8
///
/// # Safety
/// * `input` must be null or a valid null-terminated C string
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn DuplicateLPSTR(input: *const c_char) -> *mut c_char {
    match unsafe { c_str_to_rust(input) } {
        Ok(s) => rust_str_to_c(s),
        Err(e) => {
            tracing::debug!(error = %e, "DuplicateLPSTR rejected input");
            std::ptr::null_mut()
        }
    }
}

/// Releases a string allocated by this library.
///
/// # Safety
/// * `buffer` must be null or a pointer returned by `DuplicateLPSTR` or
///   `GetSurfaceManifestJson` that has not been freed yet
/// * Never pass the static pointers returned by `GetLPSTR` or `GetLibraryVersion`
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn FreeLPSTR(buffer: *mut c_char) {
    if buffer.is_null() {
        return;
    }
    tracing::trace!("releasing library-allocated string");
    unsafe {
        let _ = CString::from_raw(buffer);
    }
}
