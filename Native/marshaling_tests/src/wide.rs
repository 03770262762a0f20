//! UTF-16 (`LPWSTR`) counterparts of the narrow string exports.

use widestring::{u16cstr, U16CStr};

use crate::error::ParseError;
use crate::parse::{or_sentinel, parse_int32};

/// [`crate::FIXED_TEXT`] as zero-terminated UTF-16.
pub static FIXED_TEXT_WIDE: &U16CStr = u16cstr!("Hello World");

/// Decodes a caller-owned zero-terminated UTF-16 string.
///
/// # Safety
/// `ptr` must be null or point to a zero-terminated `u16` sequence.
pub unsafe fn wide_to_string(ptr: *const u16) -> Result<String, ParseError> {
    if ptr.is_null() {
        return Err(ParseError::NullPointer);
    }
    U16CStr::from_ptr_str(ptr)
        .to_string()
        .map_err(|_| ParseError::InvalidEncoding)
}

/// Returns the fixed text as a static wide string.
///
/// # Safety
/// The returned pointer is valid for the lifetime of the program (static).
/// Do not free this pointer.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn GetLPWSTR() -> *const u16 {
    FIXED_TEXT_WIDE.as_ptr()
}

/// Parses zero-terminated UTF-16 decimal text, returning 0 on any failure.
///
/// # Safety
/// * `text` must be null or a valid null-terminated UTF-16 string
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn ParseInt32W(text: *const u16) -> i32 {
    or_sentinel(unsafe { wide_to_string(text) }.and_then(|s| parse_int32(&s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FIXED_TEXT;
    use std::ptr;
    use widestring::U16CString;

    fn wide(s: &str) -> U16CString {
        U16CString::from_str(s).unwrap()
    }

    #[test]
    fn test_fixed_text_wide_matches_narrow() {
        let decoded = unsafe { wide_to_string(GetLPWSTR()) }.unwrap();
        assert_eq!(decoded, FIXED_TEXT);
        assert_eq!(FIXED_TEXT_WIDE.len(), FIXED_TEXT.len());
        assert_eq!(FIXED_TEXT_WIDE.as_slice_with_nul().last(), Some(&0));
    }

    #[test]
    fn test_get_lpwstr_is_stable() {
        assert_eq!(GetLPWSTR(), GetLPWSTR());
    }

    #[test]
    fn test_parse_int32_wide() {
        assert_eq!(ParseInt32W(wide("123").as_ptr()), 123);
        assert_eq!(ParseInt32W(wide("-45").as_ptr()), -45);
        assert_eq!(ParseInt32W(wide("abc").as_ptr()), 0);
        assert_eq!(ParseInt32W(wide("").as_ptr()), 0);
        assert_eq!(ParseInt32W(ptr::null()), 0);
    }

    #[test]
    fn test_unpaired_surrogate_is_invalid_encoding() {
        let units = [0x0031u16, 0xD800, 0];
        assert_eq!(
            unsafe { wide_to_string(units.as_ptr()) },
            Err(ParseError::InvalidEncoding)
        );
        assert_eq!(ParseInt32W(units.as_ptr()), 0);
    }

    #[test]
    fn test_null_is_null_pointer_error() {
        assert_eq!(unsafe { wide_to_string(ptr::null()) }, Err(ParseError::NullPointer));
    }
}
