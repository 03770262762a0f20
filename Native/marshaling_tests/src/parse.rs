//! Decimal integer parsing shared by the narrow and wide parse exports.
//!
//! Grammar: an optional `+` or `-` followed by one or more ASCII digits, with
//! nothing else before or after (no whitespace). Values outside the `i32`
//! range are rejected rather than clamped or wrapped.

use std::os::raw::c_char;

use crate::error::{MarshalStatus, ParseError};
use crate::string::c_str_to_rust;

/// Value returned by the sentinel-style exports when parsing fails.
pub const PARSE_FAILURE_SENTINEL: i32 = 0;

/// Parses decimal text into an `i32`.
pub fn parse_int32(text: &str) -> Result<i32, ParseError> {
    Ok(text.parse::<i32>()?)
}

/// Parses a zero-terminated narrow string.
///
/// # Safety
/// `ptr` must be null or point to a zero-terminated byte sequence that stays
/// valid for the duration of the call.
pub unsafe fn parse_c_str(ptr: *const c_char) -> Result<i32, ParseError> {
    let text = c_str_to_rust(ptr)?;
    parse_int32(text)
}

/// Collapses a parse result to the sentinel policy.
pub(crate) fn or_sentinel(result: Result<i32, ParseError>) -> i32 {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "parse failed, returning sentinel");
            PARSE_FAILURE_SENTINEL
        }
    }
}

/// Parses a zero-terminated string and reports failures through the status code.
///
/// # Returns
/// * `Success` and writes the value to `out`
/// * an error status, leaving `out` untouched
///
/// # Safety
/// * `text` must be null or a valid null-terminated C string
/// * `out` must be null or point to writable storage for one `i32`
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn TryParseInt32(text: *const c_char, out: *mut i32) -> MarshalStatus {
    if out.is_null() {
        tracing::debug!("TryParseInt32 called with null out pointer");
        return MarshalStatus::NullPointer;
    }

    match unsafe { parse_c_str(text) } {
        Ok(value) => {
            unsafe { out.write(value) };
            MarshalStatus::Success
        }
        Err(e) => {
            tracing::debug!(error = %e, "TryParseInt32 failed");
            e.status()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_parse_int32_accepts_signed_decimal() {
        assert_eq!(parse_int32("123"), Ok(123));
        assert_eq!(parse_int32("-45"), Ok(-45));
        assert_eq!(parse_int32("+7"), Ok(7));
        assert_eq!(parse_int32("0"), Ok(0));
        assert_eq!(parse_int32("-0"), Ok(0));
        assert_eq!(parse_int32("007"), Ok(7));
    }

    #[test]
    fn test_parse_int32_range_limits() {
        assert_eq!(parse_int32("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_int32("-2147483648"), Ok(i32::MIN));
        assert_eq!(parse_int32("2147483648"), Err(ParseError::Overflow));
        assert_eq!(parse_int32("-2147483649"), Err(ParseError::Overflow));
    }

    #[test]
    fn test_parse_int32_rejects_malformed_text() {
        assert_eq!(parse_int32(""), Err(ParseError::Empty));
        assert_eq!(parse_int32("abc"), Err(ParseError::InvalidDigit));
        assert_eq!(parse_int32("-"), Err(ParseError::InvalidDigit));
        assert_eq!(parse_int32(" 1"), Err(ParseError::InvalidDigit));
        assert_eq!(parse_int32("1 "), Err(ParseError::InvalidDigit));
        assert_eq!(parse_int32("12a"), Err(ParseError::InvalidDigit));
        assert_eq!(parse_int32("1.5"), Err(ParseError::InvalidDigit));
        assert_eq!(parse_int32("0x10"), Err(ParseError::InvalidDigit));
    }

    #[test]
    fn test_parse_c_str_null() {
        assert_eq!(unsafe { parse_c_str(ptr::null()) }, Err(ParseError::NullPointer));
    }

    #[test]
    fn test_parse_c_str_invalid_utf8() {
        let bytes = CString::new(vec![0xFFu8, 0xFE]).unwrap();
        assert_eq!(
            unsafe { parse_c_str(bytes.as_ptr()) },
            Err(ParseError::InvalidEncoding)
        );
    }

    #[test]
    fn test_or_sentinel() {
        assert_eq!(or_sentinel(Ok(9)), 9);
        assert_eq!(or_sentinel(Err(ParseError::Overflow)), PARSE_FAILURE_SENTINEL);
    }

    #[test]
    fn test_try_parse_writes_on_success() {
        let text = CString::new("-9001").unwrap();
        let mut out = 0;
        let status = TryParseInt32(text.as_ptr(), &mut out);
        assert_eq!(status, MarshalStatus::Success);
        assert_eq!(out, -9001);
    }

    #[test]
    fn test_try_parse_leaves_out_untouched_on_failure() {
        let text = CString::new("nope").unwrap();
        let mut out = 77;
        let status = TryParseInt32(text.as_ptr(), &mut out);
        assert_eq!(status, MarshalStatus::InvalidDigit);
        assert_eq!(out, 77);
    }

    #[test]
    fn test_try_parse_null_out() {
        let text = CString::new("1").unwrap();
        let status = TryParseInt32(text.as_ptr(), ptr::null_mut());
        assert_eq!(status, MarshalStatus::NullPointer);
    }
}
