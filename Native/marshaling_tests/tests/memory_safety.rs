//! Memory safety tests for FFI boundary
//!
//! These tests verify that:
//! - Static strings stay valid and unchanged
//! - Allocated string round trips are safe to repeat
//! - Null pointer handling is correct
//! - Caller-owned input is neither modified nor retained

use std::ffi::{CStr, CString};
use std::ptr;

use marshaling_tests::{
    DuplicateLPSTR, FreeLPSTR, GetLPSTR, GetLPWSTR, GetSurfaceManifestJson, ParseInt32,
    ParseInt32W, TryParseInt32, FIXED_TEXT,
};

/// Test that FreeLPSTR handles null safely
#[test]
fn test_free_null_safety() {
    FreeLPSTR(ptr::null_mut());
}

/// Test that null inputs are rejected without dereferencing
#[test]
fn test_null_inputs() {
    assert_eq!(ParseInt32(ptr::null()), 0);
    assert_eq!(ParseInt32W(ptr::null()), 0);
    assert!(DuplicateLPSTR(ptr::null()).is_null());

    let mut out = 5;
    let _ = TryParseInt32(ptr::null(), &mut out);
    assert_eq!(out, 5);
}

/// Test repeated duplicate/free cycles
#[test]
fn test_repeated_duplicate_free() {
    let input = CString::new("round trip text").unwrap();
    for _ in 0..1000 {
        let copy = DuplicateLPSTR(input.as_ptr());
        assert!(!copy.is_null());
        assert_eq!(unsafe { CStr::from_ptr(copy) }, input.as_c_str());
        FreeLPSTR(copy);
    }
}

/// Test that the static string survives heavy allocation churn
#[test]
fn test_static_string_unaffected_by_allocations() {
    let before = GetLPSTR();
    for i in 0..500 {
        let input = CString::new(format!("churn {}", i)).unwrap();
        FreeLPSTR(DuplicateLPSTR(input.as_ptr()));
        FreeLPSTR(GetSurfaceManifestJson());
    }
    let after = GetLPSTR();
    assert_eq!(before, after);
    assert_eq!(unsafe { CStr::from_ptr(after) }.to_str().unwrap(), FIXED_TEXT);
}

/// Test that caller-owned input is left untouched
#[test]
fn test_input_not_modified() {
    let input = CString::new("-12345").unwrap();
    let snapshot = input.clone();

    assert_eq!(ParseInt32(input.as_ptr()), -12345);
    let copy = DuplicateLPSTR(input.as_ptr());
    FreeLPSTR(copy);

    assert_eq!(input, snapshot);
}

/// Test UTF-8 text survives a duplicate round trip byte for byte
#[test]
fn test_duplicate_preserves_utf8() {
    let input = CString::new("héllo wörld ✓").unwrap();
    let copy = DuplicateLPSTR(input.as_ptr());
    assert!(!copy.is_null());
    let text = unsafe { CStr::from_ptr(copy) }.to_str().unwrap().to_owned();
    FreeLPSTR(copy);
    assert_eq!(text, "héllo wörld ✓");
}

/// Test that the wide static string is terminated where expected
#[test]
fn test_wide_string_terminated() {
    let ptr = GetLPWSTR();
    assert!(!ptr.is_null());
    let units = unsafe { std::slice::from_raw_parts(ptr, FIXED_TEXT.len() + 1) };
    assert_eq!(units[FIXED_TEXT.len()], 0);
    assert!(units[..FIXED_TEXT.len()].iter().all(|u| *u != 0));
}
