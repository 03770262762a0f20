//! Marshaling Tests - Native Test Library
//!
//! Fixed C-ABI surface loaded by an interop harness (P/Invoke and similar) to
//! check that primitives and strings survive the trip across the boundary.
//! Raw pointer arguments are validated with null checks before dereference.
//!
//! Core exports:
//! - `GetLPSTR` - static zero-terminated text, never freed
//! - `GetInt32` - fixed constant
//! - `Add` - wrapping 32-bit addition
//! - `ParseInt32` - decimal text to `i32`, `0` on any failure
//!
//! ## Usage from C#
//!
//! ```csharp
//! // Static memory: bind as IntPtr so the marshaler does not free it.
//! [DllImport("marshaling_tests", CallingConvention = CallingConvention.Cdecl)]
//! public static extern IntPtr GetLPSTR();
//!
//! [DllImport("marshaling_tests", CallingConvention = CallingConvention.Cdecl)]
//! public static extern int ParseInt32([MarshalAs(UnmanagedType.LPStr)] string text);
//!
//! var text = Marshal.PtrToStringAnsi(GetLPSTR());
//! ```

// Allow raw pointer dereference in non-unsafe FFI functions - all FFI entry
// points perform null checks before dereferencing.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::os::raw::c_char;

pub mod boolean;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod parse;
pub mod string;
pub mod wide;

pub use boolean::{
    CBool, NativeBool, NegateCBool, NegateVariantBool, NegateWinBool, VariantBool, WinBool,
};
pub use error::{MarshalStatus, MarshalStatusDescription, ParseError};
pub use logging::InitLogging;
pub use manifest::{surface_manifest, GetSurfaceManifestJson, SurfaceManifest};
pub use parse::{parse_int32, TryParseInt32, PARSE_FAILURE_SENTINEL};
pub use string::{c_str_to_rust, rust_str_to_c, DuplicateLPSTR, FreeLPSTR};
pub use wide::{GetLPWSTR, ParseInt32W};

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Text returned by `GetLPSTR`.
pub const FIXED_TEXT: &str = "Hello World";

static FIXED_TEXT_CSTR: &[u8] = b"Hello World\0";

/// Value returned by `GetInt32`.
pub const FIXED_INT32: i32 = 42;

/// Magic number for DLL verification ("MSHT")
pub const MAGIC_NUMBER: u32 = 0x4D53_4854;

/// Returns the fixed text.
///
/// # Safety
/// The returned pointer is valid for the lifetime of the program (static).
/// Do not free or modify this pointer.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn GetLPSTR() -> *const c_char {
    string::static_c_ptr(FIXED_TEXT_CSTR)
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn GetInt32() -> i32 {
    FIXED_INT32
}

/// Two's-complement sum; overflow wraps.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn Add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Parses optionally signed decimal text.
///
/// # Returns
/// * The parsed value
/// * 0 if `text` is null, empty, not UTF-8, not a decimal integer, or out of range
///   (use `TryParseInt32` to tell a failure apart from a literal "0")
///
/// # Safety
/// * `text` must be null or a valid null-terminated C string
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn ParseInt32(text: *const c_char) -> i32 {
    parse::or_sentinel(unsafe { parse::parse_c_str(text) })
}

/// Returns the build version.
///
/// # Safety
/// The returned pointer is valid for the lifetime of the program (static).
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn GetLibraryVersion() -> *const c_char {
    string::static_c_ptr(VERSION_CSTR)
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn GetMagicNumber() -> u32 {
    MAGIC_NUMBER
}
