//! Machine-readable description of the exported surface.
//!
//! A harness can fetch this once after loading the library to check that
//! every symbol it intends to bind is present, and how the memory each one
//! returns must be handled.

use std::os::raw::c_char;

use serde::Serialize;

use crate::error::MarshalStatus;
use crate::string::rust_str_to_c;
use crate::{FIXED_INT32, FIXED_TEXT, MAGIC_NUMBER, VERSION};

/// Who owns the memory behind a returned or passed pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnOwnership {
    /// Returns a value, not a pointer.
    Value,
    /// Process-lifetime static; never freed.
    Static,
    /// Allocated per call; caller releases with `FreeLPSTR`.
    CallerFrees,
    /// Takes ownership of its pointer argument and releases it.
    Consumes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportedSymbol {
    pub name: &'static str,
    pub signature: &'static str,
    pub ownership: ReturnOwnership,
    /// Parameter the export writes its result through, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_param: Option<&'static str>,
}

/// Builds [`EXPORTED_SYMBOLS`] and binds every entry to the real export with
/// its Rust signature, so a renamed, removed or retyped export fails to compile.
macro_rules! exported_symbols {
    (@out) => { None };
    (@out $out:literal) => { Some($out) };
    ($($name:ident: $ty:ty => $signature:literal, $ownership:ident $(, out = $out:literal)?;)*) => {
        /// Every C-ABI symbol this library exports.
        pub const EXPORTED_SYMBOLS: &[ExportedSymbol] = &[
            $(ExportedSymbol {
                name: stringify!($name),
                signature: $signature,
                ownership: ReturnOwnership::$ownership,
                out_param: exported_symbols!(@out $($out)?),
            },)*
        ];

        $(const _: $ty = crate::$name;)*
    };
}

exported_symbols! {
    GetLPSTR: extern "C" fn() -> *const c_char
        => "const char* GetLPSTR(void)", Static;
    GetInt32: extern "C" fn() -> i32
        => "int32_t GetInt32(void)", Value;
    Add: extern "C" fn(i32, i32) -> i32
        => "int32_t Add(int32_t a, int32_t b)", Value;
    ParseInt32: extern "C" fn(*const c_char) -> i32
        => "int32_t ParseInt32(const char* text)", Value;
    TryParseInt32: extern "C" fn(*const c_char, *mut i32) -> MarshalStatus
        => "MarshalStatus TryParseInt32(const char* text, int32_t* out)", Value, out = "out";
    DuplicateLPSTR: extern "C" fn(*const c_char) -> *mut c_char
        => "char* DuplicateLPSTR(const char* input)", CallerFrees;
    FreeLPSTR: extern "C" fn(*mut c_char) -> ()
        => "void FreeLPSTR(char* buffer)", Consumes;
    GetLPWSTR: extern "C" fn() -> *const u16
        => "const uint16_t* GetLPWSTR(void)", Static;
    ParseInt32W: extern "C" fn(*const u16) -> i32
        => "int32_t ParseInt32W(const uint16_t* text)", Value;
    NegateWinBool: extern "C" fn(i32) -> i32
        => "int32_t NegateWinBool(int32_t value)", Value;
    NegateCBool: extern "C" fn(u8) -> u8
        => "uint8_t NegateCBool(uint8_t value)", Value;
    NegateVariantBool: extern "C" fn(i16) -> i16
        => "int16_t NegateVariantBool(int16_t value)", Value;
    GetLibraryVersion: extern "C" fn() -> *const c_char
        => "const char* GetLibraryVersion(void)", Static;
    GetMagicNumber: extern "C" fn() -> u32
        => "uint32_t GetMagicNumber(void)", Value;
    MarshalStatusDescription: extern "C" fn(i32) -> *const c_char
        => "const char* MarshalStatusDescription(int32_t status)", Static;
    GetSurfaceManifestJson: extern "C" fn() -> *mut c_char
        => "char* GetSurfaceManifestJson(void)", CallerFrees;
    InitLogging: extern "C" fn() -> MarshalStatus
        => "MarshalStatus InitLogging(void)", Value;
}

#[derive(Debug, Clone, Serialize)]
pub struct SurfaceManifest {
    pub library: &'static str,
    pub version: &'static str,
    pub magic_number: u32,
    pub fixed_text: &'static str,
    pub fixed_int32: i32,
    pub symbols: &'static [ExportedSymbol],
}

pub fn surface_manifest() -> SurfaceManifest {
    SurfaceManifest {
        library: env!("CARGO_PKG_NAME"),
        version: VERSION,
        magic_number: MAGIC_NUMBER,
        fixed_text: FIXED_TEXT,
        fixed_int32: FIXED_INT32,
        symbols: EXPORTED_SYMBOLS,
    }
}

/// Returns the surface manifest as JSON.
///
/// # Returns
/// * Pointer to a JSON document (caller must free with `FreeLPSTR`)
/// * null on serialization failure
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn GetSurfaceManifestJson() -> *mut c_char {
    match serde_json::to_string(&surface_manifest()) {
        Ok(json) => rust_str_to_c(&json),
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize surface manifest");
            std::ptr::null_mut()
        }
    }
}
