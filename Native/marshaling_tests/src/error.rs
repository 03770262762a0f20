//! Error types and status codes for FFI operations.
//!
//! All status codes use `#[repr(C)]` for direct marshaling to C#.

use std::num::{IntErrorKind, ParseIntError};
use std::os::raw::c_char;
use std::str::Utf8Error;

use thiserror::Error;

/// Status codes returned by the explicit-error exports.
///
/// 0 = success, non-zero = error.
///
/// # C# Mapping
/// ```csharp
/// public enum MarshalStatus : int {
///     Success = 0,
///     NullPointer = 1,
///     InvalidUtf8 = 2,
///     // ...
/// }
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarshalStatus {
    /// Operation completed successfully
    #[default]
    Success = 0,

    /// Null pointer was passed where a valid pointer was required
    NullPointer = 1,

    /// Invalid encoding in string parameter (UTF-8 or UTF-16)
    InvalidUtf8 = 2,

    /// Input text was empty
    EmptyInput = 3,

    /// Input text contained a character that is not a decimal digit
    InvalidDigit = 4,

    /// Parsed value does not fit in a 32-bit signed integer
    Overflow = 5,

    /// JSON serialization error
    JsonError = 6,

    /// Internal error (bug in the library)
    InternalError = 7,

    /// Unknown or unclassified error
    Unknown = 255,
}

impl MarshalStatus {
    /// Every status code, in declaration order.
    pub const ALL: [MarshalStatus; 9] = [
        MarshalStatus::Success,
        MarshalStatus::NullPointer,
        MarshalStatus::InvalidUtf8,
        MarshalStatus::EmptyInput,
        MarshalStatus::InvalidDigit,
        MarshalStatus::Overflow,
        MarshalStatus::JsonError,
        MarshalStatus::InternalError,
        MarshalStatus::Unknown,
    ];

    /// Returns true if this status indicates success.
    #[inline]
    pub fn is_success(self) -> bool {
        self == MarshalStatus::Success
    }

    /// Returns true if this status indicates an error.
    #[inline]
    pub fn is_error(self) -> bool {
        self != MarshalStatus::Success
    }

    /// Returns a human-readable description of this status.
    pub fn description(self) -> &'static str {
        let text = self.description_cstr();
        // Strip the terminator kept for the FFI copy.
        &text[..text.len() - 1]
    }

    fn description_cstr(self) -> &'static str {
        match self {
            MarshalStatus::Success => "Operation completed successfully\0",
            MarshalStatus::NullPointer => "Null pointer provided\0",
            MarshalStatus::InvalidUtf8 => "Invalid string encoding\0",
            MarshalStatus::EmptyInput => "Input text is empty\0",
            MarshalStatus::InvalidDigit => "Input text is not a decimal integer\0",
            MarshalStatus::Overflow => "Value out of range for a 32-bit integer\0",
            MarshalStatus::JsonError => "JSON serialization error\0",
            MarshalStatus::InternalError => "Internal error\0",
            MarshalStatus::Unknown => "Unknown error\0",
        }
    }
}

/// Failure to read a 32-bit integer out of caller-supplied text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("null pointer provided")]
    NullPointer,

    #[error("invalid string encoding")]
    InvalidEncoding,

    #[error("input text is empty")]
    Empty,

    #[error("input text is not a decimal integer")]
    InvalidDigit,

    #[error("value out of range for a 32-bit integer")]
    Overflow,
}

impl ParseError {
    /// The status code reported across the boundary for this error.
    pub fn status(&self) -> MarshalStatus {
        match self {
            ParseError::NullPointer => MarshalStatus::NullPointer,
            ParseError::InvalidEncoding => MarshalStatus::InvalidUtf8,
            ParseError::Empty => MarshalStatus::EmptyInput,
            ParseError::InvalidDigit => MarshalStatus::InvalidDigit,
            ParseError::Overflow => MarshalStatus::Overflow,
        }
    }
}

impl From<ParseIntError> for ParseError {
    fn from(error: ParseIntError) -> Self {
        match error.kind() {
            IntErrorKind::Empty => ParseError::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::Overflow,
            // A lone sign is reported as InvalidDigit by std
            _ => ParseError::InvalidDigit,
        }
    }
}

impl From<Utf8Error> for ParseError {
    fn from(_: Utf8Error) -> Self {
        ParseError::InvalidEncoding
    }
}

impl TryFrom<i32> for MarshalStatus {
    type Error = i32;

    /// Maps a raw code received from foreign code; undeclared codes are returned as the error.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        MarshalStatus::ALL
            .into_iter()
            .find(|status| *status as i32 == code)
            .ok_or(code)
    }
}

impl MarshalStatus {
    /// Reads a raw code, treating undeclared values as `Unknown`.
    pub fn from_code(code: i32) -> Self {
        MarshalStatus::try_from(code).unwrap_or(MarshalStatus::Unknown)
    }
}

impl From<ParseError> for MarshalStatus {
    fn from(error: ParseError) -> Self {
        error.status()
    }
}

// FFI Exports

/// Returns a human-readable description of a status code.
///
/// Takes the raw integer so any value a caller passes is defined behavior;
/// codes outside [`MarshalStatus`] describe as `Unknown`.
///
/// # Safety
/// The returned pointer is valid for the lifetime of the program (static).
/// Do not free this pointer.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn MarshalStatusDescription(status: i32) -> *const c_char {
    MarshalStatus::from_code(status).description_cstr().as_ptr() as *const c_char
}
