//! Native boolean representations.
//!
//! A managed `bool` can cross the boundary as a Win32 `BOOL` (4 bytes), a C
//! `bool` (1 byte) or a COM `VARIANT_BOOL` (2 bytes, true = all bits set).
//! Each probe reads any non-zero value as true and answers with the
//! canonical value of the same representation.

/// One native encoding of a boolean.
pub trait NativeBool: Copy + PartialEq {
    const TRUE: Self;
    const FALSE: Self;

    fn to_bool(self) -> bool;

    fn from_bool(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }
}

/// Win32 `BOOL`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinBool(pub i32);

/// C99 `bool` / `BOOLEAN`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CBool(pub u8);

/// COM `VARIANT_BOOL`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantBool(pub i16);

impl NativeBool for WinBool {
    const TRUE: Self = WinBool(1);
    const FALSE: Self = WinBool(0);

    fn to_bool(self) -> bool {
        self.0 != 0
    }
}

impl NativeBool for CBool {
    const TRUE: Self = CBool(1);
    const FALSE: Self = CBool(0);

    fn to_bool(self) -> bool {
        self.0 != 0
    }
}

impl NativeBool for VariantBool {
    const TRUE: Self = VariantBool(-1);
    const FALSE: Self = VariantBool(0);

    fn to_bool(self) -> bool {
        self.0 != 0
    }
}

/// Logical negation with a canonical result.
pub fn negate<B: NativeBool>(value: B) -> B {
    B::from_bool(!value.to_bool())
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn NegateWinBool(value: i32) -> i32 {
    negate(WinBool(value)).0
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn NegateCBool(value: u8) -> u8 {
    negate(CBool(value)).0
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn NegateVariantBool(value: i16) -> i16 {
    negate(VariantBool(value)).0
}
