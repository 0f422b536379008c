//! IEEE-754 binary16 value type
//!
//! [`Half`] stores the raw 16-bit pattern. Conversions go through
//! [`half::f16`], which rounds to nearest-even, saturates out-of-range
//! magnitudes to infinity and keeps NaN as NaN.

use ::half::f16;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-precision float held as its bit pattern.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Half(u16);

impl Half {
    pub const ZERO: Half = Half(0x0000);
    pub const ONE: Half = Half(0x3c00);
    pub const INFINITY: Half = Half(0x7c00);
    pub const NEG_INFINITY: Half = Half(0xfc00);
    /// Largest finite value (65504.0)
    pub const MAX: Half = Half(0x7bff);

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Half(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Round a full-precision value to the nearest half (ties to even).
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Half(f16::from_f32(value).to_bits())
    }

    /// Widen to full precision. Exact.
    #[inline]
    pub fn to_f32(self) -> f32 {
        f16::from_bits(self.0).to_f32()
    }

    #[inline]
    pub fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Half(u16::from_be_bytes(bytes))
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        // exponent all ones, mantissa non-zero
        (self.0 & 0x7c00) == 0x7c00 && (self.0 & 0x03ff) != 0
    }

    /// Value equality in half-precision space.
    ///
    /// Two NaNs are the same value, and `+0` equals `-0`.
    #[inline]
    pub fn same_value(self, other: Half) -> bool {
        if self.is_nan() || other.is_nan() {
            return self.is_nan() && other.is_nan();
        }
        self.to_f32() == other.to_f32()
    }
}

impl From<f32> for Half {
    fn from(value: f32) -> Self {
        Half::from_f32(value)
    }
}

impl From<Half> for f32 {
    fn from(value: Half) -> Self {
        value.to_f32()
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Half({:#06x} = {})", self.0, self.to_f32())
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}
