//! Conversions from the fixed-point formats used by font scalers.
//!
//! Scaled outline coordinates are 26.6 values (the unit is 1/64th of a
//! pixel) while scale factors and variation coordinates are 16.16. Both are
//! stored in an `i32`, so which format a value is in depends entirely on
//! where it came from.

use skrifa::raw::types::{F26Dot6, Fixed};

const F26DOT6_FRACTION_BITS: u32 = 6;
const F26DOT6_FRACTION_MASK: i32 = (1 << F26DOT6_FRACTION_BITS) - 1;

const F16DOT16_FRACTION_BITS: u32 = 16;
const F16DOT16_FRACTION_MASK: i32 = (1 << F16DOT16_FRACTION_BITS) - 1;

/// Converts a 26.6 fixed-point value to a float.
///
/// The integer part is the arithmetic shift of the raw bits and the fraction
/// is the low six bits over 64, so negative values round toward negative
/// infinity in the integer part and carry a positive fraction.
pub fn f26dot6_to_f64(value: F26Dot6) -> f64 {
    let bits = value.to_bits();
    let base = bits >> F26DOT6_FRACTION_BITS;
    let fraction = bits & F26DOT6_FRACTION_MASK;
    base as f64 + fraction as f64 / (1 << F26DOT6_FRACTION_BITS) as f64
}

/// Converts a 16.16 fixed-point value to a float.
///
/// Same decomposition as [`f26dot6_to_f64`] with sixteen fraction bits.
pub fn f16dot16_to_f64(value: Fixed) -> f64 {
    let bits = value.to_bits();
    let base = bits >> F16DOT16_FRACTION_BITS;
    let fraction = bits & F16DOT16_FRACTION_MASK;
    base as f64 + fraction as f64 / (1 << F16DOT16_FRACTION_BITS) as f64
}

/// Quantizes a scaled coordinate to the nearest 26.6 value.
pub(crate) fn f26dot6_from_f64(value: f64) -> F26Dot6 {
    F26Dot6::from_bits((value * 64.0).round() as i32)
}
