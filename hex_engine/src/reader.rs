// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reading literals into 64-bit two's complement values.

use crate::{Base, Config, Warning};

const SIGN_BIT: u64 = 1 << 63;

/// The value read from a literal and the warnings raised while reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub value: i64,
    pub warnings: Vec<Warning>,
}

/// Reads `digits` as a number in `base`.
///
/// `digits` must already have its base prefix removed, see
/// [`resolve`](fn@crate::resolve). Characters that are not digits of `base`
/// are skipped.
pub fn read(digits: &str, base: Base, config: &Config) -> Reading {
    match base.bits_per_digit() {
        Some(shift) => read_power_of_two(digits, base, shift, config.signed),
        None => read_decimal(digits, config.signed),
    }
}

/// Reads a binary, octal or hex literal by shifting in `shift` bits per
/// digit.
///
/// In signed mode the highest bit supplied by the literal is its sign bit,
/// so `0xF` reads as -1 while `0x0F` reads as 15.
fn read_power_of_two(digits: &str, base: Base, shift: u32, signed: bool) -> Reading {
    let mut warnings = Vec::new();
    let mut value: u64 = 0;
    let mut total_bits: usize = 0;
    for digit in digits.bytes().filter_map(|byte| base.digit_value(byte)) {
        value = (value << shift) | u64::from(digit);
        total_bits += shift as usize;
    }

    if total_bits > 64 {
        warnings.push(Warning::ReadOverflow {
            excess_bits: total_bits - 64,
        });
        return Reading {
            value: value as i64,
            warnings,
        };
    }

    let value = if signed && total_bits > 0 {
        let unused = 64 - total_bits as u32;
        ((value << unused) as i64) >> unused
    } else {
        value as i64
    };
    Reading { value, warnings }
}

/// Reads a base 10 literal, optionally marked negative by a leading `-` or
/// `_`.
///
/// `_` exists for shells and argument parsers where a leading `-` would be
/// taken as a flag.
fn read_decimal(digits: &str, signed: bool) -> Reading {
    let mut warnings = Vec::new();
    let negative = matches!(digits.as_bytes().first(), Some(b'-' | b'_'));

    let mut overflowed = false;
    let mut magnitude: u64 = 0;
    for digit in digits
        .bytes()
        .filter_map(|byte| Base::Decimal.digit_value(byte))
        .map(u64::from)
    {
        magnitude = match magnitude
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(digit))
        {
            Some(magnitude) => magnitude,
            None => {
                overflowed = true;
                magnitude.wrapping_mul(10).wrapping_add(digit)
            }
        };
    }
    if overflowed {
        warnings.push(Warning::DecimalOverflow);
    }

    if !signed {
        if negative {
            warnings.push(Warning::NegativeInUnsignedMode);
        }
        return Reading {
            value: magnitude as i64,
            warnings,
        };
    }

    // -2^63 is the one magnitude with the top bit set that still fits.
    if negative && magnitude == SIGN_BIT {
        return Reading {
            value: i64::MIN,
            warnings,
        };
    }
    if magnitude & SIGN_BIT != 0 {
        magnitude ^= SIGN_BIT;
        warnings.push(Warning::TwosComplementOverflow);
    }

    let value = magnitude as i64;
    Reading {
        value: if negative { -value } else { value },
        warnings,
    }
}
