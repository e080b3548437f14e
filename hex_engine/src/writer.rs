// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Writing 64-bit values as literals at minimal or fixed width.

use crate::{Base, Config, Warning};

const UPPERCASE_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const LOWERCASE_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The text of a written literal and the warnings raised while writing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    /// The literal, without a trailing newline.
    pub text: String,
    pub warnings: Vec<Warning>,
}

/// Minimum number of bits that represent `value` without loss.
///
/// Unsigned values are measured as `u64`, so zero needs no bits at all.
/// Signed values reserve one extra bit for the sign, measured after
/// inverting negative values.
pub fn significant_bits(value: i64, signed: bool) -> u32 {
    if signed {
        let magnitude = (if value < 0 { !value } else { value }) as u64;
        (u64::BITS - magnitude.leading_zeros() + 1).min(u64::BITS)
    } else {
        u64::BITS - (value as u64).leading_zeros()
    }
}

/// Truncates or sign extends `value` to its low `width` bits.
fn normalize(value: i64, width: u32, signed: bool) -> i64 {
    let unused = u64::BITS - width;
    if signed {
        (value << unused) >> unused
    } else {
        (((value as u64) << unused) >> unused) as i64
    }
}

/// Writes `value` as a literal in `base`.
pub fn write(value: i64, base: Base, config: &Config) -> Written {
    let mut warnings = Vec::new();
    let required_bits = significant_bits(value, config.signed);

    let width = match config.fixed_width {
        Some(fixed_width) => {
            let width_bits = fixed_width.bits();
            if width_bits < required_bits {
                warnings.push(Warning::FixedWidthLoss {
                    required_bits,
                    width_bits,
                });
            }
            width_bits
        }
        None => required_bits.max(1),
    };
    let value = normalize(value, width, config.signed);

    let Some(shift) = base.bits_per_digit() else {
        let text = if config.signed {
            lexical::to_string(value)
        } else {
            lexical::to_string(value as u64)
        };
        let text = match &config.group_separator {
            Some(separator) => group_digits(&text, base, separator),
            None => text,
        };
        return Written { text, warnings };
    };

    if base == Base::Binary && config.space_grouped_binary {
        let text = write_bytes(value, width.next_multiple_of(8), config.signed);
        return Written { text, warnings };
    }

    let rounding = match config.fixed_width {
        None if config.round_up => base.round_up_bits(),
        _ => shift,
    };
    let table = if config.lowercase_hex {
        LOWERCASE_DIGITS
    } else {
        UPPERCASE_DIGITS
    };
    let digits = write_digits(
        value,
        width.next_multiple_of(rounding),
        shift,
        table,
        config.signed,
    );
    let digits = match &config.group_separator {
        Some(separator) => group_digits(&digits, base, separator),
        None => digits,
    };

    let text = if config.write_prefix {
        let mut text = String::from(base.prefix());
        text.push_str(&digits);
        text
    } else {
        digits
    };
    Written { text, warnings }
}

/// The bits of `value` selected by `mask` after shifting right by `position`.
/// Bits above bit 63 are the sign extension in signed mode and zero otherwise.
fn bit_group(value: i64, position: u32, mask: u64, signed: bool) -> usize {
    let group = if signed {
        (value >> position) as u64
    } else {
        (value as u64) >> position
    };
    (group & mask) as usize
}

fn write_digits(value: i64, width: u32, shift: u32, table: &[u8; 16], signed: bool) -> String {
    let mask = (1u64 << shift) - 1;
    let mut digits = String::with_capacity((width / shift) as usize);
    let mut position = width;
    while position > 0 {
        position -= shift;
        digits.push(char::from(table[bit_group(value, position, mask, signed)]));
    }
    digits
}

/// Inserts `separator` between groups of digits counted from the least
/// significant digit. A leading minus sign is kept in front.
fn group_digits(text: &str, base: Base, separator: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text),
    };
    let group = base.digits_per_group();
    let mut grouped =
        String::with_capacity(text.len() + digits.len() / group * separator.len());
    grouped.push_str(sign);
    for (index, digit) in digits.char_indices() {
        if index != 0 && (digits.len() - index) % group == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Space separated bytes of binary digits, most significant byte first.
fn write_bytes(value: i64, width: u32, signed: bool) -> String {
    let bytes = (width / 8) as usize;
    let mut text = String::with_capacity(bytes * 9);
    for position in (0..width).rev() {
        if position != width - 1 && position % 8 == 7 {
            text.push(' ');
        }
        text.push(if bit_group(value, position, 1, signed) == 1 {
            '1'
        } else {
            '0'
        });
    }
    text
}
