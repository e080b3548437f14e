// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt;

/// The four bases a literal can be read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    #[default]
    Hex,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hex];

    pub const fn radix(self) -> u8 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    /// Number of bits a single digit encodes, i.e. `log2(radix)`.
    ///
    /// Decimal is the one base that is not a power of two and returns
    /// `None`.
    pub const fn bits_per_digit(self) -> Option<u32> {
        match self {
            Self::Binary => Some(1),
            Self::Octal => Some(3),
            Self::Decimal => None,
            Self::Hex => Some(4),
        }
    }

    /// The literal prefix written in front of a number in this base.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Binary => "0b",
            Self::Octal => "0",
            Self::Decimal => "",
            Self::Hex => "0x",
        }
    }

    /// How many digits form one separated group: thousands in decimal,
    /// bytes in binary and hex, digit pairs in octal.
    pub const fn digits_per_group(self) -> usize {
        match self {
            Self::Binary => 8,
            Self::Octal | Self::Hex => 2,
            Self::Decimal => 3,
        }
    }

    /// The separator used between digit groups when none is given.
    pub const fn default_separator(self) -> &'static str {
        match self {
            Self::Decimal => ",",
            Self::Binary | Self::Octal | Self::Hex => " ",
        }
    }

    /// Bits a rounded up width is a multiple of. Octal rounds to digit pairs
    /// since a byte is not a whole number of octal digits.
    pub const fn round_up_bits(self) -> u32 {
        match self {
            Self::Octal => 6,
            Self::Binary | Self::Decimal | Self::Hex => 8,
        }
    }

    /// Returns the value of `byte` as a digit of this base.
    ///
    /// Total over every byte: anything outside `0-9`, `A-F` and `a-f`, or a
    /// digit not smaller than the radix, is `None`.
    pub const fn digit_value(self, byte: u8) -> Option<u8> {
        let value = match byte {
            b'0'..=b'9' => byte - b'0',
            b'A'..=b'F' => byte - b'A' + 10,
            b'a'..=b'f' => byte - b'a' + 10,
            _ => return None,
        };
        if value < self.radix() {
            Some(value)
        } else {
            None
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hex => "hexadecimal",
        })
    }
}

#[cfg(test)]
mod test {
    use super::Base;

    #[test]
    fn digit_value_respects_radix() {
        assert_eq!(Base::Binary.digit_value(b'1'), Some(1));
        assert_eq!(Base::Binary.digit_value(b'2'), None);
        assert_eq!(Base::Octal.digit_value(b'7'), Some(7));
        assert_eq!(Base::Octal.digit_value(b'8'), None);
        assert_eq!(Base::Decimal.digit_value(b'9'), Some(9));
        assert_eq!(Base::Decimal.digit_value(b'a'), None);
        assert_eq!(Base::Hex.digit_value(b'a'), Some(10));
        assert_eq!(Base::Hex.digit_value(b'F'), Some(15));
        assert_eq!(Base::Hex.digit_value(b'g'), None);
    }

    #[test]
    fn digit_value_is_total() {
        for base in Base::ALL {
            for byte in 0..=u8::MAX {
                if let Some(value) = base.digit_value(byte) {
                    assert!(value < base.radix(), "{byte:#x} in {base}");
                    assert!(byte.is_ascii_hexdigit());
                }
            }
        }
        // 0xFF must not alias the top hex digit.
        assert_eq!(Base::Hex.digit_value(0xFF), None);
        assert_eq!(Base::Hex.digit_value(b'x'), None);
        assert_eq!(Base::Decimal.digit_value(b'-'), None);
    }
}
