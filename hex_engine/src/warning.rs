// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Advisory conditions found while converting a token.
///
/// None of these stop a conversion; the value is always wrapped or truncated
/// to 64 bits and the warning only reports that it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// More than 64 bits of binary, octal or hex digits were supplied.
    ReadOverflow { excess_bits: usize },
    /// A decimal magnitude did not fit in 64 unsigned bits.
    DecimalOverflow,
    /// A decimal magnitude does not fit in a signed 64-bit integer.
    TwosComplementOverflow,
    /// A `-` or `_` marked literal was read in unsigned mode.
    NegativeInUnsignedMode,
    /// The requested fixed width is narrower than the value.
    FixedWidthLoss { required_bits: u32, width_bits: u32 },
}

impl Warning {
    /// Short stable identifier used when reporting the warning.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ReadOverflow { .. } => "read-overflow",
            Self::DecimalOverflow => "decimal-overflow",
            Self::TwosComplementOverflow => "twos-complement-overflow",
            Self::NegativeInUnsignedMode => "negative-unsigned",
            Self::FixedWidthLoss { .. } => "fixed-width-loss",
        }
    }

    pub const fn help(&self) -> Option<&'static str> {
        match self {
            Self::ReadOverflow { .. } | Self::DecimalOverflow => {
                Some("only the low 64 bits of the number are kept")
            }
            Self::TwosComplementOverflow => Some("the sign bit was cleared"),
            Self::NegativeInUnsignedMode => Some("use signed mode to read negative numbers"),
            Self::FixedWidthLoss { .. } => Some("increase the output width"),
        }
    }
}

impl core::fmt::Display for Warning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ReadOverflow { excess_bits } => {
                write!(f, "Number reading overflow by {excess_bits} bits")
            }
            Self::DecimalOverflow => f.write_str("Decimal reading overflow"),
            Self::TwosComplementOverflow => f.write_str("Two's complement reading overflow"),
            Self::NegativeInUnsignedMode => {
                f.write_str("Negative number read in unsigned mode")
            }
            Self::FixedWidthLoss {
                required_bits,
                width_bits,
            } => write!(
                f,
                "Fixed width results in loss of data: {required_bits} bits needed but only {width_bits} written"
            ),
        }
    }
}

impl core::error::Error for Warning {}
