// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::Base;

/// An exact output width in whole bytes, between 1 and 8 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedWidth(u8);

impl FixedWidth {
    pub const MIN_BYTES: u8 = 1;
    pub const MAX_BYTES: u8 = 8;

    pub const fn new(bytes: u8) -> Option<Self> {
        if bytes >= Self::MIN_BYTES && bytes <= Self::MAX_BYTES {
            Some(Self(bytes))
        } else {
            None
        }
    }

    pub const fn bytes(self) -> u8 {
        self.0
    }

    pub const fn bits(self) -> u32 {
        self.bytes() as u32 * 8
    }
}

/// Options shared by the reader and the writer for one run.
///
/// Built once from the command line and only ever borrowed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base used for reading when `force_read_mode` is set.
    pub read_base: Base,
    /// Base all output is written in. Default hex.
    pub write_base: Base,
    /// Whether warnings should be hidden. Results are unaffected.
    pub suppress_warnings: bool,
    /// Whether values are two's complement instead of unsigned magnitudes.
    pub signed: bool,
    /// Exact output width. `None` writes the minimal width.
    pub fixed_width: Option<FixedWidth>,
    /// Whether `read_base` overrides prefix detection.
    pub force_read_mode: bool,
    /// Whether binary output is written as space separated bytes.
    pub space_grouped_binary: bool,
    /// Whether hex digits above 9 are written lowercase.
    pub lowercase_hex: bool,
    /// Pads minimal width output up to whole bytes, or whole digit pairs in
    /// octal. Ignored with a fixed width.
    pub round_up: bool,
    /// Whether binary, octal and hex output carries its base prefix.
    pub write_prefix: bool,
    /// Inserted between digit groups, see [`Base::digits_per_group`].
    /// Space grouped binary keeps its own byte grouping.
    pub group_separator: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_base: Base::Decimal,
            write_base: Base::Hex,
            suppress_warnings: false,
            signed: false,
            fixed_width: None,
            force_read_mode: false,
            space_grouped_binary: false,
            lowercase_hex: false,
            round_up: false,
            write_prefix: true,
            group_separator: None,
        }
    }
}
