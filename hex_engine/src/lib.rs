// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion of integer literals between binary, octal, decimal and
//! hexadecimal.
//!
//! Every value passes through a 64-bit two's complement [`i64`]. A token is
//! first [resolved](fn@resolve) to a base, [read](fn@read) into a value and then
//! [written](fn@write) in the output base. Each stage reports [`Warning`]s
//! instead of failing: values are wrapped or truncated to 64 bits and the
//! caller decides whether to show the warnings.
//!
//! ```
//! use hex_engine::{convert, Config};
//!
//! let conversion = convert("0x1A", &Config::default());
//! assert_eq!(conversion.value, 26);
//! assert_eq!(conversion.text, "0x1A");
//! assert!(conversion.warnings.is_empty());
//! ```

mod base;
mod config;
mod reader;
mod resolve;
mod warning;
mod writer;

pub use base::Base;
pub use config::{Config, FixedWidth};
pub use reader::{read, Reading};
pub use resolve::{resolve, Resolved};
pub use warning::Warning;
pub use writer::{significant_bits, write, Written};

/// The result of converting a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The base the token was read in.
    pub read_base: Base,
    pub value: i64,
    pub text: String,
    /// Warnings from reading followed by warnings from writing.
    pub warnings: Vec<Warning>,
}

/// Resolves, reads and writes `token` according to `config`.
pub fn convert(token: &str, config: &Config) -> Conversion {
    let Resolved { base, digits } = resolve(token, config);
    let Reading {
        value,
        mut warnings,
    } = read(digits, base, config);
    let written = write(value, config.write_base, config);
    warnings.extend(written.warnings);
    Conversion {
        read_base: base,
        value,
        text: written.text,
        warnings,
    }
}
