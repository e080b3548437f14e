// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{Base, Config};

/// The base a token is read in and the digits left after its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub base: Base,
    pub digits: &'a str,
}

/// Picks the base `token` is read in.
///
/// With `force_read_mode` set, `config.read_base` is used and only that
/// base's own prefix is removed. Otherwise the prefix decides: `0x` is hex,
/// `0b` is binary, any other leading `0` is octal and everything else is
/// decimal.
pub fn resolve<'a>(token: &'a str, config: &Config) -> Resolved<'a> {
    let (base, digits) = if config.force_read_mode {
        (config.read_base, strip_prefix(token, config.read_base))
    } else {
        let base = match token.as_bytes() {
            [b'0', b'x' | b'X', ..] => Base::Hex,
            [b'0', b'b' | b'B', ..] => Base::Binary,
            [b'0', ..] => Base::Octal,
            _ => Base::Decimal,
        };
        (base, strip_prefix(token, base))
    };
    Resolved { base, digits }
}

fn strip_prefix(token: &str, base: Base) -> &str {
    let prefixes: &[&str] = match base {
        Base::Binary => &["0b", "0B"],
        Base::Octal => &["0o", "0O", "0"],
        Base::Decimal => &[],
        Base::Hex => &["0x", "0X"],
    };
    prefixes
        .iter()
        .find_map(|prefix| token.strip_prefix(prefix))
        .unwrap_or(token)
}
