// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for the hex cli program.
//!
//! > [!IMPORTANT]
//! > This library is currently mainly aimed at internal use and might not
//! > adhere to semver versioning.

mod fmt;
mod input;

pub use fmt::{install_report_handler, report_warnings, warning_diagnostic};
pub use input::{tokens, Tokens};

use std::io::{self, Write};

use hex_engine::{convert, Config, Conversion};

/// Converts `token` and writes the result as one line to `out`.
///
/// Warnings go to `err` before the result unless `config` suppresses them.
pub fn run_token(
    out: &mut impl Write,
    err: &mut impl Write,
    token: &str,
    config: &Config,
) -> io::Result<Conversion> {
    let conversion = convert(token, config);
    if !config.suppress_warnings {
        report_warnings(err, token, &conversion.warnings)?;
    }
    writeln!(out, "{}", conversion.text)?;
    Ok(conversion)
}

/// Runs every token in order, stopping at the first I/O error.
///
/// Returns the number of tokens converted.
pub fn run_tokens<I, S>(
    out: &mut impl Write,
    err: &mut impl Write,
    tokens: I,
    config: &Config,
) -> io::Result<usize>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut converted = 0;
    for token in tokens {
        run_token(out, err, token?.as_ref(), config)?;
        converted += 1;
    }
    out.flush()?;
    Ok(converted)
}
