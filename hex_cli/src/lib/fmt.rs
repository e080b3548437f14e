// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Formatting conversion warnings.

use std::io::{self, Write};

use hex_engine::Warning;
use oxc_diagnostics::OxcDiagnostic;
use oxc_span::Span;

/// Installs the graphical report handler used for every warning.
///
/// Must be called at most once per process.
pub fn install_report_handler() -> Result<(), miette::InstallError> {
    // This seems to be needed for color and Unicode output.
    miette::set_hook(Box::new(|_| {
        Box::new(oxc_diagnostics::GraphicalReportHandler::new())
    }))
}

/// Builds the diagnostic for `warning`, labelling the whole of `token`.
pub fn warning_diagnostic(token: &str, warning: &Warning) -> OxcDiagnostic {
    let end = u32::try_from(token.len()).unwrap_or(u32::MAX);
    let diagnostic = OxcDiagnostic::warn(warning.to_string())
        .with_error_code("hex", warning.code())
        .with_label(Span::new(0, end));
    match warning.help() {
        Some(help) => diagnostic.with_help(help),
        None => diagnostic,
    }
}

/// Writes a report for each of `warnings` to `err`, with `token` as the
/// source.
pub fn report_warnings(err: &mut impl Write, token: &str, warnings: &[Warning]) -> io::Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }
    let named_source = miette::NamedSource::new("<input>", token.to_string());
    for warning in warnings {
        let report = warning_diagnostic(token, warning).with_source_code(named_source.clone());
        write!(err, "{report:?}")?;
    }
    writeln!(err)
}
