// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
mod theme;

use std::io::{self, IsTerminal};

use clap::{Parser as ClapParser, ValueEnum};
use cliclack::{input, intro, log, outro, set_theme};
use hex_cli::{install_report_handler, run_tokens, tokens};
use hex_engine::{convert, Base, Config, FixedWidth};
use theme::ConverterTheme;

/// Converts integers between binary, octal, decimal and hexadecimal
#[derive(Debug, ClapParser)] // requires `derive` feature
#[command(name = "hex", version)]
#[command(
    about = "Converts integers between binary, octal, decimal and hexadecimal",
    long_about = None
)]
struct Cli {
    /// Reads every number in this base instead of detecting it from the prefix
    #[arg(short, long, value_enum)]
    read: Option<BaseArg>,

    /// The base numbers are written in
    #[arg(short, long, value_enum, default_value_t = BaseArg::Hex)]
    write: BaseArg,

    /// Writes binary broken into space separated bytes
    #[arg(short = 'B', long)]
    bytes: bool,

    /// Reads and writes numbers as two's complement. Use '-' or '_' for
    /// negative decimals
    #[arg(short, long)]
    signed: bool,

    /// Sets the width of output to be N bytes long
    #[arg(short = 'W', long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=8))]
    width: Option<u8>,

    /// Writes hexadecimal digits in lowercase
    #[arg(short, long)]
    lowercase: bool,

    /// Rounds the width of output up to whole bytes, or digit pairs in octal
    #[arg(short = 'R', long)]
    round_up: bool,

    /// Separates groups of digits with SEP. Defaults to ',' for decimal and
    /// a space otherwise
    #[arg(
        short = 'c',
        long,
        value_name = "SEP",
        num_args = 0..=1,
        require_equals = true,
        value_parser = clap::builder::NonEmptyStringValueParser::new(),
        overrides_with = "no_separate"
    )]
    separate: Option<Option<String>>,

    /// Writes digits without separators (default)
    #[arg(short = 't', long, overrides_with = "separate")]
    no_separate: bool,

    /// Writes prefixes on binary, octal and hexadecimal numbers (default)
    #[arg(short, long, overrides_with = "no_prefix")]
    prefix: bool,

    /// Omits prefixes from all numbers
    #[arg(short, long, overrides_with = "prefix")]
    no_prefix: bool,

    /// Suppresses warning messages
    #[arg(short = 'z', long)]
    quiet: bool,

    /// The numbers to convert. Read from standard input when empty
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BaseArg {
    #[value(alias = "b")]
    Binary,
    #[value(alias = "o")]
    Octal,
    #[value(alias = "d")]
    Decimal,
    #[value(alias = "x")]
    Hex,
}

impl From<BaseArg> for Base {
    fn from(value: BaseArg) -> Self {
        match value {
            BaseArg::Binary => Base::Binary,
            BaseArg::Octal => Base::Octal,
            BaseArg::Decimal => Base::Decimal,
            BaseArg::Hex => Base::Hex,
        }
    }
}

impl Cli {
    fn config(&self) -> Config {
        let write_base = if self.bytes {
            Base::Binary
        } else {
            self.write.into()
        };
        Config {
            read_base: self.read.map_or(Base::Decimal, Base::from),
            write_base,
            suppress_warnings: self.quiet,
            signed: self.signed,
            fixed_width: self.width.and_then(FixedWidth::new),
            force_read_mode: self.read.is_some(),
            space_grouped_binary: self.bytes,
            lowercase_hex: self.lowercase,
            round_up: self.round_up,
            write_prefix: self.prefix || !self.no_prefix,
            group_separator: self.separate.as_ref().map(|separator| {
                separator
                    .clone()
                    .unwrap_or_else(|| write_base.default_separator().to_string())
            }),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let config = args.config();
    install_report_handler()?;

    if !args.numbers.is_empty() {
        let tokens = args.numbers.iter().map(Ok::<_, io::Error>);
        run_tokens(&mut io::stdout().lock(), &mut io::stderr().lock(), tokens, &config)?;
        return Ok(());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return repl(&config);
    }
    run_tokens(
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        tokens(stdin.lock()),
        &config,
    )?;
    Ok(())
}

/// Prompts for numbers until an empty line or `exit`.
fn repl(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    set_theme(ConverterTheme);
    intro(format!(
        "hex: reading {}, writing {} (empty line or exit to quit)",
        if config.force_read_mode {
            config.read_base.to_string()
        } else {
            "by prefix".to_string()
        },
        config.write_base
    ))?;
    let mut placeholder = "0x1A".to_string();

    loop {
        let line: String = input("")
            .placeholder(&placeholder)
            .required(false)
            .interact()?;
        let line = line.trim();
        if line.is_empty() || line == "exit" {
            break;
        }

        for token in tokens(line.as_bytes()) {
            let token = token?;
            let conversion = convert(&token, config);
            if !config.suppress_warnings {
                for warning in &conversion.warnings {
                    log::warning(warning)?;
                }
            }
            println!("{}", conversion.text);
        }
        placeholder = line.to_string();
    }

    outro("Done")?;
    Ok(())
}
