// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cliclack::{Theme, ThemeState};
use console::Style;

pub struct ConverterTheme;

impl Theme for ConverterTheme {
    fn bar_color(&self, _: &ThemeState) -> Style {
        Style::new().dim().bold()
    }

    fn state_symbol_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Submit => Style::new().green(),
            _ => Style::new().cyan(),
        }
    }

    fn info_symbol(&self) -> String {
        "0x".into()
    }

    fn warning_symbol(&self) -> String {
        "!".into()
    }
}
