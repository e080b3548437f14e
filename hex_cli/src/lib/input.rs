// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tokens read line by line from non-interactive input.

use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

/// Splits each line of `reader` on whitespace, stopping at the first blank
/// line or at the end of input.
pub fn tokens<R: BufRead>(reader: R) -> Tokens<R> {
    Tokens {
        lines: reader.lines(),
        pending: VecDeque::new(),
        done: false,
    }
}

pub struct Tokens<R> {
    lines: io::Lines<R>,
    pending: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            match self.lines.next() {
                Some(Ok(line)) if !line.trim().is_empty() => {
                    self.pending
                        .extend(line.split_whitespace().map(str::to_owned));
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
                Some(Ok(_)) | None => self.done = true,
            }
        }
    }
}
