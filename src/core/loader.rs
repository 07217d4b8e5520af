// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 mipsim contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Program loading
//!
//! A program is a line-oriented text stream, one instruction word per line,
//! in load order:
//!
//! ```text
//! 00100100000010000000000000001111
//! 00000001000010000100100000010100
//! ```
//!
//! Each line must be exactly 32 `0`/`1` characters; a trailing carriage
//! return is tolerated for files written on Windows. There is no header,
//! comment, or blank-line syntax. Loading must complete before the first
//! fetch, since branch and jump validity depends on the final instruction
//! count.
//!
//! # Example
//!
//! ```
//! use mipsim::core::{loader, Computer};
//!
//! let mut computer = Computer::new();
//! let loaded = loader::load_program(
//!     &mut computer,
//!     "00100100000010000000000000001111",
//! ).unwrap();
//! assert_eq!(loaded, 1);
//! ```

use std::path::Path;

use super::cpu::Computer;
use super::error::{Result, SimulatorError};

/// Load a program from a string, one binary word per line
///
/// # Arguments
///
/// * `computer` - The computer receiving the instructions
/// * `source` - Program text, one 32-character binary word per line
///
/// # Returns
///
/// - `Ok(count)` with the number of instructions loaded
/// - `Err(SimulatorError::LoaderError)` naming the offending line when a word
///   is malformed or the instruction list is full
pub fn load_program(computer: &mut Computer, source: &str) -> Result<usize> {
    let mut loaded = 0;

    for (number, line) in source.lines().enumerate() {
        // `lines()` strips `\n` but leaves the `\r` of CRLF endings.
        let word = line.strip_suffix('\r').unwrap_or(line);

        computer
            .decode_and_append(word)
            .map_err(|e| SimulatorError::LoaderError(format!("line {}: {}", number + 1, e)))?;
        loaded += 1;
    }

    log::debug!("{} instructions loaded", loaded);
    Ok(loaded)
}

/// Load a program from a file, one binary word per line
///
/// # Arguments
///
/// * `computer` - The computer receiving the instructions
/// * `path` - Path to the program file
///
/// # Returns
///
/// - `Ok(count)` with the number of instructions loaded
/// - `Err(SimulatorError::Io)` if the file cannot be read
/// - `Err(SimulatorError::LoaderError)` on a malformed or excess word
pub fn load_program_file(computer: &mut Computer, path: &Path) -> Result<usize> {
    let source = std::fs::read_to_string(path)?;
    load_program(computer, &source)
}
