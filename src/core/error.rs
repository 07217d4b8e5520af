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

/// Simulator error types
use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Main error type for the simulator
///
/// Only program construction can fail. Execution never errors: an
/// unrecognized opcode or function code runs as a no-op, and out-of-range
/// branch or memory targets are silently ignored.
#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("malformed instruction word (expected 32 binary digits): {word:?}")]
    MalformedWord { word: String },

    #[error("program too large: at most {capacity} instructions can be loaded")]
    ProgramTooLarge { capacity: usize },

    #[error("Loader error: {0}")]
    LoaderError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
