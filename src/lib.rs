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

//! MIPS subset simulator core library
//!
//! This library simulates a reduced subset of a 32-bit MIPS-style load/store
//! architecture: binary instruction words are decoded into typed fields,
//! classified into Register / Immediate / Jump shapes, and executed against
//! an in-memory processor state.
//!
//! # Example
//!
//! ```
//! use mipsim::core::{loader, Computer};
//!
//! let mut computer = Computer::new();
//!
//! // addiu r8, r0, 15 followed by add r9, r8, r8
//! let program = "00100100000010000000000000001111\n\
//!                00000001000010000100100000010100";
//! loader::load_program(&mut computer, program).unwrap();
//!
//! computer.run();
//! assert_eq!(computer.registers()[9], 30);
//! ```

pub mod core;
