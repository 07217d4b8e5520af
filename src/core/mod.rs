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

//! Core simulation components
//!
//! This module contains the decode-classify-execute pipeline:
//! - Instruction word parsing and field extraction
//! - Instruction classification into Register / Immediate / Jump shapes
//! - The simulated processor state and execution engine
//! - The line-oriented program loader

pub mod cpu;
pub mod error;
pub mod loader;

// Re-export commonly used types
pub use cpu::{Computer, DecodedInstruction, InstructionWord, Mnemonic, Step};
pub use error::{Result, SimulatorError};
