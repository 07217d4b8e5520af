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

//! Shared helpers for integration tests

/// Assemble a Register-shape word (opcode 0)
#[allow(dead_code)]
pub fn encode_r(source: u32, target: u32, destination: u32, shift: u32, function: u32) -> String {
    format!(
        "000000{:05b}{:05b}{:05b}{:05b}{:06b}",
        source, target, destination, shift, function
    )
}

/// Assemble an Immediate-shape word
#[allow(dead_code)]
pub fn encode_i(opcode: u32, source: u32, target: u32, immediate: u16) -> String {
    format!("{:06b}{:05b}{:05b}{:016b}", opcode, source, target, immediate)
}

/// Assemble a Jump-shape word
#[allow(dead_code)]
pub fn encode_j(opcode: u32, address: u32) -> String {
    format!("{:06b}{:026b}", opcode, address)
}
