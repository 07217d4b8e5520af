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

use super::super::*;
use super::{encode_i, encode_j, encode_r};

fn load(computer: &mut Computer, words: &[String]) {
    for word in words {
        computer.decode_and_append(word).unwrap();
    }
}

#[test]
fn test_add_after_addiu() {
    // addiu r8, r0, 15; add r9, r8, r8
    let mut computer = Computer::new();
    load(
        &mut computer,
        &[encode_i(9, 0, 8, 15), encode_r(8, 8, 9, 0, 20)],
    );

    computer.run();

    assert_eq!(computer.registers()[8], 15);
    assert_eq!(computer.registers()[9], 30);
}

#[test]
fn test_jr_with_negative_register_falls_through() {
    // addi r8, r0, -1; jr r8 -- the target is out of range, so the program
    // counter advances normally without jumping.
    let mut computer = Computer::new();
    load(
        &mut computer,
        &[encode_i(8, 0, 8, 0xFFFF), encode_r(8, 0, 0, 0, 8)],
    );

    let steps = computer.run();

    assert_eq!(steps, 2);
    assert_eq!(computer.registers()[8], -1);
    assert_eq!(computer.pc(), 2);
}

#[test]
fn test_store_then_load_round_trip() {
    // addiu r8, r0, 1; sw r8 -> mem[1]; lw mem[1] -> r9
    let mut computer = Computer::new();
    load(
        &mut computer,
        &[
            encode_i(9, 0, 8, 1),
            encode_i(43, 0, 8, 1),
            encode_i(23, 0, 9, 1),
        ],
    );

    let steps = computer.run();

    assert_eq!(steps, 3);
    assert_eq!(computer.memory()[1], 1);
    assert_eq!(computer.registers()[9], 1);
}

#[test]
fn test_forward_jump_skips_instructions() {
    // jump 2 skips the addi at index 1
    let mut computer = Computer::new();
    load(
        &mut computer,
        &[
            encode_j(2, 2),
            encode_i(8, 0, 8, 99),
            encode_i(8, 0, 9, 7),
        ],
    );

    computer.run();

    assert_eq!(computer.registers()[8], 0);
    assert_eq!(computer.registers()[9], 7);
}

#[test]
fn test_backward_branch_loop_terminates() {
    // Counts r8 down from 3 to 0:
    //   0: addi r8, r0, 3
    //   1: addi r8, r8, -1
    //   2: bne r8, r0, 1
    let mut computer = Computer::new();
    load(
        &mut computer,
        &[
            encode_i(8, 0, 8, 3),
            encode_i(8, 8, 8, 0xFFFF),
            encode_i(5, 8, 0, 1),
        ],
    );

    let steps = computer.run();

    assert_eq!(computer.registers()[8], 0);
    // 1 initialization + 3 iterations of (decrement, branch)
    assert_eq!(steps, 7);
}

#[test]
fn test_unknown_words_interleave_as_noops() {
    // An unrecognized word between two recognized ones changes nothing.
    let mut computer = Computer::new();
    load(
        &mut computer,
        &[
            encode_i(9, 0, 8, 5),
            encode_r(1, 2, 3, 0, 63),
            encode_r(8, 8, 9, 0, 20),
        ],
    );

    let steps = computer.run();

    assert_eq!(steps, 3);
    assert_eq!(computer.registers()[9], 10);
    assert_eq!(computer.registers()[3], 0);
}

#[test]
fn test_current_instruction_tracks_last_fetch() {
    let mut computer = Computer::new();
    load(
        &mut computer,
        &[encode_i(9, 0, 8, 1), encode_j(2, 0)],
    );

    computer.step();
    assert_eq!(
        computer.current_instruction().unwrap(),
        computer.instructions()[0]
    );

    computer.step();
    assert_eq!(
        computer.current_instruction().unwrap(),
        computer.instructions()[1]
    );
}
