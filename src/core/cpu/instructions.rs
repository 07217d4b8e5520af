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

use super::{Computer, DecodedInstruction};

impl Computer {
    /// Dispatch the fetched instruction to its operation handler
    ///
    /// Register-shape instructions dispatch on the function code; Immediate
    /// and Jump shapes dispatch on the opcode. Any code outside the tables
    /// below is a no-op: state is left unchanged and the program counter
    /// keeps its already-incremented value.
    pub(super) fn execute(&mut self, instruction: &DecodedInstruction) {
        match *instruction {
            DecodedInstruction::Register {
                function,
                destination,
                source,
                target,
                ..
            } => match function {
                8 => self.op_jr(source),
                20 => self.op_add(source, target, destination),
                21 => self.op_addu(source, target, destination),
                24 => self.op_and(source, target, destination),
                25 => self.op_or(source, target, destination),
                _ => {
                    log::warn!(
                        "Unrecognized function code {} at pc={}: executed as no-op",
                        function,
                        self.pc
                    );
                }
            },
            DecodedInstruction::Immediate {
                word,
                source,
                target,
                immediate_signed,
                immediate_unsigned,
                ..
            } => match word.opcode() {
                4 => self.op_beq(source, target, immediate_signed),
                5 => self.op_bne(source, target, immediate_signed),
                8 => self.op_addi(source, target, immediate_signed),
                9 => self.op_addiu(source, target, immediate_unsigned),
                12 => self.op_andi(source, target, immediate_signed),
                13 => self.op_ori(source, target, immediate_signed),
                23 => self.op_lw(source, target, immediate_signed),
                43 => self.op_sw(source, target, immediate_signed),
                opcode => {
                    log::warn!(
                        "Unrecognized opcode {} at pc={}: executed as no-op",
                        opcode,
                        self.pc
                    );
                }
            },
            DecodedInstruction::Jump { word, address, .. } => match word.opcode() {
                2 => self.op_jump(address),
                opcode => {
                    log::warn!(
                        "Unrecognized jump opcode {} at pc={}: executed as no-op",
                        opcode,
                        self.pc
                    );
                }
            },
        }
    }

    /// ADD: signed addition, wrapping on overflow
    ///
    /// Operation: rd = rs + rt
    fn op_add(&mut self, source: u8, target: u8, destination: u8) {
        let result = self.gpr[source as usize].wrapping_add(self.gpr[target as usize]);
        self.gpr[destination as usize] = result;
    }

    /// ADDU: addition with both operands interpreted as unsigned 32-bit
    /// values, result truncated to 32 bits
    ///
    /// Operation: rd = rs + rt
    fn op_addu(&mut self, source: u8, target: u8, destination: u8) {
        let a = self.gpr[source as usize] as u32;
        let b = self.gpr[target as usize] as u32;
        self.gpr[destination as usize] = a.wrapping_add(b) as i32;
    }

    /// AND: bitwise AND of two registers
    ///
    /// Operation: rd = rs & rt
    fn op_and(&mut self, source: u8, target: u8, destination: u8) {
        self.gpr[destination as usize] = self.gpr[source as usize] & self.gpr[target as usize];
    }

    /// OR: bitwise OR of two registers
    ///
    /// Operation: rd = rs | rt
    fn op_or(&mut self, source: u8, target: u8, destination: u8) {
        self.gpr[destination as usize] = self.gpr[source as usize] | self.gpr[target as usize];
    }

    /// JR: jump to the instruction index held in a register
    ///
    /// Operation: pc = rs, when rs is a valid instruction index
    fn op_jr(&mut self, source: u8) {
        let target = self.gpr[source as usize];
        self.branch_to(target);
    }

    /// ADDI: signed addition of a register and the sign-extended immediate
    ///
    /// Operation: rt = rs + immediate
    fn op_addi(&mut self, source: u8, target: u8, immediate: i32) {
        self.gpr[target as usize] = self.gpr[source as usize].wrapping_add(immediate);
    }

    /// ADDIU: addition of a register and the zero-extended immediate, both
    /// interpreted as unsigned 32-bit values, result truncated to 32 bits
    ///
    /// Operation: rt = rs + immediate
    fn op_addiu(&mut self, source: u8, target: u8, immediate: u16) {
        let a = self.gpr[source as usize] as u32;
        self.gpr[target as usize] = a.wrapping_add(immediate as u32) as i32;
    }

    /// ANDI: bitwise AND of a register and the sign-extended immediate
    ///
    /// Operation: rt = rs & immediate
    fn op_andi(&mut self, source: u8, target: u8, immediate: i32) {
        self.gpr[target as usize] = self.gpr[source as usize] & immediate;
    }

    /// ORI: bitwise OR of a register and the sign-extended immediate
    ///
    /// Operation: rt = rs | immediate
    fn op_ori(&mut self, source: u8, target: u8, immediate: i32) {
        self.gpr[target as usize] = self.gpr[source as usize] | immediate;
    }

    /// LW: load a memory word into a register
    ///
    /// Operation: rt = mem[rs + immediate]
    ///
    /// The address is the runtime value of the source register plus the
    /// sign-extended immediate. Out-of-range addresses leave the target
    /// register unchanged.
    fn op_lw(&mut self, source: u8, target: u8, immediate: i32) {
        let address = self.gpr[source as usize].wrapping_add(immediate);
        if address >= 0 && (address as usize) < self.mem.len() {
            self.gpr[target as usize] = self.mem[address as usize];
        }
    }

    /// SW: store a register into a memory word
    ///
    /// Operation: mem[rs + immediate] = rt
    ///
    /// Out-of-range addresses leave memory unchanged.
    fn op_sw(&mut self, source: u8, target: u8, immediate: i32) {
        let address = self.gpr[source as usize].wrapping_add(immediate);
        if address >= 0 && (address as usize) < self.mem.len() {
            self.mem[address as usize] = self.gpr[target as usize];
        }
    }

    /// BEQ: branch to an absolute instruction index when two registers are
    /// equal
    ///
    /// Operation: if rs == rt then pc = immediate
    fn op_beq(&mut self, source: u8, target: u8, immediate: i32) {
        if self.gpr[source as usize] == self.gpr[target as usize] {
            self.branch_to(immediate);
        }
    }

    /// BNE: branch to an absolute instruction index when two registers
    /// differ
    ///
    /// Operation: if rs != rt then pc = immediate
    fn op_bne(&mut self, source: u8, target: u8, immediate: i32) {
        if self.gpr[source as usize] != self.gpr[target as usize] {
            self.branch_to(immediate);
        }
    }

    /// JUMP: unconditional branch to an absolute instruction index
    ///
    /// Operation: pc = address
    fn op_jump(&mut self, address: i32) {
        self.branch_to(address);
    }

    /// Set the program counter to an absolute instruction index
    ///
    /// Targets are valid only in `[0, loaded_count)`; anything else leaves
    /// the program counter at its already-incremented value, so execution
    /// falls through to the next instruction.
    fn branch_to(&mut self, address: i32) {
        if address >= 0 && (address as usize) < self.instructions.len() {
            self.pc = address as usize;
        }
    }
}
