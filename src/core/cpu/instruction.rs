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

//! Decoded instruction representation and classification
//!
//! A raw word is classified into one of three shapes by its opcode:
//! 0 is Register, 2 is Jump, everything else is Immediate. The mnemonic is
//! resolved separately from the shape and may be absent; a word whose code
//! matches no known operation still decodes and later executes as a no-op.

use std::fmt;

use super::decode::InstructionWord;

/// Operation name resolved from an opcode or function code
///
/// Covers the simulated subset only. Codes outside the tables below resolve
/// to no mnemonic at all, not to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Jr,
    Add,
    Addu,
    And,
    Or,
    Beq,
    Bne,
    Addi,
    Addiu,
    Andi,
    Ori,
    Lw,
    Sw,
    Jump,
}

impl Mnemonic {
    /// Resolve a Register-shape mnemonic from a function code
    fn from_function(function: u8) -> Option<Self> {
        match function {
            8 => Some(Self::Jr),
            20 => Some(Self::Add),
            21 => Some(Self::Addu),
            24 => Some(Self::And),
            25 => Some(Self::Or),
            _ => None,
        }
    }

    /// Resolve an Immediate-shape mnemonic from an opcode
    fn from_immediate_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            4 => Some(Self::Beq),
            5 => Some(Self::Bne),
            8 => Some(Self::Addi),
            9 => Some(Self::Addiu),
            12 => Some(Self::Andi),
            13 => Some(Self::Ori),
            23 => Some(Self::Lw),
            43 => Some(Self::Sw),
            _ => None,
        }
    }

    /// Resolve a Jump-shape mnemonic from an opcode
    fn from_jump_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            2 => Some(Self::Jump),
            _ => None,
        }
    }

    /// Display text of the mnemonic
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jr => "jr",
            Self::Add => "add",
            Self::Addu => "addu",
            Self::And => "and",
            Self::Or => "or",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Jump => "jump",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified instruction, one variant per shape
///
/// Every variant retains the originating [`InstructionWord`], so the exact
/// source bit pattern stays available for display and debugging.
///
/// # Example
/// ```
/// use mipsim::core::cpu::{DecodedInstruction, InstructionWord, Mnemonic};
///
/// // add r9, r8, r8
/// let word = InstructionWord::parse("00000001000010000100100000010100").unwrap();
/// let instruction = DecodedInstruction::classify(word);
///
/// assert_eq!(instruction.mnemonic(), Some(Mnemonic::Add));
/// assert_eq!(instruction.to_string(), "add $s: 8, $t: 8, $d: 9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedInstruction {
    /// Register shape (opcode 0), operation selected by the function code
    Register {
        word: InstructionWord,
        function: u8,
        shift: u8,
        destination: u8,
        source: u8,
        target: u8,
        mnemonic: Option<Mnemonic>,
    },

    /// Immediate shape (any opcode other than 0 and 2)
    Immediate {
        word: InstructionWord,
        source: u8,
        target: u8,
        immediate_signed: i32,
        immediate_unsigned: u16,
        mnemonic: Option<Mnemonic>,
    },

    /// Jump shape (opcode 2)
    Jump {
        word: InstructionWord,
        address: i32,
        mnemonic: Option<Mnemonic>,
    },
}

impl DecodedInstruction {
    /// Classify a word into its instruction shape
    ///
    /// Shape selection depends on the opcode alone and is independent of
    /// mnemonic resolution: opcode 0 is Register, opcode 2 is Jump, and any
    /// other opcode is Immediate.
    pub fn classify(word: InstructionWord) -> Self {
        match word.opcode() {
            0 => Self::Register {
                word,
                function: word.function(),
                shift: word.shift(),
                destination: word.destination(),
                source: word.source(),
                target: word.target(),
                mnemonic: Mnemonic::from_function(word.function()),
            },
            2 => Self::Jump {
                word,
                address: word.jump_address(),
                mnemonic: Mnemonic::from_jump_opcode(word.opcode()),
            },
            opcode => Self::Immediate {
                word,
                source: word.source(),
                target: word.target(),
                immediate_signed: word.immediate_signed(),
                immediate_unsigned: word.immediate_unsigned(),
                mnemonic: Mnemonic::from_immediate_opcode(opcode),
            },
        }
    }

    /// The originating instruction word
    pub fn word(&self) -> InstructionWord {
        match *self {
            Self::Register { word, .. } | Self::Immediate { word, .. } | Self::Jump { word, .. } => {
                word
            }
        }
    }

    /// Opcode of the originating word
    pub fn opcode(&self) -> u8 {
        self.word().opcode()
    }

    /// Resolved operation name, if any
    pub fn mnemonic(&self) -> Option<Mnemonic> {
        match *self {
            Self::Register { mnemonic, .. }
            | Self::Immediate { mnemonic, .. }
            | Self::Jump { mnemonic, .. } => mnemonic,
        }
    }
}

/// Placeholder shown when no mnemonic was resolved
const UNKNOWN_MNEMONIC: &str = "???";

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .mnemonic()
            .map_or(UNKNOWN_MNEMONIC, |mnemonic| mnemonic.as_str());

        match *self {
            Self::Register {
                source,
                target,
                destination,
                ..
            } => write!(
                f,
                "{} $s: {}, $t: {}, $d: {}",
                name, source, target, destination
            ),
            Self::Immediate {
                source,
                target,
                immediate_signed,
                ..
            } => write!(
                f,
                "{} $s: {}, $t: {}, i: {}",
                name, source, target, immediate_signed
            ),
            Self::Jump { address, .. } => write!(f, "{} address: {}", name, address),
        }
    }
}
