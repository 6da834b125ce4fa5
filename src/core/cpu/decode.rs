// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

//! Instruction decoding
//!
//! Decoding happens in two pure steps:
//!
//! 1. [`Fields::from_word`] splits the 16-bit word into its bit fields
//! 2. [`Instruction::decode`] maps the fields to exactly one operation, or
//!    `None` when the combination has no defined meaning
//!
//! Format:
//!
//! ```text
//! | class (4) | x (4) | y (4) | n (4) |
//!             |       nn (8)  |
//!             |     nnn (12)          |
//! ```

/// Bit fields of an instruction word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    /// Operation class (bits 15-12)
    pub class: u8,
    /// First register operand (bits 11-8)
    pub x: u8,
    /// Second register operand (bits 7-4)
    pub y: u8,
    /// 4-bit immediate (bits 3-0)
    pub n: u8,
    /// 8-bit immediate (low byte)
    pub nn: u8,
    /// 12-bit address (low 12 bits)
    pub nnn: u16,
}

impl Fields {
    /// Split an instruction word into its fields
    ///
    /// # Example
    ///
    /// ```
    /// use chip8vm::core::cpu::Fields;
    ///
    /// let f = Fields::from_word(0xD125);
    /// assert_eq!((f.class, f.x, f.y, f.n), (0xD, 0x1, 0x2, 0x5));
    /// assert_eq!(f.nn, 0x25);
    /// assert_eq!(f.nnn, 0x125);
    /// ```
    #[inline(always)]
    pub fn from_word(word: u16) -> Self {
        Self {
            class: ((word >> 12) & 0xF) as u8,
            x: ((word >> 8) & 0xF) as u8,
            y: ((word >> 4) & 0xF) as u8,
            n: (word & 0xF) as u8,
            nn: (word & 0xFF) as u8,
            nnn: word & 0x0FFF,
        }
    }
}

/// One decoded operation
///
/// Register operands are always in 0..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    ClearScreen,
    /// 00EE
    Return,
    /// 1NNN
    Jump { addr: u16 },
    /// 2NNN
    Call { addr: u16 },
    /// 3XNN
    SkipEqImm { x: u8, nn: u8 },
    /// 4XNN
    SkipNeImm { x: u8, nn: u8 },
    /// 5XY0
    SkipEqReg { x: u8, y: u8 },
    /// 6XNN
    LoadImm { x: u8, nn: u8 },
    /// 7XNN
    AddImm { x: u8, nn: u8 },
    /// 8XY0
    Move { x: u8, y: u8 },
    /// 8XY1
    Or { x: u8, y: u8 },
    /// 8XY2
    And { x: u8, y: u8 },
    /// 8XY3
    Xor { x: u8, y: u8 },
    /// 8XY4
    AddReg { x: u8, y: u8 },
    /// 8XY5
    SubReg { x: u8, y: u8 },
    /// 8XY6
    ShiftRight { x: u8, y: u8 },
    /// 8XY7
    SubReversed { x: u8, y: u8 },
    /// 8XYE
    ShiftLeft { x: u8, y: u8 },
    /// 9XY0
    SkipNeReg { x: u8, y: u8 },
    /// ANNN
    LoadIndex { addr: u16 },
    /// BNNN
    JumpOffset { addr: u16 },
    /// CXNN
    Random { x: u8, nn: u8 },
    /// DXYN
    Draw { x: u8, y: u8, n: u8 },
    /// EX9E
    SkipKeyPressed { x: u8 },
    /// EXA1
    SkipKeyNotPressed { x: u8 },
    /// FX07
    LoadDelay { x: u8 },
    /// FX0A
    WaitKey { x: u8 },
    /// FX15
    SetDelay { x: u8 },
    /// FX18
    SetSound { x: u8 },
    /// FX1E
    AddIndex { x: u8 },
    /// FX29
    LoadFont { x: u8 },
    /// FX33
    StoreBcd { x: u8 },
    /// FX55
    StoreRegisters { x: u8 },
    /// FX65
    LoadRegisters { x: u8 },
}

impl Instruction {
    /// Decode an instruction word
    ///
    /// Classes 0x0, 0x8, 0xE and 0xF dispatch again on the whole word, N or
    /// NN respectively. 5XYN and 9XYN are only defined for N = 0.
    ///
    /// # Returns
    ///
    /// `None` for any word without defined semantics (e.g. 0NNN machine-code
    /// calls, 8XY8, E000, F0FF).
    pub fn decode(word: u16) -> Option<Self> {
        let Fields {
            class,
            x,
            y,
            n,
            nn,
            nnn,
        } = Fields::from_word(word);

        let instruction = match class {
            0x0 => match word {
                0x00E0 => Self::ClearScreen,
                0x00EE => Self::Return,
                _ => return None,
            },
            0x1 => Self::Jump { addr: nnn },
            0x2 => Self::Call { addr: nnn },
            0x3 => Self::SkipEqImm { x, nn },
            0x4 => Self::SkipNeImm { x, nn },
            0x5 if n == 0 => Self::SkipEqReg { x, y },
            0x6 => Self::LoadImm { x, nn },
            0x7 => Self::AddImm { x, nn },
            0x8 => match n {
                0x0 => Self::Move { x, y },
                0x1 => Self::Or { x, y },
                0x2 => Self::And { x, y },
                0x3 => Self::Xor { x, y },
                0x4 => Self::AddReg { x, y },
                0x5 => Self::SubReg { x, y },
                0x6 => Self::ShiftRight { x, y },
                0x7 => Self::SubReversed { x, y },
                0xE => Self::ShiftLeft { x, y },
                _ => return None,
            },
            0x9 if n == 0 => Self::SkipNeReg { x, y },
            0xA => Self::LoadIndex { addr: nnn },
            0xB => Self::JumpOffset { addr: nnn },
            0xC => Self::Random { x, nn },
            0xD => Self::Draw { x, y, n },
            0xE => match nn {
                0x9E => Self::SkipKeyPressed { x },
                0xA1 => Self::SkipKeyNotPressed { x },
                _ => return None,
            },
            0xF => match nn {
                0x07 => Self::LoadDelay { x },
                0x0A => Self::WaitKey { x },
                0x15 => Self::SetDelay { x },
                0x18 => Self::SetSound { x },
                0x1E => Self::AddIndex { x },
                0x29 => Self::LoadFont { x },
                0x33 => Self::StoreBcd { x },
                0x55 => Self::StoreRegisters { x },
                0x65 => Self::LoadRegisters { x },
                _ => return None,
            },
            _ => return None,
        };

        Some(instruction)
    }
}
