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

//! CPU instruction implementations
//!
//! This module contains the semantics of every CHIP-8 instruction,
//! organized by instruction type. Decoding has already happened by the time
//! anything here runs, so each handler receives its operands directly.

use super::decode::Instruction;
use super::CPU;
use crate::core::bus::Bus;
use crate::core::error::Result;

// Instruction modules organized by type
mod arithmetic;
mod branch;
mod display;
mod input;
mod jump;
mod load;
mod logical;
mod shift;
mod store;
mod timer;

impl CPU {
    /// Execute a decoded instruction
    ///
    /// PC has already been advanced past the instruction.
    ///
    /// # Arguments
    ///
    /// * `instruction` - The decoded operation
    /// * `bus` - Memory, display, timers and keypad
    ///
    /// # Returns
    ///
    /// Ok(()) on success, or the content error raised by the instruction
    pub(super) fn execute(&mut self, instruction: Instruction, bus: &mut Bus) -> Result<()> {
        use Instruction::*;

        match instruction {
            ClearScreen => self.op_cls(bus),
            Return => self.op_ret(),
            Jump { addr } => self.op_jp(addr),
            Call { addr } => self.op_call(addr),
            SkipEqImm { x, nn } => self.op_se_imm(x, nn),
            SkipNeImm { x, nn } => self.op_sne_imm(x, nn),
            SkipEqReg { x, y } => self.op_se_reg(x, y),
            LoadImm { x, nn } => self.op_ld_imm(x, nn),
            AddImm { x, nn } => self.op_add_imm(x, nn),
            Move { x, y } => self.op_ld_reg(x, y),
            Or { x, y } => self.op_or(x, y),
            And { x, y } => self.op_and(x, y),
            Xor { x, y } => self.op_xor(x, y),
            AddReg { x, y } => self.op_add_reg(x, y),
            SubReg { x, y } => self.op_sub(x, y),
            ShiftRight { x, y } => self.op_shr(x, y),
            SubReversed { x, y } => self.op_subn(x, y),
            ShiftLeft { x, y } => self.op_shl(x, y),
            SkipNeReg { x, y } => self.op_sne_reg(x, y),
            LoadIndex { addr } => self.op_ld_i(addr),
            JumpOffset { addr } => self.op_jp_v0(addr),
            Random { x, nn } => self.op_rnd(x, nn),
            Draw { x, y, n } => self.op_drw(x, y, n, bus),
            SkipKeyPressed { x } => self.op_skp(x, bus),
            SkipKeyNotPressed { x } => self.op_sknp(x, bus),
            LoadDelay { x } => self.op_ld_vx_dt(x, bus),
            WaitKey { x } => self.op_ld_vx_k(x),
            SetDelay { x } => self.op_ld_dt_vx(x, bus),
            SetSound { x } => self.op_ld_st_vx(x, bus),
            AddIndex { x } => self.op_add_i(x),
            LoadFont { x } => self.op_ld_f(x),
            StoreBcd { x } => self.op_ld_b(x, bus),
            StoreRegisters { x } => self.op_ld_mem_regs(x, bus),
            LoadRegisters { x } => self.op_ld_regs_mem(x, bus),
        }
    }

    /// Skip the next instruction
    #[inline(always)]
    pub(super) fn skip(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }
}
