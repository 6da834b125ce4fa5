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

use super::super::CPU;
use crate::core::error::Result;
use rand::Rng;

impl CPU {
    // === Arithmetic Instructions ===

    /// LD (6XNN): Load immediate
    ///
    /// Operation: Vx = NN
    pub(crate) fn op_ld_imm(&mut self, x: u8, nn: u8) -> Result<()> {
        self.set_reg(x, nn);
        Ok(())
    }

    /// ADD (7XNN): Add immediate
    ///
    /// Wraps modulo 256. VF is not affected, even on overflow.
    ///
    /// Operation: Vx = Vx + NN
    pub(crate) fn op_add_imm(&mut self, x: u8, nn: u8) -> Result<()> {
        self.set_reg(x, self.reg(x).wrapping_add(nn));
        Ok(())
    }

    /// LD (8XY0): Copy register
    ///
    /// Operation: Vx = Vy
    pub(crate) fn op_ld_reg(&mut self, x: u8, y: u8) -> Result<()> {
        self.set_reg(x, self.reg(y));
        Ok(())
    }

    /// ADD (8XY4): Add registers with carry
    ///
    /// VF is written before Vx, so when X is F the sum wins over the flag.
    ///
    /// Operation: VF = carry; Vx = Vx + Vy
    pub(crate) fn op_add_reg(&mut self, x: u8, y: u8) -> Result<()> {
        let (result, carry) = self.reg(x).overflowing_add(self.reg(y));
        self.set_vf(carry as u8);
        self.set_reg(x, result);
        Ok(())
    }

    /// SUB (8XY5): Subtract
    ///
    /// VF is the "no borrow" flag: 1 when Vx > Vy, 0 otherwise (including
    /// when they are equal).
    ///
    /// Operation: VF = Vx > Vy; Vx = Vx - Vy
    pub(crate) fn op_sub(&mut self, x: u8, y: u8) -> Result<()> {
        let (vx, vy) = (self.reg(x), self.reg(y));
        self.set_vf((vx > vy) as u8);
        self.set_reg(x, vx.wrapping_sub(vy));
        Ok(())
    }

    /// SUBN (8XY7): Reverse subtract
    ///
    /// Operation: VF = Vy > Vx; Vx = Vy - Vx
    pub(crate) fn op_subn(&mut self, x: u8, y: u8) -> Result<()> {
        let (vx, vy) = (self.reg(x), self.reg(y));
        self.set_vf((vy > vx) as u8);
        self.set_reg(x, vy.wrapping_sub(vx));
        Ok(())
    }

    /// RND (CXNN): Random byte
    ///
    /// Operation: Vx = random() & NN
    pub(crate) fn op_rnd(&mut self, x: u8, nn: u8) -> Result<()> {
        let value: u8 = self.rng.gen();
        self.set_reg(x, value & nn);
        Ok(())
    }
}
