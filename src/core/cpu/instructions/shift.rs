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
use crate::core::config::ShiftFlag;
use crate::core::error::Result;

impl CPU {
    // === Shift Instructions ===
    //
    // Interpreters disagree on the operand: by default the shift reads Vx;
    // with `shift_uses_vy` set it reads Vy (the original COSMAC behaviour).

    #[inline(always)]
    fn shift_source(&self, x: u8, y: u8) -> u8 {
        if self.quirks.shift_uses_vy {
            self.reg(y)
        } else {
            self.reg(x)
        }
    }

    /// SHR (8XY6): Shift right
    ///
    /// Operation: VF = src & 1; Vx = src >> 1
    pub(crate) fn op_shr(&mut self, x: u8, y: u8) -> Result<()> {
        let source = self.shift_source(x, y);
        self.set_vf(source & 0x01);
        self.set_reg(x, source >> 1);
        Ok(())
    }

    /// SHL (8XYE): Shift left
    ///
    /// VF receives the bit shifted out. With `ShiftFlag::RawBit` it is
    /// stored in place (0x00 or 0x80); with `ShiftFlag::Boolean` as 0 or 1.
    ///
    /// Operation: VF = src & 0x80; Vx = src << 1
    pub(crate) fn op_shl(&mut self, x: u8, y: u8) -> Result<()> {
        let source = self.shift_source(x, y);
        let flag = match self.quirks.shift_flag {
            ShiftFlag::RawBit => source & 0x80,
            ShiftFlag::Boolean => source >> 7,
        };
        self.set_vf(flag);
        self.set_reg(x, source << 1);
        Ok(())
    }
}
