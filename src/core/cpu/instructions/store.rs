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
use crate::core::bus::Bus;
use crate::core::error::Result;

impl CPU {
    // === Store Instructions ===

    /// LD B (FX33): Store BCD representation of Vx
    ///
    /// Operation: [I] = hundreds; [I+1] = tens; [I+2] = ones
    ///
    /// # Returns
    ///
    /// `MemoryOutOfBounds` if I+2 lies past the end of memory; nothing is
    /// written then
    pub(crate) fn op_ld_b(&mut self, x: u8, bus: &mut Bus) -> Result<()> {
        let value = self.reg(x);
        let digits = [value / 100, (value / 10) % 10, value % 10];
        bus.memory.write_bytes(self.index as usize, &digits)
    }

    /// LD [I], Vx (FX55): Store registers V0..=Vx to memory
    ///
    /// I itself is left unchanged.
    ///
    /// # Returns
    ///
    /// `MemoryOutOfBounds` if any of the X+1 bytes lies past the end of
    /// memory; nothing is written then
    pub(crate) fn op_ld_mem_regs(&mut self, x: u8, bus: &mut Bus) -> Result<()> {
        let count = x as usize + 1;
        bus.memory
            .write_bytes(self.index as usize, &self.regs[..count])
    }
}
