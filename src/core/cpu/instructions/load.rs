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
use crate::core::memory::GLYPH_HEIGHT;

impl CPU {
    // === Index Register and Load Instructions ===

    /// LD I (ANNN): Set index register
    ///
    /// Operation: I = NNN
    pub(crate) fn op_ld_i(&mut self, addr: u16) -> Result<()> {
        self.index = addr;
        Ok(())
    }

    /// ADD I (FX1E): Add register to index
    ///
    /// VF is set when the new index exceeds
    /// `quirks.index_overflow_threshold` (0x1000 by default) and cleared
    /// otherwise.
    ///
    /// Operation: I = I + Vx; VF = I > threshold
    pub(crate) fn op_add_i(&mut self, x: u8) -> Result<()> {
        self.index = self.index.wrapping_add(self.reg(x) as u16);
        let overflow = self.index > self.quirks.index_overflow_threshold;
        self.set_vf(overflow as u8);
        Ok(())
    }

    /// LD F (FX29): Point index at font glyph
    ///
    /// Only the low nibble of Vx selects the glyph.
    ///
    /// Operation: I = font_base + (Vx & 0xF) * 5
    pub(crate) fn op_ld_f(&mut self, x: u8) -> Result<()> {
        let glyph = (self.reg(x) & 0x0F) as u16;
        self.index = self
            .font_base
            .wrapping_add(glyph * GLYPH_HEIGHT as u16);
        Ok(())
    }

    /// LD Vx, [I] (FX65): Load registers V0..=Vx from memory
    ///
    /// I itself is left unchanged.
    ///
    /// # Returns
    ///
    /// `MemoryOutOfBounds` if any of the X+1 bytes lies past the end of
    /// memory; no register is modified then
    pub(crate) fn op_ld_regs_mem(&mut self, x: u8, bus: &mut Bus) -> Result<()> {
        let count = x as usize + 1;
        let bytes = bus.memory.slice(self.index as usize, count)?;
        self.regs[..count].copy_from_slice(bytes);
        Ok(())
    }
}
