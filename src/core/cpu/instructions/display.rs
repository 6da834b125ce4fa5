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
    // === Display Instructions ===

    /// CLS (00E0): Clear the display
    pub(crate) fn op_cls(&mut self, bus: &mut Bus) -> Result<()> {
        bus.display.clear();
        Ok(())
    }

    /// DRW (DXYN): Draw an N-row sprite from memory at I
    ///
    /// The starting corner wraps (Vx mod width, Vy mod height) but the sprite
    /// itself is clipped at the right and bottom edges. Each set bit
    /// XOR-toggles one pixel, most significant bit leftmost.
    ///
    /// Operation: VF = 1 if any pixel was turned off, else 0
    ///
    /// # Returns
    ///
    /// `MemoryOutOfBounds` if a sprite row that would be drawn lies past the
    /// end of memory. The display and VF are untouched in that case.
    pub(crate) fn op_drw(&mut self, x: u8, y: u8, n: u8, bus: &mut Bus) -> Result<()> {
        let Bus {
            memory, display, ..
        } = bus;

        let width = display.width();
        let height = display.height();
        let x0 = self.reg(x) as usize % width;
        let y0 = self.reg(y) as usize % height;

        // Rows past the bottom edge are clipped and never read
        let rows = (n as usize).min(height - y0);
        let columns = (width - x0).min(8);
        let sprite = memory.slice(self.index as usize, rows)?;

        let mut collision = false;
        for (row, &byte) in sprite.iter().enumerate() {
            for column in 0..columns {
                if byte & (0x80u8 >> column) != 0 && display.toggle(x0 + column, y0 + row) {
                    collision = true;
                }
            }
        }

        self.set_vf(collision as u8);
        Ok(())
    }
}
