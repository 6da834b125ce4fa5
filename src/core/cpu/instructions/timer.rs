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
    // === Timer Instructions ===

    /// LD Vx, DT (FX07): Read delay timer
    pub(crate) fn op_ld_vx_dt(&mut self, x: u8, bus: &mut Bus) -> Result<()> {
        self.set_reg(x, bus.timers.delay);
        Ok(())
    }

    /// LD DT, Vx (FX15): Set delay timer
    pub(crate) fn op_ld_dt_vx(&mut self, x: u8, bus: &mut Bus) -> Result<()> {
        bus.timers.delay = self.reg(x);
        Ok(())
    }

    /// LD ST, Vx (FX18): Set sound timer
    pub(crate) fn op_ld_st_vx(&mut self, x: u8, bus: &mut Bus) -> Result<()> {
        let value = self.reg(x);
        if value > 0 && bus.timers.sound == 0 {
            log::debug!("Sound timer started ({} ticks)", value);
        }
        bus.timers.sound = value;
        Ok(())
    }
}
