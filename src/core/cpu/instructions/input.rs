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
use crate::core::input::InputGate;

impl CPU {
    // === Keypad Instructions ===

    /// SKP (EX9E): Skip if the key in Vx is held
    ///
    /// Only the low nibble of Vx names the key.
    pub(crate) fn op_skp(&mut self, x: u8, bus: &mut Bus) -> Result<()> {
        if bus.keypad.is_pressed(self.reg(x)) {
            self.skip();
        }
        Ok(())
    }

    /// SKNP (EXA1): Skip if the key in Vx is not held
    pub(crate) fn op_sknp(&mut self, x: u8, bus: &mut Bus) -> Result<()> {
        if !bus.keypad.is_pressed(self.reg(x)) {
            self.skip();
        }
        Ok(())
    }

    /// LD Vx, K (FX0A): Wait for a key press
    ///
    /// Rewinds PC onto this instruction and suspends execution. The wait is
    /// resolved by [`CPU::resolve_key_wait`], which stores the key in Vx and
    /// moves PC past the FX0A.
    pub(crate) fn op_ld_vx_k(&mut self, x: u8) -> Result<()> {
        self.pc = self.pc.wrapping_sub(2);
        self.input_gate = InputGate::WaitingForKey { register: x };
        log::debug!("Waiting for key into V{:X} at 0x{:04X}", x, self.pc);
        Ok(())
    }
}
