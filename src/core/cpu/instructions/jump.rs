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

impl CPU {
    // === Jump Instructions ===

    /// RET (00EE): Return from subroutine
    ///
    /// Operation: PC = pop()
    ///
    /// # Returns
    ///
    /// `StackUnderflow` if there is no frame to return to
    pub(crate) fn op_ret(&mut self) -> Result<()> {
        let target = self.stack.pop()?;
        log::debug!(
            "RET 0x{:04X} -> 0x{:04X} (depth {})",
            self.pc.wrapping_sub(2),
            target,
            self.stack.depth()
        );
        self.pc = target;
        Ok(())
    }

    /// JP (1NNN): Jump
    ///
    /// Operation: PC = NNN
    pub(crate) fn op_jp(&mut self, addr: u16) -> Result<()> {
        self.pc = addr;
        Ok(())
    }

    /// CALL (2NNN): Call subroutine
    ///
    /// Pushes the address of the instruction after the call (PC has already
    /// been advanced), then jumps.
    ///
    /// Operation: push(PC); PC = NNN
    ///
    /// # Returns
    ///
    /// `StackOverflow` if the call stack is full; PC is not changed then
    pub(crate) fn op_call(&mut self, addr: u16) -> Result<()> {
        self.stack.push(self.pc)?;
        log::debug!(
            "CALL 0x{:04X} from 0x{:04X} (depth {})",
            addr,
            self.pc.wrapping_sub(2),
            self.stack.depth()
        );
        self.pc = addr;
        Ok(())
    }

    /// JP V0 (BNNN): Jump with offset
    ///
    /// Operation: PC = NNN + V0
    pub(crate) fn op_jp_v0(&mut self, addr: u16) -> Result<()> {
        self.pc = addr.wrapping_add(self.reg(0) as u16);
        Ok(())
    }
}
