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
    // === Logical Instructions ===
    //
    // None of these touch VF.

    /// OR (8XY1): Bitwise OR
    ///
    /// Operation: Vx = Vx | Vy
    pub(crate) fn op_or(&mut self, x: u8, y: u8) -> Result<()> {
        self.set_reg(x, self.reg(x) | self.reg(y));
        Ok(())
    }

    /// AND (8XY2): Bitwise AND
    ///
    /// Operation: Vx = Vx & Vy
    pub(crate) fn op_and(&mut self, x: u8, y: u8) -> Result<()> {
        self.set_reg(x, self.reg(x) & self.reg(y));
        Ok(())
    }

    /// XOR (8XY3): Bitwise XOR
    ///
    /// Operation: Vx = Vx ^ Vy
    pub(crate) fn op_xor(&mut self, x: u8, y: u8) -> Result<()> {
        self.set_reg(x, self.reg(x) ^ self.reg(y));
        Ok(())
    }
}
