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
    // === Conditional Skip Instructions ===
    //
    // A skip moves PC past one further instruction (PC += 2 on top of the
    // fetch increment).

    /// SE (3XNN): Skip if Vx == NN
    pub(crate) fn op_se_imm(&mut self, x: u8, nn: u8) -> Result<()> {
        if self.reg(x) == nn {
            self.skip();
        }
        Ok(())
    }

    /// SNE (4XNN): Skip if Vx != NN
    pub(crate) fn op_sne_imm(&mut self, x: u8, nn: u8) -> Result<()> {
        if self.reg(x) != nn {
            self.skip();
        }
        Ok(())
    }

    /// SE (5XY0): Skip if Vx == Vy
    pub(crate) fn op_se_reg(&mut self, x: u8, y: u8) -> Result<()> {
        if self.reg(x) == self.reg(y) {
            self.skip();
        }
        Ok(())
    }

    /// SNE (9XY0): Skip if Vx != Vy
    pub(crate) fn op_sne_reg(&mut self, x: u8, y: u8) -> Result<()> {
        if self.reg(x) != self.reg(y) {
            self.skip();
        }
        Ok(())
    }
}
