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

//! Peripheral bundle handed to the CPU
//!
//! The CPU owns its registers, stack and key-wait gate; everything else an
//! instruction can touch lives on the [`Bus`]. The bus is exclusively owned
//! by the [`System`](crate::core::system::System) and lent to the CPU for one
//! step at a time.

use super::config::Config;
use super::display::DisplayBuffer;
use super::input::Keypad;
use super::memory::Memory;
use super::timer::Timers;

/// Memory, display, timers and keypad
pub struct Bus {
    /// 4KB RAM
    pub memory: Memory,
    /// Pixel grid mutated by 00E0 and DXYN
    pub display: DisplayBuffer,
    /// Delay and sound timers
    pub timers: Timers,
    /// Current key state, written by the input collaborator
    pub keypad: Keypad,
}

impl Bus {
    /// Create a zeroed bus with a display of the given size
    pub fn new(display_width: usize, display_height: usize) -> Self {
        Self {
            memory: Memory::new(),
            display: DisplayBuffer::new(display_width, display_height),
            timers: Timers::new(),
            keypad: Keypad::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.display_width, config.display_height)
    }
}
