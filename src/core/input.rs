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

//! Keypad state and the key-wait gate
//!
//! # Keypad
//!
//! The hex keypad has 16 keys, 0x0 through 0xF. The external input
//! collaborator records presses and releases here; EX9E and EXA1 read it.
//!
//! # InputGate
//!
//! ```text
//!            FX0A executed
//!   Idle ─────────────────────▶ WaitingForKey { register }
//!    ▲                                │
//!    └────────────────────────────────┘
//!        key pressed: Vx ← key, PC past FX0A
//! ```
//!
//! While the gate is `WaitingForKey` no instruction executes. Timers keep
//! ticking and frames keep being presented.

/// Number of keys on the hex keypad
pub const KEY_COUNT: usize = 16;

/// Pressed state of the 16 keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as held down; only the low nibble is significant
    pub fn press(&mut self, key: u8) {
        self.keys[(key & 0x0F) as usize] = true;
    }

    /// Mark `key` as released
    pub fn release(&mut self, key: u8) {
        self.keys[(key & 0x0F) as usize] = false;
    }

    /// Release every key
    pub fn release_all(&mut self) {
        self.keys = [false; KEY_COUNT];
    }

    /// Whether `key` is held; only the low nibble is significant
    #[inline]
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0x0F) as usize]
    }
}

/// Key-wait state machine driven by FX0A
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputGate {
    /// Executing normally
    #[default]
    Idle,
    /// Suspended until a key press is written into V`register`
    WaitingForKey { register: u8 },
}

impl InputGate {
    /// `true` while instruction execution is suspended
    #[inline]
    pub fn is_blocked(&self) -> bool {
        matches!(self, InputGate::WaitingForKey { .. })
    }
}
