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

//! Delay and sound timers
//!
//! Two independent 8-bit down-counters. Each timer tick decrements every
//! non-zero counter by exactly one; instruction execution only ever loads
//! them (FX15, FX18) or reads the delay timer (FX07).
//!
//! The sound timer drives the external audio collaborator: a tone should be
//! audible for as long as it is non-zero.

/// The two countdown timers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timers {
    /// Delay timer (readable by programs)
    pub delay: u8,

    /// Sound timer (tone while non-zero)
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset both counters to zero
    pub fn reset(&mut self) {
        self.delay = 0;
        self.sound = 0;
    }

    /// Apply one timer tick
    ///
    /// Counters already at zero stay at zero.
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    /// Whether the tone should currently be playing
    #[inline]
    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}
