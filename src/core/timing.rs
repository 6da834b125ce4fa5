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

//! Wall-clock pacing
//!
//! The machine runs two independent rate gates:
//!
//! - the **instruction gate** admits at most one fetch-decode-execute cycle
//!   per `1 / instructions_per_second`
//! - the **frame gate** admits one timer decrement plus one "present" call to
//!   the renderer per `1 / frames_per_second`
//!
//! Each gate compares a caller-supplied monotonic [`Instant`] against the
//! instant it last admitted. Neither gate sleeps or blocks; the owning run
//! loop polls them and may park until [`Pacer::next_deadline`] in between.
//!
//! Passing the clock reading in (rather than sampling it here) keeps the
//! pacer deterministic under test.
//!
//! # Example
//!
//! ```
//! use chip8vm::core::timing::Pacer;
//! use std::time::{Duration, Instant};
//!
//! let mut pacer = Pacer::new(700, 60);
//! let start = Instant::now();
//!
//! let first = pacer.poll(start);
//! assert!(first.instruction && first.frame);
//!
//! // 1/700s is ~1.43ms, so 1ms later neither gate admits
//! let later = pacer.poll(start + Duration::from_millis(1));
//! assert!(!later.instruction && !later.frame);
//!
//! let later = pacer.poll(start + Duration::from_millis(2));
//! assert!(later.instruction && !later.frame);
//! ```

use super::config::Config;
use std::time::{Duration, Instant};

/// A single "at most once per interval" gate
#[derive(Debug, Clone)]
pub struct RateGate {
    /// Gate name (for debugging)
    name: &'static str,

    /// Minimum spacing between admissions
    interval: Duration,

    /// Instant of the last admission; `None` admits on the first poll
    last_admitted: Option<Instant>,
}

impl RateGate {
    /// Create a gate admitting `hz` times per second
    ///
    /// A rate of zero is treated as one admission per second; configuration
    /// validation rejects it before it reaches here.
    pub fn from_hz(name: &'static str, hz: u32) -> Self {
        Self {
            name,
            interval: Duration::from_secs(1) / hz.max(1),
            last_admitted: None,
        }
    }

    /// Admit if at least one interval has elapsed since the last admission
    ///
    /// # Returns
    ///
    /// `true` if the caller may perform the gated work now. The admission
    /// instant is recorded only when admitting.
    pub fn admit(&mut self, now: Instant) -> bool {
        let ready = match self.last_admitted {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if ready {
            self.last_admitted = Some(now);
        }
        ready
    }

    /// Earliest instant the gate will admit again
    ///
    /// `None` means the gate has never admitted and is ready immediately.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.last_admitted.map(|last| last + self.interval)
    }

    /// Forget the last admission so the next poll admits
    pub fn reset(&mut self) {
        self.last_admitted = None;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Result of polling both gates once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Admission {
    /// One instruction may execute
    pub instruction: bool,
    /// Timers may tick and a frame may be presented
    pub frame: bool,
}

/// Instruction gate plus frame gate
#[derive(Debug, Clone)]
pub struct Pacer {
    instruction: RateGate,
    frame: RateGate,
}

impl Pacer {
    /// Create a pacer with the given instruction and frame rates (Hz)
    pub fn new(instructions_per_second: u32, frames_per_second: u32) -> Self {
        Self {
            instruction: RateGate::from_hz("instruction", instructions_per_second),
            frame: RateGate::from_hz("frame", frames_per_second),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.instructions_per_second, config.frames_per_second)
    }

    /// Poll both gates against the same clock reading
    pub fn poll(&mut self, now: Instant) -> Admission {
        Admission {
            instruction: self.instruction.admit(now),
            frame: self.frame.admit(now),
        }
    }

    /// Earliest instant at which either gate will admit
    ///
    /// Never earlier than `now`. A run loop can sleep until this instant
    /// instead of spinning.
    pub fn next_deadline(&self, now: Instant) -> Instant {
        let instruction = self.instruction.next_deadline().unwrap_or(now);
        let frame = self.frame.next_deadline().unwrap_or(now);
        instruction.min(frame).max(now)
    }

    /// Reset both gates so the next poll admits both
    pub fn reset(&mut self) {
        self.instruction.reset();
        self.frame.reset();
        log::debug!(
            "Pacer reset ({} every {:?}, {} every {:?})",
            self.instruction.name(),
            self.instruction.interval(),
            self.frame.name(),
            self.frame.interval()
        );
    }
}
