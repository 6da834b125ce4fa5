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

//! CPU test modules
//!
//! Tests are organized into the following categories:
//! - `basic`: CPU initialization, reset, register access, fetch
//! - `decode`: Instruction decoding
//! - `arithmetic`: Loads, adds, subtracts, logic and shifts
//! - `flow`: Jumps, calls, returns and skips
//! - `memory`: Index register, BCD, register save/restore
//! - `draw`: Sprite drawing and collision
//! - `input`: Keypad skips and the key-wait gate
//! - `quirks`: Behaviour switches









use super::{StepOutcome, CPU};
use crate::core::bus::Bus;
use crate::core::config::Config;
use crate::core::error::Result;

/// CPU and bus with a fixed random seed
pub(super) fn setup() -> (CPU, Bus) {
    setup_with(Config {
        rng_seed: Some(42),
        ..Config::default()
    })
}

pub(super) fn setup_with(config: Config) -> (CPU, Bus) {
    let mut bus = Bus::from_config(&config);
    bus.memory.load_font(config.font_base).unwrap();
    (CPU::new(&config), bus)
}

/// Place `word` at PC and execute it
pub(super) fn exec(cpu: &mut CPU, bus: &mut Bus, word: u16) -> Result<StepOutcome> {
    bus.memory
        .write_bytes(cpu.pc() as usize, &word.to_be_bytes())
        .unwrap();
    cpu.step(bus)
}

/// Execute a sequence of words, panicking on the first error
pub(super) fn run(cpu: &mut CPU, bus: &mut Bus, words: &[u16]) {
    for &word in words {
        exec(cpu, bus, word).unwrap();
    }
}
