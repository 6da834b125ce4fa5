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

//! System module tests
//!
//! - `basic`: construction, ROM loading, reset
//! - `execution`: programs run end to end through `step`
//! - `pacing`: `run_once` against a synthetic clock
//! - `input`: key-wait resolution through the input collaborator


use crate::core::config::Config;
use crate::core::display::DisplayBuffer;
use crate::core::error::Result;
use crate::core::host::{Audio, InputSource, Renderer};
use crate::core::input::Keypad;
use std::collections::VecDeque;

/// System with a fixed random seed and the default machine layout
pub(super) fn seeded_system(program: &[u8]) -> super::System {
    let config = Config {
        rng_seed: Some(0xC8),
        ..Config::default()
    };
    let mut system = super::System::new(config).unwrap();
    system.load_rom(program).unwrap();
    system
}

/// Renderer that counts frames and remembers the last lit-pixel count
#[derive(Default)]
pub(super) struct CountingRenderer {
    pub presents: usize,
    pub last_lit: usize,
}

impl Renderer for CountingRenderer {
    fn present(&mut self, display: &DisplayBuffer) -> Result<()> {
        self.presents += 1;
        self.last_lit = display.lit_count();
        Ok(())
    }
}

/// Audio that records every tone update
#[derive(Default)]
pub(super) struct ToneLog {
    pub tones: Vec<bool>,
}

impl Audio for ToneLog {
    fn set_tone(&mut self, on: bool) -> Result<()> {
        self.tones.push(on);
        Ok(())
    }
}

/// Input that reports one queued key per poll
#[derive(Default)]
pub(super) struct QueuedKeys {
    pub keys: VecDeque<u8>,
}

impl InputSource for QueuedKeys {
    fn poll(&mut self, keypad: &mut Keypad) -> Result<Option<u8>> {
        let key = self.keys.pop_front();
        if let Some(key) = key {
            keypad.press(key);
        }
        Ok(key)
    }
}
