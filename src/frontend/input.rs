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

//! Scripted keypad input

use crate::core::error::Result;
use crate::core::host::InputSource;
use crate::core::input::Keypad;
use std::collections::VecDeque;

/// Keypad layout on the left-hand side of a QWERTY keyboard
///
/// ```text
/// 1 2 3 C      1 2 3 4
/// 4 5 6 D  <-  q w e r
/// 7 8 9 E      a s d f
/// A 0 B F      z x c v
/// ```
const QWERTY_KEYMAP: [(char, u8); 16] = [
    ('1', 0x1),
    ('2', 0x2),
    ('3', 0x3),
    ('4', 0xC),
    ('q', 0x4),
    ('w', 0x5),
    ('e', 0x6),
    ('r', 0xD),
    ('a', 0x7),
    ('s', 0x8),
    ('d', 0x9),
    ('f', 0xE),
    ('z', 0xA),
    ('x', 0x0),
    ('c', 0xB),
    ('v', 0xF),
];

/// Keypad code for a keyboard character, using the QWERTY layout
///
/// Case-insensitive.
///
/// # Example
///
/// ```
/// use chip8vm::frontend::key_for_char;
///
/// assert_eq!(key_for_char('x'), Some(0x0));
/// assert_eq!(key_for_char('V'), Some(0xF));
/// assert_eq!(key_for_char('p'), None);
/// ```
pub fn key_for_char(c: char) -> Option<u8> {
    let c = c.to_ascii_lowercase();
    QWERTY_KEYMAP
        .iter()
        .find(|(mapped, _)| *mapped == c)
        .map(|&(_, key)| key)
}

/// Replays a queue of key presses
///
/// Every `interval` polls the previously held key is released and the next
/// key in the queue is pressed and reported.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    keys: VecDeque<u8>,
    interval: u32,
    polls: u32,
    held: Option<u8>,
}

impl ScriptedInput {
    /// Press one key from `keys` every `interval` polls (at least 1)
    pub fn new<I: IntoIterator<Item = u8>>(keys: I, interval: u32) -> Self {
        Self {
            keys: keys.into_iter().map(|key| key & 0x0F).collect(),
            interval: interval.max(1),
            polls: 0,
            held: None,
        }
    }

    /// Build from keyboard characters; unmapped characters are skipped
    pub fn from_chars(chars: &str, interval: u32) -> Self {
        Self::new(chars.chars().filter_map(key_for_char), interval)
    }

    /// Keys not yet pressed
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    pub fn is_finished(&self) -> bool {
        self.keys.is_empty() && self.held.is_none()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, keypad: &mut Keypad) -> Result<Option<u8>> {
        self.polls += 1;
        if self.polls < self.interval {
            return Ok(None);
        }
        self.polls = 0;

        if let Some(key) = self.held.take() {
            keypad.release(key);
        }

        let next = self.keys.pop_front();
        if let Some(key) = next {
            keypad.press(key);
            self.held = Some(key);
            log::debug!("Scripted key 0x{:X}", key);
        }
        Ok(next)
    }
}
