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

use crate::core::error::{EmulatorError, Result};

/// Bounded LIFO of return addresses
///
/// Depth never exceeds the capacity fixed at construction. The stack lives
/// outside addressable memory, so programs cannot corrupt it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStack {
    frames: Vec<u16>,
    capacity: usize,
}

impl CallStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a return address
    ///
    /// # Errors
    ///
    /// `StackOverflow` if the stack is already at capacity.
    pub fn push(&mut self, address: u16) -> Result<()> {
        if self.frames.len() >= self.capacity {
            return Err(EmulatorError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.frames.push(address);
        Ok(())
    }

    /// Pop the most recent return address
    ///
    /// # Errors
    ///
    /// `StackUnderflow` if the stack is empty.
    pub fn pop(&mut self) -> Result<u16> {
        self.frames.pop().ok_or(EmulatorError::StackUnderflow)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Return addresses, oldest first
    pub fn frames(&self) -> &[u16] {
        &self.frames
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
