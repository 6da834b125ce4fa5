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

/// Emulator error types
use thiserror::Error;

/// Result type for emulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Main error type for the emulator
///
/// Every variant except `Io` and `Config` is a content error raised by the
/// running program. None of them are transient, so callers should stop the
/// current run rather than retry the step.
#[derive(Error, Debug)]
pub enum EmulatorError {
    #[error("Call stack overflow (capacity {capacity})")]
    StackOverflow { capacity: usize },

    #[error("Call stack underflow: return with an empty stack")]
    StackUnderflow,

    #[error("Memory access out of bounds at 0x{address:04X}")]
    MemoryOutOfBounds { address: usize },

    #[error("Unknown instruction: 0x{word:04X} at PC=0x{pc:04X}")]
    UnknownInstruction { word: u16, pc: u16 },

    #[error("ROM too large: {size} bytes (capacity {capacity})")]
    RomTooLarge { size: usize, capacity: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for EmulatorError {
    fn from(err: toml::de::Error) -> Self {
        EmulatorError::Config(err.to_string())
    }
}
