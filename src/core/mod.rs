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

//! Core emulation components
//!
//! This module contains all virtual machine components:
//! - CPU (registers, call stack, instruction set)
//! - Memory (4 KB address space with built-in font)
//! - Display buffer (monochrome, XOR drawing)
//! - Timers (delay and sound)
//! - Keypad and the key-wait gate
//! - Pacing (instruction and frame rate gates)
//! - System integration

pub mod bus;
pub mod config;
pub mod cpu;
pub mod display;
pub mod error;
pub mod host;
pub mod input;
pub mod loader;
pub mod memory;
pub mod system;
pub mod timer;
pub mod timing;

// Re-export commonly used types
pub use bus::Bus;
pub use config::{Config, Quirks};
pub use cpu::CPU;
pub use display::DisplayBuffer;
pub use error::{EmulatorError, Result};
pub use input::Keypad;
pub use memory::Memory;
pub use system::System;
pub use timer::Timers;
pub use timing::Pacer;
