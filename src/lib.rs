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

//! CHIP-8 virtual machine library
//!
//! This library provides the core of a CHIP-8 interpreter: memory, registers,
//! the instruction set, the display buffer, timers and the pacing that keeps
//! instruction execution and the 60 Hz timer tick apart. Rendering, sound and
//! keyboard access are supplied by the application through the traits in
//! [`core::host`](crate::core::host); [`frontend`] has simple terminal implementations.
//!
//! # Example
//!
//! ```
//! use chip8vm::core::config::Config;
//! use chip8vm::core::system::System;
//!
//! let mut system = System::new(Config::default()).unwrap();
//!
//! // CLS; LD V0, 0x0F; ADD V0, 0x05; JP 0x200
//! system
//!     .load_rom(&[0x00, 0xE0, 0x60, 0x0F, 0x70, 0x05, 0x12, 0x00])
//!     .unwrap();
//!
//! for _ in 0..4 {
//!     system.step().unwrap();
//! }
//! assert_eq!(system.cpu().reg(0), 0x14);
//! assert_eq!(system.pc(), 0x200);
//! ```

pub mod core;
pub mod frontend;
