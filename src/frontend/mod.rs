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

//! Frontend module
//!
//! Headless implementations of the host collaborator traits, enough to run a
//! program from a terminal:
//! - [`TerminalRenderer`]: draws the display buffer as text
//! - [`PixelLayout`]: maps display pixels onto a window of any size
//! - [`Bell`]: rings the terminal bell when the tone starts
//! - [`ScriptedInput`]: replays a fixed sequence of key presses

mod audio;
mod input;
mod layout;
mod terminal;

pub use crate::core::host::{Audio, InputSource, Mute, NoInput, NullRenderer, Renderer};
pub use audio::Bell;
pub use input::{key_for_char, ScriptedInput};
pub use layout::{PixelLayout, PixelRect};
pub use terminal::TerminalRenderer;
