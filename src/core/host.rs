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

//! Host collaborator contracts
//!
//! The core never owns a window, an audio device or a keyboard. The
//! application supplies implementations of these traits and lends them to
//! [`System::run_once`](crate::core::system::System::run_once).

use super::display::DisplayBuffer;
use super::error::Result;
use super::input::Keypad;

/// Presents the display buffer
pub trait Renderer {
    /// Draw every lit pixel of `display` and show the frame
    ///
    /// Called once per frame gate admission.
    fn present(&mut self, display: &DisplayBuffer) -> Result<()>;
}

/// Produces the sound-timer tone
pub trait Audio {
    /// Called once per frame with whether the tone should be audible
    fn set_tone(&mut self, on: bool) -> Result<()>;
}

/// Reports keypad activity
pub trait InputSource {
    /// Update `keypad` with the current key state
    ///
    /// # Returns
    ///
    /// A key that went down since the previous poll, if any. The system uses
    /// it to resolve a pending FX0A.
    fn poll(&mut self, keypad: &mut Keypad) -> Result<Option<u8>>;
}

/// Renderer that discards frames
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn present(&mut self, _display: &DisplayBuffer) -> Result<()> {
        Ok(())
    }
}

/// Audio that never makes a sound
#[derive(Debug, Default)]
pub struct Mute;

impl Audio for Mute {
    fn set_tone(&mut self, _on: bool) -> Result<()> {
        Ok(())
    }
}

/// Input source with no keys
#[derive(Debug, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self, _keypad: &mut Keypad) -> Result<Option<u8>> {
        Ok(None)
    }
}
