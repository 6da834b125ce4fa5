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

//! Text renderer

use crate::core::display::DisplayBuffer;
use crate::core::error::Result;
use crate::core::host::Renderer;
use std::io::Write;

/// ANSI "cursor home" sequence
const CURSOR_HOME: &str = "\x1b[H";

/// Draws each frame as rows of characters
///
/// # Example
///
/// ```
/// use chip8vm::core::display::DisplayBuffer;
/// use chip8vm::frontend::{Renderer, TerminalRenderer};
///
/// let mut display = DisplayBuffer::new(4, 2);
/// display.toggle(1, 0);
///
/// let mut renderer = TerminalRenderer::new(Vec::new());
/// renderer.present(&display).unwrap();
/// assert_eq!(renderer.get_ref().as_slice(), b".#..\n....\n\n");
/// ```
pub struct TerminalRenderer<W: Write> {
    writer: W,
    lit: char,
    unlit: char,
    cursor_home: bool,
    frames: u64,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lit: '#',
            unlit: '.',
            cursor_home: false,
            frames: 0,
        }
    }

    /// Characters used for lit and unlit pixels
    pub fn with_glyphs(mut self, lit: char, unlit: char) -> Self {
        self.lit = lit;
        self.unlit = unlit;
        self
    }

    /// Move the cursor to the top-left corner before every frame so that
    /// frames overwrite each other on an ANSI terminal
    pub fn with_cursor_home(mut self, enabled: bool) -> Self {
        self.cursor_home = enabled;
        self
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn present(&mut self, display: &DisplayBuffer) -> Result<()> {
        let mut frame =
            String::with_capacity((display.width() + 1) * display.height() + CURSOR_HOME.len() + 1);
        if self.cursor_home {
            frame.push_str(CURSOR_HOME);
        }
        for row in display.rows() {
            frame.extend(row.iter().map(|&on| if on { self.lit } else { self.unlit }));
            frame.push('\n');
        }
        frame.push('\n');

        self.writer.write_all(frame.as_bytes())?;
        self.writer.flush()?;
        self.frames += 1;
        Ok(())
    }
}
