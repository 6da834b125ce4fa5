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

//! Window layout for pixel renderers
//!
//! A window backend draws each lit display pixel as a filled square. The
//! squares are as large as the window allows while keeping them square, and
//! the picture is centred.

use crate::core::display::DisplayBuffer;

/// One filled square on the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// Mapping from display coordinates to window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    /// Side of one display pixel in window pixels
    pub pixel_size: u32,
    /// Left margin
    pub x_offset: u32,
    /// Top margin
    pub y_offset: u32,
}

impl PixelLayout {
    /// Fit a `display_width` x `display_height` display into a window
    ///
    /// # Example
    ///
    /// ```
    /// use chip8vm::frontend::PixelLayout;
    ///
    /// // 800x600 fits 12px squares: 768x384, centred
    /// let layout = PixelLayout::fit(800, 600, 64, 32);
    /// assert_eq!(layout.pixel_size, 12);
    /// assert_eq!((layout.x_offset, layout.y_offset), (16, 108));
    /// ```
    pub fn fit(
        window_width: u32,
        window_height: u32,
        display_width: u32,
        display_height: u32,
    ) -> Self {
        let pixel_size =
            (window_width / display_width.max(1)).min(window_height / display_height.max(1));
        Self {
            pixel_size,
            x_offset: window_width.saturating_sub(pixel_size * display_width) / 2,
            y_offset: window_height.saturating_sub(pixel_size * display_height) / 2,
        }
    }

    /// Fit `display` into a window
    pub fn for_display(window_width: u32, window_height: u32, display: &DisplayBuffer) -> Self {
        Self::fit(
            window_width,
            window_height,
            display.width() as u32,
            display.height() as u32,
        )
    }

    /// Square covering display pixel (`column`, `row`)
    pub fn rect(&self, column: u32, row: u32) -> PixelRect {
        PixelRect {
            x: self.x_offset + self.pixel_size * column,
            y: self.y_offset + self.pixel_size * row,
            size: self.pixel_size,
        }
    }

    /// Squares for every lit pixel of `display`, row by row
    pub fn lit_rects<'a>(
        &'a self,
        display: &'a DisplayBuffer,
    ) -> impl Iterator<Item = PixelRect> + 'a {
        display.rows().enumerate().flat_map(move |(row, pixels)| {
            pixels
                .iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .map(move |(column, _)| self.rect(column as u32, row as u32))
        })
    }
}
