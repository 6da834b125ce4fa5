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

//! Monochrome display buffer
//!
//! The buffer is owned by the machine and mutated only by 00E0 (clear) and
//! DXYN (XOR toggle). Renderers read it through [`DisplayBuffer::get`] or
//! [`DisplayBuffer::rows`] once per frame; the core never holds a renderer.
//!
//! Pixels are stored row-major.
//!
//! # Example
//!
//! ```
//! use chip8vm::core::display::DisplayBuffer;
//!
//! let mut display = DisplayBuffer::new(64, 32);
//! assert!(!display.toggle(3, 4)); // off -> on, no collision
//! assert!(display.get(3, 4));
//! assert!(display.toggle(3, 4)); // on -> off, collision
//! assert!(!display.get(3, 4));
//! ```

/// W x H grid of on/off pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl DisplayBuffer {
    /// Create an all-off buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    /// Pixel state at (x, y); coordinates outside the buffer read as off
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y * self.width + x]
    }

    /// XOR-toggle the pixel at (x, y)
    ///
    /// Drawing only ever flips pixels.
    ///
    /// # Returns
    ///
    /// `true` if the pixel was on before the toggle (i.e. it is now off).
    /// Coordinates outside the buffer are ignored and return `false`.
    #[inline]
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let pixel = &mut self.pixels[y * self.width + x];
        let was_on = *pixel;
        *pixel = !was_on;
        was_on
    }

    /// Iterate rows top to bottom, each as a slice of `width` pixels
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.pixels.chunks(self.width.max(1))
    }

    /// Row-major pixel storage
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// `true` when no pixel is lit
    pub fn is_blank(&self) -> bool {
        !self.pixels.iter().any(|&p| p)
    }
}
