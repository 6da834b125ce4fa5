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

//! CHIP-8 memory
//!
//! A flat 4KB address space. Nothing is memory-mapped: the display, timers,
//! stack and registers all live outside of it.
//!
//! # Memory Map
//!
//! | Address Range   | Contents                          |
//! |-----------------|-----------------------------------|
//! | 0x000-0x1FF     | Interpreter area (font at 0x050)  |
//! | 0x200-0xFFF     | Program and data                  |
//!
//! Both the font base and the program start are configurable; the table
//! above shows the defaults.
//!
//! # Example
//!
//! ```
//! use chip8vm::core::memory::Memory;
//!
//! let mut memory = Memory::new();
//! memory.load_program(0x200, &[0x00, 0xE0]).unwrap();
//! assert_eq!(memory.read_word(0x200).unwrap(), 0x00E0);
//! ```

mod font;

pub use font::{FONT, GLYPH_HEIGHT};

use crate::core::error::{EmulatorError, Result};

/// Addressable bytes
pub const MEMORY_SIZE: usize = 4096;

/// Size of the built-in font in bytes
pub const FONT_SIZE: usize = FONT.len();

/// 4KB of byte-addressable RAM
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Create zero-filled memory
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0u8; MEMORY_SIZE]),
        }
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Zero every byte from `start` to the end of memory
    ///
    /// Used on reset so that stale program bytes from a previous, longer ROM
    /// cannot be executed.
    pub fn clear_from(&mut self, start: u16) {
        let start = (start as usize).min(MEMORY_SIZE);
        self.bytes[start..].fill(0);
    }

    /// Verify that `len` bytes starting at `address` are addressable
    ///
    /// # Errors
    ///
    /// `MemoryOutOfBounds` carrying the first address past the end of memory.
    #[inline]
    pub fn check_range(address: usize, len: usize) -> Result<()> {
        if len == 0 {
            return Ok(());
        }
        let last = address + len - 1;
        if last >= MEMORY_SIZE {
            return Err(EmulatorError::MemoryOutOfBounds {
                address: address.max(MEMORY_SIZE),
            });
        }
        Ok(())
    }

    /// Read one byte
    #[inline(always)]
    pub fn read_byte(&self, address: usize) -> Result<u8> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(EmulatorError::MemoryOutOfBounds { address })
    }

    /// Write one byte
    #[inline(always)]
    pub fn write_byte(&mut self, address: usize, value: u8) -> Result<()> {
        let byte = self
            .bytes
            .get_mut(address)
            .ok_or(EmulatorError::MemoryOutOfBounds { address })?;
        *byte = value;
        Ok(())
    }

    /// Read a big-endian instruction word (high byte first)
    ///
    /// # Example
    ///
    /// ```
    /// use chip8vm::core::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.write_bytes(0x300, &[0x12, 0x34]).unwrap();
    /// assert_eq!(memory.read_word(0x300).unwrap(), 0x1234);
    /// ```
    pub fn read_word(&self, address: usize) -> Result<u16> {
        let bytes = self.slice(address, 2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Borrow `len` bytes starting at `address`
    pub fn slice(&self, address: usize, len: usize) -> Result<&[u8]> {
        Self::check_range(address, len)?;
        Ok(&self.bytes[address..address + len])
    }

    /// Mutably borrow `len` bytes starting at `address`
    pub fn slice_mut(&mut self, address: usize, len: usize) -> Result<&mut [u8]> {
        Self::check_range(address, len)?;
        Ok(&mut self.bytes[address..address + len])
    }

    /// Copy `data` into memory starting at `address`
    ///
    /// Nothing is written unless the whole range fits.
    pub fn write_bytes(&mut self, address: usize, data: &[u8]) -> Result<()> {
        self.slice_mut(address, data.len())?.copy_from_slice(data);
        Ok(())
    }

    /// Install the built-in font glyphs at `base`
    pub fn load_font(&mut self, base: u16) -> Result<()> {
        self.write_bytes(base as usize, &FONT)?;
        log::debug!("Font installed at 0x{:04X}", base);
        Ok(())
    }

    /// Copy a program image to `start`
    ///
    /// # Errors
    ///
    /// `RomTooLarge` if the image does not fit between `start` and the end of
    /// memory. Memory is left untouched in that case.
    pub fn load_program(&mut self, start: u16, program: &[u8]) -> Result<()> {
        let capacity = MEMORY_SIZE.saturating_sub(start as usize);
        if program.len() > capacity {
            return Err(EmulatorError::RomTooLarge {
                size: program.len(),
                capacity,
            });
        }
        self.write_bytes(start as usize, program)
    }

    /// The whole address space
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
