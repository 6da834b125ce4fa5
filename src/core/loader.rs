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

//! ROM loading
//!
//! A CHIP-8 ROM is an unstructured byte stream: no header, no length prefix,
//! no checksum. It is copied verbatim to the program start address.
//!
//! The loader only enforces the one property the format has, which is that
//! the image must fit in the memory left after the program start.
//!
//! # Example
//!
//! ```
//! use chip8vm::core::loader::Rom;
//!
//! let rom = Rom::from_bytes(vec![0x00, 0xE0, 0x12, 0x00], 0xE00).unwrap();
//! assert_eq!(rom.len(), 4);
//!
//! assert!(Rom::from_bytes(vec![0; 0xE01], 0xE00).is_err());
//! ```

use super::error::{EmulatorError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A program image that is known to fit in program memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rom {
    bytes: Vec<u8>,
}

impl Rom {
    /// Wrap an in-memory image
    ///
    /// # Errors
    ///
    /// `RomTooLarge` if `bytes` is longer than `capacity`.
    pub fn from_bytes(bytes: Vec<u8>, capacity: usize) -> Result<Self> {
        if bytes.len() > capacity {
            return Err(EmulatorError::RomTooLarge {
                size: bytes.len(),
                capacity,
            });
        }
        Ok(Self { bytes })
    }

    /// Read an image from any reader until end of stream
    ///
    /// At most `capacity + 1` bytes are consumed, so an oversized stream is
    /// rejected without being read in full.
    pub fn from_reader<R: Read>(reader: R, capacity: usize) -> Result<Self> {
        let mut bytes = Vec::with_capacity(capacity);
        reader
            .take(capacity as u64 + 1)
            .read_to_end(&mut bytes)?;

        if bytes.len() > capacity {
            return Err(EmulatorError::RomTooLarge {
                size: bytes.len(),
                capacity,
            });
        }
        Ok(Self { bytes })
    }

    /// Read an image from a file
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be opened or read
    /// - `RomTooLarge` if the file is larger than `capacity`; the reported
    ///   size is the real file size when the filesystem provides it
    pub fn from_file<P: AsRef<Path>>(path: P, capacity: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        if let Ok(metadata) = file.metadata() {
            let size = metadata.len() as usize;
            if size > capacity {
                return Err(EmulatorError::RomTooLarge { size, capacity });
            }
        }

        let rom = Self::from_reader(file, capacity)?;
        log::info!("Read {} bytes from {}", rom.len(), path.display());
        Ok(rom)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_exact_capacity() {
        let rom = Rom::from_bytes(vec![0xAB; 16], 16).unwrap();
        assert_eq!(rom.len(), 16);
        assert!(!rom.is_empty());
    }

    #[test]
    fn test_from_bytes_too_large() {
        match Rom::from_bytes(vec![0; 17], 16) {
            Err(EmulatorError::RomTooLarge { size, capacity }) => {
                assert_eq!(size, 17);
                assert_eq!(capacity, 16);
            }
            other => panic!("expected RomTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_from_reader() {
        let data: &[u8] = &[0x60, 0x0F, 0x70, 0x05];
        let rom = Rom::from_reader(data, 0xE00).unwrap();
        assert_eq!(rom.as_bytes(), data);
    }

    #[test]
    fn test_from_reader_stops_after_capacity() {
        let data = vec![0u8; 100];
        let err = Rom::from_reader(data.as_slice(), 10).unwrap_err();
        // Only capacity + 1 bytes are ever read
        assert!(matches!(
            err,
            EmulatorError::RomTooLarge {
                size: 11,
                capacity: 10
            }
        ));
    }

    #[test]
    fn test_empty_rom_is_accepted() {
        let rom = Rom::from_reader(std::io::empty(), 0xE00).unwrap();
        assert!(rom.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Rom::from_file("/definitely/not/here.ch8", 0xE00).unwrap_err();
        assert!(matches!(err, EmulatorError::Io(_)));
    }
}
