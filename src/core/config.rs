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

//! Machine configuration
//!
//! Every tunable of the virtual machine lives in [`Config`]. Defaults match
//! the classic COSMAC VIP layout (font at 0x050, programs at 0x200, 64x32
//! display) with a 700 Hz instruction rate and a 60 Hz timer/frame rate.
//!
//! Configuration can be written as TOML:
//!
//! ```toml
//! instructions_per_second = 1000
//! stack_capacity = 16
//!
//! [quirks]
//! shift_uses_vy = true
//! shift_flag = "boolean"
//! index_overflow_threshold = 0x0FFF
//! ```
//!
//! # Example
//!
//! ```
//! use chip8vm::core::config::Config;
//!
//! let config = Config::from_toml_str("instructions_per_second = 500").unwrap();
//! assert_eq!(config.instructions_per_second, 500);
//! assert_eq!(config.program_start, 0x200);
//! ```

use super::error::{EmulatorError, Result};
use super::memory::{FONT_SIZE, MEMORY_SIZE};
use serde::Deserialize;
use std::path::Path;

/// Default address where program bytes are loaded
pub const DEFAULT_PROGRAM_START: u16 = 0x200;

/// Default base address of the 16 built-in font glyphs
pub const DEFAULT_FONT_BASE: u16 = 0x050;

/// Default instruction rate (Hz)
pub const DEFAULT_INSTRUCTIONS_PER_SECOND: u32 = 700;

/// Default timer/frame rate (Hz)
pub const DEFAULT_FRAMES_PER_SECOND: u32 = 60;

/// Default call stack depth
pub const DEFAULT_STACK_CAPACITY: usize = 15;

/// Default display width in pixels
pub const DEFAULT_DISPLAY_WIDTH: usize = 64;

/// Default display height in pixels
pub const DEFAULT_DISPLAY_HEIGHT: usize = 32;

/// Largest display dimension; sprite coordinates come from 8-bit registers
pub const MAX_DISPLAY_DIMENSION: usize = 256;

/// Value written to VF by 8XYE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftFlag {
    /// VF receives the shifted-out bit in place (0x00 or 0x80)
    RawBit,
    /// VF receives 0 or 1
    Boolean,
}

/// Behavioural switches for instructions whose semantics differ between
/// interpreters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Quirks {
    /// 8XY6/8XYE copy Vy into Vx before shifting
    pub shift_uses_vy: bool,

    /// VF encoding used by 8XYE
    pub shift_flag: ShiftFlag,

    /// FX1E sets VF when I exceeds this value
    pub index_overflow_threshold: u16,
}

impl Quirks {
    /// Behaviour commonly documented for the original COSMAC VIP interpreter
    ///
    /// Shifts read Vy, 8XYE writes a boolean flag, and FX1E flags any index
    /// past the last addressable byte.
    pub fn cosmac() -> Self {
        Self {
            shift_uses_vy: true,
            shift_flag: ShiftFlag::Boolean,
            index_overflow_threshold: 0x0FFF,
        }
    }
}

impl Default for Quirks {
    fn default() -> Self {
        Self {
            shift_uses_vy: false,
            shift_flag: ShiftFlag::RawBit,
            index_overflow_threshold: 0x1000,
        }
    }
}

/// Virtual machine configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address where the ROM is copied and execution starts
    pub program_start: u16,

    /// Address of the first font glyph
    pub font_base: u16,

    /// Instruction gate rate
    pub instructions_per_second: u32,

    /// Timer/frame gate rate
    pub frames_per_second: u32,

    /// Maximum call depth
    pub stack_capacity: usize,

    /// Display width in pixels
    pub display_width: usize,

    /// Display height in pixels
    pub display_height: usize,

    /// Seed for CXNN; `None` seeds from the operating system
    pub rng_seed: Option<u64>,

    /// Instruction quirks
    pub quirks: Quirks,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program_start: DEFAULT_PROGRAM_START,
            font_base: DEFAULT_FONT_BASE,
            instructions_per_second: DEFAULT_INSTRUCTIONS_PER_SECOND,
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            stack_capacity: DEFAULT_STACK_CAPACITY,
            display_width: DEFAULT_DISPLAY_WIDTH,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            rng_seed: None,
            quirks: Quirks::default(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::Config` if the document is not valid TOML, has
    /// fields of the wrong type, or fails [`Config::validate`].
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let config: Config = toml::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading config from {}", path.display());
        let data = std::fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// Check that the configuration describes a machine that can run
    ///
    /// # Errors
    ///
    /// - zero instruction or frame rate
    /// - zero display dimension or stack capacity
    /// - a display dimension above [`MAX_DISPLAY_DIMENSION`]
    /// - font glyphs that do not fit in memory
    /// - a program start address outside memory
    /// - font glyphs that reach into the program region
    pub fn validate(&self) -> Result<()> {
        if self.instructions_per_second == 0 {
            return Err(EmulatorError::Config(
                "instructions_per_second must be non-zero".to_string(),
            ));
        }
        if self.frames_per_second == 0 {
            return Err(EmulatorError::Config(
                "frames_per_second must be non-zero".to_string(),
            ));
        }
        if self.display_width == 0 || self.display_height == 0 {
            return Err(EmulatorError::Config(format!(
                "display dimensions must be non-zero (got {}x{})",
                self.display_width, self.display_height
            )));
        }
        if self.display_width > MAX_DISPLAY_DIMENSION
            || self.display_height > MAX_DISPLAY_DIMENSION
        {
            return Err(EmulatorError::Config(format!(
                "display dimensions must be at most {} (got {}x{})",
                MAX_DISPLAY_DIMENSION, self.display_width, self.display_height
            )));
        }
        if self.stack_capacity == 0 {
            return Err(EmulatorError::Config(
                "stack_capacity must be non-zero".to_string(),
            ));
        }
        if self.font_base as usize + FONT_SIZE > MEMORY_SIZE {
            return Err(EmulatorError::Config(format!(
                "font at 0x{:04X} does not fit in memory",
                self.font_base
            )));
        }
        if self.program_start as usize >= MEMORY_SIZE {
            return Err(EmulatorError::Config(format!(
                "program_start 0x{:04X} is outside memory",
                self.program_start
            )));
        }
        // The program region runs from program_start to the end of memory
        if self.font_base as usize + FONT_SIZE > self.program_start as usize {
            return Err(EmulatorError::Config(format!(
                "font at 0x{:04X}..0x{:04X} overlaps program region at 0x{:04X}",
                self.font_base,
                self.font_base as usize + FONT_SIZE,
                self.program_start
            )));
        }
        Ok(())
    }

    /// Number of bytes available for a ROM
    pub fn program_capacity(&self) -> usize {
        MEMORY_SIZE.saturating_sub(self.program_start as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.program_start, 0x200);
        assert_eq!(config.font_base, 0x050);
        assert_eq!(config.instructions_per_second, 700);
        assert_eq!(config.frames_per_second, 60);
        assert_eq!(config.stack_capacity, 15);
        assert_eq!(config.display_width, 64);
        assert_eq!(config.display_height, 32);
        assert_eq!(config.quirks.index_overflow_threshold, 0x1000);
        assert_eq!(config.quirks.shift_flag, ShiftFlag::RawBit);
        assert!(!config.quirks.shift_uses_vy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = Config::from_toml_str(
            r#"
            program_start = 0x300
            frames_per_second = 30
            rng_seed = 42

            [quirks]
            shift_uses_vy = true
            shift_flag = "boolean"
            "#,
        )
        .unwrap();

        assert_eq!(config.program_start, 0x300);
        assert_eq!(config.frames_per_second, 30);
        assert_eq!(config.rng_seed, Some(42));
        assert!(config.quirks.shift_uses_vy);
        assert_eq!(config.quirks.shift_flag, ShiftFlag::Boolean);
        // Unspecified quirk keeps its default
        assert_eq!(config.quirks.index_overflow_threshold, 0x1000);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = Config::from_toml_str("stack_capacity = \"deep\"").unwrap_err();
        assert!(matches!(err, EmulatorError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_zero_rates() {
        let config = Config {
            instructions_per_second: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EmulatorError::Config(_))));

        let config = Config {
            frames_per_second: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EmulatorError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_font_past_end() {
        let config = Config {
            font_base: 0x0FC0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_program_outside_memory() {
        let config = Config {
            program_start: 0x1000,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_font_in_program_region() {
        // Glyphs above the program start
        let config = Config {
            font_base: 0x300,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EmulatorError::Config(_))));

        // Glyphs that start below but run past the program start
        let config = Config {
            font_base: 0x1C0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EmulatorError::Config(_))));

        // Last glyph ending exactly at the program start is fine
        let config = Config {
            font_base: 0x200 - FONT_SIZE as u16,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_display() {
        let config = Config {
            display_width: 257,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EmulatorError::Config(_))));

        let err = Config::from_toml_str(
            "display_width = 4294967296\ndisplay_height = 4294967296",
        )
        .unwrap_err();
        assert!(matches!(err, EmulatorError::Config(_)));

        let config = Config {
            display_width: 256,
            display_height: 256,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_program_capacity() {
        assert_eq!(Config::default().program_capacity(), 0xE00);
    }

    #[test]
    fn test_cosmac_quirks() {
        let quirks = Quirks::cosmac();
        assert!(quirks.shift_uses_vy);
        assert_eq!(quirks.shift_flag, ShiftFlag::Boolean);
        assert_eq!(quirks.index_overflow_threshold, 0x0FFF);
    }
}
