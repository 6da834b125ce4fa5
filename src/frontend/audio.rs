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

//! Terminal bell audio

use crate::core::error::Result;
use crate::core::host::Audio;
use std::io::Write;

/// ASCII BEL
const BEL: u8 = 0x07;

/// Rings the terminal bell once each time the tone turns on
///
/// A terminal cannot hold a tone, so the bell marks the start of each sound
/// timer period.
pub struct Bell<W: Write> {
    writer: W,
    sounding: bool,
    rings: u64,
}

impl<W: Write> Bell<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sounding: false,
            rings: 0,
        }
    }

    /// Whether the last update asked for the tone
    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    /// Number of times the bell has rung
    pub fn rings(&self) -> u64 {
        self.rings
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Audio for Bell<W> {
    fn set_tone(&mut self, on: bool) -> Result<()> {
        if on && !self.sounding {
            self.writer.write_all(&[BEL])?;
            self.writer.flush()?;
            self.rings += 1;
            log::trace!("Bell");
        }
        self.sounding = on;
        Ok(())
    }
}
