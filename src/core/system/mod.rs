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

//! System integration module
//!
//! This module ties together the CPU, the bus (memory, display, timers,
//! keypad) and the pacer, and provides the entry points a run loop drives.

use super::bus::Bus;
use super::config::Config;
use super::cpu::{StepOutcome, CPU};
use super::display::DisplayBuffer;
use super::error::Result;
use super::host::{Audio, InputSource, Renderer};
use super::input::KEY_COUNT;
use super::loader::Rom;
use super::timer::Timers;
use super::timing::{Admission, Pacer};
use std::path::Path;
use std::time::Instant;

/// CHIP-8 System
///
/// Owns every piece of machine state exclusively. Nothing is shared across
/// threads and no component holds a reference back to a host collaborator.
///
/// # Components
/// - CPU: registers, index, PC, call stack, key-wait gate
/// - Bus: memory, display buffer, timers, keypad
/// - Pacer: instruction gate and frame gate
///
/// # Example
/// ```
/// use chip8vm::core::config::Config;
/// use chip8vm::core::system::System;
///
/// let mut system = System::new(Config::default()).unwrap();
/// system.load_rom(&[0x60, 0x0F, 0x70, 0x05]).unwrap();
/// system.step().unwrap();
/// system.step().unwrap();
/// assert_eq!(system.cpu().reg(0), 0x14);
/// ```
pub struct System {
    /// Configuration the system was built from
    config: Config,
    /// CPU instance
    cpu: CPU,
    /// Memory, display, timers, keypad
    bus: Bus,
    /// Wall-clock gates
    pacer: Pacer,
    /// Last loaded program, reinstalled on reset
    rom: Vec<u8>,
    /// Instructions executed since reset
    instructions: u64,
    /// Timer ticks (frames) since reset
    frames: u64,
}

impl System {
    /// Create a new System instance
    ///
    /// Validates the configuration, zeroes memory and installs the font.
    ///
    /// # Errors
    ///
    /// `Config` if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let cpu = CPU::new(&config);
        let mut bus = Bus::from_config(&config);
        bus.memory.load_font(config.font_base)?;
        let pacer = Pacer::from_config(&config);

        Ok(Self {
            config,
            cpu,
            bus,
            pacer,
            rom: Vec::new(),
            instructions: 0,
            frames: 0,
        })
    }

    /// Copy a program into memory at the program start
    ///
    /// Any previously loaded program is wiped first. PC is not moved; call
    /// [`System::reset`] to restart execution.
    ///
    /// # Errors
    ///
    /// `RomTooLarge` if the program does not fit; the previous program stays
    /// loaded then.
    pub fn load_rom(&mut self, program: &[u8]) -> Result<()> {
        let rom = Rom::from_bytes(program.to_vec(), self.config.program_capacity())?;
        self.install(rom)
    }

    /// Read a ROM file and load it
    pub fn load_rom_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let rom = Rom::from_file(path, self.config.program_capacity())?;
        self.install(rom)
    }

    fn install(&mut self, rom: Rom) -> Result<()> {
        let start = self.config.program_start;
        self.bus.memory.clear_from(start);
        self.bus.memory.load_program(start, rom.as_bytes())?;
        log::info!(
            "Program loaded: {} bytes at 0x{:04X}",
            rom.len(),
            start
        );
        self.rom = rom.as_bytes().to_vec();
        Ok(())
    }

    /// Reset the system to its power-on state
    ///
    /// Memory is zeroed and re-seeded with the font and the last loaded
    /// program. Display, timers, keypad, CPU and pacer are all reset.
    pub fn reset(&mut self) -> Result<()> {
        self.cpu.reset();
        self.bus.memory.clear();
        self.bus.memory.load_font(self.config.font_base)?;
        self.bus
            .memory
            .load_program(self.config.program_start, &self.rom)?;
        self.bus.display.clear();
        self.bus.timers.reset();
        self.bus.keypad.release_all();
        self.pacer.reset();
        self.instructions = 0;
        self.frames = 0;
        log::info!("System reset, PC=0x{:04X}", self.cpu.pc());
        Ok(())
    }

    /// Execute one instruction, ignoring the pacer
    ///
    /// Returns `StepOutcome::Blocked` without doing anything while an FX0A is
    /// waiting for a key.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let outcome = self.cpu.step(&mut self.bus)?;
        if let StepOutcome::Executed(_) = outcome {
            self.instructions += 1;
        }
        Ok(outcome)
    }

    /// Apply one timer tick, ignoring the pacer
    pub fn tick_frame(&mut self) {
        self.bus.timers.tick();
        self.frames += 1;
    }

    /// Give the machine one opportunity to make progress
    ///
    /// In order:
    /// 1. poll `input`, resolving a pending key wait on a fresh press
    /// 2. if the instruction gate admits, execute one instruction
    /// 3. if the frame gate admits, tick the timers, present the display and
    ///    update the tone
    ///
    /// An instruction and a timer tick never interleave. Never sleeps; see
    /// [`System::next_deadline`].
    ///
    /// # Returns
    ///
    /// Which gates admitted work during this call.
    pub fn run_once<R, A, I>(
        &mut self,
        now: Instant,
        renderer: &mut R,
        audio: &mut A,
        input: &mut I,
    ) -> Result<Admission>
    where
        R: Renderer + ?Sized,
        A: Audio + ?Sized,
        I: InputSource + ?Sized,
    {
        if let Some(key) = input.poll(&mut self.bus.keypad)? {
            self.cpu.resolve_key_wait(key_code(key));
        }

        let admission = self.pacer.poll(now);

        if admission.instruction {
            self.step()?;
        }

        if admission.frame {
            self.tick_frame();
            renderer.present(&self.bus.display)?;
            audio.set_tone(self.bus.timers.sound_active())?;
        }

        Ok(admission)
    }

    /// Earliest instant at which [`System::run_once`] can do any work
    pub fn next_deadline(&self, now: Instant) -> Instant {
        self.pacer.next_deadline(now)
    }

    /// Record a key press from the input collaborator
    ///
    /// Resolves a pending FX0A if there is one.
    pub fn press_key(&mut self, key: u8) {
        let key = key_code(key);
        self.bus.keypad.press(key);
        self.cpu.resolve_key_wait(key);
    }

    /// Record a key release
    pub fn release_key(&mut self, key: u8) {
        self.bus.keypad.release(key_code(key));
    }

    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CPU {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn display(&self) -> &DisplayBuffer {
        &self.bus.display
    }

    pub fn timers(&self) -> &Timers {
        &self.bus.timers
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current PC
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    /// Instructions executed since reset
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Timer ticks since reset
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Reduce a host key to the 16-key range, warning when bits are dropped
fn key_code(key: u8) -> u8 {
    if key as usize >= KEY_COUNT {
        log::warn!("Key 0x{:02X} outside the keypad, using 0x{:X}", key, key & 0x0F);
    }
    key & 0x0F
}

#[cfg(test)]
mod tests;
