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

use crate::core::bus::Bus;
use crate::core::config::{Config, Quirks};
use crate::core::error::{EmulatorError, Result};
use crate::core::input::InputGate;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// CHIP-8 CPU
///
/// # Specifications
/// - Registers: 16 general-purpose 8-bit registers (V0-VF), VF doubles as flag
/// - Index register: 16-bit
/// - Program counter: 16-bit, advanced by 2 on every fetch
/// - Call stack: bounded, outside addressable memory
///
/// # Example
/// ```
/// use chip8vm::core::bus::Bus;
/// use chip8vm::core::config::Config;
/// use chip8vm::core::cpu::CPU;
///
/// let config = Config::default();
/// let mut cpu = CPU::new(&config);
/// let mut bus = Bus::from_config(&config);
///
/// bus.memory.write_bytes(0x200, &[0x6A, 0x2F]).unwrap(); // V[A] = 0x2F
/// cpu.step(&mut bus).unwrap();
/// assert_eq!(cpu.reg(0xA), 0x2F);
/// assert_eq!(cpu.pc(), 0x202);
/// ```
pub struct CPU {
    /// General purpose registers (V0-VF)
    regs: [u8; 16],

    /// Index register (I)
    index: u16,

    /// Program counter
    pc: u16,

    /// Return addresses for 2NNN/00EE
    stack: CallStack,

    /// FX0A key-wait state
    input_gate: InputGate,

    /// Instruction behaviour switches
    quirks: Quirks,

    /// Address of glyph 0 (for FX29)
    font_base: u16,

    /// Address execution starts from after reset
    program_start: u16,

    /// Source for CXNN
    rng: StdRng,

    /// Current instruction word (for debugging)
    current_instruction: u16,
}

/// What a call to [`CPU::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// One instruction was fetched and executed
    Executed(Instruction),
    /// Execution is suspended waiting for a key; nothing was fetched
    Blocked,
}

// Module declarations
mod decode;
mod instructions;
mod stack;
#[cfg(test)]
mod tests;

// Re-exports
pub use decode::{Fields, Instruction};
pub use stack::CallStack;

impl CPU {
    /// Create a CPU in its reset state
    ///
    /// - All registers: 0
    /// - I: 0
    /// - PC: `config.program_start`
    /// - Call stack: empty, `config.stack_capacity` deep
    /// - Random source: seeded from `config.rng_seed`, or from the OS
    pub fn new(config: &Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            regs: [0u8; 16],
            index: 0,
            pc: config.program_start,
            stack: CallStack::new(config.stack_capacity),
            input_gate: InputGate::Idle,
            quirks: config.quirks.clone(),
            font_base: config.font_base,
            program_start: config.program_start,
            rng,
            current_instruction: 0,
        }
    }

    /// Reset CPU to initial state
    ///
    /// Registers, I and the stack are cleared, any pending key wait is
    /// abandoned and PC returns to the program start. The random source is
    /// left as is.
    pub fn reset(&mut self) {
        self.regs = [0u8; 16];
        self.index = 0;
        self.pc = self.program_start;
        self.stack.clear();
        self.input_gate = InputGate::Idle;
        self.current_instruction = 0;
    }

    /// Read register V`index` (0-15)
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u8 {
        self.regs[(index & 0xF) as usize]
    }

    /// Write register V`index` (0-15)
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u8) {
        self.regs[(index & 0xF) as usize] = value;
    }

    /// All 16 registers
    pub fn regs(&self) -> &[u8; 16] {
        &self.regs
    }

    /// Flag register VF
    #[inline(always)]
    pub fn vf(&self) -> u8 {
        self.regs[0xF]
    }

    #[inline(always)]
    fn set_vf(&mut self, value: u8) {
        self.regs[0xF] = value;
    }

    pub fn index(&self) -> u16 {
        self.index
    }

    pub fn set_index(&mut self, value: u16) {
        self.index = value;
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    pub fn stack(&self) -> &CallStack {
        &self.stack
    }

    pub fn quirks(&self) -> &Quirks {
        &self.quirks
    }

    /// Replace the instruction quirks
    pub fn set_quirks(&mut self, quirks: Quirks) {
        self.quirks = quirks;
    }

    pub fn input_gate(&self) -> InputGate {
        self.input_gate
    }

    /// `true` while an FX0A is waiting for a key
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.input_gate.is_blocked()
    }

    /// Last instruction word fetched
    pub fn current_instruction(&self) -> u16 {
        self.current_instruction
    }

    /// Execute one instruction
    ///
    /// Performs:
    /// 1. Key-wait check (nothing happens while blocked)
    /// 2. Instruction fetch from memory at PC
    /// 3. PC += 2
    /// 4. Decode and execute
    ///
    /// Because PC moves before execution, jumps and calls overwrite a PC
    /// that already points past the current instruction.
    ///
    /// # Errors
    ///
    /// - `MemoryOutOfBounds` if PC or an operand address is outside memory
    /// - `UnknownInstruction` for words with no defined semantics
    /// - `StackOverflow`/`StackUnderflow` from 2NNN/00EE
    pub fn step(&mut self, bus: &mut Bus) -> Result<StepOutcome> {
        if self.input_gate.is_blocked() {
            return Ok(StepOutcome::Blocked);
        }

        // Instruction fetch
        let pc = self.pc;
        let word = bus.memory.read_word(pc as usize)?;
        self.current_instruction = word;
        self.pc = pc.wrapping_add(2);

        let instruction =
            Instruction::decode(word).ok_or(EmulatorError::UnknownInstruction { word, pc })?;

        log::trace!("0x{:04X}: {:04X} {:?}", pc, word, instruction);

        self.execute(instruction, bus)?;
        Ok(StepOutcome::Executed(instruction))
    }

    /// Deliver a key press to a pending FX0A
    ///
    /// While waiting, the key code (low nibble) is written to the waiting
    /// register, PC moves past the FX0A and execution resumes.
    ///
    /// # Returns
    ///
    /// `true` if a wait was resolved, `false` if the CPU was not waiting.
    pub fn resolve_key_wait(&mut self, key: u8) -> bool {
        match self.input_gate {
            InputGate::WaitingForKey { register } => {
                let key = key & 0x0F;
                self.set_reg(register, key);
                self.pc = self.pc.wrapping_add(2);
                self.input_gate = InputGate::Idle;
                log::debug!("Key 0x{:X} resolved wait into V{:X}", key, register);
                true
            }
            InputGate::Idle => false,
        }
    }

    /// Dump all CPU registers for debugging
    pub fn dump_registers(&self) {
        println!("CPU Registers:");
        println!(
            "PC: 0x{:04X}  I: 0x{:04X}  SP: {}/{}",
            self.pc,
            self.index,
            self.stack.depth(),
            self.stack.capacity()
        );
        for (i, value) in self.regs.iter().enumerate() {
            if i % 8 == 0 && i > 0 {
                println!();
            }
            print!("V{:X}: 0x{:02X}  ", i, value);
        }
        println!();
        if !self.stack.is_empty() {
            let frames: Vec<String> = self
                .stack
                .frames()
                .iter()
                .map(|addr| format!("0x{:04X}", addr))
                .collect();
            println!("Stack: {}", frames.join(" "));
        }
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
