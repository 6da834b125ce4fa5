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

//! Custom assertions for CHIP-8 testing

use chip8vm::core::system::System;

/// Assert register V`reg` has the expected value
#[allow(dead_code)]
pub fn assert_reg(system: &System, reg: u8, expected: u8) {
    let actual = system.cpu().reg(reg);
    assert_eq!(
        actual, expected,
        "V{:X} mismatch: expected 0x{:02X}, got 0x{:02X}",
        reg, expected, actual
    );
}

/// Assert PC is at the expected address
#[allow(dead_code)]
pub fn assert_pc(system: &System, expected: u16) {
    let actual = system.pc();
    assert_eq!(
        actual, expected,
        "PC mismatch: expected 0x{:04X}, got 0x{:04X}",
        expected, actual
    );
}

/// Assert memory holds `expected` starting at `addr`
#[allow(dead_code)]
pub fn assert_memory(system: &System, addr: usize, expected: &[u8]) {
    let actual = &system.bus().memory.as_slice()[addr..addr + expected.len()];
    assert_eq!(
        actual, expected,
        "Memory at 0x{:04X} mismatch: expected {:02X?}, got {:02X?}",
        addr, expected, actual
    );
}

/// Assert the number of lit pixels
#[allow(dead_code)]
pub fn assert_lit_count(system: &System, expected: usize) {
    let actual = system.display().lit_count();
    assert_eq!(
        actual, expected,
        "Lit pixel mismatch: expected {}, got {}",
        expected, actual
    );
}
