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

use super::*;

#[test]
fn test_memory_zeroed() {
    let memory = Memory::new();
    assert!(memory.as_slice().iter().all(|&b| b == 0));
    assert_eq!(memory.as_slice().len(), MEMORY_SIZE);
}

#[test]
fn test_read_write_byte() {
    let mut memory = Memory::new();
    memory.write_byte(0xABC, 0x5A).unwrap();
    assert_eq!(memory.read_byte(0xABC).unwrap(), 0x5A);
}

#[test]
fn test_last_byte_is_addressable() {
    let mut memory = Memory::new();
    memory.write_byte(0xFFF, 0x01).unwrap();
    assert_eq!(memory.read_byte(0xFFF).unwrap(), 0x01);
}

#[test]
fn test_out_of_bounds_byte() {
    let mut memory = Memory::new();
    assert!(matches!(
        memory.read_byte(0x1000),
        Err(EmulatorError::MemoryOutOfBounds { address: 0x1000 })
    ));
    assert!(matches!(
        memory.write_byte(0x1234, 0),
        Err(EmulatorError::MemoryOutOfBounds { address: 0x1234 })
    ));
}

#[test]
fn test_read_word_big_endian() {
    let mut memory = Memory::new();
    memory.write_bytes(0x200, &[0xA2, 0xF0]).unwrap();
    assert_eq!(memory.read_word(0x200).unwrap(), 0xA2F0);
}

#[test]
fn test_read_word_straddling_end() {
    let memory = Memory::new();
    assert!(matches!(
        memory.read_word(0xFFF),
        Err(EmulatorError::MemoryOutOfBounds { address: 0x1000 })
    ));
}

#[test]
fn test_write_bytes_is_all_or_nothing() {
    let mut memory = Memory::new();
    let result = memory.write_bytes(0xFFE, &[1, 2, 3]);
    assert!(result.is_err());
    assert_eq!(memory.read_byte(0xFFE).unwrap(), 0);
    assert_eq!(memory.read_byte(0xFFF).unwrap(), 0);
}

#[test]
fn test_load_font() {
    let mut memory = Memory::new();
    memory.load_font(0x050).unwrap();
    assert_eq!(memory.slice(0x050, FONT_SIZE).unwrap(), &FONT[..]);
    // Glyph "0" first row, glyph "F" last row
    assert_eq!(memory.read_byte(0x050).unwrap(), 0xF0);
    assert_eq!(memory.read_byte(0x050 + 79).unwrap(), 0x80);
}

#[test]
fn test_load_program() {
    let mut memory = Memory::new();
    memory.load_program(0x200, &[0x00, 0xE0, 0x12, 0x00]).unwrap();
    assert_eq!(memory.slice(0x200, 4).unwrap(), &[0x00, 0xE0, 0x12, 0x00]);
}

#[test]
fn test_load_program_fills_memory_exactly() {
    let mut memory = Memory::new();
    let rom = vec![0xAA; MEMORY_SIZE - 0x200];
    memory.load_program(0x200, &rom).unwrap();
    assert_eq!(memory.read_byte(0xFFF).unwrap(), 0xAA);
}

#[test]
fn test_load_program_too_large() {
    let mut memory = Memory::new();
    let rom = vec![0xAA; MEMORY_SIZE - 0x200 + 1];
    match memory.load_program(0x200, &rom) {
        Err(EmulatorError::RomTooLarge { size, capacity }) => {
            assert_eq!(size, 0xE01);
            assert_eq!(capacity, 0xE00);
        }
        other => panic!("expected RomTooLarge, got {:?}", other.map(|_| ())),
    }
    assert_eq!(memory.read_byte(0x200).unwrap(), 0);
}

#[test]
fn test_clear_from_keeps_interpreter_area() {
    let mut memory = Memory::new();
    memory.load_font(0x050).unwrap();
    memory.load_program(0x200, &[1, 2, 3]).unwrap();
    memory.clear_from(0x200);
    assert_eq!(memory.read_byte(0x050).unwrap(), 0xF0);
    assert_eq!(memory.read_byte(0x200).unwrap(), 0);
}

#[test]
fn test_check_range_zero_length() {
    assert!(Memory::check_range(0x2000, 0).is_ok());
}
