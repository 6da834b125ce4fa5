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

//! Test ROM utilities and small test programs
//!
//! Programs are written as instruction words and flattened to big-endian
//! bytes, ready for `System::load_rom`.

/// Flatten instruction words into ROM bytes
#[allow(dead_code)]
pub fn assemble(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_be_bytes()).collect()
}

/// Clear, load, add, loop
#[allow(dead_code)]
pub fn test_program_counter_loop() -> Vec<u8> {
    assemble(&[
        0x00E0, // CLS
        0x600F, // LD V0, 0x0F
        0x7005, // ADD V0, 0x05
        0x1200, // JP 0x200
    ])
}

/// Subroutine that doubles V0 three times
#[allow(dead_code)]
pub fn test_program_subroutine() -> Vec<u8> {
    assemble(&[
        0x6003, // 0x200: LD V0, 3
        0x220C, // 0x202: CALL 0x20C
        0x220C, // 0x204: CALL 0x20C
        0x220C, // 0x206: CALL 0x20C
        0x120A, // 0x208: JP 0x20A (spin)
        0x120A, // 0x20A: JP 0x20A
        0x8004, // 0x20C: ADD V0, V0
        0x00EE, // 0x20E: RET
    ])
}

/// BCD of 234 stored at 0x300 and read back into V0..V2
#[allow(dead_code)]
pub fn test_program_bcd() -> Vec<u8> {
    assemble(&[
        0x63EA, // LD V3, 234
        0xA300, // LD I, 0x300
        0xF333, // LD B, V3
        0xF265, // LD V2, [I]
        0x120A, // JP 0x20A
        0x120A, // JP 0x20A
    ])
}

/// Draw glyphs "0" and "1" next to each other
#[allow(dead_code)]
pub fn test_program_two_digits() -> Vec<u8> {
    assemble(&[
        0x6000, // LD V0, 0
        0xF029, // LD F, V0
        0x6100, // LD V1, 0 (x)
        0x6200, // LD V2, 0 (y)
        0xD125, // DRW V1, V2, 5
        0x6001, // LD V0, 1
        0xF029, // LD F, V0
        0x6108, // LD V1, 8
        0xD125, // DRW V1, V2, 5
        0x1212, // JP 0x212
    ])
}

/// Set the delay timer to 5, spin until it reaches zero, then set V2
#[allow(dead_code)]
pub fn test_program_delay_wait() -> Vec<u8> {
    assemble(&[
        0x6005, // 0x200: LD V0, 5
        0xF015, // 0x202: LD DT, V0
        0xF107, // 0x204: LD V1, DT
        0x3100, // 0x206: SE V1, 0
        0x1204, // 0x208: JP 0x204
        0x6201, // 0x20A: LD V2, 1
        0x120C, // 0x20C: JP 0x20C
    ])
}

/// Wait for a key, then copy it to V1 and beep for that many ticks
#[allow(dead_code)]
pub fn test_program_key_beep() -> Vec<u8> {
    assemble(&[
        0xF00A, // 0x200: LD V0, K
        0x8100, // 0x202: LD V1, V0
        0xF018, // 0x204: LD ST, V0
        0x1206, // 0x206: JP 0x206
    ])
}
