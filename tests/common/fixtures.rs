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

//! Test fixtures for common test scenarios

use chip8vm::core::bus::Bus;
use chip8vm::core::config::Config;
use chip8vm::core::cpu::CPU;
use chip8vm::core::system::System;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Default configuration with a fixed random seed
#[allow(dead_code)]
pub fn seeded_config() -> Config {
    Config {
        rng_seed: Some(0x5EED),
        ..Config::default()
    }
}

/// Create a CPU with a matching bus for testing
#[allow(dead_code)]
pub fn create_cpu_with_bus() -> (CPU, Bus) {
    let config = seeded_config();
    (CPU::new(&config), Bus::from_config(&config))
}

/// Create a System with `program` loaded
#[allow(dead_code)]
pub fn create_test_system(program: &[u8]) -> System {
    let mut system = System::new(seeded_config()).expect("default config is valid");
    system.load_rom(program).expect("program fits in memory");
    system
}

/// Execute `count` instructions, panicking on the first error
#[allow(dead_code)]
pub fn run_steps(system: &mut System, count: usize) {
    for i in 0..count {
        if let Err(e) = system.step() {
            panic!("step {} failed at PC=0x{:04X}: {}", i, system.pc(), e);
        }
    }
}

/// Write `bytes` to a file inside a fresh temporary directory
///
/// The directory is removed when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn write_temp_file(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    file.write_all(bytes).expect("Failed to write temp file");
    (dir, path)
}
