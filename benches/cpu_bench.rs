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

use chip8vm::core::bus::Bus;
use chip8vm::core::config::Config;
use chip8vm::core::cpu::{Instruction, CPU};
use chip8vm::core::system::System;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn seeded_config() -> Config {
    Config {
        rng_seed: Some(1),
        ..Config::default()
    }
}

fn cpu_step_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_step", |b| {
        let config = seeded_config();
        let mut cpu = CPU::new(&config);
        let mut bus = Bus::from_config(&config);

        // ADD V0, 1
        bus.memory.write_bytes(0x200, &[0x70, 0x01]).unwrap();

        b.iter(|| {
            cpu.reset();
            black_box(cpu.step(&mut bus).unwrap());
        });
    });
}

fn decode_benchmark(c: &mut Criterion) {
    c.bench_function("decode_all_words", |b| {
        b.iter(|| {
            let mut defined = 0u32;
            for word in 0..=u16::MAX {
                if Instruction::decode(black_box(word)).is_some() {
                    defined += 1;
                }
            }
            black_box(defined)
        });
    });
}

fn draw_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    for rows in [1u8, 5, 15] {
        group.bench_with_input(BenchmarkId::new("sprite_rows", rows), &rows, |b, &rows| {
            let config = seeded_config();
            let mut cpu = CPU::new(&config);
            let mut bus = Bus::from_config(&config);

            // LD I, 0x300; DRW V0, V1, rows
            bus.memory.write_bytes(0x300, &[0xFF; 15]).unwrap();
            bus.memory
                .write_bytes(0x200, &[0xA3, 0x00, 0xD0, 0x10 | rows])
                .unwrap();

            b.iter(|| {
                cpu.reset();
                cpu.step(&mut bus).unwrap();
                black_box(cpu.step(&mut bus).unwrap());
            });
        });
    }

    group.finish();
}

fn system_benchmark(c: &mut Criterion) {
    c.bench_function("system_loop_1000_steps", |b| {
        let mut system = System::new(seeded_config()).unwrap();

        // 0x200: LD V0, 0x00
        // 0x202: ADD V0, 1
        // 0x204: LD I, 0x300
        // 0x206: LD B, V0
        // 0x208: JP 0x202
        system
            .load_rom(&[0x60, 0x00, 0x70, 0x01, 0xA3, 0x00, 0xF0, 0x33, 0x12, 0x02])
            .unwrap();

        b.iter(|| {
            system.reset().unwrap();
            for _ in 0..1000 {
                system.step().unwrap();
            }
            black_box(system.cpu().reg(0))
        });
    });
}

criterion_group!(
    benches,
    cpu_step_benchmark,
    decode_benchmark,
    draw_benchmark,
    system_benchmark
);
criterion_main!(benches);
