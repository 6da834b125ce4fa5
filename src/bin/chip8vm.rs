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

use chip8vm::core::config::{Config, Quirks};
use chip8vm::core::error::Result;
use chip8vm::core::system::System;
use chip8vm::frontend::{
    Audio, Bell, InputSource, Mute, NoInput, NullRenderer, Renderer, ScriptedInput,
    TerminalRenderer,
};
use clap::Parser;
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

/// CHIP-8 virtual machine
#[derive(Parser)]
#[command(name = "chip8vm")]
#[command(about = "CHIP-8 virtual machine", long_about = None)]
struct Args {
    /// Path to a CHIP-8 program (raw bytes, loaded at the program start)
    rom: PathBuf,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Instructions per second (overrides the configuration)
    #[arg(long)]
    ips: Option<u32>,

    /// Timer ticks and frames per second (overrides the configuration)
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for the random number instruction
    #[arg(long)]
    seed: Option<u64>,

    /// Use the original COSMAC VIP instruction behaviour
    #[arg(long)]
    cosmac: bool,

    /// Stop after this many frames (runs until interrupted otherwise)
    #[arg(short = 'f', long)]
    frames: Option<u64>,

    /// Draw frames to the terminal
    #[arg(short = 'd', long)]
    display: bool,

    /// Do not ring the terminal bell for the sound timer
    #[arg(long)]
    mute: bool,

    /// Keys to press, as QWERTY characters (1234/qwer/asdf/zxcv)
    #[arg(short = 'k', long)]
    keys: Option<String>,

    /// Polls between scripted key presses
    #[arg(long, default_value = "350")]
    key_interval: u32,
}

fn build_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };

    if let Some(ips) = args.ips {
        config.instructions_per_second = ips;
    }
    if let Some(fps) = args.fps {
        config.frames_per_second = fps;
    }
    if args.seed.is_some() {
        config.rng_seed = args.seed;
    }
    if args.cosmac {
        config.quirks = Quirks::cosmac();
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    // Load .env file if present (RUST_LOG and friends)
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("chip8vm v{}", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    let config = build_config(&args)?;
    info!(
        "{} instructions/s, {} frames/s",
        config.instructions_per_second, config.frames_per_second
    );
    let progress_interval = config.frames_per_second as u64 * 10;

    let mut system = System::new(config)?;

    info!("Loading ROM from: {}", args.rom.display());
    if let Err(e) = system.load_rom_file(&args.rom) {
        error!("Failed to load ROM: {}", e);
        return Err(e);
    }
    system.reset()?;

    let mut renderer: Box<dyn Renderer> = if args.display {
        Box::new(TerminalRenderer::new(io::stdout()).with_cursor_home(true))
    } else {
        Box::new(NullRenderer)
    };
    let mut audio: Box<dyn Audio> = if args.mute {
        Box::new(Mute)
    } else {
        Box::new(Bell::new(io::stderr()))
    };
    let mut input: Box<dyn InputSource> = match &args.keys {
        Some(keys) => Box::new(ScriptedInput::from_chars(keys, args.key_interval)),
        None => Box::new(NoInput),
    };

    info!("Starting emulation...");

    loop {
        let now = Instant::now();
        let admission =
            match system.run_once(now, renderer.as_mut(), audio.as_mut(), input.as_mut()) {
                Ok(admission) => admission,
                Err(e) => {
                    error!("Error at PC=0x{:04X}: {}", system.pc(), e);
                    error!("Instruction count: {}", system.instructions());
                    system.cpu().dump_registers();
                    return Err(e);
                }
            };

        if admission.frame {
            let frames = system.frames();
            if frames % progress_interval == 0 {
                info!(
                    "Progress: {} frames | {} instructions | PC: 0x{:04X}",
                    frames,
                    system.instructions(),
                    system.pc()
                );
            }
            if args.frames.is_some_and(|limit| frames >= limit) {
                break;
            }
        }

        // Park until one of the gates can admit work again
        let now = Instant::now();
        let deadline = system.next_deadline(now);
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }

    // Final status
    info!("Emulation stopped");
    info!("Total instructions: {}", system.instructions());
    info!("Total frames: {}", system.frames());
    info!("Final PC: 0x{:04X}", system.pc());

    Ok(())
}
