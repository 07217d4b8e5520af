// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 mipsim contributors
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

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use mipsim::core::error::Result;
use mipsim::core::{loader, Computer, Step};
use serde::Serialize;

/// MIPS subset simulator
#[derive(Parser)]
#[command(name = "mipsim")]
#[command(about = "MIPS subset simulator", long_about = None)]
struct Args {
    /// Path to the program file (one 32-bit binary word per line)
    program_file: PathBuf,

    /// Maximum number of fetch/execute steps before giving up
    #[arg(short = 'n', long, default_value = "100000")]
    max_steps: u64,

    /// Print the final state as JSON instead of the table renderings
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FinalState<'a> {
    pc: usize,
    steps: u64,
    registers: &'a [i32],
    memory: &'a [i32],
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("mipsim v{}", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    info!("Loading program from: {}", args.program_file.display());

    let mut computer = Computer::new();
    let loaded = loader::load_program_file(&mut computer, &args.program_file)?;

    info!("{} instructions loaded", loaded);

    if !args.json {
        println!("Instructions:");
        println!("{}", computer.display_instructions());
    }

    // Run to halt, bounded so a program that keeps branching into the valid
    // range cannot hang the driver.
    let mut steps = 0;
    loop {
        if steps >= args.max_steps {
            warn!(
                "Step limit of {} reached at pc={}, stopping",
                args.max_steps,
                computer.pc()
            );
            break;
        }
        match computer.step() {
            Step::Executed => steps += 1,
            Step::Halted => break,
        }
    }

    info!("Execution finished after {} steps, pc={}", steps, computer.pc());

    if args.json {
        let state = FinalState {
            pc: computer.pc(),
            steps,
            registers: computer.registers(),
            memory: computer.memory(),
        };
        match serde_json::to_string_pretty(&state) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => warn!("Failed to render final state as JSON: {}", e),
        }
    } else {
        println!("Registers:");
        println!("{}", computer.display_registers());
        println!("Memory:");
        println!("{}", computer.display_memory());
    }

    Ok(())
}
