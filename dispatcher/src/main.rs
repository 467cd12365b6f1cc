use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::error;

use shared_resources::config::{SimulationConfig, DEFAULT_CONFIG_PATH};
use shared_resources::Floor;

use dispatcher::Scheduler;

mod modules;
mod utilities;

#[derive(Debug, Parser)]
#[command(name = "dispatcher", about = "Elevator dispatch simulator comparing FC-FS and Scanner scheduling")]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long, short)]
    elevators: Option<u8>,

    #[arg(long, short)]
    floors: Option<Floor>,

    /// Advance the simulation on a timer instead of only on `step`
    #[arg(long)]
    tick_ms: Option<u64>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Interactive simulation driven by commands on stdin
    Simulate,
    /// Short scripted run against a single dispatch system
    Demo {
        #[arg(long, value_enum, default_value_t = Scheduler::Fcfs)]
        scheduler: Scheduler,
    },
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // READ CONFIGURATION
    let mut config = match SimulationConfig::get(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        },
    };
    if let Some(elevators) = cli.elevators {
        config.elevators = elevators;
    }
    if let Some(floors) = cli.floors {
        config.floors = floors;
    }
    if cli.tick_ms.is_some() {
        config.tick_ms = cli.tick_ms;
    }
    if let Err(e) = config.validate() {
        error!("{}", e);
        std::process::exit(1);
    }

    match cli.mode.unwrap_or(Mode::Simulate) {
        Mode::Simulate => modules::run(config),
        Mode::Demo { scheduler } => modules::demo(config, scheduler),
    }
}
