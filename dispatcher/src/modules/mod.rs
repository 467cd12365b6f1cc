use std::io::{stdin, stdout, Result};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{never, select, tick, unbounded};

use shared_resources::config::SimulationConfig;
use shared_resources::request::Request;
use shared_resources::ElevatorId;

use elevator::Action;

use dispatcher::generator::generate_requests;
use dispatcher::simulation::Simulation;
use dispatcher::{DispatchSystem, Scheduler};

pub mod input;

use crate::utilities::debug;
use input::Command;

const DEMO_TICKS: usize = 5;

pub fn run(config: SimulationConfig) -> Result<()> {
    let mut stdout = stdout();
    let mut rng = rand::thread_rng();
    let mut simulation = Simulation::new(&config);

    // INITIALIZE CHANNELS
    let (command_tx, command_rx) = unbounded();
    let ticker = match config.tick_ms {
        Some(ms) => tick(Duration::from_millis(ms)),
        None => never(),
    };

    // INITIALIZE THREAD FOR USER INPUT
    thread::spawn(move || input::main(stdin().lock(), command_tx));

    println!("Simulating {} elevators over floors 0-{}", simulation.elevators(), simulation.floors());
    println!("{}", input::USAGE);

    loop {
        select! {
            recv(command_rx) -> command => {
                match command.unwrap_or(Command::End) {
                    Command::Generate(count) => {
                        let requests = generate_requests(&mut rng, count, simulation.elevators(), simulation.floors());
                        simulation.add_requests(&requests);
                    },
                    Command::Step(steps) => simulation.step(steps),
                    Command::Status => {
                        let [fcfs, scanner] = simulation.systems();
                        debug::printstatus(&mut stdout, fcfs.scheduler(), &fcfs.status_snapshot())?;
                        debug::printstatus(&mut stdout, scanner.scheduler(), &scanner.status_snapshot())?;
                    },
                    Command::Call(direction, floor) => simulation.call(direction, floor),
                    Command::Floor(id, floor) => simulation.floor(id, floor),
                    Command::Evacuate => simulation.evacuate(),
                    Command::Force(id, current_floor, destination_floor) => {
                        simulation.force(id, current_floor, destination_floor)
                    },
                    Command::Usage => println!("{}", input::USAGE),
                    Command::End => break,
                }
            },
            recv(ticker) -> _ => simulation.step(1),
        }
    }

    simulation.drain();
    println!("{}", simulation.summary());
    Ok(())
}

pub fn demo(config: SimulationConfig, scheduler: Scheduler) -> Result<()> {
    let mut stdout = stdout();
    let mut system = DispatchSystem::with_limit(scheduler, config.elevator_limit);
    for id in (0..=ElevatorId::MAX).take(config.elevator_limit) {
        system.register(id, config.start_floor);
    }

    system.submit(Request::pickup_down(10));
    system.submit(Request::pickup_up(6));
    system.submit(Request::cab(2, 7));

    for _ in 0..DEMO_TICKS {
        for (id, action) in system.tick() {
            if action != Action::Wait {
                println!("Elevator {}: {:?}", id, action);
            }
        }
    }
    for status in system.status_snapshot() {
        println!("{}", status);
    }

    system.force_status(0, 1, 8);
    println!("{}", system.controller(0).map(|c| c.status().to_string()).unwrap_or_default());

    debug::printstatus(&mut stdout, system.scheduler(), &system.status_snapshot())?;
    Ok(())
}
