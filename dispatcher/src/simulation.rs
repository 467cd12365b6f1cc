/// ----- SIMULATION MODULE -----
/// Runs the same request stream through one FC-FS system and one Scanner
/// system side by side and counts how many ticks each needs to finish its
/// work. A system only advances while it has pending requests.

use std::fmt;

use shared_resources::config::SimulationConfig;
use shared_resources::direction::Direction;
use shared_resources::elevator_status::ElevatorStatus;
use shared_resources::request::Request;
use shared_resources::{ElevatorId, Floor};

use crate::scheduler::Scheduler;
use crate::system::DispatchSystem;

#[derive(Debug, Clone)]
pub struct Simulation {
    elevators: u8,
    floors: Floor,
    system_fcfs: DispatchSystem,
    system_scanner: DispatchSystem,
    steps_fcfs: u64,
    steps_scanner: u64,
    total_requests: usize,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub elevators: u8,
    pub floors: Floor,
    pub total_requests: usize,
    pub steps_fcfs: u64,
    pub steps_scanner: u64,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Self {
        let mut system_fcfs = DispatchSystem::with_limit(Scheduler::Fcfs, config.elevator_limit);
        let mut system_scanner = DispatchSystem::with_limit(Scheduler::Scanner, config.elevator_limit);
        for id in 0..config.elevators {
            system_fcfs.register(id, config.start_floor);
            system_scanner.register(id, config.start_floor);
        }
        Simulation {
            elevators: config.elevators,
            floors: config.floors,
            system_fcfs: system_fcfs,
            system_scanner: system_scanner,
            steps_fcfs: 0,
            steps_scanner: 0,
            total_requests: 0,
        }
    }

    pub fn elevators(&self) -> u8 {
        self.elevators
    }

    pub fn floors(&self) -> Floor {
        self.floors
    }

    pub fn systems(&self) -> [&DispatchSystem; 2] {
        [&self.system_fcfs, &self.system_scanner]
    }

    pub fn add_requests(&mut self, requests: &[Request]) {
        for request in requests {
            self.submit(request.clone());
        }
    }

    pub fn submit(&mut self, request: Request) {
        self.system_fcfs.submit(request.clone());
        self.system_scanner.submit(request);
        self.total_requests += 1;
    }

    pub fn call(&mut self, direction: Direction, floor: Floor) {
        let request = match direction {
            Direction::Up => Request::pickup_up(floor),
            Direction::Down => Request::pickup_down(floor),
        };
        self.submit(request);
    }

    pub fn floor(&mut self, id: ElevatorId, floor: Floor) {
        self.submit(Request::cab(id, floor));
    }

    pub fn evacuate(&mut self) {
        self.submit(Request::evacuation());
    }

    /// Not counted as a request.
    pub fn force(&mut self, id: ElevatorId, current_floor: Floor, destination_floor: Floor) {
        self.system_fcfs.force_status(id, current_floor, destination_floor);
        self.system_scanner.force_status(id, current_floor, destination_floor);
    }

    pub fn step(&mut self, steps: u64) {
        for _ in 0..steps {
            if self.system_fcfs.has_pending_work() {
                self.system_fcfs.tick();
                self.steps_fcfs += 1;
            }
            if self.system_scanner.has_pending_work() {
                self.system_scanner.tick();
                self.steps_scanner += 1;
            }
        }
    }

    pub fn drain(&mut self) {
        while self.system_scanner.has_pending_work() {
            self.system_scanner.tick();
            self.steps_scanner += 1;
        }
        while self.system_fcfs.has_pending_work() {
            self.system_fcfs.tick();
            self.steps_fcfs += 1;
        }
    }

    pub fn has_pending_work(&self) -> bool {
        self.system_fcfs.has_pending_work() || self.system_scanner.has_pending_work()
    }

    pub fn statuses(&self) -> (Vec<ElevatorStatus>, Vec<ElevatorStatus>) {
        (self.system_fcfs.status_snapshot(), self.system_scanner.status_snapshot())
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            elevators: self.elevators,
            floors: self.floors,
            total_requests: self.total_requests,
            steps_fcfs: self.steps_fcfs,
            steps_scanner: self.steps_scanner,
        }
    }
}

impl SimulationSummary {
    fn average(&self, steps: u64) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            steps as f64 / self.total_requests as f64
        }
    }

    pub fn average_steps_fcfs(&self) -> f64 {
        self.average(self.steps_fcfs)
    }

    pub fn average_steps_scanner(&self) -> f64 {
        self.average(self.steps_scanner)
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f, "Simulation summary:")?;
        writeln!(f, "---")?;
        writeln!(f, "Elevators: {}", self.elevators)?;
        writeln!(f, "Floors: {}", self.floors)?;
        writeln!(f, "Total number of requests received: {}", self.total_requests)?;
        writeln!(f, "---")?;
        writeln!(f, "Total steps {}: {}", Scheduler::Fcfs.as_str(), self.steps_fcfs)?;
        writeln!(f, "Average steps per request: {:.3}", self.average_steps_fcfs())?;
        writeln!(f, "---")?;
        writeln!(f, "Total steps {}: {}", Scheduler::Scanner.as_str(), self.steps_scanner)?;
        write!(f, "Average steps per request: {:.3}", self.average_steps_scanner())
    }
}
