use rand::rngs::StdRng;
use rand::SeedableRng;

use dispatcher::generator::generate_requests;
use dispatcher::simulation::Simulation;
use shared_resources::config::SimulationConfig;

fn config(elevators: u8, floors: i32) -> SimulationConfig {
    SimulationConfig {
        elevators: elevators,
        floors: floors,
        ..SimulationConfig::default()
    }
}

#[test]
fn random_load_is_fully_served_by_both_schedulers() {
    let config = config(5, 20);
    let mut simulation = Simulation::new(&config);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let requests = generate_requests(&mut rng, 20, config.elevators, config.floors);
        simulation.add_requests(&requests);
        simulation.step(15);
    }
    simulation.drain();

    assert!(!simulation.has_pending_work());
    let summary = simulation.summary();
    assert_eq!(summary.total_requests, 200);
    assert!(summary.steps_fcfs > 0);
    assert!(summary.steps_scanner > 0);
    assert!(summary.average_steps_fcfs() > 0.0);

    let (fcfs, scanner) = simulation.statuses();
    assert!(fcfs.iter().chain(scanner.iter()).all(|status| !status.is_moving()));
    assert!(fcfs.iter().chain(scanner.iter()).all(|status| (0..=20).contains(&status.current_floor)));
}

#[test]
fn same_seed_gives_same_summary() {
    let run = |seed| {
        let config = config(3, 12);
        let mut simulation = Simulation::new(&config);
        let mut rng = StdRng::seed_from_u64(seed);
        let requests = generate_requests(&mut rng, 60, config.elevators, config.floors);
        simulation.add_requests(&requests);
        simulation.drain();
        simulation.summary()
    };
    assert_eq!(run(9), run(9));
}

#[test]
fn summary_serializes_as_camel_case() {
    let simulation = Simulation::new(&config(2, 5));
    let json = serde_json::to_value(simulation.summary()).unwrap();
    assert_eq!(json["totalRequests"], 0);
    assert_eq!(json["stepsFcfs"], 0);
    assert_eq!(json["stepsScanner"], 0);
}
