pub mod controller;
pub mod cost;
mod elevator_state;
pub mod fsm;

pub use controller::ElevatorController;
pub use fsm::Action;
