pub mod generator;
pub mod scheduler;
pub mod simulation;
pub mod system;

pub use scheduler::Scheduler;
pub use system::DispatchSystem;
