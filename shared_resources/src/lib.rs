pub mod config;
pub mod direction;
pub mod elevator_status;
pub mod error;
pub mod request;

pub type ElevatorId = u8;
pub type Floor = i32;
