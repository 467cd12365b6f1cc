use std::fmt;

use crate::{ElevatorId, Floor};

/// Read-only snapshot of one elevator, computed live from its controller.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ElevatorStatus {
    pub id: ElevatorId,
    pub current_floor: Floor,
    pub destination_floor: Floor,
}

impl ElevatorStatus {
    pub fn new(id: ElevatorId, current_floor: Floor, destination_floor: Floor) -> Self {
        ElevatorStatus {
            id: id,
            current_floor: current_floor,
            destination_floor: destination_floor,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.current_floor != self.destination_floor
    }
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elevator status:\tID: {}\tCurrent floor: {}\tDestination floor: {}",
            self.id, self.current_floor, self.destination_floor
        )
    }
}
