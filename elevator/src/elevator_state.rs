use shared_resources::{ElevatorId, Floor};

/// Physical state of one elevator. Only its owning controller mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    id: ElevatorId,
    floor: Floor,
    door_open: bool,
}

impl ElevatorState {
    pub fn new(id: ElevatorId, floor: Floor) -> Self {
        ElevatorState {
            id: id,
            floor: floor,
            door_open: true,
        }
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn is_door_open(&self) -> bool {
        self.door_open
    }

    pub(crate) fn set_floor(&mut self, floor: Floor) {
        self.floor = floor;
    }

    pub(crate) fn open_door(&mut self) {
        self.door_open = true;
    }

    pub(crate) fn close_door(&mut self) {
        self.door_open = false;
    }

    pub(crate) fn move_up(&mut self) {
        self.floor += 1;
    }

    pub(crate) fn move_down(&mut self) {
        self.floor -= 1;
    }
}
