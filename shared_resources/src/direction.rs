use crate::request::RequestKind;
use crate::Floor;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel for a leg from `from` to `to`. A leg that does
    /// not move counts as going down.
    pub fn between(from: Floor, to: Floor) -> Self {
        if from < to { Direction::Up } else { Direction::Down }
    }

    pub fn of_pickup(kind: RequestKind) -> Option<Self> {
        match kind {
            RequestKind::PickupUp => Some(Direction::Up),
            RequestKind::PickupDown => Some(Direction::Down),
            RequestKind::Floor | RequestKind::Restart | RequestKind::Evacuation => None,
        }
    }
}
