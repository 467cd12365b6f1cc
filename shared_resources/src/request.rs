/// ----- REQUEST MODULE -----
/// Immutable description of something asked of the elevator system. Pickup
/// calls come from a hall and are not yet bound to an elevator, floor and
/// restart requests are already bound to one, and an evacuation concerns
/// every elevator at once.

use std::fmt;

use crate::{ElevatorId, Floor};

pub const EVACUATION_FLOOR: Floor = 0;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    PickupUp,
    PickupDown,
    Floor,
    Restart,
    Evacuation,
}

impl RequestKind {
    pub fn is_pickup(self) -> bool {
        matches!(self, RequestKind::PickupUp | RequestKind::PickupDown)
    }

    pub fn is_internal(self) -> bool {
        matches!(self, RequestKind::Floor | RequestKind::Restart)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::PickupUp => "up",
            RequestKind::PickupDown => "down",
            RequestKind::Floor => "floor",
            RequestKind::Restart => "restart",
            RequestKind::Evacuation => "evacuation",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two requests are equal iff kind, target elevator and floor all match.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    kind: RequestKind,
    target: Option<ElevatorId>,
    floor: Floor,
}

impl Request {
    pub fn pickup_up(floor: Floor) -> Self {
        Request { kind: RequestKind::PickupUp, target: None, floor: floor }
    }

    pub fn pickup_down(floor: Floor) -> Self {
        Request { kind: RequestKind::PickupDown, target: None, floor: floor }
    }

    pub fn cab(elevator: ElevatorId, floor: Floor) -> Self {
        Request { kind: RequestKind::Floor, target: Some(elevator), floor: floor }
    }

    pub fn restart(elevator: ElevatorId, floor: Floor) -> Self {
        Request { kind: RequestKind::Restart, target: Some(elevator), floor: floor }
    }

    pub fn evacuation() -> Self {
        Request { kind: RequestKind::Evacuation, target: None, floor: EVACUATION_FLOOR }
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn target(&self) -> Option<ElevatorId> {
        self.target
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(id) => write!(f, "{} request to floor {} for elevator {}", self.kind, self.floor, id),
            None => write!(f, "{} request to floor {}", self.kind, self.floor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickups_are_unrouted() {
        assert_eq!(Request::pickup_up(4).target(), None);
        assert_eq!(Request::pickup_down(4).target(), None);
        assert!(Request::pickup_up(4).kind().is_pickup());
    }

    #[test]
    fn internal_requests_carry_their_elevator() {
        let request = Request::cab(3, 7);
        assert_eq!(request.target(), Some(3));
        assert_eq!(request.floor(), 7);
        assert!(request.kind().is_internal());
        assert!(Request::restart(1, 0).kind().is_internal());
    }

    #[test]
    fn evacuation_goes_to_ground_floor() {
        let request = Request::evacuation();
        assert_eq!(request.kind(), RequestKind::Evacuation);
        assert_eq!(request.target(), None);
        assert_eq!(request.floor(), EVACUATION_FLOOR);
    }

    #[test]
    fn equality_compares_kind_target_and_floor() {
        assert_eq!(Request::cab(1, 5), Request::cab(1, 5));
        assert_ne!(Request::cab(1, 5), Request::cab(2, 5));
        assert_ne!(Request::pickup_up(5), Request::pickup_down(5));
        assert_ne!(Request::restart(1, 5), Request::cab(1, 5));
    }

    #[test]
    fn kinds_round_trip_through_json() {
        let kinds = [
            RequestKind::PickupUp,
            RequestKind::PickupDown,
            RequestKind::Floor,
            RequestKind::Restart,
            RequestKind::Evacuation,
        ];
        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(serde_json::from_str::<RequestKind>(&json).unwrap(), kind);
        }
    }
}
