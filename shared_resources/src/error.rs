use thiserror::Error;

use crate::request::RequestKind;
use crate::{ElevatorId, Floor};

/// Everything that can make the dispatcher refuse a request. None of these
/// are fatal: the system logs them and drops the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("failed to find an available elevator for {kind} request to floor {floor}")]
    NoControllerAvailable { kind: RequestKind, floor: Floor },

    #[error("elevator {0:?} is not available to process the request")]
    ControllerUnavailable(Option<ElevatorId>),

    #[error("unsupported {0} request received")]
    UnsupportedRequest(RequestKind),

    #[error("invalid restart request received: got {0} request")]
    InvalidRestartRequest(RequestKind),

    #[error("invalid evacuation request received: got {0} request")]
    InvalidEvacuationRequest(RequestKind),

    #[error("elevator {0} is already registered")]
    DuplicateElevator(ElevatorId),

    #[error("registration limit of {0} elevators reached")]
    RegistrationLimit(usize),

    #[error("elevator {0} is not registered")]
    UnknownElevator(ElevatorId),
}
