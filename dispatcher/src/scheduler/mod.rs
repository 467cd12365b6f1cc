/// ----- SCHEDULER MODULE -----
/// Decides which elevator receives an incoming request and where in that
/// elevator's queue the request goes. Two policies exist: first-come
/// first-served and a LOOK-style scanner. Restart and evacuation behave the
/// same under both and are implemented once here.

use std::collections::BTreeMap;

use shared_resources::error::DispatchError;
use shared_resources::request::{Request, RequestKind};
use shared_resources::ElevatorId;

use elevator::ElevatorController;

pub mod fcfs;
pub mod scanner;

/// Registered controllers, iterated in ascending id order. That order is
/// the tie-break wherever two elevators are equally good.
pub type Controllers = BTreeMap<ElevatorId, ElevatorController>;

#[derive(serde::Serialize, serde::Deserialize, clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Scheduler {
    Fcfs,
    Scanner,
}

impl Scheduler {
    /// Assigns an external `PickupUp`/`PickupDown` request to one of the
    /// controllers.
    pub fn enqueue_pickup(self, request: &Request, controllers: &mut Controllers) -> Result<(), DispatchError> {
        match self {
            Scheduler::Fcfs => fcfs::enqueue_pickup(request, controllers),
            Scheduler::Scanner => scanner::enqueue_pickup(request, controllers),
        }
    }

    /// Enqueues a `Floor` or `Restart` request on the elevator it names.
    /// `None` means that elevator is not registered.
    pub fn enqueue_internal(self, request: &Request, controller: Option<&mut ElevatorController>) -> Result<(), DispatchError> {
        let controller = controller.ok_or(DispatchError::ControllerUnavailable(request.target()))?;
        match self {
            Scheduler::Fcfs => fcfs::enqueue_internal(request, controller),
            Scheduler::Scanner => scanner::enqueue_internal(request, controller),
        }
    }

    pub fn enqueue_evacuation(self, request: &Request, controllers: &mut Controllers) -> Result<(), DispatchError> {
        enqueue_evacuation(request, controllers)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheduler::Fcfs => "FC-FS",
            Scheduler::Scanner => "Scanner",
        }
    }
}

/// Replaces the whole queue of `controller` with the restart request.
pub fn enqueue_restart(request: &Request, controller: &mut ElevatorController) -> Result<(), DispatchError> {
    if request.kind() != RequestKind::Restart {
        return Err(DispatchError::InvalidRestartRequest(request.kind()));
    }
    controller.replace_queue(request.clone());
    Ok(())
}

/// Every elevator abandons its work and heads to the evacuation floor.
pub fn enqueue_evacuation(request: &Request, controllers: &mut Controllers) -> Result<(), DispatchError> {
    if request.kind() != RequestKind::Evacuation {
        return Err(DispatchError::InvalidEvacuationRequest(request.kind()));
    }
    for controller in controllers.values_mut() {
        controller.replace_queue(request.clone());
    }
    Ok(())
}
