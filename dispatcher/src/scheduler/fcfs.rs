/// ----- FC-FS SCHEDULER -----
/// First-come, first-served: a pickup goes to the elevator that can open
/// its door on the requested floor soonest, and every request is appended
/// to the tail of the queue. Whoever asks first is served first relative
/// to everything that elevator already accepted.

use log::debug;

use shared_resources::error::DispatchError;
use shared_resources::request::{Request, RequestKind};

use elevator::ElevatorController;

use super::{enqueue_restart, Controllers};

pub fn enqueue_pickup(request: &Request, controllers: &mut Controllers) -> Result<(), DispatchError> {
    let no_controller = DispatchError::NoControllerAvailable {
        kind: request.kind(),
        floor: request.floor(),
    };
    if controllers.is_empty() {
        return Err(no_controller);
    }
    if !request.kind().is_pickup() {
        return Err(DispatchError::UnsupportedRequest(request.kind()));
    }

    // min_by_key keeps the first of equally cheap elevators
    let chosen_id = controllers
        .values()
        .map(|controller| (controller.id(), controller.steps_to_reach(request.floor())))
        .min_by_key(|&(_, steps)| steps)
        .map(|(id, _)| id);
    let controller = chosen_id
        .and_then(|id| controllers.get_mut(&id))
        .ok_or(no_controller)?;

    debug!("FC-FS assigned {} to elevator {}", request, controller.id());
    append_unless_floor_enqueued(request, controller);
    Ok(())
}

pub fn enqueue_internal(request: &Request, controller: &mut ElevatorController) -> Result<(), DispatchError> {
    match request.kind() {
        RequestKind::Floor => {
            append_unless_floor_enqueued(request, controller);
            Ok(())
        },
        RequestKind::Restart => enqueue_restart(request, controller),
        kind => Err(DispatchError::UnsupportedRequest(kind)),
    }
}

fn append_unless_floor_enqueued(request: &Request, controller: &mut ElevatorController) {
    if !controller.contains_floor(request.floor()) {
        controller.push_request(request.clone());
    }
}
