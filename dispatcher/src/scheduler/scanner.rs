/// ----- SCANNER SCHEDULER -----
/// Behaves like the LOOK disk scheduling algorithm. A request is placed in
/// the chosen queue so that the elevator only changes direction once
/// every request ahead of it in its current direction is served.
///
/// Pickups are assigned by the first search that yields an elevator:
///   1. an idle elevator standing on the requested floor
///   2. the closest idle elevator
///   3. the closest elevator already travelling in the requested direction
///      that has not yet passed the floor
///   4. the elevator with the cheapest scan-order cost

use log::debug;

use shared_resources::direction::Direction;
use shared_resources::error::DispatchError;
use shared_resources::request::{Request, RequestKind};
use shared_resources::{ElevatorId, Floor};

use elevator::ElevatorController;

use super::{enqueue_restart, Controllers};

pub fn enqueue_pickup(request: &Request, controllers: &mut Controllers) -> Result<(), DispatchError> {
    let direction = Direction::of_pickup(request.kind()).ok_or(DispatchError::UnsupportedRequest(request.kind()))?;

    let chosen_id = choose_controller(request, direction, controllers);
    let controller = chosen_id
        .and_then(|id| controllers.get_mut(&id))
        .ok_or(DispatchError::NoControllerAvailable {
            kind: request.kind(),
            floor: request.floor(),
        })?;

    debug!("Scanner assigned {} to elevator {}", request, controller.id());
    insert_in_scan_order(request, controller)
}

pub fn enqueue_internal(request: &Request, controller: &mut ElevatorController) -> Result<(), DispatchError> {
    match request.kind() {
        RequestKind::Floor => {
            if controller.contains_floor(request.floor()) {
                return Ok(());
            }
            insert_in_scan_order(request, controller)
        },
        RequestKind::Restart => enqueue_restart(request, controller),
        kind => Err(DispatchError::UnsupportedRequest(kind)),
    }
}

/// Inserts `request` just before the first leg of the queue that either
/// passes the requested floor without stopping there or turns around.
/// Without such a leg the request goes to the tail.
pub fn insert_in_scan_order(request: &Request, controller: &mut ElevatorController) -> Result<(), DispatchError> {
    if !matches!(request.kind(), RequestKind::PickupUp | RequestKind::PickupDown | RequestKind::Floor) {
        return Err(DispatchError::UnsupportedRequest(request.kind()));
    }
    if controller.contains(request) {
        return Ok(());
    }
    if controller.is_idle() {
        controller.push_request(request.clone());
        return Ok(());
    }

    match scan_insertion_index(request, controller) {
        Some(index) => {
            debug!("inserting {} at position {} for elevator {}", request, index, controller.id());
            controller.insert_request(index, request.clone());
        },
        None => controller.push_request(request.clone()),
    }
    Ok(())
}

fn scan_insertion_index(request: &Request, controller: &ElevatorController) -> Option<usize> {
    let requested_floor = request.floor();
    let mut from_floor = controller.current_floor();
    let mut previous_direction = Direction::between(from_floor, controller.destination_floor());

    for (index, enqueued) in controller.queue().iter().enumerate() {
        let to_floor = enqueued.floor();
        let current_direction = Direction::between(from_floor, to_floor);

        let missing_requested_floor = passes_without_stopping(request.kind(), from_floor, requested_floor, to_floor);
        let switching_direction = previous_direction != current_direction;
        if missing_requested_floor || switching_direction {
            return Some(index);
        }

        previous_direction = current_direction;
        from_floor = to_floor;
    }
    None
}

/// Whether the leg `from -> to` passes strictly over `requested` in a
/// direction that serves a request of `kind`. Floor requests are served
/// going either way.
fn passes_without_stopping(kind: RequestKind, from: Floor, requested: Floor, to: Floor) -> bool {
    let passing_up = from < requested && requested < to;
    let passing_down = from > requested && requested > to;
    match kind {
        RequestKind::PickupUp => passing_up,
        RequestKind::PickupDown => passing_down,
        RequestKind::Floor => passing_up || passing_down,
        RequestKind::Restart | RequestKind::Evacuation => false,
    }
}

fn choose_controller(request: &Request, direction: Direction, controllers: &Controllers) -> Option<ElevatorId> {
    find_idle_on_requested_floor(request, controllers)
        .or_else(|| find_closest_idle(request, controllers))
        .or_else(|| find_closest_passing(request, direction, controllers))
        .or_else(|| find_fastest_in_scan_order(request, controllers))
}

fn find_idle_on_requested_floor(request: &Request, controllers: &Controllers) -> Option<ElevatorId> {
    controllers
        .values()
        .find(|controller| controller.current_floor() == request.floor() && controller.is_idle())
        .map(|controller| controller.id())
}

fn find_closest_idle(request: &Request, controllers: &Controllers) -> Option<ElevatorId> {
    controllers
        .values()
        .filter(|controller| controller.is_idle())
        .min_by_key(|controller| controller.current_floor().abs_diff(request.floor()))
        .map(|controller| controller.id())
}

fn find_closest_passing(request: &Request, direction: Direction, controllers: &Controllers) -> Option<ElevatorId> {
    controllers
        .values()
        .filter(|controller| {
            let status = controller.status();
            match direction {
                Direction::Up => status.current_floor < status.destination_floor && status.current_floor <= request.floor(),
                Direction::Down => status.current_floor > status.destination_floor && status.current_floor >= request.floor(),
            }
        })
        .min_by_key(|controller| controller.current_floor().abs_diff(request.floor()))
        .map(|controller| controller.id())
}

fn find_fastest_in_scan_order(request: &Request, controllers: &Controllers) -> Option<ElevatorId> {
    controllers
        .values()
        .min_by_key(|controller| scan_order_cost(request, controller))
        .map(|controller| controller.id())
}

/// Floors travelled before `controller` would reach the requested floor
/// if it received `request` in scan order. Door ticks are not counted.
pub fn scan_order_cost(request: &Request, controller: &ElevatorController) -> u64 {
    if controller.contains(request) {
        return 0;
    }
    if controller.is_idle() {
        return u64::from(controller.current_floor().abs_diff(request.floor()));
    }

    let requested_floor = request.floor();
    let mut steps_required: u64 = 0;
    let mut current_floor = controller.current_floor();
    let mut previous_direction = Direction::between(current_floor, controller.destination_floor());

    for enqueued in controller.queue() {
        let next_floor = enqueued.floor();
        let current_direction = Direction::between(current_floor, next_floor);

        let missing_requested_floor = passes_without_stopping(request.kind(), current_floor, requested_floor, next_floor);
        let switching_direction = previous_direction != current_direction;
        if missing_requested_floor || switching_direction {
            break;
        }

        steps_required = steps_required.saturating_add(u64::from(current_floor.abs_diff(next_floor)));
        previous_direction = current_direction;
        current_floor = next_floor;
    }

    steps_required.saturating_add(u64::from(current_floor.abs_diff(requested_floor)))
}
