/// ----- CONTROLLER MODULE -----
/// Owns the state of one elevator together with its ordered queue of
/// pending requests. The head of the queue is the next target. Schedulers
/// only touch the queue through the push/insert/replace contract below;
/// the controller itself pops the head when it arrives.

use std::collections::VecDeque;

use shared_resources::elevator_status::ElevatorStatus;
use shared_resources::request::Request;
use shared_resources::{ElevatorId, Floor};

use crate::elevator_state::ElevatorState;

#[derive(Debug, Clone)]
pub struct ElevatorController {
    pub(crate) state: ElevatorState,
    pub(crate) queue: VecDeque<Request>,
}

impl ElevatorController {
    pub fn new(id: ElevatorId, start_floor: Floor) -> Self {
        ElevatorController {
            state: ElevatorState::new(id, start_floor),
            queue: VecDeque::new(),
        }
    }

    pub fn id(&self) -> ElevatorId {
        self.state.id()
    }

    pub fn current_floor(&self) -> Floor {
        self.state.floor()
    }

    pub fn is_door_open(&self) -> bool {
        self.state.is_door_open()
    }

    /// Manual override of the current floor, used when an operator
    /// corrects the position of an elevator.
    pub fn set_current_floor(&mut self, floor: Floor) {
        self.state.set_floor(floor);
    }

    pub fn queue(&self) -> &VecDeque<Request> {
        &self.queue
    }

    pub fn pending_requests(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Floor of the head request, or the current floor when idle.
    pub fn destination_floor(&self) -> Floor {
        match self.queue.front() {
            Some(request) => request.floor(),
            None => self.state.floor(),
        }
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus::new(self.id(), self.current_floor(), self.destination_floor())
    }

    pub fn contains(&self, request: &Request) -> bool {
        self.queue.contains(request)
    }

    pub fn contains_floor(&self, floor: Floor) -> bool {
        self.queue.iter().any(|queued| queued.floor() == floor)
    }

    pub fn push_request(&mut self, request: Request) {
        self.queue.push_back(request);
    }

    /// Inserts before the request currently at `index`. An index past the
    /// end appends.
    pub fn insert_request(&mut self, index: usize, request: Request) {
        if index >= self.queue.len() {
            self.queue.push_back(request);
        } else {
            self.queue.insert(index, request);
        }
    }

    /// Discards all pending work and leaves `request` as the only entry.
    pub fn replace_queue(&mut self, request: Request) {
        self.queue.clear();
        self.queue.push_back(request);
    }
}
