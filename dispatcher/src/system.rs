/// ----- DISPATCH SYSTEM -----
/// Entry point of the dispatcher. Holds the registered elevator
/// controllers and the active scheduler, routes incoming requests by kind
/// and advances every elevator one tick at a time. Refused requests are
/// logged and dropped here; they never reach the caller.

use log::{debug, warn};

use shared_resources::config::ELEVATORS_LIMIT;
use shared_resources::elevator_status::ElevatorStatus;
use shared_resources::error::DispatchError;
use shared_resources::request::Request;
use shared_resources::{ElevatorId, Floor};

use elevator::{Action, ElevatorController};

use crate::scheduler::{Controllers, Scheduler};

#[derive(Debug, Clone)]
pub struct DispatchSystem {
    controllers: Controllers,
    scheduler: Scheduler,
    elevator_limit: usize,
}

impl DispatchSystem {
    pub fn new(scheduler: Scheduler) -> Self {
        Self::with_limit(scheduler, ELEVATORS_LIMIT)
    }

    pub fn with_limit(scheduler: Scheduler, elevator_limit: usize) -> Self {
        DispatchSystem {
            controllers: Controllers::new(),
            scheduler: scheduler,
            elevator_limit: elevator_limit,
        }
    }

    pub fn scheduler(&self) -> Scheduler {
        self.scheduler
    }

    /// Swaps the scheduling policy. Already queued requests keep their order.
    pub fn set_scheduler(&mut self, scheduler: Scheduler) {
        self.scheduler = scheduler;
    }

    pub fn elevator_count(&self) -> usize {
        self.controllers.len()
    }

    pub fn controller(&self, id: ElevatorId) -> Option<&ElevatorController> {
        self.controllers.get(&id)
    }

    pub fn register(&mut self, id: ElevatorId, start_floor: Floor) {
        if let Err(e) = self.try_register(id, start_floor) {
            warn!("Failed to register elevator with ID {}: {}", id, e);
        }
    }

    fn try_register(&mut self, id: ElevatorId, start_floor: Floor) -> Result<(), DispatchError> {
        if self.controllers.len() >= self.elevator_limit {
            return Err(DispatchError::RegistrationLimit(self.elevator_limit));
        }
        if self.controllers.contains_key(&id) {
            return Err(DispatchError::DuplicateElevator(id));
        }
        self.controllers.insert(id, ElevatorController::new(id, start_floor));
        debug!("registered elevator {} on floor {}", id, start_floor);
        Ok(())
    }

    pub fn submit(&mut self, request: Request) {
        if let Err(e) = self.try_submit(&request) {
            warn!("Dropped {}: {}", request, e);
        }
    }

    fn try_submit(&mut self, request: &Request) -> Result<(), DispatchError> {
        let kind = request.kind();
        if kind.is_pickup() {
            self.scheduler.enqueue_pickup(request, &mut self.controllers)
        } else if kind.is_internal() {
            let controller = request.target().and_then(|id| self.controllers.get_mut(&id));
            self.scheduler.enqueue_internal(request, controller)
        } else {
            self.scheduler.enqueue_evacuation(request, &mut self.controllers)
        }
    }

    /// Advances every elevator by one atomic action, in id order.
    pub fn tick(&mut self) -> Vec<(ElevatorId, Action)> {
        self.controllers
            .values_mut()
            .map(|controller| (controller.id(), controller.step()))
            .collect()
    }

    /// Manually moves elevator `id` to `current_floor` and restarts it
    /// towards `destination_floor`.
    pub fn force_status(&mut self, id: ElevatorId, current_floor: Floor, destination_floor: Floor) {
        let controller = match self.controllers.get_mut(&id) {
            Some(controller) => controller,
            None => {
                warn!("Failed to update status of elevator with ID {}: {}", id, DispatchError::UnknownElevator(id));
                return;
            },
        };
        controller.set_current_floor(current_floor);
        let request = Request::restart(id, destination_floor);
        if let Err(e) = self.scheduler.enqueue_internal(&request, Some(controller)) {
            warn!("Dropped {}: {}", request, e);
        }
    }

    pub fn status_snapshot(&self) -> Vec<ElevatorStatus> {
        self.controllers.values().map(|controller| controller.status()).collect()
    }

    pub fn has_pending_work(&self) -> bool {
        self.controllers.values().any(|controller| !controller.is_idle())
    }

    pub fn pending_request_count(&self) -> usize {
        self.controllers.values().map(|controller| controller.pending_requests()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(scheduler: Scheduler, floors: &[Floor]) -> DispatchSystem {
        let mut system = DispatchSystem::new(scheduler);
        for (id, &floor) in floors.iter().enumerate() {
            system.register(id as ElevatorId, floor);
        }
        system
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let mut system = system(Scheduler::Fcfs, &[0]);
        system.register(0, 5);
        assert_eq!(system.elevator_count(), 1);
        assert_eq!(system.status_snapshot()[0].current_floor, 0);
    }

    #[test]
    fn registration_stops_at_limit() {
        let mut system = DispatchSystem::with_limit(Scheduler::Scanner, 2);
        for id in 0..4 {
            system.register(id, 0);
        }
        assert_eq!(system.elevator_count(), 2);
        assert!(system.controller(2).is_none());
    }

    #[test]
    fn try_register_reports_the_reason() {
        let mut system = DispatchSystem::with_limit(Scheduler::Fcfs, 1);
        assert_eq!(system.try_register(3, 0), Ok(()));
        assert_eq!(system.try_register(4, 0), Err(DispatchError::RegistrationLimit(1)));
        let mut system = DispatchSystem::new(Scheduler::Fcfs);
        system.register(3, 0);
        assert_eq!(system.try_register(3, 0), Err(DispatchError::DuplicateElevator(3)));
    }

    #[test]
    fn floor_request_for_unknown_elevator_is_dropped() {
        let mut system = system(Scheduler::Fcfs, &[0, 0]);
        system.submit(Request::cab(0, 4));
        assert_eq!(system.try_submit(&Request::cab(9, 4)), Err(DispatchError::ControllerUnavailable(Some(9))));
        system.submit(Request::cab(9, 4));
        assert_eq!(system.pending_request_count(), 1);
        assert_eq!(system.controller(0).map(|c| c.pending_requests()), Some(1));
    }

    #[test]
    fn pickup_without_elevators_is_dropped() {
        let mut system = DispatchSystem::new(Scheduler::Scanner);
        system.submit(Request::pickup_up(3));
        assert!(!system.has_pending_work());
    }

    #[test]
    fn evacuation_reaches_every_elevator() {
        let mut system = system(Scheduler::Scanner, &[0, 4, 8]);
        system.submit(Request::cab(0, 6));
        system.submit(Request::cab(1, 2));
        system.submit(Request::cab(1, 9));
        system.submit(Request::evacuation());
        assert_eq!(system.pending_request_count(), 3);
        for status in system.status_snapshot() {
            assert_eq!(status.destination_floor, 0);
        }
    }

    #[test]
    fn force_status_restarts_towards_destination() {
        let mut system = system(Scheduler::Fcfs, &[0]);
        system.submit(Request::cab(0, 3));
        system.submit(Request::cab(0, 5));
        system.force_status(0, 1, 8);
        let status = system.status_snapshot()[0];
        assert_eq!(status.current_floor, 1);
        assert_eq!(status.destination_floor, 8);
        assert_eq!(system.pending_request_count(), 1);
    }

    #[test]
    fn force_status_of_unknown_elevator_changes_nothing() {
        let mut system = system(Scheduler::Fcfs, &[2]);
        system.force_status(7, 1, 8);
        assert_eq!(system.status_snapshot(), vec![ElevatorStatus::new(0, 2, 2)]);
    }

    #[test]
    fn tick_drains_the_queue() {
        let mut system = system(Scheduler::Fcfs, &[0, 10]);
        system.submit(Request::pickup_up(3));
        assert!(system.has_pending_work());
        let mut ticks = 0;
        while system.has_pending_work() {
            system.tick();
            ticks += 1;
        }
        assert_eq!(ticks, 5);
        assert_eq!(system.status_snapshot()[0], ElevatorStatus::new(0, 3, 3));
    }

    #[test]
    fn scheduler_can_be_swapped_between_ticks() {
        let mut system = system(Scheduler::Fcfs, &[0]);
        system.submit(Request::cab(0, 8));
        system.tick();
        system.set_scheduler(Scheduler::Scanner);
        system.submit(Request::cab(0, 4));
        assert_eq!(system.scheduler(), Scheduler::Scanner);
        let floors: Vec<Floor> = system.controller(0).map(|c| c.queue().iter().map(|r| r.floor()).collect()).unwrap_or_default();
        assert_eq!(floors, vec![4, 8]);
    }
}
