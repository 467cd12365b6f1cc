/// ----- FSM MODULE -----
/// The motion state machine of a single elevator. Every simulation tick
/// performs exactly one indivisible action: open the door, close the door,
/// move one floor, or arrive and pop the head of the queue. A move is
/// always preceded by a closed door and every arrival opens the door.

use log::trace;

use shared_resources::request::Request;

use crate::controller::ElevatorController;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenDoor,
    CloseDoor,
    MoveUp,
    MoveDown,
    Arrive(Request),
    Wait,
}

impl ElevatorController {
    pub fn step(&mut self) -> Action {
        let target = self.queue.front().map(|head| head.floor());
        let action = match target {
            None => {
                if self.state.is_door_open() {
                    Action::Wait
                } else {
                    self.state.open_door();
                    Action::OpenDoor
                }
            },
            Some(floor) if floor == self.state.floor() => {
                self.state.open_door();
                match self.queue.pop_front() {
                    Some(served) => Action::Arrive(served),
                    None => Action::OpenDoor,
                }
            },
            Some(_) if self.state.is_door_open() => {
                self.state.close_door();
                Action::CloseDoor
            },
            Some(floor) => {
                if floor > self.state.floor() {
                    self.state.move_up();
                    Action::MoveUp
                } else {
                    self.state.move_down();
                    Action::MoveDown
                }
            },
        };
        trace!("elevator {} at floor {}: {:?}", self.id(), self.current_floor(), action);
        action
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn idle_elevator_opens_door_once_then_waits() {
        let mut controller = ElevatorController::new(0, 3);
        controller.state.close_door();
        assert_eq!(controller.step(), Action::OpenDoor);
        assert_eq!(controller.step(), Action::Wait);
        assert_eq!(controller.current_floor(), 3);
        assert!(controller.is_door_open());
    }

    #[test]
    fn closes_door_before_moving() {
        let mut controller = ElevatorController::new(0, 0);
        controller.push_request(Request::cab(0, 2));
        assert_eq!(controller.step(), Action::CloseDoor);
        assert_eq!(controller.current_floor(), 0);
        assert_eq!(controller.step(), Action::MoveUp);
        assert_eq!(controller.current_floor(), 1);
    }

    #[test]
    fn closed_door_two_floors_away_needs_three_ticks() {
        let mut controller = ElevatorController::new(0, 4);
        controller.push_request(Request::cab(0, 2));
        assert_eq!(controller.step(), Action::CloseDoor);

        assert_eq!(controller.step(), Action::MoveDown);
        assert_eq!(controller.step(), Action::MoveDown);
        assert_eq!(controller.step(), Action::Arrive(Request::cab(0, 2)));
        assert!(controller.is_idle());
        assert!(controller.is_door_open());
        assert_eq!(controller.current_floor(), 2);
    }

    #[test]
    fn arrival_pops_head_even_with_door_open() {
        let mut controller = ElevatorController::new(0, 7);
        controller.push_request(Request::pickup_down(7));
        controller.push_request(Request::pickup_up(9));
        assert_eq!(controller.step(), Action::Arrive(Request::pickup_down(7)));
        assert_eq!(controller.pending_requests(), 1);
        assert_eq!(controller.destination_floor(), 9);
    }

    proptest! {
        #[test]
        fn never_moves_with_open_door(floors in proptest::collection::vec(-5i32..15, 0..6), ticks in 0usize..60) {
            let mut controller = ElevatorController::new(0, 0);
            for floor in floors {
                controller.push_request(Request::cab(0, floor));
            }
            for _ in 0..ticks {
                let door_was_open = controller.is_door_open();
                let floor_before = controller.current_floor();
                let pending_before = controller.pending_requests();
                let action = controller.step();
                if matches!(action, Action::MoveUp | Action::MoveDown) {
                    prop_assert!(!door_was_open);
                    prop_assert_eq!((controller.current_floor() - floor_before).abs(), 1);
                }
                prop_assert!(controller.pending_requests() <= pending_before);
            }
        }

        #[test]
        fn idle_elevator_stays_put(start in -10i32..10, ticks in 1usize..20) {
            let mut controller = ElevatorController::new(0, start);
            for _ in 0..ticks {
                controller.step();
            }
            prop_assert_eq!(controller.current_floor(), start);
            prop_assert!(controller.is_door_open());
        }
    }
}
