use shared_resources::Floor;

use crate::controller::ElevatorController;

impl ElevatorController {
    /// Number of ticks until this elevator has its door open on `floor`,
    /// assuming it first serves its queue in order. Opening and closing
    /// the door each cost one tick.
    /// Saturates instead of overflowing for floors far apart.
    pub fn steps_to_reach(&self, floor: Floor) -> u64 {
        if self.current_floor() == floor {
            return if self.is_door_open() { 0 } else { 1 };
        }

        let mut steps_required: u64 = 0;
        let mut floor_reached = self.current_floor();

        for request in &self.queue {
            let floor_enqueued = request.floor();
            // close, travel, open
            steps_required = steps_required.saturating_add(2 + u64::from(floor_reached.abs_diff(floor_enqueued)));
            floor_reached = floor_enqueued;

            if floor_reached == floor {
                return steps_required;
            }
        }

        // a door that is already closed does not need the closing tick the
        // loop charged, so only the open-door case pays for closing here
        let closing = if self.is_door_open() { 1 } else { 0 };
        steps_required.saturating_add(closing + u64::from(floor_reached.abs_diff(floor)) + 1)
    }
}
