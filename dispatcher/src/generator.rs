use rand::Rng;

use shared_resources::request::Request;
use shared_resources::Floor;

/// Draws `count` requests, each equally likely to be an up call, a down
/// call or a floor request for one of the `elevators`. Floors are drawn
/// from `0..=floors`.
pub fn generate_requests<R: Rng>(rng: &mut R, count: usize, elevators: u8, floors: Floor) -> Vec<Request> {
    let mut requests = Vec::with_capacity(count);
    for _ in 0..count {
        let floor = rng.gen_range(0..=floors);
        let request = match rng.gen_range(0..3) {
            0 => Request::pickup_up(floor),
            1 => Request::pickup_down(floor),
            _ if elevators > 0 => Request::cab(rng.gen_range(0..elevators), floor),
            _ => continue,
        };
        requests.push(request);
    }
    requests
}
