//! Kinematic helpers shared by conditions and actions.
//!
//! Distances are straight-line distances, not distances along a route, so
//! time-to-arrival estimates are optimistic whenever the road bends.

use crate::actor::{Actor, Location};

/// Speeds at or below this value count as stopped.
pub const EPSILON: f64 = 0.001;

/// Time-to-arrival reported when no meaningful estimate exists, in seconds.
pub const MAX_TIME_TO_ARRIVAL: f64 = 10_000.0;

/// Euclidean distance between two locations.
#[inline]
pub fn distance(location: Location, other: Location) -> f64 {
    location.distance(other)
}

/// Horizontal speed of an actor.
///
/// The vertical velocity component is ignored.
#[inline]
pub fn speed(actor: &dyn Actor) -> f64 {
    actor.velocity().truncate().length()
}

/// Time to cover `distance` at `speed`.
///
/// Returns `sentinel` when `speed` is at or below `epsilon`, unless the
/// distance itself is negligible, in which case the target is reached.
pub fn time_to_arrival(distance: f64, speed: f64, epsilon: f64, sentinel: f64) -> f64 {
    if distance <= epsilon {
        0.0
    } else if speed > epsilon {
        distance / speed
    } else {
        sentinel
    }
}

/// Closing time between a follower and the actor ahead of it.
///
/// Uses `2 * distance / (follower_speed - leader_speed)`, a deliberate
/// approximation of closing dynamics. Returns `sentinel` unless the follower
/// is faster.
pub fn closing_time(distance: f64, follower_speed: f64, leader_speed: f64, sentinel: f64) -> f64 {
    if follower_speed > leader_speed {
        2.0 * distance / (follower_speed - leader_speed)
    } else {
        sentinel
    }
}
