//! The simulated actors behaviors observe and control.
//!
//! Actors are owned by the simulation. Behaviors only hold shared handles to
//! them, read their kinematic state and send them control commands.

use std::sync::Arc;

use glam::DVec3;

/// Position of an actor in world coordinates (meters).
pub type Location = DVec3;

/// Velocity of an actor in world coordinates (meters per second).
pub type Velocity = DVec3;

/// A simulated traffic participant.
///
/// Implementations decide how commands reach the vehicle, so
/// `apply_control` takes `&self` and any mutation goes through the
/// implementation's own synchronization.
pub trait Actor: Send + Sync {
    fn location(&self) -> Location;

    fn velocity(&self) -> Velocity;

    /// Sends a command to the actor's actuators. Fire-and-forget.
    fn apply_control(&self, control: VehicleControl);
}

/// Shared reference to an actor living in the simulation.
pub type ActorHandle = Arc<dyn Actor>;

/// Longitudinal control command.
///
/// Both values lie within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleControl {
    pub throttle: f32,
    pub brake: f32,
}

impl VehicleControl {
    /// No throttle and no brake.
    pub const NEUTRAL: Self = Self {
        throttle: 0.0,
        brake: 0.0,
    };

    pub const fn with_throttle(throttle: f32) -> Self {
        Self {
            throttle,
            brake: 0.0,
        }
    }

    pub const fn with_brake(brake: f32) -> Self {
        Self {
            throttle: 0.0,
            brake,
        }
    }

    /// Returns `true` when neither throttle nor brake is applied.
    pub fn is_neutral(&self) -> bool {
        self.throttle == 0.0 && self.brake == 0.0
    }
}
