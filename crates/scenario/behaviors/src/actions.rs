//! Action nodes for scenario behavior trees.
//!
//! Action nodes steer an actor toward a goal. Each one owns a single
//! [`VehicleControl`] that it updates and re-applies on every tick, including
//! the tick that reaches the goal. On termination, whether after success or
//! after being cancelled by the composition engine, the command is reset to
//! neutral and applied once more so the actor stops accelerating or braking.

use behavior_tree::{Behavior, Status};

use crate::actor::{ActorHandle, VehicleControl};
use crate::config::BehaviorConfig;
use crate::error::{Result, non_negative, unit_interval};
use crate::kinematics::speed;
use crate::macros::node_options;

/// Accelerates with a fixed throttle until reaching a target velocity.
///
/// # Example
///
/// ```rust,ignore
/// // Lead vehicle pulls away at half throttle until 15 m/s
/// Node::new(AccelerateToVelocity::new(lead.clone(), 0.5, 15.0)?)
/// ```
pub struct AccelerateToVelocity {
    actor: ActorHandle,
    throttle: f32,
    target_velocity: f64,
    control: VehicleControl,
    name: String,
}

impl AccelerateToVelocity {
    /// Fails if `throttle` lies outside `[0, 1]` or `target_velocity` is
    /// negative.
    pub fn new(actor: ActorHandle, throttle: f32, target_velocity: f64) -> Result<Self> {
        Ok(Self {
            actor,
            throttle: unit_interval("throttle", throttle)?,
            target_velocity: non_negative("target velocity", target_velocity)?,
            control: VehicleControl::NEUTRAL,
            name: "Acceleration".to_owned(),
        })
    }

    /// The command applied on the last tick.
    pub fn control(&self) -> VehicleControl {
        self.control
    }
}

node_options!(AccelerateToVelocity);

impl Behavior for AccelerateToVelocity {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self) {
        self.control = VehicleControl::NEUTRAL;
    }

    fn update(&mut self) -> Status {
        let status = if speed(self.actor.as_ref()) < self.target_velocity {
            self.control.throttle = self.throttle;
            Status::Running
        } else {
            self.control.throttle = 0.0;
            Status::Success
        };

        self.actor.apply_control(self.control);
        status
    }

    fn terminate(&mut self, _new_status: Status) {
        release(&mut self.control, &self.actor);
    }
}

/// Keeps a target velocity for as long as the node stays active.
///
/// Applies full throttle while below the target and coasts otherwise. This
/// node never finishes by itself; run it in parallel with a condition that
/// bounds its duration or distance.
pub struct KeepVelocity {
    actor: ActorHandle,
    target_velocity: f64,
    control: VehicleControl,
    name: String,
}

impl KeepVelocity {
    /// Fails if `target_velocity` is negative or not finite.
    pub fn new(actor: ActorHandle, target_velocity: f64) -> Result<Self> {
        Ok(Self {
            actor,
            target_velocity: non_negative("target velocity", target_velocity)?,
            control: VehicleControl::NEUTRAL,
            name: "KeepVelocity".to_owned(),
        })
    }

    /// The command applied on the last tick.
    pub fn control(&self) -> VehicleControl {
        self.control
    }
}

node_options!(KeepVelocity);

impl Behavior for KeepVelocity {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self) {
        self.control = VehicleControl::NEUTRAL;
    }

    fn update(&mut self) -> Status {
        self.control.throttle = if speed(self.actor.as_ref()) < self.target_velocity {
            1.0
        } else {
            0.0
        };

        self.actor.apply_control(self.control);
        Status::Running
    }

    fn terminate(&mut self, _new_status: Status) {
        release(&mut self.control, &self.actor);
    }
}

/// Brakes with a fixed intensity until the actor stands still.
pub struct StopVehicle {
    actor: ActorHandle,
    brake: f32,
    control: VehicleControl,
    name: String,
    config: BehaviorConfig,
}

impl StopVehicle {
    /// Fails if `brake` lies outside `[0, 1]`.
    pub fn new(actor: ActorHandle, brake: f32) -> Result<Self> {
        Ok(Self {
            actor,
            brake: unit_interval("brake", brake)?,
            control: VehicleControl::NEUTRAL,
            name: "Stopping".to_owned(),
            config: BehaviorConfig::default(),
        })
    }

    /// The command applied on the last tick.
    pub fn control(&self) -> VehicleControl {
        self.control
    }
}

node_options!(StopVehicle, config);

impl Behavior for StopVehicle {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self) {
        self.control = VehicleControl::NEUTRAL;
    }

    fn update(&mut self) -> Status {
        let status = if speed(self.actor.as_ref()) > self.config.epsilon {
            self.control.brake = self.brake;
            Status::Running
        } else {
            self.control.brake = 0.0;
            Status::Success
        };

        self.actor.apply_control(self.control);
        status
    }

    fn terminate(&mut self, _new_status: Status) {
        release(&mut self.control, &self.actor);
    }
}

/// Resets `control` to neutral and applies it.
fn release(control: &mut VehicleControl, actor: &ActorHandle) {
    *control = VehicleControl::NEUTRAL;
    actor.apply_control(*control);
}
