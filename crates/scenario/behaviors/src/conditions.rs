//! Condition nodes for scenario behavior trees.
//!
//! Condition nodes read actor state and report whether a spatial or
//! kinematic predicate holds. They never command actors and never fail:
//! `Running` means "not yet", `Success` means "now".

use behavior_tree::{Behavior, Status};

use crate::actor::{ActorHandle, Location};
use crate::config::BehaviorConfig;
use crate::error::{Result, non_negative};
use crate::kinematics::{closing_time, distance, speed, time_to_arrival};
use crate::macros::node_options;
use crate::region::Region;

/// Checks if an actor is inside a rectangular trigger region.
///
/// # Example
///
/// ```rust,ignore
/// // Start the scenario once the ego vehicle enters the intersection
/// let region = Region::new(-10.0, 10.0, 40.0, 60.0)?;
/// Node::new(RegionTrigger::new(ego.clone(), region))
/// ```
pub struct RegionTrigger {
    actor: ActorHandle,
    region: Region,
    name: String,
}

impl RegionTrigger {
    pub fn new(actor: ActorHandle, region: Region) -> Self {
        Self {
            actor,
            region,
            name: "TriggerRegion".to_owned(),
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }
}

node_options!(RegionTrigger);

impl Behavior for RegionTrigger {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self) -> Status {
        condition(self.region.contains(self.actor.location()))
    }
}

/// Checks if two actors are within a distance of each other.
///
/// # Example
///
/// ```rust,ignore
/// // Lead vehicle brakes when ego is within 20m
/// Node::new(DistanceToActorTrigger::new(lead.clone(), ego.clone(), 20.0)?)
/// ```
pub struct DistanceToActorTrigger {
    actor: ActorHandle,
    other: ActorHandle,
    distance: f64,
    name: String,
}

impl DistanceToActorTrigger {
    /// Fails if `distance` is negative or not finite.
    pub fn new(actor: ActorHandle, other: ActorHandle, distance: f64) -> Result<Self> {
        Ok(Self {
            actor,
            other,
            distance: non_negative("distance", distance)?,
            name: "TriggerDistanceToVehicle".to_owned(),
        })
    }
}

node_options!(DistanceToActorTrigger);

impl Behavior for DistanceToActorTrigger {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self) -> Status {
        let current = distance(self.actor.location(), self.other.location());
        condition(current <= self.distance)
    }
}

/// Checks if an actor is within a distance of a fixed location.
pub struct DistanceToLocationTrigger {
    actor: ActorHandle,
    location: Location,
    distance: f64,
    name: String,
}

impl DistanceToLocationTrigger {
    /// Fails if `distance` is negative or not finite.
    pub fn new(actor: ActorHandle, location: Location, distance: f64) -> Result<Self> {
        Ok(Self {
            actor,
            location,
            distance: non_negative("distance", distance)?,
            name: "InTriggerDistanceToLocation".to_owned(),
        })
    }
}

node_options!(DistanceToLocationTrigger);

impl Behavior for DistanceToLocationTrigger {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self) -> Status {
        let current = distance(self.actor.location(), self.location);
        condition(current <= self.distance)
    }
}

/// Checks if an actor has reached a target speed.
///
/// Succeeds once `target - speed < epsilon`: any speed above the target
/// succeeds, as does a speed just below it within `epsilon`. An actor that is
/// already faster than the target succeeds on the very first tick.
pub struct VelocityTrigger {
    actor: ActorHandle,
    target_velocity: f64,
    name: String,
    config: BehaviorConfig,
}

impl VelocityTrigger {
    /// Fails if `target_velocity` is negative or not finite.
    pub fn new(actor: ActorHandle, target_velocity: f64) -> Result<Self> {
        Ok(Self {
            actor,
            target_velocity: non_negative("target velocity", target_velocity)?,
            name: "TriggerVelocity".to_owned(),
            config: BehaviorConfig::default(),
        })
    }
}

node_options!(VelocityTrigger, config);

impl Behavior for VelocityTrigger {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self) -> Status {
        let shortfall = self.target_velocity - speed(self.actor.as_ref());
        condition(shortfall < self.config.epsilon)
    }
}

/// Checks if an actor would reach a location within a time budget at its
/// current speed.
///
/// An actor that is not moving gets the configured sentinel time-to-arrival
/// and keeps the condition running, unless it is already at the location.
pub struct TimeToArrivalToLocation {
    actor: ActorHandle,
    location: Location,
    time: f64,
    name: String,
    config: BehaviorConfig,
}

impl TimeToArrivalToLocation {
    /// Fails if `time` is negative or not finite.
    pub fn new(actor: ActorHandle, location: Location, time: f64) -> Result<Self> {
        Ok(Self {
            actor,
            location,
            time: non_negative("time", time)?,
            name: "TimeToArrival".to_owned(),
            config: BehaviorConfig::default(),
        })
    }

    /// Current estimate in seconds.
    pub fn time_to_arrival(&self) -> f64 {
        time_to_arrival(
            distance(self.actor.location(), self.location),
            speed(self.actor.as_ref()),
            self.config.epsilon,
            self.config.max_time_to_arrival,
        )
    }
}

node_options!(TimeToArrivalToLocation, config);

impl Behavior for TimeToArrivalToLocation {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self) -> Status {
        let estimate = self.time_to_arrival();
        tracing::trace!(node = %self.name, estimate, budget = self.time, "time to arrival");
        condition(estimate <= self.time)
    }
}

/// Checks if one vehicle would catch up with another within a time budget.
///
/// The closing time is only estimated while `ego` is faster than `other`;
/// otherwise the sentinel keeps the condition running.
pub struct TimeToArrivalToVehicle {
    ego: ActorHandle,
    other: ActorHandle,
    time: f64,
    name: String,
    config: BehaviorConfig,
}

impl TimeToArrivalToVehicle {
    /// Fails if `time` is negative or not finite.
    pub fn new(ego: ActorHandle, other: ActorHandle, time: f64) -> Result<Self> {
        Ok(Self {
            ego,
            other,
            time: non_negative("time", time)?,
            name: "TimeToArrival".to_owned(),
            config: BehaviorConfig::default(),
        })
    }

    /// Current estimate in seconds.
    pub fn time_to_arrival(&self) -> f64 {
        closing_time(
            distance(self.ego.location(), self.other.location()),
            speed(self.ego.as_ref()),
            speed(self.other.as_ref()),
            self.config.max_time_to_arrival,
        )
    }
}

node_options!(TimeToArrivalToVehicle, config);

impl Behavior for TimeToArrivalToVehicle {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self) -> Status {
        let estimate = self.time_to_arrival();
        tracing::trace!(node = %self.name, estimate, budget = self.time, "closing time");
        condition(estimate <= self.time)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

#[inline]
fn condition(satisfied: bool) -> Status {
    if satisfied {
        Status::Success
    } else {
        Status::Running
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::DVec3;

    use super::*;
    use crate::actor::{Actor, Velocity, VehicleControl};

    struct Snapshot {
        location: Location,
        velocity: Velocity,
    }

    impl Actor for Snapshot {
        fn location(&self) -> Location {
            self.location
        }

        fn velocity(&self) -> Velocity {
            self.velocity
        }

        fn apply_control(&self, _control: VehicleControl) {}
    }

    fn actor(x: f64, y: f64, vx: f64) -> ActorHandle {
        Arc::new(Snapshot {
            location: DVec3::new(x, y, 0.0),
            velocity: DVec3::new(vx, 0.0, 0.0),
        })
    }

    #[test]
    fn region_trigger() {
        let a = actor(0.0, 0.0, 0.0);

        let mut inside = RegionTrigger::new(a.clone(), Region::new(-1.0, 1.0, -1.0, 1.0).unwrap());
        assert_eq!(inside.update(), Status::Success);

        let mut outside = RegionTrigger::new(a, Region::new(2.0, 3.0, 2.0, 3.0).unwrap());
        assert_eq!(outside.update(), Status::Running);
    }

    #[test]
    fn distance_to_actor_is_inclusive() {
        let a = actor(0.0, 0.0, 0.0);
        let b = actor(3.0, 4.0, 0.0);

        let mut at = DistanceToActorTrigger::new(a.clone(), b.clone(), 5.0).unwrap();
        assert_eq!(at.update(), Status::Success);

        let mut short = DistanceToActorTrigger::new(b, a, 4.99).unwrap();
        assert_eq!(short.update(), Status::Running);
    }

    #[test]
    fn distance_to_location() {
        let a = actor(10.0, 0.0, 0.0);
        let mut node = DistanceToLocationTrigger::new(a, DVec3::ZERO, 9.0).unwrap();
        assert_eq!(node.update(), Status::Running);
    }

    #[test]
    fn velocity_trigger_succeeds_at_or_above_target() {
        let mut below = VelocityTrigger::new(actor(0.0, 0.0, 5.0), 10.0).unwrap();
        assert_eq!(below.update(), Status::Running);

        let mut above = VelocityTrigger::new(actor(0.0, 0.0, 15.0), 10.0).unwrap();
        assert_eq!(above.update(), Status::Success);

        let mut within = VelocityTrigger::new(actor(0.0, 0.0, 9.9995), 10.0).unwrap();
        assert_eq!(within.update(), Status::Success);
    }

    #[test]
    fn stationary_actor_never_arrives() {
        let mut node =
            TimeToArrivalToLocation::new(actor(0.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0), 5_000.0)
                .unwrap();
        assert_eq!(node.time_to_arrival(), BehaviorConfig::DEFAULT_MAX_TIME_TO_ARRIVAL);
        assert_eq!(node.update(), Status::Running);
    }

    #[test]
    fn stationary_actor_at_location_has_arrived() {
        let mut node = TimeToArrivalToLocation::new(actor(1.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0), 0.0)
            .unwrap();
        assert_eq!(node.update(), Status::Success);
    }

    #[test]
    fn time_to_arrival_to_location_within_budget() {
        // 50m at 10m/s is 5s.
        let a = actor(0.0, 0.0, 10.0);
        let target = DVec3::new(50.0, 0.0, 0.0);

        let mut tight = TimeToArrivalToLocation::new(a.clone(), target, 4.0).unwrap();
        assert_eq!(tight.update(), Status::Running);

        let mut loose = TimeToArrivalToLocation::new(a, target, 5.0).unwrap();
        assert_eq!(loose.update(), Status::Success);
    }

    #[test]
    fn closing_time_uses_doubled_distance() {
        let ego = actor(0.0, 0.0, 10.0);
        let other = actor(100.0, 0.0, 0.0);

        let mut tight = TimeToArrivalToVehicle::new(ego.clone(), other.clone(), 5.0).unwrap();
        assert_eq!(tight.time_to_arrival(), 20.0);
        assert_eq!(tight.update(), Status::Running);

        let mut loose = TimeToArrivalToVehicle::new(ego, other, 25.0).unwrap();
        assert_eq!(loose.update(), Status::Success);
    }

    #[test]
    fn slower_ego_never_closes_in() {
        let mut node =
            TimeToArrivalToVehicle::new(actor(0.0, 0.0, 5.0), actor(1.0, 0.0, 10.0), 9_999.0).unwrap();
        assert_eq!(node.update(), Status::Running);
    }

    #[test]
    fn custom_name_and_config() {
        let node = VelocityTrigger::new(actor(0.0, 0.0, 0.0), 1.0)
            .unwrap()
            .with_name("WaitForLeadSpeed")
            .with_config(BehaviorConfig::new().with_epsilon(0.5));
        assert_eq!(node.name(), "WaitForLeadSpeed");
        assert_eq!(node.config().epsilon, 0.5);
    }

    #[test]
    fn config_sentinel_drives_stationary_estimate() {
        let mut node =
            TimeToArrivalToLocation::new(actor(0.0, 0.0, 0.0), DVec3::new(10.0, 0.0, 0.0), 60.0)
                .unwrap()
                .with_config(BehaviorConfig::new().with_max_time_to_arrival(30.0));
        assert_eq!(node.time_to_arrival(), 30.0);
        assert_eq!(node.update(), Status::Success);
    }

    #[test]
    fn rejects_negative_thresholds() {
        assert!(DistanceToActorTrigger::new(actor(0.0, 0.0, 0.0), actor(0.0, 0.0, 0.0), -1.0).is_err());
        assert!(TimeToArrivalToLocation::new(actor(0.0, 0.0, 0.0), DVec3::ZERO, f64::NAN).is_err());
    }
}
