//! Atomic behaviors for composing traffic scenarios.
//!
//! Every type here is a leaf implementing [`behavior_tree::Behavior`]. An
//! external composition engine wraps them in [`behavior_tree::Node`] and
//! ticks them once per simulation step to express scenario logic such as
//! "the lead vehicle brakes when ego comes within 20m".
//!
//! - [`conditions`]: side-effect-free predicates over actor state
//! - [`actions`]: controllers that command an actor toward a goal
//! - [`kinematics`]: straight-line distance, horizontal speed and arrival
//!   time estimates
//!
//! Actors are owned by the simulation and reached through the [`Actor`]
//! trait.

pub mod actions;
pub mod actor;
pub mod conditions;
pub mod config;
pub mod error;
pub mod kinematics;
mod macros;
pub mod region;

pub use actions::{AccelerateToVelocity, KeepVelocity, StopVehicle};
pub use actor::{Actor, ActorHandle, Location, Velocity, VehicleControl};
pub use conditions::{
    DistanceToActorTrigger, DistanceToLocationTrigger, RegionTrigger, TimeToArrivalToLocation,
    TimeToArrivalToVehicle, VelocityTrigger,
};
pub use config::BehaviorConfig;
pub use error::{BehaviorError, Result};
pub use region::Region;
