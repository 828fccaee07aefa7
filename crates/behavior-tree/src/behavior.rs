//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the lifecycle contract every
//! leaf node implements. Conditions and actions are interchangeable children
//! for whatever composition engine ticks them, because they expose the same
//! four hooks.

use std::time::Duration;

use crate::Status;

/// A leaf node driven through the setup / initialise / update / terminate
/// lifecycle.
///
/// Implementors only have to provide [`Behavior::update`] and
/// [`Behavior::name`]; the remaining hooks default to no-ops. Use
/// [`Node`](crate::Node) to get the status bookkeeping and transition rules.
pub trait Behavior: Send {
    /// Human-readable name used for logging and debugging.
    fn name(&self) -> &str;

    /// One-time preparation of external resources before the first
    /// activation.
    ///
    /// Returns `false` if the resources could not be acquired within
    /// `timeout`.
    fn setup(&mut self, _timeout: Duration) -> bool {
        true
    }

    /// Resets per-activation state. Called every time the node goes from idle
    /// to active.
    fn initialise(&mut self) {}

    /// Performs one tick against the current state of the world.
    ///
    /// Must read external state fresh on every call and must not assume a
    /// fixed interval between calls.
    fn update(&mut self) -> Status;

    /// Cleanup when the node leaves the active state, whether it finished on
    /// its own or was cancelled from outside.
    fn terminate(&mut self, _new_status: Status) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior>` to also implement `Behavior`, enabling
/// dynamic dispatch and heterogeneous collections of leaves.
impl Behavior for Box<dyn Behavior> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn setup(&mut self, timeout: Duration) -> bool {
        (**self).setup(timeout)
    }

    #[inline]
    fn initialise(&mut self) {
        (**self).initialise()
    }

    #[inline]
    fn update(&mut self) -> Status {
        (**self).update()
    }

    #[inline]
    fn terminate(&mut self, new_status: Status) {
        (**self).terminate(new_status)
    }
}
