//! Lifecycle wrapper around a [`Behavior`].
//!
//! [`Node`] owns the status bookkeeping so that individual behaviors only
//! have to compute their next status. It enforces the transition rules:
//!
//! - a node starts `Invalid`
//! - `initialise` runs whenever a tick starts while the node is not running
//! - `terminate` runs exactly once when an activation ends, either because
//!   `update` returned a terminal status or because [`Node::stop`] cancelled it

use std::sync::Arc;
use std::time::Duration;

use crate::{Behavior, LifecycleEvent, LifecycleObserver, Status, TracingObserver};

/// A behavior together with its current status and observer.
pub struct Node<B> {
    behavior: B,
    status: Status,
    observer: Arc<dyn LifecycleObserver>,
}

impl<B: Behavior> Node<B> {
    /// Wraps `behavior`, logging transitions through [`TracingObserver`].
    pub fn new(behavior: B) -> Self {
        Self {
            behavior,
            status: Status::Invalid,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the observer notified of lifecycle calls.
    pub fn with_observer(mut self, observer: Arc<dyn LifecycleObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn name(&self) -> &str {
        self.behavior.name()
    }

    /// Status recorded by the last tick or stop.
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Unwraps the node, returning the inner behavior.
    pub fn into_inner(self) -> B {
        self.behavior
    }

    /// Prepares the behavior's external resources.
    pub fn setup(&mut self, timeout: Duration) -> bool {
        let ok = self.behavior.setup(timeout);
        self.observer
            .observe(self.behavior.name(), LifecycleEvent::Setup { ok });
        ok
    }

    /// Runs one tick and returns the new status.
    pub fn tick(&mut self) -> Status {
        let from = self.status;
        if !from.is_running() {
            self.behavior.initialise();
            self.observer
                .observe(self.behavior.name(), LifecycleEvent::Initialise);
        }

        // Active for the duration of the tick, so a terminal result terminates.
        self.status = Status::Running;
        let to = self.behavior.update();
        self.observer
            .observe(self.behavior.name(), LifecycleEvent::Update { from, to });

        if to.is_running() {
            self.status = to;
        } else {
            self.stop(to);
        }
        self.status
    }

    /// Ends the current activation with `new_status`.
    ///
    /// `terminate` only runs if the node is active, so calling this on an
    /// idle or finished node just records the new status. Passing
    /// `Status::Invalid` resets the node so its next tick initialises again.
    pub fn stop(&mut self, new_status: Status) {
        let from = self.status;
        if from.is_running() {
            self.behavior.terminate(new_status);
            self.observer.observe(
                self.behavior.name(),
                LifecycleEvent::Terminate {
                    from,
                    to: new_status,
                },
            );
        }
        self.status = new_status;
    }
}
