//! Observability hooks for node lifecycles.
//!
//! [`Node`](crate::Node) reports every lifecycle call to a
//! [`LifecycleObserver`]. Observers only watch; nothing they do feeds back
//! into a node's computation.

use crate::Status;

/// A lifecycle call made on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// `setup` ran and returned `ok`.
    Setup { ok: bool },

    /// `initialise` ran at the start of an activation.
    Initialise,

    /// `update` ran and moved the node from `from` to `to`.
    Update { from: Status, to: Status },

    /// `terminate` ran while leaving `from` for `to`.
    Terminate { from: Status, to: Status },
}

/// Receives lifecycle events from nodes.
pub trait LifecycleObserver: Send + Sync {
    fn observe(&self, node: &str, event: LifecycleEvent);
}

/// Emits every lifecycle event as a `tracing` debug record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LifecycleObserver for TracingObserver {
    fn observe(&self, node: &str, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Setup { ok } => {
                tracing::debug!(node, ok, "{}.setup()", node);
            }
            LifecycleEvent::Initialise => {
                tracing::debug!(node, "{}.initialise()", node);
            }
            LifecycleEvent::Update { from, to } => {
                tracing::debug!(node, %from, %to, "{}.update()[{}->{}]", node, from, to);
            }
            LifecycleEvent::Terminate { from, to } => {
                tracing::debug!(node, %from, %to, "{}.terminate()[{}->{}]", node, from, to);
            }
        }
    }
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LifecycleObserver for NoopObserver {
    #[inline]
    fn observe(&self, _node: &str, _event: LifecycleEvent) {}
}
