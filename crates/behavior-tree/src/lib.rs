//! Leaf-node lifecycle for reactive behavior trees.
//!
//! This library provides the contract shared by every leaf an external
//! composition engine (sequence/selector/parallel) ticks once per simulation
//! step:
//!
//! - **Four-state status**: `Invalid`, `Running`, `Success`, `Failure`
//! - **Lifecycle hooks**: `setup`, `initialise`, `update`, `terminate`
//! - **Guaranteed cleanup**: `terminate` runs whenever an activation ends
//! - **Synchronous ticks**: every `update` completes before returning
//!
//! # Architecture
//!
//! - [`Behavior`]: Lifecycle trait implemented by every leaf
//! - [`Status`]: Result of a tick
//! - [`Node`]: Wrapper that tracks status and enforces transitions
//! - [`LifecycleObserver`]: Optional hook notified of every transition

pub mod behavior;
pub mod node;
pub mod observer;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use node::Node;
pub use observer::{LifecycleEvent, LifecycleObserver, NoopObserver, TracingObserver};
pub use status::Status;
