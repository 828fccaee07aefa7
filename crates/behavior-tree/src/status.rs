//! Status reported by behavior nodes.

use std::fmt;

/// The result of ticking a behavior node.
///
/// # Tick Semantics
///
/// Nodes are ticked once per simulation step by an external composition
/// engine, so a node may need many ticks to reach its goal:
/// - Conditions report `Running` while their predicate does not hold yet
/// - Actions report `Running` while they are still converging on their goal
///
/// A freshly constructed node starts out `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// The node has not been ticked yet, or it was reset by its parent.
    #[default]
    Invalid,

    /// The node is active and needs more ticks.
    Running,

    /// The node completed successfully.
    ///
    /// For conditions: The predicate holds.
    /// For actions: The goal was reached.
    Success,

    /// The node failed.
    ///
    /// None of the atomic scenario behaviors report this, but composition
    /// engines aggregate it, so it is part of the vocabulary.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` for `Success` and `Failure`, the states that end an
    /// activation.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    /// Upper-case label matching the vocabulary of tree-composition engines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Invalid => "INVALID",
            Status::Running => "RUNNING",
            Status::Success => "SUCCESS",
            Status::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_invalid() {
        assert_eq!(Status::default(), Status::Invalid);
    }

    #[test]
    fn terminal_states() {
        assert!(!Status::Invalid.is_terminal());
        assert!(!Status::Running.is_terminal());
        assert!(Status::Success.is_terminal());
        assert!(Status::Failure.is_terminal());
    }

    #[test]
    fn display_uses_upper_case_labels() {
        assert_eq!(Status::Running.to_string(), "RUNNING");
        assert_eq!(Status::Failure.to_string(), "FAILURE");
    }
}
