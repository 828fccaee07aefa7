//! Numeric tuning shared by all atomic behaviors.
use std::env;

use crate::kinematics::{EPSILON, MAX_TIME_TO_ARRIVAL};

/// Thresholds used by conditions and actions.
///
/// The defaults match the values scenarios are authored against; override
/// them per node with `with_config` or globally through [`from_env`].
///
/// [`from_env`]: BehaviorConfig::from_env
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorConfig {
    /// Speeds at or below this value count as stopped.
    pub epsilon: f64,

    /// Time-to-arrival reported when it cannot be estimated, in seconds.
    pub max_time_to_arrival: f64,
}

impl BehaviorConfig {
    pub const DEFAULT_EPSILON: f64 = EPSILON;
    pub const DEFAULT_MAX_TIME_TO_ARRIVAL: f64 = MAX_TIME_TO_ARRIVAL;

    pub const fn new() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            max_time_to_arrival: Self::DEFAULT_MAX_TIME_TO_ARRIVAL,
        }
    }

    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub const fn with_max_time_to_arrival(mut self, seconds: f64) -> Self {
        self.max_time_to_arrival = seconds;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// - `SCENARIO_EPSILON`
    /// - `SCENARIO_MAX_TIME_TO_ARRIVAL`
    ///
    /// Unparsable or non-positive values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(epsilon) = read_positive(&lookup, "SCENARIO_EPSILON") {
            config.epsilon = epsilon;
        }

        if let Some(seconds) = read_positive(&lookup, "SCENARIO_MAX_TIME_TO_ARRIVAL") {
            config.max_time_to_arrival = seconds;
        }

        config
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_positive<F>(lookup: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let value: f64 = lookup(key)?.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        tracing::warn!(key, value, "ignoring non-positive or non-finite configuration value");
        None
    }
}
