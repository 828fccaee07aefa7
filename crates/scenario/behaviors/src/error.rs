//! Error types raised while constructing behaviors.
//!
//! Ticks never fail; every error here comes from rejecting parameters at
//! construction time.

use thiserror::Error;

/// Errors surfaced by behavior constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BehaviorError {
    #[error("invalid region: x in [{min_x}, {max_x}], y in [{min_y}, {max_y}]")]
    InvalidRegion {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    #[error("{name} must be a finite non-negative value, got {value}")]
    NegativeThreshold { name: &'static str, value: f64 },

    #[error("{name} must lie within [0, 1], got {value}")]
    ActuationOutOfRange { name: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, BehaviorError>;

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(BehaviorError::NegativeThreshold { name, value })
    }
}

pub(crate) fn unit_interval(name: &'static str, value: f32) -> Result<f32> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(BehaviorError::ActuationOutOfRange { name, value })
    }
}
