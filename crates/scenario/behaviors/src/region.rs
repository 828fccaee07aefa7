//! Axis-aligned trigger regions.

use crate::actor::Location;
use crate::error::{BehaviorError, Result};

/// Rectangle on the ground plane, bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Region {
    /// Creates a region spanning `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// Fails if a bound is not finite or a minimum exceeds its maximum.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self> {
        let finite = [min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite());
        if !finite || min_x > max_x || min_y > max_y {
            return Err(BehaviorError::InvalidRegion {
                min_x,
                max_x,
                min_y,
                max_y,
            });
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns `true` if `location` lies inside the region or on its border.
    ///
    /// The height of `location` is ignored.
    pub fn contains(&self, location: Location) -> bool {
        let outside = location.x < self.min_x
            || location.x > self.max_x
            || location.y < self.min_y
            || location.y > self.max_y;
        !outside
    }
}
