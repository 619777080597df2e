use crate::error::{GeometryError, Result};

use super::Point2;

/// Tolerances threaded into every tolerant geometry operation.
///
/// `length` decides point coincidence (vertex matching, closing seams,
/// loop termination). `angle` is the slack on the winding-angle sum in
/// point-in-polygon tests. Both are in the host's working units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    pub length: f64,
    pub angle: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            length: 1e-3,
            angle: 0.1,
        }
    }
}

impl Tolerance {
    /// Creates a validated tolerance pair.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidTolerance` if either value is not
    /// finite and strictly positive.
    pub fn new(length: f64, angle: f64) -> Result<Self> {
        check("length", length)?;
        check("angle", angle)?;
        Ok(Self { length, angle })
    }

    /// Returns a copy with a different length tolerance.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidTolerance` for a non-positive value.
    pub fn with_length(self, length: f64) -> Result<Self> {
        Self::new(length, self.angle)
    }

    /// Returns a copy with a different angular tolerance.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidTolerance` for a non-positive value.
    pub fn with_angle(self, angle: f64) -> Result<Self> {
        Self::new(self.length, angle)
    }

    /// Whether two points are the same vertex under this tolerance.
    #[must_use]
    pub fn same_point(&self, a: &Point2, b: &Point2) -> bool {
        nalgebra::distance(a, b) < self.length
    }
}

fn check(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidTolerance { name, value }.into())
    }
}
