use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::pline::{Pline, PlineVertex};
use crate::math::arc_2d::{point_on_circle, ArcGeom};
use crate::math::{Point2, TOLERANCE};

/// A circular arc in the plane.
///
/// Starts at `start_angle` and turns by the signed `sweep` (positive =
/// counter-clockwise). The parameter runs over `[0, 1]` as a fraction of
/// the sweep. A zero sweep is valid and marks a single point on the circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the radius is not positive or
    /// the sweep is a full turn or more (a full circle cannot be expressed
    /// as a single bulge segment).
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        if !sweep.is_finite() || sweep.abs() >= TAU - TOLERANCE {
            return Err(
                GeometryError::Degenerate("arc sweep must be less than a full turn".into()).into(),
            );
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            sweep,
        })
    }

    /// Counter-clockwise arc between two absolute angles.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Arc::new`].
    pub fn ccw(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        let mut sweep = (end_angle - start_angle) % TAU;
        if sweep < 0.0 {
            sweep += TAU;
        }
        Self::new(center, radius, start_angle, sweep)
    }

    pub(crate) fn from_geom(geom: &ArcGeom) -> Self {
        Self {
            center: geom.center,
            radius: geom.radius,
            start_angle: geom.start_angle,
            sweep: geom.sweep,
        }
    }

    #[must_use]
    pub fn geom(&self) -> ArcGeom {
        ArcGeom {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle,
            sweep: self.sweep,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        point_on_circle(&self.center, self.radius, self.start_angle)
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        point_on_circle(&self.center, self.radius, self.start_angle + self.sweep)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// Point at parameter `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            self.start()
        } else if t >= 1.0 {
            self.end()
        } else {
            self.geom().point_at(t)
        }
    }

    #[must_use]
    pub fn closest_param(&self, p: &Point2) -> f64 {
        if self.sweep.abs() < TOLERANCE {
            return 0.0;
        }
        self.geom().closest_param(p)
    }

    /// The zero-sweep arc sitting at parameter `t`.
    #[must_use]
    pub fn collapsed_at(&self, t: f64) -> Self {
        Self {
            start_angle: self.start_angle + self.sweep * t.clamp(0.0, 1.0),
            sweep: 0.0,
            ..*self
        }
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start_angle: self.start_angle + self.sweep,
            sweep: -self.sweep,
            ..*self
        }
    }

    /// One-segment bulge polyline with the same parameterization.
    #[must_use]
    pub fn to_pline(&self) -> Pline {
        let s = self.start();
        let e = self.end();
        Pline {
            vertices: vec![
                PlineVertex::new(s.x, s.y, self.geom().bulge()),
                PlineVertex::line(e.x, e.y),
            ],
            closed: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rejects_bad_radius_and_full_turn() {
        assert!(Arc::new(Point2::origin(), 0.0, 0.0, 1.0).is_err());
        assert!(Arc::new(Point2::origin(), 1.0, 0.0, TAU).is_err());
        assert!(Arc::new(Point2::origin(), 1.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn ccw_from_angles_wraps() {
        let arc = Arc::ccw(Point2::origin(), 2.0, 3.0 * FRAC_PI_2, FRAC_PI_2 / 2.0).unwrap();
        assert_abs_diff_eq!(arc.sweep(), 3.0 * PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn to_pline_round_trips_the_geometry() {
        let arc = Arc::new(Point2::new(1.0, 1.0), 2.0, 0.0, FRAC_PI_2).unwrap();
        let pline = arc.to_pline();
        assert_eq!(pline.vertices.len(), 2);
        let geom = ArcGeom::from_bulge(
            &pline.vertices[0].point(),
            &pline.vertices[1].point(),
            pline.vertices[0].bulge,
        )
        .unwrap();
        assert_abs_diff_eq!(geom.center, arc.center(), epsilon = 1e-9);
        assert_abs_diff_eq!(geom.radius, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(geom.point_at(0.5), arc.point_at(0.5), epsilon = 1e-9);
    }

    #[test]
    fn reversed_swaps_ends() {
        let arc = Arc::new(Point2::origin(), 1.0, 0.0, FRAC_PI_2).unwrap();
        let rev = arc.reversed();
        assert_abs_diff_eq!(rev.start(), arc.end(), epsilon = 1e-12);
        assert_abs_diff_eq!(rev.end(), arc.start(), epsilon = 1e-12);
        assert!(rev.to_pline().vertices[0].bulge < 0.0);
    }
}
