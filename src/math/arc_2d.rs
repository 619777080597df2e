//! Bulge and circular-arc math.
//!
//! Bulge convention: `bulge = tan(sweep / 4)`.
//! - `bulge = 0`: straight segment
//! - `bulge > 0`: counter-clockwise arc
//! - `bulge < 0`: clockwise arc
//! - `|bulge| = 1`: semicircle

use std::f64::consts::{PI, TAU};

use super::{Point2, Vector2, TOLERANCE};

/// Bulges below this magnitude are treated as straight segments.
pub const BULGE_EPS: f64 = 1e-12;

/// Whether a bulge denotes an arc rather than a straight segment.
#[must_use]
pub fn is_arc_bulge(bulge: f64) -> bool {
    bulge.abs() >= BULGE_EPS
}

/// A circular arc in center/radius/angle form.
///
/// The arc starts at `start_angle` and turns by the signed `sweep`
/// (positive = counter-clockwise).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeom {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl ArcGeom {
    /// Converts a bulge segment `p0 → p1` to center form.
    ///
    /// Returns `None` for a straight segment or a zero-length chord.
    #[must_use]
    pub fn from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Option<Self> {
        if !is_arc_bulge(bulge) {
            return None;
        }
        let chord = p1 - p0;
        let chord_len = chord.norm();
        if chord_len < TOLERANCE {
            return None;
        }

        // Signed distance from the chord midpoint to the center, along the
        // left normal of the chord.
        let offset = (1.0 - bulge * bulge) / (2.0 * bulge) * (chord_len * 0.5);
        let normal = Vector2::new(-chord.y, chord.x) / chord_len;
        let center = nalgebra::center(p0, p1) + normal * offset;

        // r = d*(1+b²)/(4*|b|)
        let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
        let start_angle = (p0.y - center.y).atan2(p0.x - center.x);

        Some(Self {
            center,
            radius,
            start_angle,
            sweep: 4.0 * bulge.atan(),
        })
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    #[must_use]
    pub fn bulge(&self) -> f64 {
        (self.sweep / 4.0).tan()
    }

    /// Point at fraction `t ∈ [0, 1]` of the sweep.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        point_on_circle(&self.center, self.radius, self.start_angle + self.sweep * t)
    }

    /// Unit tangent at fraction `t`, pointing in the direction of travel.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector2 {
        let angle = self.start_angle + self.sweep * t;
        let sign = if self.sweep >= 0.0 { 1.0 } else { -1.0 };
        Vector2::new(-sign * angle.sin(), sign * angle.cos())
    }

    /// Converts an absolute angle to the arc fraction `t ∈ [0, 1]`.
    ///
    /// Returns `None` if the angle lies outside the swept range.
    #[must_use]
    pub fn param_of_angle(&self, angle: f64) -> Option<f64> {
        if self.sweep.abs() < TOLERANCE {
            return None;
        }
        let eps = TOLERANCE * 100.0;
        let delta = sweep_delta(angle, self.start_angle, self.sweep);
        let t = delta / self.sweep;
        if t >= -eps && t <= 1.0 + eps {
            Some(t.clamp(0.0, 1.0))
        } else {
            None
        }
    }

    /// Fraction of the closest point on the arc to `p`.
    #[must_use]
    pub fn closest_param(&self, p: &Point2) -> f64 {
        let d = p - self.center;
        if d.norm() < TOLERANCE {
            return 0.0;
        }
        let angle = d.y.atan2(d.x);
        if let Some(t) = self.param_of_angle(angle) {
            return t;
        }
        let d0 = nalgebra::distance(p, &self.point_at(0.0));
        let d1 = nalgebra::distance(p, &self.point_at(1.0));
        if d0 <= d1 {
            0.0
        } else {
            1.0
        }
    }
}

/// Point at `angle` on the circle of `radius` around `center`.
#[must_use]
pub fn point_on_circle(center: &Point2, radius: f64, angle: f64) -> Point2 {
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Angular offset from `start` to `angle`, measured in the sweep direction.
fn sweep_delta(angle: f64, start: f64, sweep: f64) -> f64 {
    let eps = TOLERANCE * 100.0;
    let mut delta = angle - start;
    if sweep > 0.0 {
        while delta < -eps {
            delta += TAU;
        }
        while delta > TAU + eps {
            delta -= TAU;
        }
    } else {
        while delta > eps {
            delta -= TAU;
        }
        while delta < -TAU - eps {
            delta += TAU;
        }
    }
    delta
}

/// Exact bulge of the sub-arc spanning fractions `[t0, t1]` of a segment.
#[must_use]
pub fn sub_bulge(bulge: f64, t0: f64, t1: f64) -> f64 {
    if !is_arc_bulge(bulge) {
        return 0.0;
    }
    let sweep = 4.0 * bulge.atan();
    (sweep * (t1 - t0) / 4.0).tan()
}

/// Linearly scaled bulge of the partial segment `[t0, t1]`.
///
/// Approximates [`sub_bulge`]; the error grows with the sweep angle.
#[must_use]
pub fn linear_sub_bulge(bulge: f64, t0: f64, t1: f64) -> f64 {
    bulge * (t1 - t0)
}

/// How the bulge of a partial arc segment is derived when a polyline is cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BulgeMode {
    /// Scale the full segment's bulge by the kept fraction.
    #[default]
    Linear,
    /// Recompute `tan(sub_sweep / 4)` for the kept sub-arc.
    Exact,
}

impl BulgeMode {
    /// Bulge of the portion `[t0, t1]` of a segment with `bulge`.
    #[must_use]
    pub fn sub_bulge(self, bulge: f64, t0: f64, t1: f64) -> f64 {
        if !is_arc_bulge(bulge) {
            return 0.0;
        }
        match self {
            Self::Linear => linear_sub_bulge(bulge, t0, t1),
            Self::Exact => sub_bulge(bulge, t0, t1),
        }
    }
}

/// Normalizes an angle into `(-π, π]`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}
