mod arc;
mod line;

pub use arc::Arc;
pub use line::Line;

use crate::geometry::pline::Pline;
use crate::math::{Point2, Tolerance, TOLERANCE};

/// Distance under which a point counts as lying exactly on a curve.
pub const ON_CURVE_TOLERANCE: f64 = 1e-9;

/// A planar curve: one of the three supported kinds.
///
/// Lines and arcs are parameterized over `[0, 1]`; polylines over
/// `[0, segment_count]`. All parameter and distance inputs are clamped to
/// the curve's range.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    Line(Line),
    Arc(Arc),
    Pline(Pline),
}

impl From<Line> for Curve {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Curve {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl From<Pline> for Curve {
    fn from(pline: Pline) -> Self {
        Self::Pline(pline)
    }
}

impl Curve {
    /// Start point; `None` only for an empty polyline.
    #[must_use]
    pub fn start_point(&self) -> Option<Point2> {
        match self {
            Self::Line(line) => Some(line.start()),
            Self::Arc(arc) => Some(arc.start()),
            Self::Pline(pline) => pline.start_point(),
        }
    }

    /// End point; `None` only for an empty polyline.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        match self {
            Self::Line(line) => Some(line.end()),
            Self::Arc(arc) => Some(arc.end()),
            Self::Pline(pline) => pline.end_point(),
        }
    }

    #[must_use]
    pub fn end_param(&self) -> f64 {
        match self {
            Self::Line(_) | Self::Arc(_) => 1.0,
            Self::Pline(pline) => pline.end_param(),
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
            Self::Pline(pline) => pline.length(),
        }
    }

    #[must_use]
    pub fn point_at_param(&self, t: f64) -> Option<Point2> {
        match self {
            Self::Line(line) => Some(line.point_at(t)),
            Self::Arc(arc) => Some(arc.point_at(t)),
            Self::Pline(pline) => pline.point_at_param(t),
        }
    }

    #[must_use]
    pub fn dist_at_param(&self, t: f64) -> f64 {
        match self {
            Self::Line(_) | Self::Arc(_) => t.clamp(0.0, 1.0) * self.length(),
            Self::Pline(pline) => pline.dist_at_param(t),
        }
    }

    #[must_use]
    pub fn param_at_dist(&self, dist: f64) -> f64 {
        match self {
            Self::Line(_) | Self::Arc(_) => {
                let len = self.length();
                if len < TOLERANCE {
                    0.0
                } else {
                    (dist / len).clamp(0.0, 1.0)
                }
            }
            Self::Pline(pline) => pline.param_at_dist(dist),
        }
    }

    #[must_use]
    pub fn closest_param(&self, p: &Point2) -> Option<f64> {
        match self {
            Self::Line(line) => Some(line.closest_param(p)),
            Self::Arc(arc) => Some(arc.closest_param(p)),
            Self::Pline(pline) => pline.closest_param(p),
        }
    }

    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Option<Point2> {
        self.closest_param(p).and_then(|t| self.point_at_param(t))
    }

    /// Parameter of `p` if it lies on the curve within [`ON_CURVE_TOLERANCE`].
    #[must_use]
    pub fn param_at_point(&self, p: &Point2) -> Option<f64> {
        let t = self.closest_param(p)?;
        let on = self.point_at_param(t)?;
        (nalgebra::distance(&on, p) <= ON_CURVE_TOLERANCE).then_some(t)
    }

    /// Bulge polyline tracing the same path with the same parameterization.
    #[must_use]
    pub fn to_pline(&self) -> Pline {
        match self {
            Self::Line(line) => line.to_pline(),
            Self::Arc(arc) => arc.to_pline(),
            Self::Pline(pline) => pline.clone(),
        }
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.reversed()),
            Self::Arc(arc) => Self::Arc(arc.reversed()),
            Self::Pline(pline) => Self::Pline(pline.reversed()),
        }
    }

    /// Whether the curve returns to its start: a `closed` polyline, or any
    /// curve whose endpoints coincide within `tol.length`.
    #[must_use]
    pub fn is_closed(&self, tol: &Tolerance) -> bool {
        if let Self::Pline(pline) = self {
            if pline.closed {
                return pline.segment_count() > 0;
            }
        }
        if self.length() < tol.length {
            return false;
        }
        match (self.start_point(), self.end_point()) {
            (Some(s), Some(e)) => tol.same_point(&s, &e),
            _ => false,
        }
    }
}
