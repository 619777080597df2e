use crate::geometry::pline::{Pline, PlineVertex};
use crate::math::{Point2, TOLERANCE};

/// A bounded line segment from `start` to `end`.
///
/// The parameter runs over `[0, 1]`, proportional to distance. A
/// zero-length line is a valid value (it marks a single point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Point at parameter `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            self.start
        } else if t >= 1.0 {
            self.end
        } else {
            self.start + (self.end - self.start) * t
        }
    }

    /// Parameter of the orthogonal projection of `p`, clamped to the segment.
    #[must_use]
    pub fn closest_param(&self, p: &Point2) -> f64 {
        let d = self.end - self.start;
        let len_sq = d.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            return 0.0;
        }
        ((p - self.start).dot(&d) / len_sq).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// One-segment polyline with the same parameterization.
    #[must_use]
    pub fn to_pline(&self) -> Pline {
        Pline {
            vertices: vec![
                PlineVertex::line(self.start.x, self.start.y),
                PlineVertex::line(self.end.x, self.end.y),
            ],
            closed: false,
        }
    }
}
