use tracing::debug;

use crate::geometry::{Pline, PlineVertex};
use crate::math::arc_2d::{is_arc_bulge, ArcGeom, BulgeMode};
use crate::math::intersect_2d::{line_circle_points, solve_lines};
use crate::math::{cross, Point2, Tolerance, TOLERANCE};

/// Parameters closer than this are one crossing.
const PARAM_EPS: f64 = 1e-9;

/// Splits a closed loop into two closed halves along an infinite line.
///
/// The line through `a` and `b` must cross the loop at exactly two
/// parameters `t0 < t1`. The first half runs from `t0` to `t1`, the second
/// from `t1` through the loop's seam back to `t0`; each is closed back
/// along the cutting line. Partial arc segments at the cuts take their
/// bulge from the configured [`BulgeMode`] (linear scaling by default).
#[derive(Debug)]
pub struct CutLoopToHalves {
    boundary: Pline,
    a: Point2,
    b: Point2,
    mode: BulgeMode,
}

impl CutLoopToHalves {
    /// Creates a new cut of `boundary` by the line through `a` and `b`.
    #[must_use]
    pub fn new(boundary: Pline, a: Point2, b: Point2) -> Self {
        Self {
            boundary,
            a,
            b,
            mode: BulgeMode::default(),
        }
    }

    /// Selects how partial arc segments get their bulge.
    #[must_use]
    pub fn with_bulge_mode(mut self, mode: BulgeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Executes the cut.
    ///
    /// Returns the two halves, or an empty list when the loop is not closed,
    /// the line is degenerate, the line runs along a straight edge, or the
    /// line does not cross the loop exactly twice.
    #[must_use]
    pub fn execute(&self, tol: &Tolerance) -> Vec<Pline> {
        let path = self.boundary.to_path();
        let closed = match (path.start_point(), path.end_point()) {
            (Some(s), Some(e)) => path.vertices.len() >= 3 && tol.same_point(&s, &e),
            _ => false,
        };
        if !closed {
            debug!(vertices = path.vertices.len(), "cut rejected: loop is not closed");
            return Vec::new();
        }
        if (self.b - self.a).norm() < TOLERANCE {
            debug!("cut rejected: cutting line has no direction");
            return Vec::new();
        }

        if let Some(edge) = self.edge_on_line(&path, tol) {
            debug!(edge, "cut rejected: cutting line runs along an edge");
            return Vec::new();
        }

        let params = self.crossing_params(&path);
        let [t0, t1] = params[..] else {
            debug!(crossings = params.len(), "cut rejected: need exactly two crossings");
            return Vec::new();
        };

        let end = path.end_param();
        let first = close(path.extract(t0, t1, self.mode));
        let second = if t0 <= PARAM_EPS {
            close(path.extract(t1, end, self.mode))
        } else {
            let mut verts = path.extract(t1, end, self.mode).vertices;
            verts.pop();
            verts.extend(path.extract(0.0, t0, self.mode).vertices);
            close(Pline::new(verts, false))
        };
        vec![first, second]
    }

    /// Index of a straight edge lying on the cutting line within `tol.length`.
    fn edge_on_line(&self, path: &Pline, tol: &Tolerance) -> Option<usize> {
        let dir = self.b - self.a;
        let len = dir.norm();
        let off_line = |q: &Point2| cross(&dir, &(q - self.a)).abs() / len;
        (0..path.segment_count()).find(|&i| {
            path.segment(i).is_some_and(|(s0, s1, bulge)| {
                !is_arc_bulge(bulge)
                    && (s1 - s0).norm() >= tol.length
                    && off_line(&s0) <= tol.length
                    && off_line(&s1) <= tol.length
            })
        })
    }

    /// Sorted, de-duplicated loop parameters where the infinite line meets
    /// the loop. The seam parameter is reported as `0`.
    fn crossing_params(&self, path: &Pline) -> Vec<f64> {
        let dir = self.b - self.a;
        let end = path.end_param();
        let mut params = Vec::new();

        for i in 0..path.segment_count() {
            let Some((s0, s1, bulge)) = path.segment(i) else {
                continue;
            };
            #[allow(clippy::cast_precision_loss)]
            let base = i as f64;
            match ArcGeom::from_bulge(&s0, &s1, bulge) {
                Some(arc) => {
                    for (p, _) in line_circle_points(&self.a, &dir, &arc.center, arc.radius) {
                        let angle = (p.y - arc.center.y).atan2(p.x - arc.center.x);
                        if let Some(t) = arc.param_of_angle(angle) {
                            params.push(base + t);
                        }
                    }
                }
                None => {
                    if let Some(hit) = solve_lines(&self.a, &self.b, &s0, &s1) {
                        if hit.mu >= -PARAM_EPS && hit.mu <= 1.0 + PARAM_EPS {
                            params.push(base + hit.mu.clamp(0.0, 1.0));
                        }
                    }
                }
            }
        }

        for t in &mut params {
            if *t >= end - PARAM_EPS {
                *t = 0.0;
            }
        }
        params.sort_by(f64::total_cmp);
        params.dedup_by(|x, y| (*x - *y).abs() <= PARAM_EPS);
        params
    }
}

/// Appends a straight closing vertex back to the first one.
fn close(mut pline: Pline) -> Pline {
    if let Some(first) = pline.vertices.first() {
        let closing = PlineVertex::new(first.x, first.y, 0.0);
        pline.vertices.push(closing);
    }
    pline
}
