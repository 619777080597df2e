//! 2D intersection primitives.
//!
//! Two flavours of straight-line intersection are provided, with distinct
//! contracts:
//! - [`ray_intersect`] accepts any intersection on the *forward rays*
//!   `a1 → a2` and `b1 → b2`; the hit may lie beyond `a2` or `b2`.
//! - [`segment_intersect`] additionally bounds both parameters to `[0, 1]`.

use super::arc_2d::ArcGeom;
use super::{cross, Point2, Vector2, TOLERANCE};

/// Intersection of two supporting lines.
///
/// `point = a1 + lambda * (a2 - a1) = b1 + mu * (b2 - b1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Point2,
    pub lambda: f64,
    pub mu: f64,
}

/// Solves the intersection of the lines through `a1, a2` and `b1, b2`.
///
/// Returns `None` for parallel or collinear lines (and for zero-length
/// inputs). Axis-aligned inputs are solved per axis so the division is
/// always by a component known to be non-zero.
#[must_use]
pub fn solve_lines(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> Option<RayHit> {
    let da = a2 - a1;
    let db = b2 - b1;
    let denom = cross(&da, &db);
    if denom.abs() < TOLERANCE {
        return None;
    }

    let (lambda, mu) = if da.x.abs() < TOLERANCE {
        // a vertical: x is fixed at a1.x.
        let mu = (a1.x - b1.x) / db.x;
        let y = b1.y + mu * db.y;
        ((y - a1.y) / da.y, mu)
    } else if da.y.abs() < TOLERANCE {
        // a horizontal: y is fixed at a1.y.
        let mu = (a1.y - b1.y) / db.y;
        let x = b1.x + mu * db.x;
        ((x - a1.x) / da.x, mu)
    } else if db.x.abs() < TOLERANCE {
        let lambda = (b1.x - a1.x) / da.x;
        let y = a1.y + lambda * da.y;
        (lambda, (y - b1.y) / db.y)
    } else if db.y.abs() < TOLERANCE {
        let lambda = (b1.y - a1.y) / da.y;
        let x = a1.x + lambda * da.x;
        (lambda, (x - b1.x) / db.x)
    } else {
        // Cramer's rule on lambda*da - mu*db = b1 - a1.
        let w = b1 - a1;
        (cross(&w, &db) / denom, cross(&w, &da) / denom)
    };

    Some(RayHit {
        point: a1 + da * lambda,
        lambda,
        mu,
    })
}

/// Intersection of the forward rays `a1 → a2` and `b1 → b2`.
///
/// The hit is accepted when both ray parameters are non-negative (or
/// infinite); it is *not* bounded to the segments.
#[must_use]
pub fn ray_intersect(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> Option<RayHit> {
    solve_lines(a1, a2, b1, b2).filter(|hit| {
        (hit.lambda >= 0.0 || hit.lambda.is_infinite()) && (hit.mu >= 0.0 || hit.mu.is_infinite())
    })
}

/// Bounded segment-segment intersection: both parameters in `[0, 1]`.
///
/// Endpoints are included with a `TOLERANCE` slack and the returned
/// parameters are clamped into range.
#[must_use]
pub fn segment_intersect(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> Option<RayHit> {
    let eps = TOLERANCE;
    let hit = solve_lines(a1, a2, b1, b2)?;
    let in_range = |t: f64| t >= -eps && t <= 1.0 + eps;
    if in_range(hit.lambda) && in_range(hit.mu) {
        Some(RayHit {
            lambda: hit.lambda.clamp(0.0, 1.0),
            mu: hit.mu.clamp(0.0, 1.0),
            ..hit
        })
    } else {
        None
    }
}

/// Intersections of the infinite line `origin + t * dir` with a full circle.
///
/// Returns `(point, t)` pairs ordered by `t`; a tangent line yields one.
#[must_use]
pub fn line_circle_points(
    origin: &Point2,
    dir: &Vector2,
    center: &Point2,
    radius: f64,
) -> Vec<(Point2, f64)> {
    let a = dir.norm_squared();
    if a < TOLERANCE * TOLERANCE || radius < TOLERANCE {
        return Vec::new();
    }
    let f = origin - center;
    let b = 2.0 * f.dot(dir);
    let c = f.norm_squared() - radius * radius;
    let disc = b * b - 4.0 * a * c;
    if disc < -TOLERANCE {
        return Vec::new();
    }
    let sqrt = disc.max(0.0).sqrt();
    let roots = if sqrt < TOLERANCE * 100.0 {
        vec![-b / (2.0 * a)]
    } else {
        vec![(-b - sqrt) / (2.0 * a), (-b + sqrt) / (2.0 * a)]
    };
    roots.into_iter().map(|t| (origin + dir * t, t)).collect()
}

/// Intersection points of two full circles.
#[must_use]
pub fn circle_circle_points(c1: &Point2, r1: f64, c2: &Point2, r2: f64) -> Vec<Point2> {
    if r1 < TOLERANCE || r2 < TOLERANCE {
        return Vec::new();
    }
    let d = c2 - c1;
    let dist = d.norm();
    if dist < TOLERANCE {
        // Concentric: none, or infinitely many.
        return Vec::new();
    }
    if dist > r1 + r2 + TOLERANCE || dist < (r1 - r2).abs() - TOLERANCE {
        return Vec::new();
    }

    // Distance from c1 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let mid = c1 + d * (a / dist);
    if h < TOLERANCE {
        return vec![mid];
    }
    let perp = Vector2::new(-d.y, d.x) / dist;
    vec![mid + perp * h, mid - perp * h]
}

/// Bounded intersection of segment `a0 → a1` with an arc.
///
/// Returns `(point, t_seg, t_arc)` with both parameters in `[0, 1]`.
#[must_use]
pub fn segment_arc_intersect(a0: &Point2, a1: &Point2, arc: &ArcGeom) -> Vec<(Point2, f64, f64)> {
    let eps = TOLERANCE;
    line_circle_points(a0, &(a1 - a0), &arc.center, arc.radius)
        .into_iter()
        .filter(|(_, t)| *t >= -eps && *t <= 1.0 + eps)
        .filter_map(|(p, t)| {
            let angle = (p.y - arc.center.y).atan2(p.x - arc.center.x);
            arc.param_of_angle(angle).map(|u| (p, t.clamp(0.0, 1.0), u))
        })
        .collect()
}

/// Bounded intersection of two arcs.
///
/// Returns `(point, t1, t2)` with arc fractions in `[0, 1]`.
#[must_use]
pub fn arc_arc_intersect(arc1: &ArcGeom, arc2: &ArcGeom) -> Vec<(Point2, f64, f64)> {
    circle_circle_points(&arc1.center, arc1.radius, &arc2.center, arc2.radius)
        .into_iter()
        .filter_map(|p| {
            let a1 = (p.y - arc1.center.y).atan2(p.x - arc1.center.x);
            let a2 = (p.y - arc2.center.y).atan2(p.x - arc2.center.x);
            match (arc1.param_of_angle(a1), arc2.param_of_angle(a2)) {
                (Some(t1), Some(t2)) => Some((p, t1, t2)),
                _ => None,
            }
        })
        .collect()
}
