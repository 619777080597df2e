use std::f64::consts::TAU;

use super::{cross, Point2, Tolerance, Vector2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A duplicated
/// closing vertex contributes nothing.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Area centroid of a polygon.
///
/// A single point is its own centroid. Zero-area input (collinear points)
/// falls back to the vertex average. Returns `None` for an empty slice.
#[must_use]
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    match points {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    let n = points.len();
    let mut area2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let c = a.x * b.y - b.x * a.y;
        area2 += c;
        cx += (a.x + b.x) * c;
        cy += (a.y + b.y) * c;
    }

    if area2.abs() < TOLERANCE {
        let unique = strip_closing_duplicate(points);
        #[allow(clippy::cast_precision_loss)]
        let count = unique.len() as f64;
        let sum = unique.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords);
        return Some(Point2::from(sum / count));
    }

    Some(Point2::new(cx / (3.0 * area2), cy / (3.0 * area2)))
}

/// Winding-angle point-in-polygon test.
///
/// Sums the signed angle subtended at `p` by each consecutive vertex
/// pair (wrapping around). The point is inside when the absolute sum is
/// within `tol.angle` of a full turn. Works for either winding and for
/// input with or without a duplicated closing vertex.
#[must_use]
pub fn point_in_polygon(points: &[Point2], p: &Point2, tol: &Tolerance) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let total: f64 = (0..n)
        .map(|i| {
            let u = points[i] - p;
            let v = points[(i + 1) % n] - p;
            cross(&u, &v).atan2(u.dot(&v))
        })
        .sum();
    (total.abs() - TAU).abs() < tol.angle
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

fn strip_closing_duplicate(points: &[Point2]) -> &[Point2] {
    match points {
        [first, .., last] if points.len() > 2 && nalgebra::distance(first, last) < TOLERANCE => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}
