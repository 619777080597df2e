//! Clamped conversions between distance, parameter and point on a curve.
//!
//! Out-of-range inputs degrade to the nearest boundary instead of failing.

use crate::geometry::Curve;
use crate::math::{Point2, Tolerance};

/// Curve parameter at `dist` along the curve, with `dist` clamped to `[0, length]`.
#[must_use]
pub fn param_at_distance(curve: &Curve, dist: f64) -> f64 {
    curve.param_at_dist(dist.clamp(0.0, curve.length()))
}

/// Distance along the curve at `param`, with `param` clamped to `[0, end_param]`.
#[must_use]
pub fn distance_at_param(curve: &Curve, param: f64) -> f64 {
    curve.dist_at_param(param.clamp(0.0, curve.end_param()))
}

#[must_use]
pub fn point_at_param(curve: &Curve, param: f64) -> Option<Point2> {
    curve.point_at_param(param.clamp(0.0, curve.end_param()))
}

#[must_use]
pub fn point_at_distance(curve: &Curve, dist: f64) -> Option<Point2> {
    curve.point_at_param(param_at_distance(curve, dist))
}

/// Tolerant parameter lookup of a point near the curve.
///
/// A point within `tol.length` of the start (or end) reports `0`
/// (or `end_param`); the start wins on a closed curve. A point exactly on
/// the curve reports its parameter; anything else reports the parameter of
/// the closest point. `None` only for an empty polyline.
#[must_use]
pub fn param_at_point(curve: &Curve, p: &Point2, tol: &Tolerance) -> Option<f64> {
    let start = curve.start_point()?;
    if tol.same_point(&start, p) {
        return Some(0.0);
    }
    if curve.end_point().is_some_and(|end| tol.same_point(&end, p)) {
        return Some(curve.end_param());
    }
    curve
        .param_at_point(p)
        .or_else(|| curve.closest_param(p))
}

/// Tolerant distance lookup; same rules as [`param_at_point`].
#[must_use]
pub fn distance_at_point(curve: &Curve, p: &Point2, tol: &Tolerance) -> Option<f64> {
    param_at_point(curve, p, tol).map(|t| curve.dist_at_param(t))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Arc, Line, Pline, PlineVertex};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn l_shape() -> Curve {
        Pline::from_points(
            &[Point2::new(0.0, 0.0), Point2::new(6.0, 0.0), Point2::new(6.0, 4.0)],
            false,
        )
        .into()
    }

    #[test]
    fn clamps_out_of_range_inputs() {
        let curve = l_shape();
        assert_abs_diff_eq!(param_at_distance(&curve, 100.0), 2.0);
        assert_abs_diff_eq!(param_at_distance(&curve, -3.0), 0.0);
        assert_abs_diff_eq!(distance_at_param(&curve, 7.0), 10.0);
        assert_eq!(point_at_distance(&curve, 11.0).unwrap(), Point2::new(6.0, 4.0));
        assert_eq!(point_at_param(&curve, -1.0).unwrap(), Point2::new(0.0, 0.0));
    }

    #[test]
    fn distance_param_round_trip_on_all_kinds() {
        let arc = Arc::new(Point2::new(1.0, 1.0), 3.0, 0.3, -2.0).unwrap();
        let curves: Vec<Curve> = vec![
            Line::new(Point2::new(-1.0, 2.0), Point2::new(5.0, -6.0)).into(),
            arc.into(),
            l_shape(),
            Pline::new(
                vec![PlineVertex::new(0.0, 0.0, 0.5), PlineVertex::new(4.0, 0.0, -1.0), PlineVertex::line(8.0, 0.0)],
                false,
            )
            .into(),
        ];
        for curve in &curves {
            let len = curve.length();
            for i in 0..=10 {
                let d = len * f64::from(i) / 10.0;
                let t = param_at_distance(curve, d);
                assert_abs_diff_eq!(distance_at_param(curve, t), d, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn point_lookup_snaps_to_ends() {
        let tol = Tolerance::default();
        let curve = l_shape();
        assert_abs_diff_eq!(param_at_point(&curve, &Point2::new(6.0004, 4.0), &tol).unwrap(), 2.0);
        assert_abs_diff_eq!(distance_at_point(&curve, &Point2::new(0.0, 0.0002), &tol).unwrap(), 0.0);
        assert_abs_diff_eq!(distance_at_point(&curve, &Point2::new(6.0, 1.0), &tol).unwrap(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn point_lookup_falls_back_to_closest() {
        let tol = Tolerance::default();
        let curve = l_shape();
        // Slightly off the first leg.
        let d = distance_at_point(&curve, &Point2::new(3.0, 0.01), &tol).unwrap();
        assert_abs_diff_eq!(d, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn closed_curve_seam_reports_start() {
        let tol = Tolerance::default();
        let square: Curve = Pline::from_points(
            &[Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(2.0, 2.0), Point2::new(0.0, 2.0)],
            true,
        )
        .into();
        assert_abs_diff_eq!(param_at_point(&square, &Point2::new(0.0, 0.0), &tol).unwrap(), 0.0);
        assert_abs_diff_eq!(distance_at_point(&square, &Point2::new(0.0, 1.0), &tol).unwrap(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn arc_midpoint_distance() {
        let tol = Tolerance::default();
        let arc: Curve = Arc::new(Point2::origin(), 1.0, 0.0, PI).unwrap().into();
        let d = distance_at_point(&arc, &Point2::new(0.0, 1.0), &tol).unwrap();
        assert_abs_diff_eq!(d, PI / 2.0, epsilon = 1e-9);
    }
}
