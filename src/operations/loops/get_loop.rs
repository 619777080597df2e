use crate::error::{Result, TopologyError};
use crate::geometry::{Curve, Pline, PlineVertex};
use crate::math::{Point2, Tolerance};

use super::group::{endpoints, group_loops};
use super::region::{Exploded, Region};

/// Turns one ring of fragments (as grouped by [`group_loops`]) into a
/// truly closed polyline.
///
/// The walk starts at the endpoint of the first fragment that the second
/// fragment does not touch, so the first fragment's direction decides the
/// loop's direction. Fragments running against the walk are reversed,
/// which negates their bulge.
///
/// # Errors
///
/// - `TopologyError::EmptyRing` for an empty ring
/// - `TopologyError::OpenRing` if a fragment does not continue the walk or
///   the walk does not return to its start
pub fn get_loop(ring: &[Curve], tol: &Tolerance) -> Result<Pline> {
    let (first_start, first_end) = ring
        .first()
        .and_then(endpoints)
        .ok_or(TopologyError::EmptyRing)?;

    let seed = match ring.get(1).and_then(endpoints) {
        Some((s, e)) if !tol.same_point(&first_end, &s) && !tol.same_point(&first_end, &e) => first_end,
        _ => first_start,
    };

    let mut vertices: Vec<PlineVertex> = Vec::new();
    let mut current = seed;
    for fragment in ring {
        let oriented = orient(fragment, &current, tol)?;
        let path = oriented.to_pline().to_path();
        if let Some((_, head)) = path.vertices.split_last() {
            vertices.extend_from_slice(head);
        }
        current = path.end_point().unwrap_or(current);
    }

    if !tol.same_point(&current, &seed) {
        return Err(TopologyError::OpenRing {
            x: current.x,
            y: current.y,
        }
        .into());
    }
    vertices.push(PlineVertex::at(&seed, 0.0));
    Ok(Pline::new(vertices, false))
}

/// The fragment running away from `from`.
fn orient(fragment: &Curve, from: &Point2, tol: &Tolerance) -> Result<Curve> {
    let (s, e) = endpoints(fragment).ok_or(TopologyError::EmptyRing)?;
    if tol.same_point(&s, from) {
        Ok(fragment.clone())
    } else if tol.same_point(&e, from) {
        Ok(fragment.reversed())
    } else {
        Err(TopologyError::OpenRing { x: from.x, y: from.y }.into())
    }
}

/// One loop per ring of the region's boundary, recursing into sub-regions.
///
/// # Errors
///
/// Propagates host explode failures and loop reconstruction errors.
pub fn get_loops<R: Region>(region: &R, tol: &Tolerance) -> Result<Vec<Pline>> {
    match region.explode()? {
        Exploded::Curves(curves) => group_loops(&curves, tol)?
            .iter()
            .map(|ring| get_loop(ring, tol))
            .collect(),
        Exploded::Regions(parts) => {
            let mut loops = Vec::new();
            for part in &parts {
                loops.extend(get_loops(part, tol)?);
            }
            Ok(loops)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Arc, Line};
    use crate::operations::loops::region::CurveRegion;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Curve {
        Line::new(Point2::new(x0, y0), Point2::new(x1, y1)).into()
    }

    #[test]
    fn triangle_from_mixed_orientation() {
        let tol = Tolerance::default();
        let ring = vec![
            line(0.0, 0.0, 3.0, 0.0),
            line(0.0, 4.0, 3.0, 0.0),
            line(0.0, 4.0, 0.0, 0.0),
        ];
        let pline = get_loop(&ring, &tol).unwrap();
        assert_eq!(
            pline.points(),
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(3.0, 0.0),
                Point2::new(0.0, 4.0),
                Point2::new(0.0, 0.0)
            ]
        );
        assert!(pline.is_truly_closed(&tol));
        assert_abs_diff_eq!(pline.length(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn seed_is_the_unshared_end_of_the_first_fragment() {
        let tol = Tolerance::default();
        // The first fragment's end is not on the second, so the walk starts there.
        let ring = vec![
            line(3.0, 0.0, 0.0, 0.0),
            line(0.0, 4.0, 3.0, 0.0),
            line(0.0, 4.0, 0.0, 0.0),
        ];
        let pline = get_loop(&ring, &tol).unwrap();
        assert_eq!(pline.vertices[0].point(), Point2::new(0.0, 0.0));
        assert_eq!(pline.vertices[1].point(), Point2::new(3.0, 0.0));
    }

    #[test]
    fn reversed_arc_negates_bulge() {
        let tol = Tolerance::default();
        // D shape: diameter down the y axis, then the arc back up through
        // (1, 0). The arc is stored clockwise from the top, against the walk.
        let arc = Arc::new(Point2::origin(), 1.0, FRAC_PI_2, -PI).unwrap();
        let ring = vec![line(0.0, 1.0, 0.0, -1.0), arc.into()];
        let pline = get_loop(&ring, &tol).unwrap();
        assert_eq!(pline.vertices.len(), 3);
        assert_abs_diff_eq!(pline.vertices[1].bulge, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pline.length(), 2.0 + PI, epsilon = 1e-9);
        assert_abs_diff_eq!(pline.point_at_param(1.5).unwrap(), Point2::new(1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn broken_ring_is_an_error() {
        let tol = Tolerance::default();
        assert!(get_loop(&[], &tol).is_err());
        let ring = vec![line(0.0, 0.0, 1.0, 0.0), line(5.0, 5.0, 6.0, 5.0)];
        assert!(get_loop(&ring, &tol).is_err());
    }

    #[test]
    fn composite_region_gives_one_loop_per_part() {
        let tol = Tolerance::default();
        let square = |x: f64| {
            Pline::from_points(
                &[
                    Point2::new(x, 0.0),
                    Point2::new(x + 1.0, 0.0),
                    Point2::new(x + 1.0, 1.0),
                    Point2::new(x, 1.0),
                ],
                true,
            )
        };
        let region = CurveRegion::Composite(vec![
            CurveRegion::from_boundary(&square(0.0)),
            CurveRegion::Composite(vec![CurveRegion::from_boundary(&square(5.0))]),
        ]);
        let loops = get_loops(&region, &tol).unwrap();
        assert_eq!(loops.len(), 2);
        for lp in &loops {
            assert_eq!(lp.vertices.len(), 5);
            assert_abs_diff_eq!(lp.length(), 4.0, epsilon = 1e-12);
        }
    }
}
