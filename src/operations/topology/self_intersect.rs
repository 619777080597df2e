use crate::geometry::Pline;
use crate::math::arc_2d::ArcGeom;
use crate::math::intersect_2d::{arc_arc_intersect, segment_arc_intersect, segment_intersect};
use crate::math::{Point2, Tolerance};

/// A crossing between two non-adjacent segments of one polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfIntersection {
    /// Index of the earlier segment.
    pub first: usize,
    /// Index of the later segment (`>= first + 2`).
    pub second: usize,
    pub point: Point2,
}

/// Whether any two non-adjacent segments of `pline` intersect.
///
/// See [`find_self_intersections`].
#[must_use]
pub fn is_self_intersecting(pline: &Pline, tol: &Tolerance) -> bool {
    !find_self_intersections(pline, tol).is_empty()
}

/// All crossings between non-adjacent segments, one per segment pair.
///
/// Segments are bounded (a hit must lie on both). The first and last
/// segments meet at the closing seam of a closed path, so that pair is
/// skipped when the path's endpoints coincide within `tol.length`; an open
/// path whose ends merely come close is still checked there. A `closed`
/// flag is first turned into an explicit closing vertex.
#[must_use]
pub fn find_self_intersections(pline: &Pline, tol: &Tolerance) -> Vec<SelfIntersection> {
    let path = if pline.closed {
        pline.make_truly_closed(tol)
    } else {
        pline.clone()
    };
    let count = path.vertices.len();
    if count < 4 {
        return Vec::new();
    }
    let seam_closed = tol.same_point(&path.vertices[0].point(), &path.vertices[count - 1].point());

    let mut hits = Vec::new();
    for i in 0..=count - 3 {
        for j in i + 2..=count - 2 {
            if i == 0 && j == count - 2 && seam_closed {
                continue;
            }
            if let Some(point) = segment_pair_hit(&path, i, j) {
                hits.push(SelfIntersection {
                    first: i,
                    second: j,
                    point,
                });
            }
        }
    }
    hits
}

fn segment_pair_hit(path: &Pline, i: usize, j: usize) -> Option<Point2> {
    let (a0, a1, ab) = path.segment(i)?;
    let (b0, b1, bb) = path.segment(j)?;
    let arc_a = ArcGeom::from_bulge(&a0, &a1, ab);
    let arc_b = ArcGeom::from_bulge(&b0, &b1, bb);

    match (arc_a, arc_b) {
        (None, None) => segment_intersect(&a0, &a1, &b0, &b1).map(|hit| hit.point),
        (None, Some(arc)) => segment_arc_intersect(&a0, &a1, &arc).first().map(|h| h.0),
        (Some(arc), None) => segment_arc_intersect(&b0, &b1, &arc).first().map(|h| h.0),
        (Some(a), Some(b)) => arc_arc_intersect(&a, &b).first().map(|h| h.0),
    }
}
