use crate::geometry::curve::{Arc, Curve, Line};
use crate::math::arc_2d::{is_arc_bulge, ArcGeom, BulgeMode};
use crate::math::polygon_2d::{centroid, point_in_polygon, signed_area};
use crate::math::{Point2, Tolerance, TOLERANCE};

/// Bulge-encoded polyline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }

    #[must_use]
    pub fn at(p: &Point2, bulge: f64) -> Self {
        Self::new(p.x, p.y, bulge)
    }

    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// A polyline with mixed straight-line and circular-arc segments.
///
/// Each segment between consecutive vertices is either a line (bulge=0)
/// or a circular arc (bulge≠0). With `closed` set, the last vertex
/// connects back to the first. Most algorithms here prefer the *truly
/// closed* form instead: `closed == false` and a last vertex repeating
/// the first (see [`Pline::make_truly_closed`]).
///
/// The curve parameter is `segment index + fraction`, where the fraction
/// is proportional to distance along that segment, so the parameter range
/// is `[0, segment_count]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
}

impl Pline {
    #[must_use]
    pub fn new(vertices: Vec<PlineVertex>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    /// Creates a `Pline` from points with all-zero bulges (line segments only).
    #[must_use]
    pub fn from_points(points: &[Point2], closed: bool) -> Self {
        let vertices = points.iter().map(|p| PlineVertex::at(p, 0.0)).collect();
        Self { vertices, closed }
    }

    /// Vertex positions, without any closing duplicate for `closed` plines.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.vertices.iter().map(PlineVertex::point).collect()
    }

    /// Converts this polyline to points by tessellating arcs into line segments.
    ///
    /// `tolerance` controls the maximum deviation between the arc and its chord approximation.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let n = self.vertices.len();
        if n == 0 {
            return Vec::new();
        }

        let seg_count = self.segment_count();
        let mut points = Vec::with_capacity(n * 2);
        points.push(self.vertices[0].point());

        for i in 0..seg_count {
            let v0 = self.vertices[i].point();
            let v1 = self.vertices[(i + 1) % n].point();

            if let Some(arc) = ArcGeom::from_bulge(&v0, &v1, self.vertices[i].bulge) {
                let n_sub = arc_subdivision_count(arc.radius, arc.sweep.abs(), tolerance);
                for j in 1..n_sub {
                    points.push(arc.point_at(f64::from(j) / f64::from(n_sub)));
                }
            }
            points.push(v1);
        }

        points
    }

    /// Returns a new polyline with vertices in reverse order and negated bulges.
    ///
    /// For a segment `v[i] → v[i+1]` with bulge `b`, the reversed segment
    /// `v[i+1] → v[i]` has bulge `-b` (arc direction flips).
    #[must_use]
    pub fn reversed(&self) -> Self {
        let m = self.vertices.len();
        if m == 0 {
            return self.clone();
        }
        let mut new_verts = Vec::with_capacity(m);
        for j in 0..m {
            let orig_idx = m - 1 - j;
            // New vertex j starts the reverse of original segment m-2-j; for a
            // closed pline the last new vertex starts the reversed wrap segment.
            let bulge = if j < m - 1 {
                -self.vertices[m - 2 - j].bulge
            } else if self.closed {
                -self.vertices[m - 1].bulge
            } else {
                0.0
            };
            let v = &self.vertices[orig_idx];
            new_verts.push(PlineVertex::new(v.x, v.y, bulge));
        }
        Self {
            vertices: new_verts,
            closed: self.closed,
        }
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Start point, end point and bulge of segment `i`.
    #[must_use]
    pub fn segment(&self, i: usize) -> Option<(Point2, Point2, f64)> {
        if i >= self.segment_count() {
            return None;
        }
        let v0 = &self.vertices[i];
        let v1 = &self.vertices[(i + 1) % self.vertices.len()];
        Some((v0.point(), v1.point(), v0.bulge))
    }

    /// Length of segment `i` (0 for an out-of-range index).
    #[must_use]
    pub fn segment_length(&self, i: usize) -> f64 {
        match self.segment(i) {
            Some((a, b, bulge)) => match ArcGeom::from_bulge(&a, &b, bulge) {
                Some(arc) => arc.length(),
                None => nalgebra::distance(&a, &b),
            },
            None => 0.0,
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (0..self.segment_count()).map(|i| self.segment_length(i)).sum()
    }

    #[must_use]
    pub fn start_point(&self) -> Option<Point2> {
        self.vertices.first().map(PlineVertex::point)
    }

    /// End of the path: the first vertex again for `closed` plines.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        if self.closed {
            self.start_point()
        } else {
            self.vertices.last().map(PlineVertex::point)
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn end_param(&self) -> f64 {
        self.segment_count() as f64
    }

    /// Point at parameter `t`, clamped to `[0, end_param]`.
    ///
    /// A single-vertex pline yields that vertex; an empty one yields `None`.
    #[must_use]
    pub fn point_at_param(&self, t: f64) -> Option<Point2> {
        if self.segment_count() == 0 {
            return self.start_point();
        }
        let (seg, frac) = self.locate(t);
        Some(self.segment_point(seg, frac))
    }

    /// Distance along the path to parameter `t` (clamped).
    #[must_use]
    pub fn dist_at_param(&self, t: f64) -> f64 {
        if self.segment_count() == 0 {
            return 0.0;
        }
        let (seg, frac) = self.locate(t);
        let before: f64 = (0..seg).map(|i| self.segment_length(i)).sum();
        before + frac * self.segment_length(seg)
    }

    /// Parameter at distance `dist` along the path (clamped).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn param_at_dist(&self, dist: f64) -> f64 {
        let count = self.segment_count();
        if count == 0 || dist <= 0.0 {
            return 0.0;
        }
        let mut acc = 0.0;
        for i in 0..count {
            let len = self.segment_length(i);
            if acc + len >= dist {
                let frac = if len > TOLERANCE {
                    ((dist - acc) / len).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                return i as f64 + frac;
            }
            acc += len;
        }
        self.end_param()
    }

    /// Parameter of the closest point on the path to `p`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn closest_param(&self, p: &Point2) -> Option<f64> {
        let count = self.segment_count();
        if count == 0 {
            return self.start_point().map(|_| 0.0);
        }
        let mut best: Option<(f64, f64)> = None;
        for i in 0..count {
            let Some((a, b, bulge)) = self.segment(i) else {
                continue;
            };
            let frac = match ArcGeom::from_bulge(&a, &b, bulge) {
                Some(arc) => arc.closest_param(p),
                None => Line::new(a, b).closest_param(p),
            };
            let d = nalgebra::distance(p, &self.segment_point(i, frac));
            let better = match best {
                Some((_, best_d)) => d < best_d,
                None => true,
            };
            if better {
                best = Some((i as f64 + frac, d));
            }
        }
        best.map(|(t, _)| t)
    }

    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Option<Point2> {
        self.closest_param(p).and_then(|t| self.point_at_param(t))
    }

    /// Extracts the portion of the path between parameters `t0` and `t1`.
    ///
    /// Full interior segments keep their bulge; the partial first and last
    /// segments get a bulge derived by `mode`. The result is an open path
    /// with at least two vertices (coincident for an empty range).
    #[must_use]
    pub fn extract(&self, t0: f64, t1: f64, mode: BulgeMode) -> Pline {
        if self.segment_count() == 0 {
            return Pline::new(self.vertices.clone(), false);
        }
        let (t0, t1) = (t0.min(t1), t0.max(t1));
        let (s0, f0) = self.locate(t0);
        let (s1, f1) = self.locate_end(t1);

        if t1 - t0 <= 0.0 || s1 < s0 {
            let p = self.segment_point(s0, f0);
            return Pline::new(vec![PlineVertex::at(&p, 0.0), PlineVertex::at(&p, 0.0)], false);
        }

        let mut verts = Vec::with_capacity(s1 - s0 + 2);
        if s0 == s1 {
            let bulge = mode.sub_bulge(self.vertices[s0].bulge, f0, f1);
            verts.push(PlineVertex::at(&self.segment_point(s0, f0), bulge));
        } else {
            let bulge = mode.sub_bulge(self.vertices[s0].bulge, f0, 1.0);
            verts.push(PlineVertex::at(&self.segment_point(s0, f0), bulge));
            verts.extend_from_slice(&self.vertices[s0 + 1..s1]);
            let last = &self.vertices[s1];
            let bulge = mode.sub_bulge(last.bulge, 0.0, f1);
            verts.push(PlineVertex::new(last.x, last.y, bulge));
        }
        verts.push(PlineVertex::at(&self.segment_point(s1, f1), 0.0));

        Pline::new(verts, false)
    }

    /// Splits the path at the given parameters.
    ///
    /// Parameters outside the open range `(0, end_param)` are ignored, as
    /// are exact duplicates, so `k` interior parameters yield `k + 1` open
    /// pieces. Partial arc segments get their exact sub-arc bulge.
    #[must_use]
    pub fn split_at_params(&self, params: &[f64]) -> Vec<Pline> {
        let end = self.end_param();
        let mut cuts: Vec<f64> = params
            .iter()
            .copied()
            .filter(|t| t.is_finite() && *t > 0.0 && *t < end)
            .collect();
        cuts.sort_by(f64::total_cmp);
        cuts.dedup();
        if cuts.is_empty() {
            return vec![self.to_path()];
        }

        let mut bounds = Vec::with_capacity(cuts.len() + 2);
        bounds.push(0.0);
        bounds.extend(cuts);
        bounds.push(end);
        bounds
            .windows(2)
            .map(|w| self.extract(w[0], w[1], BulgeMode::Exact))
            .collect()
    }

    /// The same path as an open vertex list: a `closed` pline gets its first
    /// vertex appended.
    #[must_use]
    pub fn to_path(&self) -> Pline {
        let mut path = self.clone();
        if self.closed {
            if let Some(first) = self.vertices.first() {
                path.vertices.push(PlineVertex::new(first.x, first.y, 0.0));
            }
            path.closed = false;
        }
        path
    }

    /// Whether the pline is open-flagged with its last vertex on its first.
    #[must_use]
    pub fn is_truly_closed(&self, tol: &Tolerance) -> bool {
        !self.closed
            && self.vertices.len() >= 3
            && tol.same_point(&self.vertices[0].point(), &self.vertices[self.vertices.len() - 1].point())
    }

    /// Closes the path by vertex duplication.
    ///
    /// A `closed` flag is replaced by an explicit closing vertex; an open
    /// path whose ends differ gets its first vertex appended.
    #[must_use]
    pub fn make_truly_closed(&self, tol: &Tolerance) -> Pline {
        let mut path = self.to_path();
        if let (Some(first), Some(last)) = (path.vertices.first(), path.vertices.last()) {
            if path.vertices.len() >= 2 && !tol.same_point(&first.point(), &last.point()) {
                let closing = PlineVertex::new(first.x, first.y, 0.0);
                path.vertices.push(closing);
            }
        }
        path
    }

    /// Drops consecutive vertices that coincide within `tol.length`.
    ///
    /// Rebuilt by filtering, so no index bookkeeping is needed. The kept
    /// vertex inherits the bulge of the segment that started at the dropped one.
    #[must_use]
    pub fn remove_duplicate_vertices(&self, tol: &Tolerance) -> Pline {
        let mut out: Vec<PlineVertex> = Vec::with_capacity(self.vertices.len());
        for v in &self.vertices {
            match out.last_mut() {
                Some(last) if tol.same_point(&last.point(), &v.point()) => last.bulge = v.bulge,
                _ => out.push(*v),
            }
        }
        if self.closed && out.len() > 1 {
            let first = out[0].point();
            if out.last().is_some_and(|last| tol.same_point(&first, &last.point())) {
                out.pop();
            }
        }
        Pline::new(out, self.closed)
    }

    /// Whether the vertex polygon winds counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        signed_area(&self.points()) > 0.0
    }

    /// Area centroid of the vertex polygon.
    #[must_use]
    pub fn centroid(&self) -> Option<Point2> {
        centroid(&self.points())
    }

    /// Winding-angle containment test against the tessellated outline.
    #[must_use]
    pub fn contains_point(&self, p: &Point2, tol: &Tolerance) -> bool {
        point_in_polygon(&self.to_points(tol.length), p, tol)
    }

    /// Explodes the path into one line or arc per segment.
    #[must_use]
    pub fn explode(&self) -> Vec<Curve> {
        (0..self.segment_count())
            .filter_map(|i| self.segment(i))
            .map(|(a, b, bulge)| match ArcGeom::from_bulge(&a, &b, bulge) {
                Some(arc) => Curve::Arc(Arc::from_geom(&arc)),
                None => Curve::Line(Line::new(a, b)),
            })
            .collect()
    }

    /// Splits parameter `t` into `(segment, fraction)`, preferring the start
    /// of a segment at integer parameters.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn locate(&self, t: f64) -> (usize, f64) {
        let count = self.segment_count();
        let t = t.clamp(0.0, self.end_param());
        let seg = t.floor() as usize;
        if seg >= count {
            (count - 1, 1.0)
        } else {
            (seg, t - t.floor())
        }
    }

    /// Like [`Self::locate`] but prefers the end of the previous segment at
    /// integer parameters.
    fn locate_end(&self, t: f64) -> (usize, f64) {
        match self.locate(t) {
            (seg, frac) if frac <= 0.0 && seg > 0 => (seg - 1, 1.0),
            located => located,
        }
    }

    /// Point at `frac` along segment `seg`; exact vertices at both ends.
    fn segment_point(&self, seg: usize, frac: f64) -> Point2 {
        let n = self.vertices.len();
        let v0 = &self.vertices[seg];
        let v1 = &self.vertices[(seg + 1) % n];
        if frac <= 0.0 {
            return v0.point();
        }
        if frac >= 1.0 {
            return v1.point();
        }
        if is_arc_bulge(v0.bulge) {
            if let Some(arc) = ArcGeom::from_bulge(&v0.point(), &v1.point(), v0.bulge) {
                return arc.point_at(frac);
            }
        }
        v0.point() + (v1.point() - v0.point()) * frac
    }
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// (0,0) → (10,0) line, then a CCW semicircle up to (10,4), then (0,4).
    fn hook() -> Pline {
        Pline::new(
            vec![
                PlineVertex::line(0.0, 0.0),
                PlineVertex::new(10.0, 0.0, 1.0),
                PlineVertex::line(10.0, 4.0),
                PlineVertex::line(0.0, 4.0),
            ],
            false,
        )
    }

    #[test]
    fn segment_count_open_and_closed() {
        let mut pline = Pline::from_points(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)], false);
        assert_eq!(pline.segment_count(), 2);
        pline.closed = true;
        assert_eq!(pline.segment_count(), 3);
        assert_eq!(Pline::new(vec![PlineVertex::line(0.0, 0.0)], false).segment_count(), 0);
    }

    #[test]
    fn length_counts_arc_segments() {
        let expected = 10.0 + 2.0 * PI + 10.0;
        assert_abs_diff_eq!(hook().length(), expected, epsilon = 1e-9);
    }

    #[test]
    fn param_distance_round_trip() {
        let pline = hook();
        let total = pline.length();
        for i in 0..=20 {
            let d = total * f64::from(i) / 20.0;
            let t = pline.param_at_dist(d);
            assert_abs_diff_eq!(pline.dist_at_param(t), d, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(pline.param_at_dist(total + 5.0), 3.0);
        assert_abs_diff_eq!(pline.param_at_dist(-1.0), 0.0);
    }

    #[test]
    fn point_at_param_on_arc_segment() {
        let pline = hook();
        // Midway round the semicircle centered at (10, 2): its rightmost point.
        assert_abs_diff_eq!(pline.point_at_param(1.5).unwrap(), p(12.0, 2.0), epsilon = 1e-9);
        assert_eq!(pline.point_at_param(2.0).unwrap(), p(10.0, 4.0));
        assert_eq!(pline.point_at_param(99.0).unwrap(), p(0.0, 4.0));
    }

    #[test]
    fn closest_param_picks_nearest_segment() {
        let pline = hook();
        assert_abs_diff_eq!(pline.closest_param(&p(5.0, -1.0)).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(pline.closest_param(&p(20.0, 2.0)).unwrap(), 1.5, epsilon = 1e-9);
        assert!(Pline::new(Vec::new(), false).closest_param(&p(0.0, 0.0)).is_none());
    }

    #[test]
    fn extract_partial_segments() {
        let pline = Pline::from_points(&[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)], false);
        let piece = pline.extract(0.5, 1.5, BulgeMode::Exact);
        assert_eq!(piece.points(), vec![p(5.0, 0.0), p(10.0, 0.0), p(10.0, 5.0)]);

        let empty = pline.extract(1.0, 1.0, BulgeMode::Exact);
        assert_eq!(empty.points(), vec![p(10.0, 0.0), p(10.0, 0.0)]);
    }

    #[test]
    fn extract_half_arc_bulge_modes() {
        let pline = hook();
        let exact = pline.extract(1.0, 1.5, BulgeMode::Exact);
        assert_abs_diff_eq!(exact.vertices[0].bulge, (PI / 8.0).tan(), epsilon = 1e-12);
        let linear = pline.extract(1.0, 1.5, BulgeMode::Linear);
        assert_abs_diff_eq!(linear.vertices[0].bulge, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn split_at_params_counts_pieces() {
        let pline = hook();
        let pieces = pline.split_at_params(&[0.5, 2.5, 0.0, 3.0, 0.5]);
        assert_eq!(pieces.len(), 3);
        let total: f64 = pieces.iter().map(Pline::length).sum();
        assert_abs_diff_eq!(total, pline.length(), epsilon = 1e-9);
        assert_eq!(pieces[0].start_point(), pline.start_point());
        assert_eq!(pieces[2].end_point(), pline.end_point());

        assert_eq!(pline.split_at_params(&[]).len(), 1);
    }

    #[test]
    fn closed_flag_wrap_segment() {
        let pline = Pline::from_points(&[p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)], true);
        assert_eq!(pline.end_point(), pline.start_point());
        assert_abs_diff_eq!(pline.length(), 16.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pline.point_at_param(3.5).unwrap(), p(0.0, 2.0), epsilon = 1e-12);

        let tol = Tolerance::default();
        let closed = pline.make_truly_closed(&tol);
        assert!(closed.is_truly_closed(&tol));
        assert_eq!(closed.vertices.len(), 5);
        assert_abs_diff_eq!(closed.length(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn make_truly_closed_is_idempotent() {
        let tol = Tolerance::default();
        let open = Pline::from_points(&[p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0)], false);
        let once = open.make_truly_closed(&tol);
        let twice = once.make_truly_closed(&tol);
        assert_eq!(once, twice);
        assert_eq!(once.vertices.len(), 4);
    }

    #[test]
    fn remove_duplicate_vertices_moves_bulge() {
        let tol = Tolerance::default();
        let pline = Pline::new(
            vec![
                PlineVertex::line(0.0, 0.0),
                PlineVertex::line(5.0, 0.0),
                PlineVertex::new(5.0, 0.0002, 1.0),
                PlineVertex::line(5.0, 4.0),
            ],
            false,
        );
        let cleaned = pline.remove_duplicate_vertices(&tol);
        assert_eq!(cleaned.vertices.len(), 3);
        assert_abs_diff_eq!(cleaned.vertices[1].bulge, 1.0);
    }

    #[test]
    fn reversed_with_arc() {
        let pline = Pline::new(
            vec![
                PlineVertex::line(0.0, 0.0),
                PlineVertex::new(2.0, 0.0, 1.0),
                PlineVertex::line(4.0, 0.0),
            ],
            false,
        );
        let rev = pline.reversed();
        assert_abs_diff_eq!(rev.vertices[0].bulge, -1.0);
        assert!(rev.vertices[1].bulge.abs() < 1e-12);
        assert_abs_diff_eq!(rev.length(), pline.length(), epsilon = 1e-12);
    }

    #[test]
    fn reversed_closed_keeps_wrap_bulge() {
        let pline = Pline::new(
            vec![PlineVertex::new(0.0, 0.0, 1.0), PlineVertex::new(2.0, 0.0, 1.0)],
            true,
        );
        let rev = pline.reversed();
        assert_abs_diff_eq!(rev.vertices[0].bulge, -1.0);
        assert_abs_diff_eq!(rev.vertices[1].bulge, -1.0);
        assert_abs_diff_eq!(rev.length(), 2.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn to_points_semicircle_arc() {
        let pline = Pline::new(
            vec![PlineVertex::new(0.0, 0.0, 1.0), PlineVertex::line(2.0, 0.0)],
            false,
        );
        let pts = pline.to_points(0.01);
        assert!(pts.len() > 2, "expected more than 2 points, got {}", pts.len());
        assert_eq!(pts[0], p(0.0, 0.0));
        assert_eq!(*pts.last().unwrap(), p(2.0, 0.0));
    }

    #[test]
    fn contains_point_respects_arcs() {
        let tol = Tolerance::default();
        // Circle of radius 1 around (1, 0) as two semicircles.
        let circle = Pline::new(
            vec![PlineVertex::new(0.0, 0.0, 1.0), PlineVertex::new(2.0, 0.0, 1.0)],
            true,
        );
        assert!(circle.contains_point(&p(1.0, 0.9), &tol));
        assert!(!circle.contains_point(&p(1.0, 1.1), &tol));
    }

    #[test]
    fn explode_yields_lines_and_arcs() {
        let parts = hook().explode();
        assert_eq!(parts.len(), 3);
        assert!(matches!(parts[0], Curve::Line(_)));
        assert!(matches!(parts[1], Curve::Arc(_)));
        assert_abs_diff_eq!(parts[1].length(), 2.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn arc_subdivision_count_tolerance() {
        assert_eq!(arc_subdivision_count(1.0, PI, 10.0), 1);
        assert!(arc_subdivision_count(1.0, PI, 0.001) > 10);
    }
}
