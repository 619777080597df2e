use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{Pline, PlineVertex};
use crate::math::arc_2d::ArcGeom;
use crate::math::intersect_2d::{circle_circle_points, line_circle_points, solve_lines};
use crate::math::polygon_2d::left_normal;
use crate::math::{Point2, Tolerance, TOLERANCE};

/// Offsets every edge of a polyline by its own distance.
///
/// Each edge is moved independently (lines stay parallel, arcs stay
/// concentric), then consecutive offset edges are intersected as if
/// extended to find the new corners. Corners keep the bulge of the edge
/// that leaves them.
///
/// # Sign Convention
///
/// - Positive distance: left of the walking direction (inward for a CCW loop)
/// - Negative distance: right of the walking direction
///
/// Trailing edges without an entry in `offsets` reuse the last one.
#[derive(Debug)]
pub struct OffsetPoly {
    pline: Pline,
    offsets: Vec<f64>,
}

/// An edge after offsetting: start and end points plus its supporting
/// line or circle.
#[derive(Debug, Clone, Copy)]
enum OffsetEdge {
    Line {
        start: Point2,
        end: Point2,
    },
    Arc {
        start: Point2,
        end: Point2,
        center: Point2,
        radius: f64,
    },
}

impl OffsetEdge {
    fn start(&self) -> Point2 {
        match self {
            Self::Line { start, .. } | Self::Arc { start, .. } => *start,
        }
    }

    fn end(&self) -> Point2 {
        match self {
            Self::Line { end, .. } | Self::Arc { end, .. } => *end,
        }
    }
}

impl OffsetPoly {
    /// Creates a new per-edge offset operation.
    #[must_use]
    pub fn new(pline: Pline, offsets: Vec<f64>) -> Self {
        Self { pline, offsets }
    }

    /// Executes the offset.
    ///
    /// A closed input (flagged or truly closed) gives a truly closed
    /// result. An open input keeps the raw offset endpoints as its first
    /// and last vertices. Corners whose offset edges do not meet are left
    /// out of the result.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `offsets` is empty or the
    /// polyline has fewer than 2 vertices. A zero-length two-vertex path
    /// is returned unchanged.
    pub fn execute(&self, tol: &Tolerance) -> Result<Pline> {
        if self.offsets.is_empty() {
            return Err(OperationError::InvalidInput("at least one offset distance required".into()).into());
        }
        if self.pline.vertices.len() < 2 {
            return Err(OperationError::InvalidInput(
                "at least 2 vertices required for offset".to_owned(),
            )
            .into());
        }

        let was_closed = self.pline.closed || self.pline.is_truly_closed(tol);
        let path = self.pline.make_truly_closed(tol);
        let edge_count = path.segment_count();
        // Open input ignores the closing edge added above.
        let used = if was_closed { edge_count } else { edge_count.saturating_sub(1) };
        if used == 0 {
            // Coincident ends of a two-vertex path: no direction to offset along.
            debug!("zero-length polyline returned unchanged");
            return Ok(self.pline.clone());
        }

        let edges: Vec<Option<OffsetEdge>> = (0..used)
            .map(|i| self.offset_edge(&path, i))
            .collect();

        let mut vertices = Vec::with_capacity(used + 1);
        if was_closed {
            for i in 0..used {
                let prev = (i + used - 1) % used;
                self.push_corner(&mut vertices, &path, &edges, prev, i);
            }
            if let Some(first) = vertices.first() {
                let closing = PlineVertex::new(first.x, first.y, 0.0);
                vertices.push(closing);
            }
        } else {
            if let Some(first) = edges.first().copied().flatten() {
                vertices.push(PlineVertex::at(&first.start(), path.vertices[0].bulge));
            }
            for i in 1..used {
                self.push_corner(&mut vertices, &path, &edges, i - 1, i);
            }
            if let Some(last) = edges.last().copied().flatten() {
                vertices.push(PlineVertex::at(&last.end(), 0.0));
            }
        }

        Ok(Pline::new(vertices, false))
    }

    fn offset_at(&self, edge: usize) -> f64 {
        self.offsets
            .get(edge)
            .or_else(|| self.offsets.last())
            .copied()
            .unwrap_or_default()
    }

    fn offset_edge(&self, path: &Pline, i: usize) -> Option<OffsetEdge> {
        let (a, b, bulge) = path.segment(i)?;
        let d = self.offset_at(i);

        if let Some(arc) = ArcGeom::from_bulge(&a, &b, bulge) {
            let radius = arc.radius - arc.sweep.signum() * d;
            if radius <= TOLERANCE {
                debug!(edge = i, radius, "offset arc radius collapsed");
                return None;
            }
            let scale = radius / arc.radius;
            return Some(OffsetEdge::Arc {
                start: arc.center + (a - arc.center) * scale,
                end: arc.center + (b - arc.center) * scale,
                center: arc.center,
                radius,
            });
        }

        let dir = b - a;
        let len = dir.norm();
        if len < TOLERANCE {
            debug!(edge = i, "zero-length edge has no offset");
            return None;
        }
        let shift = left_normal(&(dir / len)) * d;
        Some(OffsetEdge::Line {
            start: a + shift,
            end: b + shift,
        })
    }

    fn push_corner(
        &self,
        vertices: &mut Vec<PlineVertex>,
        path: &Pline,
        edges: &[Option<OffsetEdge>],
        prev: usize,
        next: usize,
    ) {
        let corner = match (&edges[prev], &edges[next]) {
            (Some(p), Some(n)) => extended_corner(p, n),
            _ => None,
        };
        match corner {
            Some(c) => vertices.push(PlineVertex::at(&c, path.vertices[next].bulge)),
            None => debug!(vertex = next, "offset edges do not meet, corner skipped"),
        }
    }
}

/// Intersection of two offset edges with their supporting lines/circles
/// extended. With two candidates, the one nearest the end of `prev` wins.
fn extended_corner(prev: &OffsetEdge, next: &OffsetEdge) -> Option<Point2> {
    let candidates: Vec<Point2> = match (prev, next) {
        (OffsetEdge::Line { start: a1, end: a2 }, OffsetEdge::Line { start: b1, end: b2 }) => {
            return solve_lines(a1, a2, b1, b2).map(|hit| hit.point);
        }
        (OffsetEdge::Line { start, end }, OffsetEdge::Arc { center, radius, .. })
        | (OffsetEdge::Arc { center, radius, .. }, OffsetEdge::Line { start, end }) => {
            line_circle_points(start, &(end - start), center, *radius)
                .into_iter()
                .map(|(p, _)| p)
                .collect()
        }
        (
            OffsetEdge::Arc {
                center: c1,
                radius: r1,
                ..
            },
            OffsetEdge::Arc {
                center: c2,
                radius: r2,
                ..
            },
        ) => circle_circle_points(c1, *r1, c2, *r2),
    };

    let target = prev.end();
    candidates
        .into_iter()
        .min_by(|p, q| nalgebra::distance(p, &target).total_cmp(&nalgebra::distance(q, &target)))
}
