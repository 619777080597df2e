use tracing::debug;

use crate::error::Result;
use crate::geometry::Pline;
use crate::math::Tolerance;

use super::get_loop::get_loops;
use super::region::RegionEngine;

/// Merges overlapping closed boundaries into their outer outlines.
///
/// Each boundary becomes a host region; the regions are folded together with
/// the engine's Boolean union and the loops of the result are returned.
#[derive(Debug)]
pub struct MergeBoundary {
    boundaries: Vec<Pline>,
}

impl MergeBoundary {
    /// Creates a new merge of `boundaries`.
    #[must_use]
    pub fn new(boundaries: Vec<Pline>) -> Self {
        Self { boundaries }
    }

    /// Executes the merge with the host `engine`.
    ///
    /// Fewer than two boundaries are returned unchanged without touching
    /// the engine.
    ///
    /// # Errors
    ///
    /// Propagates engine failures and loop reconstruction errors.
    pub fn execute<E: RegionEngine>(&self, engine: &E, tol: &Tolerance) -> Result<Vec<Pline>> {
        let [first, rest @ ..] = &self.boundaries[..] else {
            return Ok(Vec::new());
        };
        if rest.is_empty() {
            return Ok(self.boundaries.clone());
        }

        let mut merged = engine.region_from_boundary(first)?;
        for boundary in rest {
            let region = engine.region_from_boundary(boundary)?;
            merged = engine.union(merged, &region)?;
        }

        let loops = get_loops(&merged, tol)?;
        debug!(inputs = self.boundaries.len(), loops = loops.len(), "boundaries merged");
        Ok(loops)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ArclineError, OperationError};
    use crate::math::Point2;
    use crate::operations::loops::region::CurveRegion;
    use std::cell::Cell;

    /// Treats every input as disjoint: the union just collects the parts.
    #[derive(Default)]
    struct DisjointEngine {
        calls: Cell<usize>,
    }

    impl RegionEngine for DisjointEngine {
        type Region = CurveRegion;

        fn region_from_boundary(&self, boundary: &Pline) -> Result<CurveRegion> {
            self.calls.set(self.calls.get() + 1);
            Ok(CurveRegion::from_boundary(boundary))
        }

        fn union(&self, acc: CurveRegion, other: &CurveRegion) -> Result<CurveRegion> {
            let mut parts = match acc {
                CurveRegion::Composite(parts) => parts,
                single @ CurveRegion::Curves(_) => vec![single],
            };
            parts.push(other.clone());
            Ok(CurveRegion::Composite(parts))
        }
    }

    struct FailingEngine;

    impl RegionEngine for FailingEngine {
        type Region = CurveRegion;

        fn region_from_boundary(&self, _boundary: &Pline) -> Result<CurveRegion> {
            Err(OperationError::Host("boundary is not planar".into()).into())
        }

        fn union(&self, acc: CurveRegion, _other: &CurveRegion) -> Result<CurveRegion> {
            Ok(acc)
        }
    }

    fn square(x: f64) -> Pline {
        Pline::from_points(
            &[
                Point2::new(x, 0.0),
                Point2::new(x + 2.0, 0.0),
                Point2::new(x + 2.0, 2.0),
                Point2::new(x, 2.0),
                Point2::new(x, 0.0),
            ],
            false,
        )
    }

    #[test]
    fn fewer_than_two_inputs_skip_the_engine() {
        let tol = Tolerance::default();
        let engine = DisjointEngine::default();
        let out = MergeBoundary::new(vec![square(0.0)]).execute(&engine, &tol).unwrap();
        assert_eq!(out, vec![square(0.0)]);
        assert!(MergeBoundary::new(Vec::new()).execute(&engine, &tol).unwrap().is_empty());
        assert_eq!(engine.calls.get(), 0);
    }

    #[test]
    fn disjoint_union_returns_each_loop() {
        let tol = Tolerance::default();
        let engine = DisjointEngine::default();
        let out = MergeBoundary::new(vec![square(0.0), square(5.0), square(10.0)])
            .execute(&engine, &tol)
            .unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(engine.calls.get(), 3);
        assert_eq!(out[1].start_point(), Some(Point2::new(5.0, 0.0)));
    }

    #[test]
    fn host_failure_propagates() {
        let tol = Tolerance::default();
        let err = MergeBoundary::new(vec![square(0.0), square(5.0)])
            .execute(&FailingEngine, &tol)
            .unwrap_err();
        assert!(matches!(err, ArclineError::Operation(OperationError::Host(_))));
    }
}
