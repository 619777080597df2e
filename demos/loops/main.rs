//! Loop reconstruction walkthrough.
//!
//! Explodes a rounded rectangle into loose fragments, rebuilds the loop,
//! insets it, and cuts it in half.
//!
//! Usage:
//! ```text
//! cargo run --example loops
//! RUST_LOG=arcline=debug cargo run --example loops
//! ```

use std::f64::consts::FRAC_PI_2;

use arcline::operations::loops::{get_loops, CurveRegion};
use arcline::operations::offset::OffsetPoly;
use arcline::operations::topology::{is_self_intersecting, CutLoopToHalves};
use arcline::{Arc, BulgeMode, Curve, Line, Point2, Result, Tolerance};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for arcline.
    // Override with RUST_LOG env var (e.g. RUST_LOG=arcline=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("loops=info".parse().unwrap_or_default())
        .add_directive("arcline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let tol = Tolerance::default();
    let region = CurveRegion::Curves(rounded_rect_fragments(20.0, 10.0, 2.0)?);

    for boundary in get_loops(&region, &tol)? {
        tracing::info!(
            vertices = boundary.vertices.len(),
            length = boundary.length(),
            ccw = boundary.is_ccw(),
            "reconstructed loop"
        );

        // Inset toward the inside regardless of the walk direction.
        let inset = if boundary.is_ccw() { 1.0 } else { -1.0 };
        let offset = OffsetPoly::new(boundary.clone(), vec![inset]).execute(&tol)?;
        tracing::info!(
            vertices = offset.vertices.len(),
            length = offset.length(),
            self_intersecting = is_self_intersecting(&offset, &tol),
            "inset by 1"
        );

        let halves = CutLoopToHalves::new(boundary, Point2::new(10.0, -1.0), Point2::new(10.0, 11.0))
            .with_bulge_mode(BulgeMode::Exact)
            .execute(&tol);
        for (i, half) in halves.iter().enumerate() {
            tracing::info!(half = i, length = half.length(), centroid = ?half.centroid(), "cut");
        }
    }
    Ok(())
}

/// The edges of a `w × h` rectangle with corners rounded by `r`, shuffled
/// and with mixed orientation, as a host would hand them over.
fn rounded_rect_fragments(w: f64, h: f64, r: f64) -> Result<Vec<Curve>> {
    let p = Point2::new;
    Ok(vec![
        Line::new(p(r, 0.0), p(w - r, 0.0)).into(),
        Arc::new(p(r, h - r), r, FRAC_PI_2, FRAC_PI_2)?.into(),
        Line::new(p(w, h - r), p(w, r)).into(),
        Arc::new(p(w - r, r), r, -FRAC_PI_2, FRAC_PI_2)?.into(),
        Line::new(p(0.0, r), p(0.0, h - r)).into(),
        Arc::new(p(w - r, h - r), r, 0.0, FRAC_PI_2)?.into(),
        Line::new(p(w - r, h), p(r, h)).into(),
        Arc::new(p(r, r), r, 3.0 * FRAC_PI_2, -FRAC_PI_2)?.into(),
    ])
}
