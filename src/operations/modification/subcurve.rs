use crate::geometry::{Curve, Line, Pline, PlineVertex};
use crate::math::{Interval, TOLERANCE};
use crate::operations::query::param::param_at_distance;

/// Portion of `curve` between two distances along it.
///
/// The interval is clamped to `[0, length]`. See [`subcurve_by_param`].
#[must_use]
pub fn subcurve(curve: &Curve, range: Interval) -> Curve {
    let a = param_at_distance(curve, range.start());
    let b = param_at_distance(curve, range.end());
    subcurve_by_param(curve, Interval::new(a, b))
}

/// Portion of `curve` between two parameters.
///
/// Lines and arcs are split as one-segment polylines, so every non-empty
/// result is a [`Curve::Pline`]. An empty range yields a zero-length curve
/// of the input's own kind at that point.
#[must_use]
pub fn subcurve_by_param(curve: &Curve, range: Interval) -> Curve {
    let end = curve.end_param();
    let a = range.start().clamp(0.0, end);
    let b = range.end().clamp(0.0, end);

    if b - a <= 0.0 {
        return collapsed_at(curve, a);
    }

    let mut pieces = curve.to_pline().split_at_params(&[a, b]);
    let piece = match pieces.len() {
        3 => pieces.swap_remove(1),
        // One bound sits on a curve end: keep the side holding the range.
        2 if a <= 0.0 => pieces.swap_remove(0),
        2 => pieces.swap_remove(1),
        _ => pieces.swap_remove(0),
    };
    Curve::Pline(piece)
}

fn collapsed_at(curve: &Curve, t: f64) -> Curve {
    match curve {
        Curve::Line(line) => {
            let p = line.point_at(t);
            Curve::Line(Line::new(p, p))
        }
        Curve::Arc(arc) => Curve::Arc(arc.collapsed_at(t)),
        Curve::Pline(pline) => {
            let vertices = pline
                .point_at_param(t)
                .map(|p| vec![PlineVertex::at(&p, 0.0), PlineVertex::at(&p, 0.0)])
                .unwrap_or_default();
            Curve::Pline(Pline::new(vertices, false))
        }
    }
}

/// Consecutive subcurves of `curve` at a fixed parameter step.
///
/// Yields `[i·Δ, min((i+1)·Δ, end_param)]` until the end is reached. A
/// non-positive or non-finite step yields nothing. Call again to restart.
#[must_use]
pub fn segments(curve: &Curve, delta: f64) -> Segments<'_> {
    Segments {
        curve,
        delta,
        start: 0.0,
    }
}

/// Iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    curve: &'a Curve,
    delta: f64,
    start: f64,
}

impl Iterator for Segments<'_> {
    type Item = Curve;

    fn next(&mut self) -> Option<Curve> {
        let end = self.curve.end_param();
        if !self.delta.is_finite() || self.delta <= 0.0 || self.start >= end - TOLERANCE {
            return None;
        }
        let stop = (self.start + self.delta).min(end);
        let piece = subcurve_by_param(self.curve, Interval::new(self.start, stop));
        self.start = stop;
        Some(piece)
    }
}
