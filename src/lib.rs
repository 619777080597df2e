//! 2-D curve geometry for CAD hosts: bulge polylines, curve
//! parameterization, polyline topology and loop reconstruction.
//!
//! Every tolerant operation takes an explicit [`Tolerance`]; nothing here
//! holds global state.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ArclineError, Result};
pub use geometry::{Arc, Curve, Line, Pline, PlineVertex};
pub use math::arc_2d::BulgeMode;
pub use math::{Interval, Point2, Tolerance, Vector2};
