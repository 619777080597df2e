pub mod curve;
pub mod pline;

pub use curve::{Arc, Curve, Line};
pub use pline::{Pline, PlineVertex};
