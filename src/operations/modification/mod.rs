mod subcurve;

pub use subcurve::{segments, subcurve, subcurve_by_param, Segments};
