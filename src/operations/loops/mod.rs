//! Loop reconstruction from exploded regions.

mod get_loop;
mod group;
mod merge;
pub mod region;

pub use get_loop::{get_loop, get_loops};
pub use group::group_loops;
pub use merge::MergeBoundary;
pub use region::{CurveRegion, Exploded, Region, RegionEngine};
