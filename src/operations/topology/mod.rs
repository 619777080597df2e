mod cut_loop;
mod self_intersect;

pub use cut_loop::CutLoopToHalves;
pub use self_intersect::{find_self_intersections, is_self_intersecting, SelfIntersection};
