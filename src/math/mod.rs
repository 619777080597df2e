pub mod arc_2d;
pub mod hull_2d;
pub mod intersect_2d;
pub mod interval;
pub mod polygon_2d;
pub mod tolerance;

pub use interval::Interval;
pub use tolerance::Tolerance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Numeric zero for floating-point comparisons inside pure math.
///
/// Distinct from [`Tolerance::length`], which is the user-facing
/// coincidence distance for topology decisions.
pub const TOLERANCE: f64 = 1e-10;

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}
