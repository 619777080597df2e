use super::{cross, Point2};

/// Convex hull by Andrew's monotone chain.
///
/// Points are sorted by `(x, y)` and exact duplicates removed. The upper
/// and lower chains are built independently, popping only on a strict
/// left turn, so points collinear with a hull edge stay in the result.
/// The hull is returned clockwise, starting at the smallest point, without
/// a closing duplicate. Fewer than two distinct points are returned as is,
/// and all-collinear input gives the sorted points once.
#[must_use]
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 2 {
        return sorted;
    }

    let upper = half_hull(sorted.iter());
    let lower = half_hull(sorted.iter().rev());

    // Both chains share their first and last points.
    let interior = &lower[1..lower.len() - 1];
    if interior.iter().all(|p| upper.contains(p)) {
        // Zero-area input: the lower chain retraces the upper one.
        return upper;
    }
    let mut hull = upper;
    hull.extend_from_slice(interior);
    hull
}

fn half_hull<'a>(points: impl Iterator<Item = &'a Point2>) -> Vec<Point2> {
    let mut chain: Vec<Point2> = Vec::new();
    for p in points {
        while let [.., a, b] = chain[..] {
            if cross(&(b - a), &(*p - b)) > 0.0 {
                chain.pop();
            } else {
                break;
            }
        }
        chain.push(*p);
    }
    chain
}
