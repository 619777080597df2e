use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::error::{Result, TopologyError};
use crate::geometry::Curve;
use crate::math::{Point2, Tolerance};

slotmap::new_key_type! {
    /// Handle of a fragment in the grouping pool.
    struct FragmentId;
}

/// Partitions an unordered bag of boundary fragments into closed rings.
///
/// Each ring lists its fragments in walk order, but individual fragments
/// keep their input orientation (see [`super::get_loop`]). A fragment that
/// closes on itself is a ring on its own. Zero-length fragments are
/// dropped.
///
/// # Errors
///
/// Returns `TopologyError::OpenRing` if no unused fragment continues a ring
/// at some point (open or non-manifold input).
pub fn group_loops(fragments: &[Curve], tol: &Tolerance) -> Result<Vec<Vec<Curve>>> {
    let mut pool: SlotMap<FragmentId, Curve> = SlotMap::with_key();
    for fragment in fragments {
        if endpoints(fragment).is_some() && fragment.length() >= tol.length {
            pool.insert(fragment.clone());
        } else {
            debug!("degenerate fragment skipped");
        }
    }

    let total = pool.len();
    let mut rings = Vec::new();
    while let Some(seed) = pool.keys().next() {
        let ids = grow_ring(&pool, seed, tol)?;
        let ring: Vec<Curve> = ids.into_iter().filter_map(|id| pool.remove(id)).collect();
        trace!(ring = rings.len(), fragments = ring.len(), "ring closed");
        rings.push(ring);
    }

    debug!(fragments = total, rings = rings.len(), "grouped fragments into rings");
    Ok(rings)
}

/// Walks from `seed` until the far point returns to the seed's start.
///
/// Each fragment is used at most once, so the walk ends after at most
/// `pool.len()` steps.
fn grow_ring(
    pool: &SlotMap<FragmentId, Curve>,
    seed: FragmentId,
    tol: &Tolerance,
) -> Result<Vec<FragmentId>> {
    let (start, mut far) = pool
        .get(seed)
        .and_then(endpoints)
        .ok_or(TopologyError::EmptyRing)?;

    let mut ring = vec![seed];
    while !tol.same_point(&far, &start) {
        let next = pool.iter().find_map(|(id, fragment)| {
            if ring.contains(&id) {
                return None;
            }
            let (s, e) = endpoints(fragment)?;
            if tol.same_point(&s, &far) {
                Some((id, e))
            } else if tol.same_point(&e, &far) {
                Some((id, s))
            } else {
                None
            }
        });
        let Some((id, next_far)) = next else {
            return Err(TopologyError::OpenRing { x: far.x, y: far.y }.into());
        };
        trace!(x = far.x, y = far.y, "ring continues");
        ring.push(id);
        far = next_far;
    }
    Ok(ring)
}

pub(super) fn endpoints(curve: &Curve) -> Option<(Point2, Point2)> {
    Some((curve.start_point()?, curve.end_point()?))
}
