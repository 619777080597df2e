//! The host-facing region abstraction.
//!
//! Region construction and Boolean union belong to the host geometry
//! engine. The loop operations only need to explode a region and, for
//! merging, to build and union regions; those needs are the two traits here.

use crate::error::Result;
use crate::geometry::{Curve, Pline};

/// What a region breaks into when exploded.
#[derive(Debug, Clone, PartialEq)]
pub enum Exploded<R> {
    /// A flat bag of boundary fragments (lines and arcs).
    Curves(Vec<Curve>),
    /// Disjoint sub-regions, each to be exploded in turn.
    Regions(Vec<R>),
}

/// A closed planar area that can be broken into its boundary fragments.
pub trait Region: Sized {
    /// Explodes the region one level.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot explode the region.
    fn explode(&self) -> Result<Exploded<Self>>;
}

/// Host operations on regions.
pub trait RegionEngine {
    type Region: Region;

    /// Builds a region bounded by a closed polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the boundary.
    fn region_from_boundary(&self, boundary: &Pline) -> Result<Self::Region>;

    /// Boolean union of two regions.
    ///
    /// # Errors
    ///
    /// Returns an error if the host union fails.
    fn union(&self, acc: Self::Region, other: &Self::Region) -> Result<Self::Region>;
}

/// A region already held as exploded geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveRegion {
    Curves(Vec<Curve>),
    Composite(Vec<CurveRegion>),
}

impl CurveRegion {
    /// Region bounded by the segments of `boundary`.
    #[must_use]
    pub fn from_boundary(boundary: &Pline) -> Self {
        Self::Curves(boundary.explode())
    }
}

impl Region for CurveRegion {
    fn explode(&self) -> Result<Exploded<Self>> {
        Ok(match self {
            Self::Curves(curves) => Exploded::Curves(curves.clone()),
            Self::Composite(parts) => Exploded::Regions(parts.clone()),
        })
    }
}
