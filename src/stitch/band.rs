use crate::geometry::{chain_vertices, Segment, Suture};
use crate::math::Point;

use super::{Boundary, Orientation};

/// A boundary together with the two closed curves threading its sutures.
///
/// `outer_curve` joins consecutive outer endpoints, `inner_curve` the
/// matching inner endpoints, both in angular order around
/// [`Boundary::center`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    boundary: Boundary,
    orientation: Orientation,
    inner_curve: Vec<Segment>,
    outer_curve: Vec<Segment>,
}

impl Band {
    pub(crate) fn from_parts(
        boundary: Boundary,
        orientation: Orientation,
        inner_curve: Vec<Segment>,
        outer_curve: Vec<Segment>,
    ) -> Self {
        Self {
            boundary,
            orientation,
            inner_curve,
            outer_curve,
        }
    }

    #[must_use]
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    #[must_use]
    pub fn sutures(&self) -> &[Suture] {
        self.boundary.sutures()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn inner_curve(&self) -> &[Segment] {
        &self.inner_curve
    }

    #[must_use]
    pub fn outer_curve(&self) -> &[Segment] {
        &self.outer_curve
    }

    /// Inner endpoints in the order the inner curve visits them.
    #[must_use]
    pub fn inner_vertices(&self) -> Vec<Point> {
        chain_vertices(&self.inner_curve)
    }

    /// Outer endpoints in the order the outer curve visits them.
    #[must_use]
    pub fn outer_vertices(&self) -> Vec<Point> {
        chain_vertices(&self.outer_curve)
    }

    /// Consumes the band, returning its boundary.
    #[must_use]
    pub fn into_boundary(self) -> Boundary {
        self.boundary
    }
}
