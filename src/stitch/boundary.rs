use crate::geometry::Suture;
use crate::math::Point2f;

use super::{BoundaryParams, Variant};

/// The sutures generated around one rectangle.
///
/// Built by [`MakeBoundary`](crate::operations::creation::MakeBoundary);
/// immutable once built. Edge sutures come first (top/bottom pairs, then
/// left/right pairs), followed by the corner sutures of a `Cross` boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    params: BoundaryParams,
    variant: Variant,
    sutures: Vec<Suture>,
    edge_count: usize,
}

impl Boundary {
    pub(crate) fn from_parts(
        params: BoundaryParams,
        variant: Variant,
        sutures: Vec<Suture>,
        edge_count: usize,
    ) -> Self {
        debug_assert!(edge_count <= sutures.len());
        Self {
            params,
            variant,
            sutures,
            edge_count,
        }
    }

    #[must_use]
    pub fn params(&self) -> &BoundaryParams {
        &self.params
    }

    #[must_use]
    pub fn x0(&self) -> i64 {
        self.params.x0
    }

    #[must_use]
    pub fn y0(&self) -> i64 {
        self.params.y0
    }

    #[must_use]
    pub fn width(&self) -> i64 {
        self.params.width
    }

    #[must_use]
    pub fn height(&self) -> i64 {
        self.params.height
    }

    #[must_use]
    pub fn suture_len(&self) -> i64 {
        self.params.suture_len
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// All sutures in emission order.
    #[must_use]
    pub fn sutures(&self) -> &[Suture] {
        &self.sutures
    }

    /// Sutures placed along the four edges.
    #[must_use]
    pub fn edge_sutures(&self) -> &[Suture] {
        &self.sutures[..self.edge_count]
    }

    /// Diagonal corner sutures (empty unless the variant is `Cross`).
    #[must_use]
    pub fn corner_sutures(&self) -> &[Suture] {
        &self.sutures[self.edge_count..]
    }

    /// The pivot used for angular sorting: `((x0 + width) / 2, (y0 + height) / 2)`.
    ///
    /// This is the geometric center only when the origin is `(0, 0)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self) -> Point2f {
        let p = &self.params;
        Point2f::new(
            (p.x0 + p.width) as f64 / 2.0,
            (p.y0 + p.height) as f64 / 2.0,
        )
    }
}
