use crate::math::{to_real, Offset, Point};

/// Direction class of a suture, derived from its offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SutureKind {
    /// Inner point differs from the outer point along x only.
    Horizontal,
    /// Inner point differs from the outer point along y only.
    Vertical,
    /// Inner point differs along both axes (corner sutures).
    Diagonal,
}

/// A short segment from a point on the rectangle perimeter to a point
/// offset toward its interior.
///
/// `outer` is the endpoint on the perimeter (or a corner); `inner` is the
/// endpoint `suture_len` units inward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Suture {
    pub outer: Point,
    pub inner: Point,
}

impl Suture {
    /// Creates a suture from its outer and inner endpoints.
    #[must_use]
    pub fn new(outer: Point, inner: Point) -> Self {
        Self { outer, inner }
    }

    /// Creates a suture from raw `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(outer: (i64, i64), inner: (i64, i64)) -> Self {
        Self {
            outer: Point::new(outer.0, outer.1),
            inner: Point::new(inner.0, inner.1),
        }
    }

    /// Returns `inner - outer`.
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.inner - self.outer
    }

    /// Classifies the suture by which axes its offset spans.
    ///
    /// A zero-length suture reports `Horizontal`; construction never
    /// produces one.
    #[must_use]
    pub fn kind(&self) -> SutureKind {
        let d = self.offset();
        match (d.x != 0, d.y != 0) {
            (true, true) => SutureKind::Diagonal,
            (false, true) => SutureKind::Vertical,
            _ => SutureKind::Horizontal,
        }
    }

    /// Euclidean length of the suture.
    #[must_use]
    pub fn length(&self) -> f64 {
        (to_real(&self.inner) - to_real(&self.outer)).norm()
    }
}
