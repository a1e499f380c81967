use crate::math::Point;

/// One straight piece of an assembled curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the same segment walked the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns `true` if both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Returns `true` if `segments` form a closed chain: each segment starts
/// where the previous one ended, and the last ends where the first starts.
///
/// An empty chain is not closed.
#[must_use]
pub fn is_closed_chain(segments: &[Segment]) -> bool {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return false;
    };
    if last.end != first.start {
        return false;
    }
    segments.windows(2).all(|w| w[0].end == w[1].start)
}

/// Returns the vertices a closed chain visits, one per segment, in order.
#[must_use]
pub fn chain_vertices(segments: &[Segment]) -> Vec<Point> {
    segments.iter().map(|s| s.end).collect()
}
