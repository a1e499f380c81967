use crate::error::{AssemblyError, Result};
use crate::geometry::{Segment, Suture};
use crate::math::angle_2d::{compare_angles, polar_angle};
use crate::math::Point2f;
use crate::stitch::{Boundary, Orientation};

/// The two closed curves threading a set of sutures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Curves {
    /// Joins consecutive inner endpoints.
    pub inner: Vec<Segment>,
    /// Joins consecutive outer endpoints.
    pub outer: Vec<Segment>,
}

/// Orders sutures by angle around a center and links neighbours into two
/// closed curves.
///
/// # Algorithm
///
/// 1. Compute the polar angle of every suture's outer endpoint relative to
///    the center.
/// 2. Stable-sort by that angle, ascending or descending per the
///    [`Orientation`]. Equal angles keep their input order.
/// 3. For each sorted suture `s[k]`, link `s[k-1]` (wrapping to the last
///    suture when `k = 0`) to `s[k]`, once through the outer endpoints and
///    once through the inner endpoints.
///
/// The result has exactly one segment per suture in each curve.
#[derive(Debug)]
pub struct AssembleCurves<'a> {
    sutures: &'a [Suture],
    center: Point2f,
    orientation: Orientation,
}

impl<'a> AssembleCurves<'a> {
    /// Creates an assembly over a boundary's sutures, pivoting on
    /// [`Boundary::center`].
    #[must_use]
    pub fn new(boundary: &'a Boundary, orientation: Orientation) -> Self {
        Self {
            sutures: boundary.sutures(),
            center: boundary.center(),
            orientation,
        }
    }

    /// Creates an assembly over an arbitrary suture slice.
    #[must_use]
    pub fn from_sutures(sutures: &'a [Suture], center: Point2f, orientation: Orientation) -> Self {
        Self {
            sutures,
            center,
            orientation,
        }
    }

    /// Returns the sutures in the order the curves visit them.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::EmptyBoundary` if there are no sutures.
    pub fn sorted(&self) -> Result<Vec<Suture>> {
        if self.sutures.is_empty() {
            return Err(AssemblyError::EmptyBoundary.into());
        }

        let mut keyed: Vec<(f64, Suture)> = self
            .sutures
            .iter()
            .map(|s| (polar_angle(&s.outer, &self.center), *s))
            .collect();
        let reverse = self.orientation.is_descending();
        keyed.sort_by(|a, b| compare_angles(a.0, b.0, reverse));

        Ok(keyed.into_iter().map(|(_, s)| s).collect())
    }

    /// Executes the assembly.
    ///
    /// A single suture yields one degenerate segment per curve, looping from
    /// the suture back to itself.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::EmptyBoundary` if there are no sutures.
    pub fn execute(&self) -> Result<Curves> {
        let sorted = self.sorted()?;
        let n = sorted.len();

        let mut curves = Curves {
            inner: Vec::with_capacity(n),
            outer: Vec::with_capacity(n),
        };
        for (k, cur) in sorted.iter().enumerate() {
            let prev = &sorted[(k + n - 1) % n];
            curves.outer.push(Segment::new(prev.outer, cur.outer));
            curves.inner.push(Segment::new(prev.inner, cur.inner));
        }

        tracing::trace!(
            sutures = n,
            orientation = %self.orientation,
            center_x = self.center.x,
            center_y = self.center.y,
            "assembled curves"
        );

        Ok(curves)
    }
}
