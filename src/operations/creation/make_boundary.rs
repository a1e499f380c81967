use crate::error::Result;
use crate::geometry::Suture;
use crate::stitch::{Boundary, BoundaryParams, Constraints, Variant};

/// Places sutures around a rectangle.
///
/// # Algorithm
///
/// 1. Validate the parameters against the [`Constraints`].
/// 2. For each index of the variant's horizontal range, emit a bottom and a
///    top suture pointing inward.
/// 3. For each index of the variant's vertical range, emit a left and a
///    right suture pointing inward.
/// 4. `Cross` only: append the diagonal corner sutures in the order
///    bottom-left, bottom-right, top-left, top-right.
#[derive(Debug, Clone)]
pub struct MakeBoundary {
    params: BoundaryParams,
    variant: Variant,
    constraints: Constraints,
}

impl MakeBoundary {
    /// Creates a new `MakeBoundary` operation with default constraints.
    #[must_use]
    pub fn new(params: BoundaryParams, variant: Variant) -> Self {
        Self {
            params,
            variant,
            constraints: Constraints::default(),
        }
    }

    /// Replaces the validation thresholds.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintError` for the first parameter that violates its
    /// bound; no sutures are generated in that case.
    pub fn execute(&self) -> Result<Boundary> {
        self.params.validate(&self.constraints)?;

        let BoundaryParams {
            x0,
            y0,
            width,
            height,
            suture_len: len,
        } = self.params;
        let x1 = x0 + width;
        let y1 = y0 + height;

        let horizontal = self.variant.horizontal_range(x0, width);
        let vertical = self.variant.vertical_range(y0, height);
        let edge_count = 2 * (horizontal.clone().count() + vertical.clone().count());
        let corner_count = if self.variant.has_corners() { 4 } else { 0 };
        let mut sutures = Vec::with_capacity(edge_count + corner_count);

        for i in horizontal {
            sutures.push(Suture::from_coords((i, y0), (i, y0 + len)));
            sutures.push(Suture::from_coords((i, y1), (i, y1 - len)));
        }
        for j in vertical {
            sutures.push(Suture::from_coords((x0, j), (x0 + len, j)));
            sutures.push(Suture::from_coords((x1, j), (x1 - len, j)));
        }

        if self.variant.has_corners() {
            sutures.extend([
                Suture::from_coords((x0, y0), (x0 + len, y0 + len)),
                Suture::from_coords((x1, y0), (x1 - len, y0 + len)),
                Suture::from_coords((x0, y1), (x0 + len, y1 - len)),
                Suture::from_coords((x1, y1), (x1 - len, y1 - len)),
            ]);
        }

        tracing::debug!(
            variant = %self.variant,
            x0,
            y0,
            width,
            height,
            suture_len = len,
            edge = edge_count,
            corner = sutures.len() - edge_count,
            "built boundary"
        );

        Ok(Boundary::from_parts(
            self.params,
            self.variant,
            sutures,
            edge_count,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::{ConstraintError, StitchError};
    use crate::geometry::SutureKind;
    use crate::math::Point;
    use approx::assert_relative_eq;

    fn build(variant: Variant, x0: i64, y0: i64, w: i64, h: i64, len: i64) -> Result<Boundary> {
        MakeBoundary::new(BoundaryParams::new(x0, y0, w, h, len), variant).execute()
    }

    fn on_perimeter(b: &Boundary, p: Point) -> bool {
        let (x0, y0) = (b.x0(), b.y0());
        let (x1, y1) = (x0 + b.width(), y0 + b.height());
        let inside_x = (x0..=x1).contains(&p.x);
        let inside_y = (y0..=y1).contains(&p.y);
        (inside_x && (p.y == y0 || p.y == y1)) || (inside_y && (p.x == x0 || p.x == x1))
    }

    #[test]
    fn plus_4x4_matches_expected_layout() {
        let b = build(Variant::Plus, 0, 0, 4, 4, 1).unwrap();
        assert_eq!(b.sutures().len(), 16);
        assert!(b.corner_sutures().is_empty());

        let mut expected = Vec::new();
        for i in 1..=4 {
            expected.push(Suture::from_coords((i, 0), (i, 1)));
            expected.push(Suture::from_coords((i, 4), (i, 3)));
        }
        for j in 1..=4 {
            expected.push(Suture::from_coords((0, j), (1, j)));
            expected.push(Suture::from_coords((4, j), (3, j)));
        }
        assert_eq!(b.sutures(), expected.as_slice());

        for s in b.sutures() {
            assert_ne!(s.kind(), SutureKind::Diagonal);
            assert_relative_eq!(s.length(), 1.0);
        }
    }

    #[test]
    fn plus_outer_points_only_meet_at_far_corner() {
        let b = build(Variant::Plus, 0, 0, 4, 4, 1).unwrap();
        let mut seen = HashSet::new();
        let mut shared = Vec::new();
        for s in b.sutures() {
            if !seen.insert(s.outer) {
                shared.push(s.outer);
            }
        }
        assert_eq!(shared, vec![Point::new(4, 4)]);
    }

    #[test]
    fn cross_4x4_appends_corners_last() {
        let b = build(Variant::Cross, 0, 0, 4, 4, 1).unwrap();
        assert_eq!(b.edge_sutures().len(), 8);
        assert_eq!(
            b.corner_sutures(),
            &[
                Suture::from_coords((0, 0), (1, 1)),
                Suture::from_coords((4, 0), (3, 1)),
                Suture::from_coords((0, 4), (1, 3)),
                Suture::from_coords((4, 4), (3, 3)),
            ]
        );
        assert_eq!(b.sutures()[0], Suture::from_coords((2, 0), (2, 1)));
        assert_eq!(b.sutures()[1], Suture::from_coords((2, 4), (2, 3)));
        assert_eq!(b.sutures()[4], Suture::from_coords((0, 2), (1, 2)));
        assert_eq!(b.sutures()[5], Suture::from_coords((4, 2), (3, 2)));
    }

    #[test]
    fn cross_outer_points_are_distinct() {
        let b = build(Variant::Cross, -3, 7, 9, 5, 2).unwrap();
        let unique: HashSet<_> = b.sutures().iter().map(|s| s.outer).collect();
        assert_eq!(unique.len(), b.sutures().len());
    }

    #[test]
    fn cardinality_follows_extents() {
        for (w, h) in [(2, 2), (2, 7), (3, 3), (6, 4), (11, 5)] {
            let plus = build(Variant::Plus, 1, -2, w, h, 1).unwrap();
            assert_eq!(plus.sutures().len(), usize::try_from(2 * w + 2 * h).unwrap());

            let cross = build(Variant::Cross, 1, -2, w, h, 1).unwrap();
            let edges = 2 * (w - 2).max(0) + 2 * (h - 2).max(0);
            assert_eq!(cross.edge_sutures().len(), usize::try_from(edges).unwrap());
            assert_eq!(cross.corner_sutures().len(), 4);
        }
    }

    #[test]
    fn minimal_cross_is_corners_only() {
        let b = build(Variant::Cross, 0, 0, 2, 2, 1).unwrap();
        assert!(b.edge_sutures().is_empty());
        assert_eq!(b.sutures().len(), 4);
    }

    #[test]
    fn every_suture_points_inward_by_suture_len() {
        for variant in [Variant::Plus, Variant::Cross] {
            let b = build(variant, 5, -4, 10, 6, 3).unwrap();
            let len = b.suture_len();
            for s in b.sutures() {
                assert!(on_perimeter(&b, s.outer), "{s:?} not on perimeter");
                let d = s.offset();
                match s.kind() {
                    SutureKind::Horizontal => assert_eq!((d.x.abs(), d.y), (len, 0)),
                    SutureKind::Vertical => assert_eq!((d.x, d.y.abs()), (0, len)),
                    SutureKind::Diagonal => {
                        assert_eq!((d.x.abs(), d.y.abs()), (len, len));
                        assert_relative_eq!(
                            s.length(),
                            3.0 * std::f64::consts::SQRT_2,
                            epsilon = 1e-12
                        );
                    }
                }
                let (x1, y1) = (b.x0() + b.width(), b.y0() + b.height());
                assert!((b.x0()..=x1).contains(&s.inner.x));
                assert!((b.y0()..=y1).contains(&s.inner.y));
            }
        }
    }

    #[test]
    fn corner_count_matches_variant() {
        let plus = build(Variant::Plus, 0, 0, 6, 6, 2).unwrap();
        let cross = build(Variant::Cross, 0, 0, 6, 6, 2).unwrap();
        let diagonals =
            |b: &Boundary| b.sutures().iter().filter(|s| s.kind() == SutureKind::Diagonal).count();
        assert_eq!(diagonals(&plus), 0);
        assert_eq!(diagonals(&cross), 4);
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let a = build(Variant::Cross, 3, 3, 8, 5, 2).unwrap();
        let b = build(Variant::Cross, 3, 3, 8, 5, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn validation_boundaries() {
        assert!(build(Variant::Plus, 0, 0, 2, 2, 1).is_ok());
        assert_eq!(
            build(Variant::Plus, 0, 0, 1, 2, 1),
            Err(StitchError::Constraint(ConstraintError::InvalidWidth {
                value: 1,
                min: 2
            }))
        );
        assert_eq!(
            build(Variant::Cross, 0, 0, 0, 2, 1),
            Err(StitchError::Constraint(ConstraintError::InvalidWidth {
                value: 0,
                min: 2
            }))
        );
        assert_eq!(
            build(Variant::Cross, 0, 0, 2, 1, 1),
            Err(StitchError::Constraint(ConstraintError::InvalidHeight {
                value: 1,
                min: 2
            }))
        );
        assert_eq!(
            build(Variant::Plus, 0, 0, 2, 2, 0),
            Err(StitchError::Constraint(ConstraintError::InvalidSutureLength {
                value: 0,
                min: 1
            }))
        );
        assert_eq!(
            build(Variant::Plus, 0, 0, 3, 8, 2),
            Err(StitchError::Constraint(ConstraintError::SutureTooLongForWidth {
                value: 2,
                max: 1
            }))
        );
        assert_eq!(
            build(Variant::Plus, 0, 0, 8, 5, 3),
            Err(StitchError::Constraint(ConstraintError::SutureTooLongForHeight {
                value: 3,
                max: 2
            }))
        );
    }

    #[test]
    fn custom_constraints_are_applied() {
        let err = MakeBoundary::new(BoundaryParams::new(0, 0, 3, 3, 1), Variant::Plus)
            .with_constraints(Constraints {
                min_width: 4,
                ..Constraints::default()
            })
            .execute()
            .unwrap_err();
        assert_eq!(
            err,
            StitchError::Constraint(ConstraintError::InvalidWidth { value: 3, min: 4 })
        );
    }

    #[test]
    fn far_corner_overflow_is_rejected_not_wrapped() {
        let err = build(Variant::Plus, i64::MAX - 1, 0, 2, 2, 1).unwrap_err();
        assert_eq!(
            err,
            StitchError::Constraint(ConstraintError::ExtentOverflow {
                axis: "x",
                origin: i64::MAX - 1,
                extent: 2
            })
        );
        assert!(build(Variant::Cross, 0, i64::MAX, 2, 2, 1).is_err());
    }

    #[test]
    fn boundary_touching_i64_max_builds() {
        let b = build(Variant::Cross, i64::MAX - 4, i64::MIN, 4, 4, 2).unwrap();
        assert_eq!(b.corner_sutures()[3].outer, Point::new(i64::MAX, i64::MIN + 4));
        assert_eq!(b.sutures().len(), 2 * 2 + 2 * 2 + 4);
    }

    #[test]
    fn loose_suture_floor_still_points_inward() {
        let err = MakeBoundary::new(BoundaryParams::new(0, 0, 4, 4, 0), Variant::Plus)
            .with_constraints(Constraints {
                min_suture_len: 0,
                ..Constraints::default()
            })
            .execute()
            .unwrap_err();
        assert_eq!(
            err,
            StitchError::Constraint(ConstraintError::InvalidSutureLength { value: 0, min: 1 })
        );
    }
}
