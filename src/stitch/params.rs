use crate::error::ConstraintError;

/// Minimum values accepted when building a boundary.
///
/// The upper bound on `suture_len` is always half of each extent and is
/// not configurable: longer sutures would cross their opposite partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Smallest accepted width.
    pub min_width: i64,
    /// Smallest accepted height.
    pub min_height: i64,
    /// Smallest accepted suture length. Values below 1 are treated as 1.
    pub min_suture_len: i64,
}

impl Constraints {
    /// The suture-length floor actually enforced.
    ///
    /// Never below 1, so every suture points strictly inward.
    #[must_use]
    pub fn effective_min_suture_len(&self) -> i64 {
        self.min_suture_len.max(1)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            min_width: 2,
            min_height: 2,
            min_suture_len: 1,
        }
    }
}

/// The five scalar inputs of a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryParams {
    /// Lower-left x coordinate of the rectangle.
    pub x0: i64,
    /// Lower-left y coordinate of the rectangle.
    pub y0: i64,
    pub width: i64,
    pub height: i64,
    /// Inward offset shared by every suture.
    pub suture_len: i64,
}

impl Default for BoundaryParams {
    fn default() -> Self {
        Self {
            x0: 0,
            y0: 0,
            width: 2,
            height: 2,
            suture_len: 1,
        }
    }
}

impl BoundaryParams {
    /// Creates parameters for a rectangle at `(x0, y0)`.
    #[must_use]
    pub fn new(x0: i64, y0: i64, width: i64, height: i64, suture_len: i64) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
            suture_len,
        }
    }

    /// Checks the parameters against `constraints`, reporting the first
    /// violated bound in the order width, height, suture length, suture
    /// length against width, suture length against height, and finally
    /// whether the far corner `(x0 + width, y0 + height)` fits in `i64`.
    ///
    /// Once this passes, every coordinate a boundary computes lies within
    /// `[x0, x0 + width] x [y0, y0 + height]`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] for the first failing check.
    pub fn validate(&self, constraints: &Constraints) -> Result<(), ConstraintError> {
        if self.width < constraints.min_width {
            return Err(ConstraintError::InvalidWidth {
                value: self.width,
                min: constraints.min_width,
            });
        }
        if self.height < constraints.min_height {
            return Err(ConstraintError::InvalidHeight {
                value: self.height,
                min: constraints.min_height,
            });
        }
        let min_suture_len = constraints.effective_min_suture_len();
        if self.suture_len < min_suture_len {
            return Err(ConstraintError::InvalidSutureLength {
                value: self.suture_len,
                min: min_suture_len,
            });
        }
        let max_for_width = self.width / 2;
        if self.suture_len > max_for_width {
            return Err(ConstraintError::SutureTooLongForWidth {
                value: self.suture_len,
                max: max_for_width,
            });
        }
        let max_for_height = self.height / 2;
        if self.suture_len > max_for_height {
            return Err(ConstraintError::SutureTooLongForHeight {
                value: self.suture_len,
                max: max_for_height,
            });
        }
        if self.x0.checked_add(self.width).is_none() {
            return Err(ConstraintError::ExtentOverflow {
                axis: "x",
                origin: self.x0,
                extent: self.width,
            });
        }
        if self.y0.checked_add(self.height).is_none() {
            return Err(ConstraintError::ExtentOverflow {
                axis: "y",
                origin: self.y0,
                extent: self.height,
            });
        }
        Ok(())
    }
}
