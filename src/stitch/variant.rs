use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ParseError;

/// Edge-placement policy of a boundary.
///
/// - `Plus`: edge sutures only, indices start one unit past the origin
///   corner and run up to the far corner.
/// - `Cross`: edge sutures kept two units clear of every corner, plus one
///   diagonal suture at each corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Plus,
    Cross,
}

impl Variant {
    /// Horizontal indices that receive a top and a bottom suture.
    ///
    /// Expects parameters accepted by
    /// [`BoundaryParams::validate`](super::BoundaryParams::validate), which
    /// keeps every bound within `[x0, x0 + width]`.
    #[must_use]
    pub fn horizontal_range(self, x0: i64, width: i64) -> RangeInclusive<i64> {
        match self {
            Self::Plus => (x0 + 1)..=(x0 + width),
            Self::Cross => (x0 + 2)..=(x0 + width - 1),
        }
    }

    /// Vertical indices that receive a left and a right suture.
    ///
    /// Same precondition as [`Variant::horizontal_range`].
    #[must_use]
    pub fn vertical_range(self, y0: i64, height: i64) -> RangeInclusive<i64> {
        match self {
            Self::Plus => (y0 + 1)..=(y0 + height),
            Self::Cross => (y0 + 2)..=(y0 + height - 1),
        }
    }

    /// Returns `true` if the variant adds diagonal corner sutures.
    #[must_use]
    pub fn has_corners(self) -> bool {
        matches!(self, Self::Cross)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => f.write_str("plus"),
            Self::Cross => f.write_str("cross"),
        }
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "plus" => Ok(Self::Plus),
            "x" | "cross" => Ok(Self::Cross),
            _ => Err(ParseError::UnknownVariant(s.to_owned())),
        }
    }
}

/// Winding direction of the angular sort used for curve assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Increasing angle (counter-clockwise).
    #[default]
    Ascending,
    /// Decreasing angle (clockwise).
    Descending,
}

impl Orientation {
    /// Returns the opposite winding.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("positive"),
            Self::Descending => f.write_str("negative"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "positive" | "ascending" => Ok(Self::Ascending),
            "-" | "negative" | "descending" => Ok(Self::Descending),
            _ => Err(ParseError::UnknownOrientation(s.to_owned())),
        }
    }
}
