use thiserror::Error;

/// Top-level error type for stitch construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StitchError {
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl StitchError {
    /// Returns `true` if the error came from parameter validation.
    #[must_use]
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

/// Errors raised while validating boundary parameters.
///
/// Each variant carries the rejected value and the bound it violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("width = {value} must be at least {min}")]
    InvalidWidth { value: i64, min: i64 },

    #[error("height = {value} must be at least {min}")]
    InvalidHeight { value: i64, min: i64 },

    #[error("suture length = {value} must be at least {min}")]
    InvalidSutureLength { value: i64, min: i64 },

    #[error("suture length = {value} exceeds half the width ({max})")]
    SutureTooLongForWidth { value: i64, max: i64 },

    #[error("suture length = {value} exceeds half the height ({max})")]
    SutureTooLongForHeight { value: i64, max: i64 },

    #[error("{axis} origin {origin} plus extent {extent} overflows i64")]
    ExtentOverflow {
        axis: &'static str,
        origin: i64,
        extent: i64,
    },
}

/// Errors raised while assembling curves from sutures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("cannot assemble curves from an empty boundary")]
    EmptyBoundary,
}

/// Errors raised while reading a variant or orientation from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown variant {0:?} (expected one of: plus, +, cross, x)")]
    UnknownVariant(String),

    #[error("unknown orientation {0:?} (expected one of: positive, +, negative, -)")]
    UnknownOrientation(String),
}

/// Convenience type alias for results using [`StitchError`].
pub type Result<T> = std::result::Result<T, StitchError>;
