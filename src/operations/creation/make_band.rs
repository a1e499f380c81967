use crate::error::Result;
use crate::operations::assembly::AssembleCurves;
use crate::stitch::{Band, BoundaryParams, Constraints, Orientation, Variant};

use super::MakeBoundary;

/// Builds a boundary and threads its sutures into inner and outer curves.
#[derive(Debug, Clone)]
pub struct MakeBand {
    boundary: MakeBoundary,
    orientation: Orientation,
}

impl MakeBand {
    /// Creates a new `MakeBand` operation with default constraints.
    #[must_use]
    pub fn new(params: BoundaryParams, variant: Variant, orientation: Orientation) -> Self {
        Self {
            boundary: MakeBoundary::new(params, variant),
            orientation,
        }
    }

    /// Replaces the validation thresholds of the underlying boundary.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.boundary = self.boundary.with_constraints(constraints);
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// - `ConstraintError` if the boundary parameters are rejected
    /// - `AssemblyError::EmptyBoundary` if the boundary has no sutures
    pub fn execute(&self) -> Result<Band> {
        let boundary = self.boundary.execute()?;
        let curves = AssembleCurves::new(&boundary, self.orientation).execute()?;
        Ok(Band::from_parts(
            boundary,
            self.orientation,
            curves.inner,
            curves.outer,
        ))
    }
}
