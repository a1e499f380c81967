pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod stitch;

pub use error::{AssemblyError, ConstraintError, ParseError, Result, StitchError};
pub use geometry::{Segment, Suture, SutureKind};
pub use operations::assembly::{AssembleCurves, Curves};
pub use operations::creation::{MakeBand, MakeBoundary};
pub use stitch::{Band, Boundary, BoundaryParams, Constraints, Orientation, Variant};
