mod band;
mod boundary;
mod params;
mod variant;

pub use band::Band;
pub use boundary::Boundary;
pub use params::{BoundaryParams, Constraints};
pub use variant::{Orientation, Variant};
