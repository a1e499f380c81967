mod assemble_curves;

pub use assemble_curves::{AssembleCurves, Curves};
