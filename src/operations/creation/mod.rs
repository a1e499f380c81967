mod make_band;
mod make_boundary;

pub use make_band::MakeBand;
pub use make_boundary::MakeBoundary;
