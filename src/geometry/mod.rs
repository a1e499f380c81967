pub mod segment;
pub mod suture;

pub use segment::{chain_vertices, is_closed_chain, Segment};
pub use suture::{Suture, SutureKind};
