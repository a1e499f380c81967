pub mod assembly;
pub mod creation;
