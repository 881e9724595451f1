//! Field domain entities.

pub mod model;

pub use model::Field;
