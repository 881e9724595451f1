//! Gateway trait implementations.

pub mod cmp;
pub mod public;
