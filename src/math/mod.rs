//! Mathematical utilities: the least-squares objective.

pub mod objective;

pub use objective::*;
