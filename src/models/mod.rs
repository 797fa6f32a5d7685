//! Ready-made models.
//!
//! Models are small, pure functions so that the search code can stay generic;
//! callers with their own functions wrap them in [`crate::domain::Model`] directly.

pub mod model;

pub use model::*;
