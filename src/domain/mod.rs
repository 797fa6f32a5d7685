//! Domain types used throughout the engine.
//!
//! This module defines:
//!
//! - the model wrapper pairing a callable with its declared arity (`Model`)
//! - observations (`Datum`)
//! - per-call search settings (`GridConfig`, `RandomConfig`, `Jitter`)

pub mod config;
pub mod types;

pub use config::*;
pub use types::*;
