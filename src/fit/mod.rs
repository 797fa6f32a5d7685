//! Search drivers.
//!
//! Responsibilities:
//!
//! - enumerate grid neighbourhoods (`offsets`) and random perturbations (`jitter`)
//! - run shrinking grid descent (`grid`) and decaying random hill-climbs (`random`)
//! - report progress and honour early-stop requests (`observe`)

pub mod grid;
pub mod jitter;
pub mod observe;
pub mod offsets;
pub mod random;

pub use grid::*;
pub use jitter::*;
pub use observe::*;
pub use offsets::*;
pub use random::*;
