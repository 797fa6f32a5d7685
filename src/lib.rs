//! `curve-search`: derivative-free least-squares curve fitting.
//!
//! Given a [`Model`] (a function plus its declared parameter count) and a dataset
//! of [`Datum`] observations, find parameters minimising the sum of squared
//! residuals using one of two strategies:
//!
//! - [`fit_grid`]: shrinking grid descent over every `{-1, 0, +1}^N` neighbour
//! - [`fit_random`]: randomized hill-climbing with linearly decaying deviation
//!
//! Both return a [`FitSummary`] holding the best parameters, their error, and the
//! model bound to them.
//!
//! ```
//! use curve_search::{GridConfig, dataset, fit_grid, models};
//!
//! let data = dataset([(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
//! let fit = fit_grid(&models::line(), &data, None, &GridConfig::default()).unwrap();
//! assert!((fit.params()[0] - 2.0).abs() < 0.05);
//! assert!((fit.evaluate(&3.0) - 7.0).abs() < 0.2);
//! ```

pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod models;
pub mod report;

pub use domain::{Datum, GridConfig, Jitter, MAX_GRID_PARAMS, Model, RandomConfig, dataset};
pub use error::{FitError, Result};
pub use fit::{
    Action, Budget, GridRound, Observer, RandomStep, Status, fit_grid, fit_grid_observed,
    fit_random, fit_random_with,
};
pub use math::score;
pub use report::{FitReport, FitSummary, SearchStats};
