//! Reporting utilities: fit summaries and residuals.

pub mod summary;

pub use summary::*;

use crate::domain::Datum;

/// Fitted value and residual for one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    pub observed: f64,
    pub fitted: f64,
    /// `observed - fitted`.
    pub residual: f64,
}

/// Compute fitted values and residuals for each observation, in dataset order.
pub fn residuals<X>(fit: &FitSummary<X>, data: &[Datum<X>]) -> Vec<Residual> {
    data.iter()
        .map(|d| {
            let fitted = fit.evaluate(&d.input);
            Residual {
                observed: d.output,
                fitted,
                residual: d.output - fitted,
            }
        })
        .collect()
}

/// The observation with the largest absolute residual, if any.
pub fn worst_residual(residuals: &[Residual]) -> Option<(usize, Residual)> {
    residuals
        .iter()
        .copied()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.residual
                .abs()
                .partial_cmp(&b.residual.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
