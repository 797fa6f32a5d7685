//! Sum-of-squared-residuals objective.
//!
//! Both drivers minimise
//!
//! ```text
//! SSE(params) = Σ (y_i - f(x_i, params))^2
//! ```
//!
//! This is evaluated once per candidate, so it dominates runtime: it walks the
//! dataset once and never allocates.

use crate::domain::{Datum, Model};
use crate::error::{FitError, Result};

/// Score `params` against `data`.
///
/// # Errors
///
/// Returns [`FitError::ArityMismatch`] if `params.len()` differs from the
/// model's declared arity. Vectors are never padded or truncated.
pub fn score<X>(model: &Model<X>, params: &[f64], data: &[Datum<X>]) -> Result<f64> {
    check_arity(model, params)?;
    Ok(sse(model, params, data))
}

/// Unchecked SSE for vectors the caller has already validated.
#[inline]
pub(crate) fn sse<X>(model: &Model<X>, params: &[f64], data: &[Datum<X>]) -> f64 {
    data.iter()
        .map(|d| {
            let r = d.output - model.evaluate(&d.input, params);
            r * r
        })
        .sum()
}

pub(crate) fn check_arity<X>(model: &Model<X>, params: &[f64]) -> Result<()> {
    if params.len() != model.arity() {
        return Err(FitError::ArityMismatch {
            expected: model.arity(),
            found: params.len(),
        });
    }
    Ok(())
}

/// Validated copy of `guess`, or the zero vector when there is none.
pub(crate) fn starting_params<X>(model: &Model<X>, guess: Option<&[f64]>) -> Result<Vec<f64>> {
    match guess {
        Some(guess) => {
            check_arity(model, guess)?;
            Ok(guess.to_vec())
        }
        None => Ok(vec![0.0; model.arity()]),
    }
}

/// `sqrt(SSE / n)`: the typical absolute residual per point.
pub fn average_error(sse: f64, n: usize) -> f64 {
    (sse / n as f64).sqrt()
}
