//! Shared domain types.
//!
//! These types are intentionally small: a fitting call borrows the model and the
//! dataset, and everything it produces is owned by the returned summary.

use std::fmt;
use std::sync::Arc;

type ModelFn<X> = dyn Fn(&X, &[f64]) -> f64 + Send + Sync;

/// A parametric model `y = f(x, params)` with a statically declared arity.
///
/// The input type `X` is fixed for a fitting session: `f64` for single-variable
/// curves, `[f64; D]` for multi-variable ones, or any caller-defined type.
///
/// The arity is carried explicitly because a closure's parameter count cannot be
/// inspected at runtime; it fixes the length of every parameter vector the
/// drivers build.
pub struct Model<X> {
    arity: usize,
    f: Arc<ModelFn<X>>,
}

impl<X> Model<X> {
    /// Wrap `f` as a model taking exactly `arity` parameters.
    pub fn new<F>(arity: usize, f: F) -> Self
    where
        F: Fn(&X, &[f64]) -> f64 + Send + Sync + 'static,
    {
        Self {
            arity,
            f: Arc::new(f),
        }
    }

    /// Number of free parameters the model expects.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Predict the output at `x`.
    ///
    /// No arity check happens here; callers holding unvalidated vectors should go
    /// through [`crate::math::score`] or the drivers instead.
    #[inline]
    pub fn evaluate(&self, x: &X, params: &[f64]) -> f64 {
        (self.f)(x, params)
    }
}

impl<X> Clone for Model<X> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            f: Arc::clone(&self.f),
        }
    }
}

impl<X> fmt::Debug for Model<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// One observation: an input and the output measured for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum<X> {
    pub input: X,
    pub output: f64,
}

impl<X> Datum<X> {
    pub fn new(input: X, output: f64) -> Self {
        Self { input, output }
    }
}

impl<X> From<(X, f64)> for Datum<X> {
    fn from((input, output): (X, f64)) -> Self {
        Self { input, output }
    }
}

/// Build a dataset from `(input, output)` pairs, preserving order.
pub fn dataset<X, I>(pairs: I) -> Vec<Datum<X>>
where
    I: IntoIterator<Item = (X, f64)>,
{
    pairs.into_iter().map(Datum::from).collect()
}
