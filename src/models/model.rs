//! Stock model constructors.
//!
//! Each returns a [`Model`] with its arity already declared, so it can be handed
//! straight to a driver.

use crate::domain::Model;

/// `y = m*x + b` with params `[m, b]`.
pub fn line() -> Model<f64> {
    Model::new(2, |x: &f64, p: &[f64]| p[0] * x + p[1])
}

/// `y = a0 + a1*x + ... + ad*x^d` with params `[a0, a1, ..., ad]`.
pub fn polynomial(degree: usize) -> Model<f64> {
    Model::new(degree + 1, |x: &f64, a: &[f64]| {
        // Horner, highest coefficient first.
        a.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    })
}

/// `y = c0*x0 + ... + c{D-1}*x{D-1} + cD` with params `[c0, ..., cD]`.
pub fn hyperplane<const D: usize>() -> Model<[f64; D]> {
    Model::new(D + 1, |x: &[f64; D], c: &[f64]| {
        x.iter().zip(c).map(|(xi, ci)| xi * ci).sum::<f64>() + c[D]
    })
}

/// `y = a * exp(b*x)` with params `[a, b]`.
pub fn exponential() -> Model<f64> {
    Model::new(2, |x: &f64, p: &[f64]| p[0] * (p[1] * x).exp())
}
