//! Random perturbations for the hill-climb driver.
//!
//! Each coordinate moves by `deviation * max(1, |c|) * u` where `u` is an
//! independent draw from the configured distribution. Scaling by `|c|` keeps
//! large parameters exploring at a useful rate; the floor of 1 keeps parameters
//! near zero from freezing.

use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use rand_distr::Normal;

use crate::domain::Jitter;
use crate::error::{FitError, Result};

#[derive(Debug, Clone, Copy)]
enum Offset {
    Uniform(Uniform<f64>),
    Gaussian(Normal<f64>),
}

/// Draws perturbed candidates around a centre vector.
#[derive(Debug, Clone, Copy)]
pub struct Perturbation {
    offset: Offset,
}

impl Perturbation {
    pub fn new(jitter: Jitter) -> Result<Self> {
        let offset = match jitter {
            Jitter::Uniform => Offset::Uniform(Uniform::new(-1.0, 1.0)),
            Jitter::Gaussian => Offset::Gaussian(
                Normal::new(0.0, 1.0)
                    .map_err(|e| FitError::config(format!("offset distribution error: {e}")))?,
            ),
        };
        Ok(Self { offset })
    }

    /// Fill `out` with a candidate near `center`.
    ///
    /// Consumes exactly one draw per coordinate.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        center: &[f64],
        deviation: f64,
        rng: &mut R,
        out: &mut [f64],
    ) {
        for (slot, &c) in out.iter_mut().zip(center) {
            let u = match &self.offset {
                Offset::Uniform(d) => d.sample(rng),
                Offset::Gaussian(d) => d.sample(rng),
            };
            *slot = c + deviation * c.abs().max(1.0) * u;
        }
    }
}
