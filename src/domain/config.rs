//! Search settings.
//!
//! Both configs are plain values handed to a single fitting call. They derive
//! serde so callers can keep them in JSON/TOML next to their data; missing
//! fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};

/// Largest parameter count accepted by the grid driver.
///
/// Each round evaluates `3^N` candidates; at 18 that is already ~387 million.
pub const MAX_GRID_PARAMS: usize = 18;

/// Shrinking grid descent settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Step used in the first round.
    pub max_distance: f64,
    /// Rounds continue while the halved step stays above this value.
    pub min_distance: f64,
    /// Evaluate the candidates of each round on the rayon thread pool.
    pub parallel: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_distance: 10.0,
            min_distance: 0.01,
            parallel: false,
        }
    }
}

impl GridConfig {
    pub fn new(max_distance: f64, min_distance: f64) -> Self {
        Self {
            max_distance,
            min_distance,
            ..Self::default()
        }
    }

    /// Check the distance schedule.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidConfiguration`] if either distance is not
    /// finite and positive, or if `max_distance < min_distance`.
    pub fn validate(&self) -> Result<()> {
        let Self {
            max_distance,
            min_distance,
            ..
        } = *self;
        if !(max_distance.is_finite() && min_distance.is_finite()) {
            return Err(FitError::config(format!(
                "distances must be finite: max_distance={max_distance}, min_distance={min_distance}"
            )));
        }
        if min_distance <= 0.0 {
            return Err(FitError::config(format!(
                "min_distance must be > 0, got {min_distance}"
            )));
        }
        if max_distance < min_distance {
            return Err(FitError::config(format!(
                "max_distance ({max_distance}) must be >= min_distance ({min_distance})"
            )));
        }
        Ok(())
    }

    /// Number of rounds the schedule produces (zero for an invalid schedule).
    pub fn rounds(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut distance = self.max_distance;
        let mut n = 0;
        loop {
            n += 1;
            distance /= 2.0;
            if !(distance > self.min_distance) {
                return n;
            }
        }
    }
}

/// Distribution of the per-coordinate offsets drawn by the random driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jitter {
    /// Uniform on `[-1, 1)`.
    #[default]
    Uniform,
    /// Standard normal.
    Gaussian,
}

/// Randomized hill-climb settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Number of candidates drawn.
    pub iterations: usize,
    /// Relative deviation at the first iteration; it decays linearly to zero.
    pub max_deviation: f64,
    pub jitter: Jitter,
    /// Seed for reproducible runs; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            max_deviation: 1.0,
            jitter: Jitter::Uniform,
            seed: None,
        }
    }
}

impl RandomConfig {
    pub fn new(iterations: usize, max_deviation: f64) -> Self {
        Self {
            iterations,
            max_deviation,
            ..Self::default()
        }
    }

    /// Builder-style seed setter.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    /// Check the iteration budget and deviation.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidConfiguration`] if `iterations` is zero or
    /// `max_deviation` is not finite and positive.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(FitError::config("iterations must be > 0"));
        }
        if !(self.max_deviation.is_finite() && self.max_deviation > 0.0) {
            return Err(FitError::config(format!(
                "max_deviation must be finite and > 0, got {}",
                self.max_deviation
            )));
        }
        Ok(())
    }

    /// Deviation used at iteration `i`: `max_deviation * (iterations - i) / iterations`.
    pub fn deviation_at(&self, i: usize) -> f64 {
        let remaining = self.iterations.saturating_sub(i) as f64;
        self.max_deviation * remaining / self.iterations as f64
    }
}
