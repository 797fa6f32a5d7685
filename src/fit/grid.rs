//! Shrinking grid descent.
//!
//! Each round scores every `{-1, 0, +1}^N` neighbour of the current best vector
//! at the current step distance and moves to the lowest-scoring one. The
//! neighbourhood includes the unchanged vector, so the retained error never
//! increases. The distance then halves, and rounds continue while it stays above
//! `min_distance`.
//!
//! There is no convergence test: the number of rounds is fixed by
//! `log2(max_distance / min_distance)`. Cost is `3^N` evaluations per round,
//! hence [`MAX_GRID_PARAMS`].

use rayon::prelude::*;

use crate::domain::{Datum, GridConfig, MAX_GRID_PARAMS, Model};
use crate::error::{FitError, Result};
use crate::fit::observe::{Action, GridRound, Observer, Status};
use crate::fit::offsets::{candidate_count, fill_candidate, hold_index};
use crate::math::{sse, starting_params};
use crate::report::{FitSummary, SearchStats};

/// Fit `model` to `data` by shrinking grid descent.
///
/// `guess` defaults to the zero vector.
///
/// # Errors
///
/// - [`FitError::InvalidConfiguration`] for an invalid distance schedule or a
///   model with more than [`MAX_GRID_PARAMS`] parameters
/// - [`FitError::ArityMismatch`] if `guess` has the wrong length
/// - [`FitError::EmptyDataset`] if `data` is empty
/// - [`FitError::NumericDegenerate`] if a whole round scores non-finite
pub fn fit_grid<X: Sync>(
    model: &Model<X>,
    data: &[Datum<X>],
    guess: Option<&[f64]>,
    config: &GridConfig,
) -> Result<FitSummary<X>> {
    fit_grid_observed(model, data, guess, config, ())
}

/// Like [`fit_grid`], reporting each round to `observer`.
///
/// # Errors
///
/// Same as [`fit_grid`].
pub fn fit_grid_observed<X, Obs>(
    model: &Model<X>,
    data: &[Datum<X>],
    guess: Option<&[f64]>,
    config: &GridConfig,
    mut observer: Obs,
) -> Result<FitSummary<X>>
where
    X: Sync,
    Obs: for<'a> Observer<GridRound<'a>, Action>,
{
    config.validate()?;
    let n = model.arity();
    if n > MAX_GRID_PARAMS {
        return Err(FitError::config(format!(
            "grid search supports at most {MAX_GRID_PARAMS} parameters, model declares {n}"
        )));
    }
    let mut best = starting_params(model, guess)?;
    if data.is_empty() {
        return Err(FitError::EmptyDataset);
    }

    let count = candidate_count(n);
    let hold = hold_index(n);
    let mut error = sse(model, &best, data);
    let mut evaluations = 1;
    let mut distance = config.max_distance;
    let mut rounds = 0;
    let mut status = Status::Completed;
    let mut scratch = vec![0.0; n];

    log::debug!(
        "grid search: {n} params, {count} candidates/round, {} rounds, start error {error:.6e}",
        config.rounds()
    );

    loop {
        let picked = if config.parallel {
            best_neighbour_parallel(model, data, &best, distance, count)
        } else {
            best_neighbour(model, data, &best, distance, count, &mut scratch)
        };
        let Some(Candidate { index, error: e }) = picked else {
            return Err(FitError::NumericDegenerate { step: rounds });
        };
        evaluations += count;

        fill_candidate(&best, index, distance, &mut scratch);
        best.copy_from_slice(&scratch);
        error = e;
        let held = index == hold;

        log::debug!("grid round {rounds}: distance={distance:.6e} error={error:.6e} held={held}");

        let event = GridRound {
            round: rounds,
            distance,
            params: &best,
            error,
            evaluations,
            held,
        };
        rounds += 1;
        if let Some(Action::StopEarly) = observer.observe(&event) {
            status = Status::StoppedByObserver;
            break;
        }

        distance /= 2.0;
        if !(distance > config.min_distance) {
            break;
        }
    }

    Ok(FitSummary::new(
        model.clone(),
        best,
        error,
        data.len(),
        SearchStats {
            status,
            rounds,
            evaluations,
        },
    ))
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    error: f64,
}

impl Candidate {
    /// Keep the lower error; break ties by enumeration index.
    fn min(self, other: Self) -> Self {
        if other.error < self.error || (other.error == self.error && other.index < self.index) {
            other
        } else {
            self
        }
    }
}

fn best_neighbour<X>(
    model: &Model<X>,
    data: &[Datum<X>],
    center: &[f64],
    distance: f64,
    count: usize,
    scratch: &mut [f64],
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for index in 0..count {
        fill_candidate(center, index, distance, scratch);
        let error = sse(model, scratch, data);
        if !error.is_finite() {
            continue;
        }
        let c = Candidate { index, error };
        best = Some(best.map_or(c, |b| b.min(c)));
    }
    best
}

// `Candidate::min` is associative and commutative, so the parallel reduction
// picks the same index as the sequential scan regardless of scheduling.
fn best_neighbour_parallel<X: Sync>(
    model: &Model<X>,
    data: &[Datum<X>],
    center: &[f64],
    distance: f64,
    count: usize,
) -> Option<Candidate> {
    (0..count)
        .into_par_iter()
        .map_init(
            || vec![0.0; center.len()],
            |scratch, index| {
                fill_candidate(center, index, distance, scratch);
                let error = sse(model, scratch, data);
                error.is_finite().then_some(Candidate { index, error })
            },
        )
        .flatten()
        .reduce_with(Candidate::min)
}
