//! Randomized hill-climb with decaying deviation.
//!
//! Starting from the guess, every iteration perturbs the current best vector
//! (see [`Perturbation`]) with a deviation that shrinks linearly from
//! `max_deviation` towards zero, and keeps the candidate only if it is strictly
//! better. Uphill moves are never accepted.
//!
//! Results depend on the random stream. Pass a seed in [`RandomConfig`] or an
//! explicit generator to [`fit_random_with`] for reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Datum, Model, RandomConfig};
use crate::error::{FitError, Result};
use crate::fit::jitter::Perturbation;
use crate::fit::observe::{Action, Observer, RandomStep, Status};
use crate::math::{sse, starting_params};
use crate::report::{FitSummary, SearchStats};

/// Fit `model` to `data` by randomized hill-climbing.
///
/// Uses `config.seed` when present, otherwise a generator seeded from the OS.
///
/// # Errors
///
/// - [`FitError::InvalidConfiguration`] for zero iterations or a non-positive
///   `max_deviation`
/// - [`FitError::ArityMismatch`] if `guess` has the wrong length
/// - [`FitError::EmptyDataset`] if `data` is empty
/// - [`FitError::NumericDegenerate`] if no finite error was ever found
pub fn fit_random<X>(
    model: &Model<X>,
    data: &[Datum<X>],
    guess: Option<&[f64]>,
    config: &RandomConfig,
) -> Result<FitSummary<X>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    fit_random_with(model, data, guess, config, &mut rng, ())
}

/// Like [`fit_random`], drawing from `rng` and reporting each iteration to
/// `observer`. `config.seed` is ignored.
///
/// # Errors
///
/// Same as [`fit_random`].
pub fn fit_random_with<X, R, Obs>(
    model: &Model<X>,
    data: &[Datum<X>],
    guess: Option<&[f64]>,
    config: &RandomConfig,
    rng: &mut R,
    mut observer: Obs,
) -> Result<FitSummary<X>>
where
    R: Rng + ?Sized,
    Obs: for<'a> Observer<RandomStep<'a>, Action>,
{
    config.validate()?;
    let mut best = starting_params(model, guess)?;
    if data.is_empty() {
        return Err(FitError::EmptyDataset);
    }
    let perturbation = Perturbation::new(config.jitter)?;

    let mut error = sse(model, &best, data);
    let mut evaluations = 1;
    let mut candidate = vec![0.0; best.len()];
    let mut status = Status::Completed;
    let mut iterations = 0;

    log::debug!(
        "random search: {} params, {} iterations, max deviation {}, start error {error:.6e}",
        model.arity(),
        config.iterations,
        config.max_deviation
    );

    for i in 0..config.iterations {
        let deviation = config.deviation_at(i);
        perturbation.apply(&best, deviation, rng, &mut candidate);
        let candidate_error = sse(model, &candidate, data);
        evaluations += 1;
        iterations += 1;

        // A non-finite starting error loses to the first finite candidate.
        let improved = candidate_error.is_finite() && !(candidate_error >= error);
        if improved {
            std::mem::swap(&mut best, &mut candidate);
            error = candidate_error;
            log::trace!("iteration {i}: deviation={deviation:.4e} error={error:.6e}");
        }

        let event = RandomStep {
            iteration: i,
            deviation,
            params: &best,
            error,
            improved,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            status = Status::StoppedByObserver;
            break;
        }
    }

    if !error.is_finite() {
        return Err(FitError::NumericDegenerate { step: iterations });
    }

    log::debug!("random search finished after {iterations} iterations: error {error:.6e}");

    Ok(FitSummary::new(
        model.clone(),
        best,
        error,
        data.len(),
        SearchStats {
            status,
            rounds: iterations,
            evaluations,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Jitter, dataset};

    use approx::assert_abs_diff_eq;

    fn line() -> Model<f64> {
        Model::new(2, |x: &f64, p: &[f64]| p[0] * x + p[1])
    }

    #[test]
    fn recovers_noiseless_line() {
        let data = dataset([(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
        let config = RandomConfig::new(2000, 1.0).with_seed(42);
        let fit = fit_random(&line(), &data, None, &config).unwrap();

        assert_abs_diff_eq!(fit.params()[0], 2.0, epsilon = 0.05);
        assert_abs_diff_eq!(fit.params()[1], 1.0, epsilon = 0.05);
        assert_eq!(fit.stats().evaluations, 2001);
    }

    #[test]
    fn gaussian_jitter_also_converges() {
        let data = dataset([(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
        let config = RandomConfig::new(3000, 1.0)
            .with_seed(5)
            .with_jitter(Jitter::Gaussian);
        let fit = fit_random(&line(), &data, None, &config).unwrap();

        assert_abs_diff_eq!(fit.params()[0], 2.0, epsilon = 0.05);
        assert_abs_diff_eq!(fit.params()[1], 1.0, epsilon = 0.05);
    }

    #[test]
    fn same_seed_reproduces_result() {
        let data = dataset([(1.0, -1.0), (2.0, 1.0), (3.0, 2.0)]);
        let config = RandomConfig::new(500, 1.0).with_seed(1234);
        let a = fit_random(&line(), &data, None, &config).unwrap();
        let b = fit_random(&line(), &data, None, &config).unwrap();
        assert_eq!(a.params(), b.params());
        assert_eq!(a.sse(), b.sse());
    }

    #[test]
    fn accepted_error_strictly_decreases() {
        let data = dataset([(1.0, -1.0), (2.0, 1.0), (3.0, 2.0)]);
        let mut errors = Vec::new();
        let mut rng = StdRng::seed_from_u64(8);
        fit_random_with(
            &line(),
            &data,
            Some(&[3.0, 3.0]),
            &RandomConfig::new(400, 1.0),
            &mut rng,
            |e: &RandomStep<'_>| {
                if e.improved {
                    errors.push(e.error);
                }
                None
            },
        )
        .unwrap();

        assert!(!errors.is_empty());
        assert!(errors.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn never_worse_than_guess() {
        let data = dataset([(0.0, 1.0), (1.0, 3.0)]);
        let fit = fit_random(
            &line(),
            &data,
            Some(&[2.0, 1.0]),
            &RandomConfig::new(200, 1.0).with_seed(3),
        )
        .unwrap();
        assert_eq!(fit.params(), &[2.0, 1.0]);
        assert_eq!(fit.sse(), 0.0);
    }

    #[test]
    fn rejects_non_positive_deviation() {
        let data = dataset([(0.0, 1.0)]);
        for dev in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = fit_random(&line(), &data, None, &RandomConfig::new(10, dev)).unwrap_err();
            assert!(matches!(err, FitError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn rejects_guess_of_wrong_length() {
        let data = dataset([(0.0, 1.0)]);
        let err = fit_random(&line(), &data, Some(&[0.0]), &RandomConfig::default()).unwrap_err();
        assert_eq!(
            err,
            FitError::ArityMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn rejects_empty_dataset() {
        let data: Vec<Datum<f64>> = Vec::new();
        let err = fit_random(&line(), &data, None, &RandomConfig::new(10, 1.0).with_seed(0))
            .unwrap_err();
        assert_eq!(err, FitError::EmptyDataset);
    }

    #[test]
    fn all_nan_is_degenerate() {
        let nan = Model::new(1, |_: &f64, _: &[f64]| f64::NAN);
        let data = dataset([(0.0, 1.0)]);
        let err = fit_random(&nan, &data, None, &RandomConfig::new(50, 1.0).with_seed(0))
            .unwrap_err();
        assert_eq!(err, FitError::NumericDegenerate { step: 50 });
    }

    #[test]
    fn escapes_non_finite_start() {
        // ln(0) = -inf at the default guess; negative candidates give NaN.
        let log = Model::new(1, |_: &f64, p: &[f64]| p[0].ln());
        let data = dataset([(0.0, 0.0)]);
        let fit = fit_random(&log, &data, None, &RandomConfig::new(2000, 1.0).with_seed(17))
            .unwrap();
        assert!(fit.sse().is_finite());
        assert!(fit.sse() < 0.01, "sse = {}", fit.sse());
    }

    #[test]
    fn observer_can_stop_early() {
        let data = dataset([(0.0, 1.0)]);
        let mut rng = StdRng::seed_from_u64(0);
        let fit = fit_random_with(
            &line(),
            &data,
            None,
            &RandomConfig::new(1000, 1.0),
            &mut rng,
            |e: &RandomStep<'_>| (e.iteration == 9).then_some(Action::StopEarly),
        )
        .unwrap();
        assert_eq!(fit.stats().rounds, 10);
        assert_eq!(fit.stats().evaluations, 11);
        assert_eq!(fit.stats().status, Status::StoppedByObserver);
    }
}
