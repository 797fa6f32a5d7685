//! Fit results.
//!
//! A [`FitSummary`] only packages what the driver already computed; it never
//! re-evaluates the objective.

use serde::{Deserialize, Serialize};

use crate::domain::Model;
use crate::fit::observe::Status;
use crate::math::average_error;

/// How the search that produced a summary went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub status: Status,
    /// Grid rounds or random iterations executed.
    pub rounds: usize,
    /// Objective evaluations, including the starting guess.
    pub evaluations: usize,
}

/// Best parameters found by a fitting call, with the model bound to them.
#[derive(Debug, Clone)]
pub struct FitSummary<X> {
    model: Model<X>,
    params: Vec<f64>,
    sse: f64,
    average_error: f64,
    stats: SearchStats,
}

impl<X> FitSummary<X> {
    pub(crate) fn new(
        model: Model<X>,
        params: Vec<f64>,
        sse: f64,
        n_points: usize,
        stats: SearchStats,
    ) -> Self {
        Self {
            model,
            params,
            sse,
            average_error: average_error(sse, n_points),
            stats,
        }
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Sum of squared residuals at [`Self::params`].
    pub fn sse(&self) -> f64 {
        self.sse
    }

    /// `sqrt(SSE / n)` over the fitted dataset.
    pub fn average_error(&self) -> f64 {
        self.average_error
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn status(&self) -> Status {
        self.stats.status
    }

    pub fn model(&self) -> &Model<X> {
        &self.model
    }

    /// Predict the output at `x` with the fitted parameters.
    pub fn evaluate(&self, x: &X) -> f64 {
        self.model.evaluate(x, &self.params)
    }

    /// A closure equivalent to [`Self::evaluate`].
    pub fn evaluator(&self) -> impl Fn(&X) -> f64 + '_ {
        move |x: &X| self.evaluate(x)
    }

    /// Consume the summary into an owned `x ↦ f(x, params)` closure.
    pub fn into_evaluator(self) -> impl Fn(&X) -> f64 + Send + Sync {
        let Self { model, params, .. } = self;
        move |x: &X| model.evaluate(x, &params)
    }

    /// A serialisable snapshot of the numbers (without the model).
    pub fn report(&self) -> FitReport {
        FitReport {
            params: self.params.clone(),
            sse: self.sse,
            average_error: self.average_error,
            stats: self.stats,
        }
    }
}

/// Plain-data view of a [`FitSummary`], suitable for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub params: Vec<f64>,
    pub sse: f64,
    pub average_error: f64,
    pub stats: SearchStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn summary() -> FitSummary<f64> {
        let model = Model::new(2, |x: &f64, p: &[f64]| p[0] * x + p[1]);
        FitSummary::new(
            model,
            vec![0.1, 0.7],
            8.0,
            2,
            SearchStats {
                status: Status::Completed,
                rounds: 4,
                evaluations: 37,
            },
        )
    }

    #[test]
    fn average_error_uses_dataset_size() {
        assert_relative_eq!(summary().average_error(), 2.0);
    }

    #[test]
    fn evaluate_matches_model_exactly() {
        let s = summary();
        for x in [-3.5, 0.0, 1e-9, 0.3, 17.25] {
            assert_eq!(s.evaluate(&x), s.model().evaluate(&x, s.params()));
            assert_eq!(s.evaluator()(&x), 0.1 * x + 0.7);
        }
        let owned = s.clone().into_evaluator();
        assert_eq!(owned(&2.0), s.evaluate(&2.0));
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = summary().report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"completed\""));
        let back: FitReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
