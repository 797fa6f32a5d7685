//! Progress events and early stopping.
//!
//! Neither driver has a convergence test, so the only way to bound a run from the
//! outside is to watch its progress. Each grid round emits a [`GridRound`] and each
//! random iteration emits a [`RandomStep`]; an observer answering
//! [`Action::StopEarly`] ends the run and the driver returns the best vector found
//! so far with [`Status::StoppedByObserver`].

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Observes search events and optionally steers the search.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Actions an observer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop now and return the best parameters found so far.
    StopEarly,
}

/// How a search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Ran the full distance schedule or iteration budget.
    Completed,
    /// An observer requested an early stop.
    StoppedByObserver,
}

/// Emitted after each grid round, once the new best has been chosen.
#[derive(Debug, Clone, Copy)]
pub struct GridRound<'a> {
    /// Zero-based round index.
    pub round: usize,
    /// Step distance used in this round.
    pub distance: f64,
    /// Best parameters after the round.
    pub params: &'a [f64],
    /// SSE of `params`.
    pub error: f64,
    /// Objective evaluations performed so far, including the initial guess.
    pub evaluations: usize,
    /// No neighbour beat the current vector, so the round kept it unchanged.
    pub held: bool,
}

/// Emitted after each random iteration.
#[derive(Debug, Clone, Copy)]
pub struct RandomStep<'a> {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Deviation used for this iteration's candidate.
    pub deviation: f64,
    /// Best parameters after the iteration.
    pub params: &'a [f64],
    /// SSE of `params`.
    pub error: f64,
    /// Whether this iteration's candidate replaced the best.
    pub improved: bool,
}

/// Stops a search after a number of events or once a deadline passes.
///
/// The deadline is checked between events, so a single grid round always runs to
/// completion.
#[derive(Debug, Clone)]
pub struct Budget {
    max_events: Option<usize>,
    deadline: Option<Instant>,
    seen: usize,
}

impl Budget {
    /// A budget with no limits.
    pub fn unlimited() -> Self {
        Self {
            max_events: None,
            deadline: None,
            seen: 0,
        }
    }

    /// Allow at most `n` rounds/iterations.
    #[must_use]
    pub fn max_events(mut self, n: usize) -> Self {
        self.max_events = Some(n);
        self
    }

    /// Stop once `limit` has elapsed from now.
    #[must_use]
    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.deadline = Some(Instant::now() + limit);
        self
    }

    /// Number of events observed so far.
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E> Observer<E, Action> for Budget {
    fn observe(&mut self, _event: &E) -> Option<Action> {
        self.seen += 1;
        if self.max_events.is_some_and(|max| self.seen >= max) {
            return Some(Action::StopEarly);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(Action::StopEarly);
        }
        None
    }
}
