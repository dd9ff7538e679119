use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use geometry::Real;

use super::step::Step;

/// Substep generator. Receives the 1-based index of the substep being entered.
pub type SubstepFn<T> = Arc<dyn Fn(usize) -> Step<T> + Send + Sync>;

/// Position of a substep within its sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// First substep played in the current direction.
    Start,
    /// Any later substep.
    Continue,
    /// No substep left in the current direction. The carried step is the full
    /// motion in that direction.
    Stop,
}

/// Substep function splitting `step` into `substeps` equal increments.
pub fn linear_substeps<T: Real>(step: &Step<T>, substeps: NonZeroUsize) -> SubstepFn<T> {
    let increment = *step / nalgebra::convert::<f64, T>(substeps.get() as f64);
    Arc::new(move |_| increment)
}

/// A [`Step`] played as `substeps` discrete increments, in either direction.
///
/// The cursor counts the substeps already played and stays within `0..=substeps`.
#[derive(Clone)]
pub struct Sequence<T: Real = f64> {
    forward_step: Step<T>,
    backward_step: Step<T>,
    substeps: NonZeroUsize,
    cursor: usize,
    next_fn: SubstepFn<T>,
    previous_fn: SubstepFn<T>,
}

impl<T: Real> Sequence<T> {
    /// Sequence with equal increments in both directions.
    pub fn new(step: Step<T>, substeps: NonZeroUsize) -> Self {
        let next_fn = linear_substeps(&step, substeps);
        let previous_fn = linear_substeps(&-step, substeps);
        Self::with_substeps(step, substeps, next_fn, previous_fn)
    }

    /// Sequence with custom substep functions.
    ///
    /// `next_fn(k)` is applied when entering substep `k` going forward and `previous_fn(k)`
    /// when undoing substep `k` going backward. Intermediate poses follow them, but the
    /// final pose is always snapped to the exact `step`.
    pub fn with_substeps(
        step: Step<T>,
        substeps: NonZeroUsize,
        next_fn: SubstepFn<T>,
        previous_fn: SubstepFn<T>,
    ) -> Self {
        Self {
            forward_step: step,
            backward_step: -step,
            substeps,
            cursor: 0,
            next_fn,
            previous_fn,
        }
    }

    pub fn next_substep(&mut self) -> (Stage, Step<T>) {
        if self.is_at_end() {
            return (Stage::Stop, self.forward_step);
        }
        let stage = if self.is_at_start() {
            Stage::Start
        } else {
            Stage::Continue
        };
        self.cursor += 1;
        (stage, (self.next_fn)(self.cursor))
    }

    pub fn previous_substep(&mut self) -> (Stage, Step<T>) {
        if self.is_at_start() {
            return (Stage::Stop, self.backward_step);
        }
        let stage = if self.is_at_end() {
            Stage::Start
        } else {
            Stage::Continue
        };
        let substep = (self.previous_fn)(self.cursor);
        self.cursor -= 1;
        (stage, substep)
    }

    pub fn forward_step(&self) -> &Step<T> {
        &self.forward_step
    }

    pub fn backward_step(&self) -> &Step<T> {
        &self.backward_step
    }

    pub fn substep_count(&self) -> NonZeroUsize {
        self.substeps
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.substeps.get()
    }
}

impl<T: Real> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("forward_step", &self.forward_step)
            .field("substeps", &self.substeps)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
