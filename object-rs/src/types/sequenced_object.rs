use std::collections::VecDeque;
use std::mem;

use geometry::{Real, Vector3D};
use log::{debug, trace};

use super::dynamic_object::DynamicObject;
use super::pose::Pose;
use super::sequence::{Sequence, Stage};
use super::static_object::StaticObject;
use crate::errors::ObjectError;
use crate::traits::{FromVertices, Shape3D};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Debug)]
enum Playback<T: Real> {
    Idle,
    Playing {
        sequence: Sequence<T>,
        entered: Direction,
    },
}

/// A played sequence and the pose the object had before it started.
#[derive(Clone, Debug)]
struct Played<T: Real> {
    sequence: Sequence<T>,
    baseline: Pose<T>,
}

/// Dynamic object driven through a queue of [`Sequence`]s, one substep per call.
///
/// Sequences wait in a pending queue. Each call to [`SequencedObject::next_substep`] either
/// activates the next pending sequence, applies one of its substeps, or finalizes it. A
/// finalized sequence moves to the history, from where [`SequencedObject::previous_substep`]
/// can undo it substep by substep. Finalizing in either direction snaps the object to the
/// exact target pose, so accumulated substep rounding never survives a sequence boundary.
#[derive(Clone, Debug)]
pub struct SequencedObject<T: Real = f64> {
    object: DynamicObject<T>,
    baseline: Pose<T>,
    pending: VecDeque<Sequence<T>>,
    history: VecDeque<Played<T>>,
    playback: Playback<T>,
}

impl<T: Real> SequencedObject<T> {
    pub fn new(vertices: Vec<Vector3D<T>>) -> Result<Self, ObjectError> {
        Ok(Self::from_dynamic(DynamicObject::new(vertices)?))
    }

    pub fn from_static(object: StaticObject<T>) -> Self {
        Self::from_dynamic(DynamicObject::from_static(object))
    }

    pub fn from_dynamic(object: DynamicObject<T>) -> Self {
        Self {
            baseline: *object.pose(),
            object,
            pending: VecDeque::new(),
            history: VecDeque::new(),
            playback: Playback::Idle,
        }
    }

    /// Appends `sequence` to the back of the pending queue. Never preempts the active sequence.
    pub fn schedule(&mut self, sequence: Sequence<T>) {
        self.pending.push_back(sequence);
    }

    pub fn schedule_all<I: IntoIterator<Item = Sequence<T>>>(&mut self, sequences: I) {
        self.pending.extend(sequences);
    }

    /// Advances one substep.
    ///
    /// Returns `false` when nothing is left to play forward: either no sequence was pending,
    /// or the sequence just finalized was the last one.
    pub fn next_substep(&mut self) -> bool {
        if !self.activate(Direction::Forward) {
            return false;
        }
        let Playback::Playing { sequence, .. } = &mut self.playback else {
            return false;
        };
        match sequence.next_substep() {
            (Stage::Stop, _) => {
                self.finish_forward();
                !self.pending.is_empty()
            }
            (stage, substep) => {
                trace!("forward substep {:?}: {:?}", stage, substep);
                self.object.step(&substep);
                true
            }
        }
    }

    /// Undoes one substep.
    ///
    /// Returns `false` when nothing is left to undo: either the history was empty, or the
    /// sequence just restored was the oldest one.
    pub fn previous_substep(&mut self) -> bool {
        if !self.activate(Direction::Backward) {
            return false;
        }
        let Playback::Playing { sequence, .. } = &mut self.playback else {
            return false;
        };
        match sequence.previous_substep() {
            (Stage::Stop, _) => {
                self.finish_backward();
                !self.history.is_empty()
            }
            (stage, substep) => {
                trace!("backward substep {:?}: {:?}", stage, substep);
                self.object.step(&substep);
                true
            }
        }
    }

    fn activate(&mut self, direction: Direction) -> bool {
        if let Playback::Playing { .. } = self.playback {
            return true;
        }
        let sequence = match direction {
            Direction::Forward => self.pending.pop_front(),
            Direction::Backward => match self.history.pop_back() {
                Some(played) => {
                    self.baseline = played.baseline;
                    Some(played.sequence)
                }
                None => None,
            },
        };
        let Some(sequence) = sequence else {
            trace!("no sequence left to play {:?}", direction);
            return false;
        };

        debug!("activating {:?} {:?} from {:?}", direction, sequence, self.baseline);
        self.playback = Playback::Playing {
            sequence,
            entered: direction,
        };
        true
    }

    fn finish_forward(&mut self) {
        let Playback::Playing { sequence, entered } =
            mem::replace(&mut self.playback, Playback::Idle)
        else {
            return;
        };
        let start = self.baseline;
        let target = start.advanced_by(sequence.forward_step());
        self.object.set_pose(target);
        self.baseline = *self.object.pose();

        debug!(
            "sequence entered {:?} finished forward at {:?}",
            entered, self.baseline
        );
        self.history.push_back(Played {
            sequence,
            baseline: start,
        });
    }

    fn finish_backward(&mut self) {
        let Playback::Playing { sequence, entered } =
            mem::replace(&mut self.playback, Playback::Idle)
        else {
            return;
        };
        self.object.set_pose(self.baseline);

        debug!(
            "sequence entered {:?} finished backward at {:?}",
            entered, self.baseline
        );
        self.pending.push_front(sequence);
    }

    pub fn object(&self) -> &DynamicObject<T> {
        &self.object
    }

    /// Pose the object had when the active (or next) sequence started.
    pub fn baseline(&self) -> &Pose<T> {
        &self.baseline
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.playback, Playback::Playing { .. })
    }

    /// Sequence currently being played, if any.
    pub fn active(&self) -> Option<&Sequence<T>> {
        match &self.playback {
            Playback::Playing { sequence, .. } => Some(sequence),
            Playback::Idle => None,
        }
    }

    pub fn vertices(&self) -> &[Vector3D<T>] {
        self.object.vertices()
    }

    pub fn origin(&self) -> &Vector3D<T> {
        self.object.origin()
    }
}

impl<T: Real> Shape3D for SequencedObject<T> {
    type Scalar = T;

    fn vertices(&self) -> &[Vector3D<T>] {
        self.object.vertices()
    }

    fn origin(&self) -> &Vector3D<T> {
        self.object.origin()
    }
}

impl<T: Real> FromVertices<T> for SequencedObject<T> {
    fn from_vertices(vertices: Vec<Vector3D<T>>) -> Result<Self, ObjectError> {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::step::Step;
    use std::num::NonZeroUsize;
    use test_utils::renderable::Box3D;

    fn cube() -> SequencedObject {
        SequencedObject::new(Box3D::unit().vertices()).unwrap()
    }

    fn sequence(step: Step, n: usize) -> Sequence {
        Sequence::new(step, NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn test_idle_calls_are_noops() {
        let mut object = cube();
        let before = object.object().clone();

        assert!(!object.next_substep());
        assert!(!object.previous_substep());
        assert_eq!(object.object(), &before);
        assert!(!object.is_playing());
    }

    #[test]
    fn test_activation_applies_first_substep() {
        let mut object = cube();
        object.schedule(sequence(Step::new(4.0, 0.0, 0.0, 0.0, 0.0, 0.0), 4));

        assert!(object.next_substep());
        assert!(object.is_playing());
        assert_eq!(object.pending_len(), 0);
        assert_eq!(object.object().translation().inner(), [1.0, 0.0, 0.0]);
        assert_eq!(object.active().map(Sequence::cursor), Some(1));
    }

    #[test]
    fn test_finalize_moves_to_history() {
        let mut object = cube();
        object.schedule(sequence(Step::new(2.0, 0.0, 0.0, 0.0, 0.0, 0.0), 2));
        object.schedule(sequence(Step::new(0.0, 2.0, 0.0, 0.0, 0.0, 0.0), 2));

        assert!(object.next_substep());
        assert!(object.next_substep());
        // Finalizing the first sequence reports that another one is pending.
        assert!(object.next_substep());
        assert_eq!(object.history_len(), 1);
        assert_eq!(object.pending_len(), 1);
        assert!(!object.is_playing());
        assert_eq!(object.baseline().translation.inner(), [2.0, 0.0, 0.0]);

        assert!(object.next_substep());
        assert!(object.next_substep());
        assert!(!object.next_substep());
        assert_eq!(object.history_len(), 2);
        assert_eq!(object.object().translation().inner(), [2.0, 2.0, 0.0]);
    }

    #[test]
    fn test_backward_finalize_requeues_at_front() {
        let mut object = cube();
        let first = Step::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let second = Step::new(0.0, 0.0, 5.0, 0.0, 0.0, 0.0);
        object.schedule(sequence(first, 1));
        object.schedule(sequence(second, 1));

        // Play and finalize the first sequence only.
        assert!(object.next_substep());
        assert!(object.next_substep());

        // Undo it: one substep back, then finalize backward.
        assert!(object.previous_substep());
        assert!(!object.previous_substep());
        assert_eq!(object.pending_len(), 2);
        assert_eq!(object.object().pose(), &Pose::identity());

        // The undone sequence plays again before the one scheduled after it.
        assert!(object.next_substep());
        assert_eq!(object.active().map(Sequence::forward_step), Some(&first));
    }

    #[test]
    fn test_schedule_does_not_preempt() {
        let mut object = cube();
        let step = Step::new(3.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        object.schedule(sequence(step, 3));
        assert!(object.next_substep());

        object.schedule(sequence(Step::new(0.0, 9.0, 0.0, 0.0, 0.0, 0.0), 1));
        assert_eq!(object.active().map(Sequence::forward_step), Some(&step));
        assert_eq!(object.pending_len(), 1);
    }
}
