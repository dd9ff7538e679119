//! JSON motion scripts.
//!
//! ```json
//! {
//!   "default_substeps": 20,
//!   "sequences": [
//!     { "translation": [0, 0, 10] },
//!     { "rotation": { "x": 0, "y": 0, "z": 90 }, "substeps": 45 }
//!   ]
//! }
//! ```
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use geometry::{Real, Vector3D};
use log::info;
use serde::Deserialize;

use crate::constants::DEFAULT_SUBSTEPS;
use crate::errors::ScriptError;
use crate::types::{Sequence, SequencedObject, Step};

fn default_substeps() -> NonZeroUsize {
    DEFAULT_SUBSTEPS
}

/// One scheduled motion. Missing halves default to zero.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ScriptedSequence<T: Real = f64> {
    #[serde(default)]
    pub translation: Vector3D<T>,
    #[serde(default)]
    pub rotation: Vector3D<T>,
    #[serde(default)]
    pub substeps: Option<NonZeroUsize>,
}

impl<T: Real> ScriptedSequence<T> {
    pub fn step(&self) -> Step<T> {
        Step::from_parts(&self.translation, &self.rotation)
    }
}

/// Ordered list of motions to schedule on a [`SequencedObject`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MotionScript<T: Real = f64> {
    #[serde(default = "default_substeps")]
    pub default_substeps: NonZeroUsize,
    pub sequences: Vec<ScriptedSequence<T>>,
}

impl<T: Real> MotionScript<T>
where
    T: for<'de> Deserialize<'de>,
{
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let script = Self::from_json(&fs::read_to_string(path)?)?;
        info!(
            "Loaded motion script {} with {} sequences",
            path.display(),
            script.sequences.len()
        );
        Ok(script)
    }
}

impl<T: Real> MotionScript<T> {
    /// Linear sequences in script order.
    pub fn sequences(&self) -> Vec<Sequence<T>> {
        self.sequences
            .iter()
            .map(|scripted| {
                Sequence::new(
                    scripted.step(),
                    scripted.substeps.unwrap_or(self.default_substeps),
                )
            })
            .collect()
    }

    /// Appends every sequence to `object`'s pending queue and returns how many were scheduled.
    pub fn schedule_on(&self, object: &mut SequencedObject<T>) -> usize {
        let sequences = self.sequences();
        let scheduled = sequences.len();
        object.schedule_all(sequences);
        scheduled
    }
}
