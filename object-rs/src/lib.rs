//! # Crate object-rs
//!
//! ## object-rs
//!
//! The `object-rs` crate animates 3D objects one discrete substep at a time, forwards or
//! backwards, without numerical drift.
//!
//! Features include:
//! - [`StaticObject`]: immutable vertex set plus its centroid.
//! - [`DynamicObject`]: accumulated translation and rotation (degrees, kept in `[0, 360)`).
//!   Current vertices are always recomputed from the base vertices, never composed incrementally.
//! - [`Step`] and [`Sequence`]: a 6-component pose delta split into substeps, with
//!   [`Stage`] markers for entering and exhausting a sequence.
//! - [`SequencedObject`]: a queue of scheduled sequences played with `next_substep` /
//!   `previous_substep`. Completing a sequence snaps the pose to the exact target.
//! - [`MeshObject`]: any object kind plus the polygon grouping of its vertices.
//! - [`MotionScript`]: JSON description of the sequences to schedule.
//!
//! ### Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use geometry::Vector3D;
//! use object_rs::{Sequence, SequencedObject, Step};
//!
//! let vertices = vec![Vector3D::xyz(1.0, 0.0, 0.0), Vector3D::xyz(-1.0, 0.0, 0.0)];
//! let mut object = SequencedObject::new(vertices).unwrap();
//! let substeps = NonZeroUsize::new(4).unwrap();
//! object.schedule(Sequence::new(Step::new(10.0, 0.0, 0.0, 0.0, 0.0, 90.0), substeps));
//!
//! while object.next_substep() {}
//! assert_eq!(object.object().translation().inner(), [10.0, 0.0, 0.0]);
//! ```
//!
//! **NOTE** NaN or infinite coordinates are not validated and propagate through every pose update.

pub mod constants;
pub mod errors;
pub mod script;
#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

#[doc(inline)]
pub use errors::{ObjectError, ScriptError};
#[doc(inline)]
pub use script::{MotionScript, ScriptedSequence};
#[doc(inline)]
pub use traits::{FromVertices, Shape3D};
#[doc(inline)]
pub use types::{
    linear_substeps, DynamicObject, MeshObject, Pose, Sequence, SequencedObject, Stage,
    StaticObject, Step, SubstepFn,
};
