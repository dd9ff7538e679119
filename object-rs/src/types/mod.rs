pub mod dynamic_object;
pub mod mesh_object;
pub mod pose;
pub mod sequence;
pub mod sequenced_object;
pub mod static_object;
pub mod step;

pub use dynamic_object::DynamicObject;
pub use mesh_object::MeshObject;
pub use pose::Pose;
pub use sequence::{linear_substeps, Sequence, Stage, SubstepFn};
pub use sequenced_object::SequencedObject;
pub use static_object::StaticObject;
pub use step::Step;
