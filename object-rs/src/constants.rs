use std::num::NonZeroUsize;

/// Substeps used by a scripted sequence that does not set its own count.
pub const DEFAULT_SUBSTEPS: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(substeps) => substeps,
    None => NonZeroUsize::MIN,
};

/// Number of components of a [`crate::Step`]: three translation and three rotation.
pub const N_STEP_COMPONENTS: usize = 6;
